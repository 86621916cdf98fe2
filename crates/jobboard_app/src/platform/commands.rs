use jobboard_core::{FormField, JobId, JobType, Msg, Route, Selection, SortOrder};
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Listing:  search <text> | type <All|Full-time|Part-time|Internship|Contract>
          location <name|All> | tag <name> | sort <default|title|company> | reset
          delete <id> | delete-all | scrape | yes | no
Forms:    set <title|company|location|job_type|tags> <value> | submit
Pages:    home | add | edit <id> | open <path>
Other:    dismiss | help | quit";

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}`: invalid {argument} {value:?}")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "search" => Msg::KeywordChanged(rest.to_string()),
        "type" => Msg::JobTypeFilterChanged(parse_job_type(rest)?),
        "location" => {
            let value = required(rest, "location", "a location name")?;
            Msg::LocationFilterChanged(if is_all(value) {
                Selection::All
            } else {
                Selection::Only(value.to_string())
            })
        }
        "tag" => Msg::TagToggled(required(rest, "tag", "a tag name")?.to_string()),
        "sort" => {
            let value = required(rest, "sort", "an order")?;
            let order = SortOrder::parse(value).ok_or_else(|| CommandError::InvalidArgument {
                command: "sort",
                argument: "order",
                value: value.to_string(),
            })?;
            Msg::SortChanged(order)
        }
        "reset" => Msg::ResetFiltersClicked,
        "delete" => Msg::DeleteClicked {
            job_id: parse_id("delete", rest)?,
        },
        "delete-all" => Msg::DeleteAllClicked,
        "scrape" => Msg::ScrapeClicked,
        "yes" | "y" => Msg::ConfirmAnswered(true),
        "no" | "n" => Msg::ConfirmAnswered(false),
        "set" => parse_set(rest)?,
        "submit" => Msg::SubmitClicked,
        "dismiss" | "ok" => Msg::NoticeDismissed,
        "home" | "list" => Msg::Navigate(Route::Listing),
        "add" => Msg::Navigate(Route::CreateJob),
        "edit" => Msg::Navigate(Route::EditJob(parse_id("edit", rest)?)),
        "open" => {
            let path = required(rest, "open", "a path")?;
            let route = Route::parse(path).ok_or_else(|| CommandError::InvalidArgument {
                command: "open",
                argument: "path",
                value: path.to_string(),
            })?;
            Msg::Navigate(route)
        }
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case(Selection::<String>::ALL_LABEL)
}

fn parse_job_type(rest: &str) -> Result<Selection<JobType>, CommandError> {
    let value = required(rest, "type", "a job type")?;
    if is_all(value) {
        return Ok(Selection::All);
    }
    value
        .parse::<JobType>()
        .map(Selection::Only)
        .map_err(|_| CommandError::InvalidArgument {
            command: "type",
            argument: "job type",
            value: value.to_string(),
        })
}

/// Ids are opaque to the client; anything without whitespace or slashes is passed through.
fn parse_id(command: &'static str, rest: &str) -> Result<JobId, CommandError> {
    let value = required(rest, command, "a job id")?;
    if value.contains(|c: char| c.is_whitespace() || c == '/') {
        return Err(CommandError::InvalidArgument {
            command,
            argument: "job id",
            value: value.to_string(),
        });
    }
    Ok(JobId::from(value))
}

/// `set <field> <value>`; the value may be empty to clear a field.
fn parse_set(rest: &str) -> Result<Msg, CommandError> {
    let name = required(rest, "set", "a field name")?;
    let (name, value) = match name.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (name, ""),
    };
    let field = FormField::parse(name).ok_or_else(|| CommandError::InvalidArgument {
        command: "set",
        argument: "field",
        value: name.to_string(),
    })?;
    Ok(Msg::FieldChanged {
        field,
        value: value.to_string(),
    })
}
