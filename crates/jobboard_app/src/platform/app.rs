use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use jobboard_core::{update, AppState, Msg, Route};
use jobboard_logging::{board_error, board_info, board_warn};

use super::commands::{self, Command, CommandError, HELP_TEXT};
use super::config::{self, AppConfig, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::logging;
use super::render;

/// Everything the main loop reacts to, from the keyboard or the engine.
pub enum UiEvent {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let (config, config_error) = match config::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    let (level, level_error) = match config.level() {
        Ok(level) => (level, None),
        Err(err) => (jobboard_logging::default_level(), Some(err)),
    };
    logging::initialize(config.log_destination, level);
    for err in config_error.iter().chain(level_error.iter()) {
        board_warn!("Using defaults: {}", err);
        eprintln!("Warning: {err}; using defaults");
    }
    board_info!("Starting against {}", config.base_url);

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let runner = match EffectRunner::new(config.api_settings(), ui_tx.clone()) {
        Ok(runner) => runner,
        Err(err) => {
            board_error!("Failed to start engine: {}", err);
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    spawn_input_reader(ui_tx);

    let mut app = App {
        state: AppState::new(),
        runner,
    };
    println!("{HELP_TEXT}");
    app.dispatch(Msg::Navigate(Route::Listing));
    app.render_if_dirty();

    while let Ok(event) = ui_rx.recv() {
        let from_keyboard = matches!(event, UiEvent::Line(_));
        match event {
            UiEvent::Msg(msg) => app.dispatch(msg),
            UiEvent::Line(line) => match commands::parse(&line) {
                Ok(Command::Dispatch(msg)) => app.dispatch(msg),
                Ok(Command::Help) => println!("{HELP_TEXT}"),
                Ok(Command::Quit) => break,
                Err(CommandError::Empty) => {}
                Err(err) => println!("{err}"),
            },
            UiEvent::InputClosed => break,
        }
        if !app.render_if_dirty() && from_keyboard {
            print_prompt();
        }
    }

    board_info!("Shutting down");
    ExitCode::SUCCESS
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Redraws the screen when state changed; returns whether it did.
    fn render_if_dirty(&mut self) -> bool {
        if !self.state.consume_dirty() {
            return false;
        }
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "\n{}> ", render::render(&self.state.view()));
        let _ = stdout.flush();
        true
    }
}

fn print_prompt() {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}

fn spawn_input_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    board_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if ui_tx.send(UiEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = ui_tx.send(UiEvent::InputClosed);
    });
}
