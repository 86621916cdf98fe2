use std::fmt::Write as _;

use jobboard_core::{
    AppViewModel, FormView, JobCardView, ListingView, NoticeLevel, PageView, SortOrder,
};

pub const LOADING_TEXT: &str = "loading...";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.route);

    if let Some(notice) = &view.notice {
        let label = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "[{label}] {} (type `dismiss` to clear)", notice.text);
    }

    match &view.page {
        PageView::Listing(listing) => render_listing(&mut out, listing),
        PageView::Form(form) => render_form(&mut out, form),
    }
    out
}

fn render_listing(out: &mut String, view: &ListingView) {
    let _ = writeln!(out, "Job Listings ({} of {})", view.cards.len(), view.total_jobs);

    let types: Vec<String> = view.job_type_options.iter().map(ToString::to_string).collect();
    let locations: Vec<String> = view.location_options.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "Search: {:?} | Type: {} [{}] | Location: {} [{}] | Sort: {}",
        view.keyword,
        view.job_type,
        types.join(", "),
        view.location,
        locations.join(", "),
        sort_label(view.sort)
    );
    if !view.tag_options.is_empty() {
        let tags: Vec<String> = view
            .tag_options
            .iter()
            .map(|opt| format!("[{}] {}", if opt.checked { "x" } else { " " }, opt.tag))
            .collect();
        let _ = writeln!(out, "Tags: {}", tags.join("  "));
    }

    let mut actions = vec!["reset"];
    if view.can_delete_all {
        actions.push("delete-all");
    }
    actions.push("scrape");
    actions.push("add");
    let _ = writeln!(out, "Actions: {}", actions.join(" | "));

    if let Some(prompt) = &view.confirm_prompt {
        let _ = writeln!(out, "? {prompt} [yes/no]");
    }

    match view.empty_message {
        Some(message) => {
            let _ = writeln!(out, "{message}");
        }
        None => {
            for card in &view.cards {
                let _ = writeln!(out, "{}", format_card(card));
            }
        }
    }
}

fn format_card(card: &JobCardView) -> String {
    let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
    let mut line = format!(
        "[#{id}] {title} | {company} - {location} | {job_type}",
        id = card.job_id,
        title = card.title,
        company = card.company,
        location = card.location,
        job_type = card.job_type,
    );
    if !tags.is_empty() {
        line.push_str(" | ");
        line.push_str(&tags.join(" "));
    }
    let _ = write!(line, " (edit: {})", card.edit_route);
    line
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Default => "Sort By",
        SortOrder::Title => "Title (A-Z)",
        SortOrder::Company => "Company (A-Z)",
    }
}

fn render_form(out: &mut String, view: &FormView) {
    if view.loading {
        let _ = writeln!(out, "{LOADING_TEXT}");
        return;
    }
    let _ = writeln!(out, "{}", view.heading);
    for field in &view.fields {
        let marker = if field.required { "*" } else { "" };
        let warning = if field.missing { "  <- please fill out this field" } else { "" };
        let _ = writeln!(out, "  {}{}: {}{}", field.label, marker, field.value, warning);
    }
    let options: Vec<&str> = view.job_type_options.iter().map(|t| t.as_str()).collect();
    let _ = writeln!(out, "  (job type options: {})", options.join(", "));
    if view.submitting {
        let _ = writeln!(out, "Submitting...");
    } else {
        let _ = writeln!(out, "`submit` to {}", view.submit_label);
    }
}
