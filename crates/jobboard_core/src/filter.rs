use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::{Job, JobType};

/// Either the "All" sentinel or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub const ALL_LABEL: &'static str = "All";

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(Self::ALL_LABEL),
            Selection::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub keyword: String,
    pub job_type: Selection<JobType>,
    pub location: Selection<String>,
    /// Required tags, all of which must be present on a job.
    pub tags: Vec<String>,
}

impl FilterState {
    /// Adds the tag if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when the job passes every criterion.
    pub fn matches(&self, job: &Job) -> bool {
        self.keyword_matches(job)
            && self.job_type_matches(job)
            && self.location_matches(job)
            && self.tags_match(job)
    }

    fn keyword_matches(&self, job: &Job) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let needle = self.keyword.to_lowercase();
        job.title.to_lowercase().contains(&needle) || job.company.to_lowercase().contains(&needle)
    }

    fn job_type_matches(&self, job: &Job) -> bool {
        match &self.job_type {
            Selection::All => true,
            Selection::Only(kind) => job.job_type == kind.as_str(),
        }
    }

    fn location_matches(&self, job: &Job) -> bool {
        match &self.location {
            Selection::All => true,
            Selection::Only(location) => job.location == *location,
        }
    }

    fn tags_match(&self, job: &Job) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let job_tags: Vec<String> = job.tags.iter().map(|t| t.trim().to_lowercase()).collect();
        self.tags
            .iter()
            .all(|wanted| job_tags.contains(&wanted.to_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the backend returned.
    #[default]
    Default,
    Title,
    Company,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Default, SortOrder::Title, SortOrder::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::Title => "title",
            SortOrder::Company => "company",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Collation-style ordering in three levels: base letters, then accents, then case.
///
/// Accents and case only break ties, so "Éclair" sorts with the e's and "a" before "A".
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (decomposed_lowercase(a), decomposed_lowercase(b));
    base_letters(&a_lower)
        .cmp(base_letters(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}

fn decomposed_lowercase(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

fn base_letters(decomposed: &str) -> impl Iterator<Item = char> + '_ {
    decomposed.chars().filter(|c| !is_combining_mark(*c))
}

/// Stable sort in place. `SortOrder::Default` leaves the slice untouched.
pub fn sort_jobs(jobs: &mut [&Job], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::Title => jobs.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortOrder::Company => jobs.sort_by(|a, b| locale_compare(&a.company, &b.company)),
    }
}

/// Jobs passing `filters`, ordered by `order`. Never mutates `jobs`.
pub fn visible_jobs<'a>(jobs: &'a [Job], filters: &FilterState, order: SortOrder) -> Vec<&'a Job> {
    let mut visible: Vec<&Job> = jobs.iter().filter(|job| filters.matches(job)).collect();
    sort_jobs(&mut visible, order);
    visible
}
