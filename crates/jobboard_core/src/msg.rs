use std::fmt;

use crate::{FormField, Job, JobId, JobType, Route, Selection, SortOrder};

/// A failed backend call as seen by the pages. Details are logged elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Mount the page for a route, dropping the current page state.
    Navigate(Route),
    /// Listing: search box text.
    KeywordChanged(String),
    /// Listing: job type dropdown.
    JobTypeFilterChanged(Selection<JobType>),
    /// Listing: location dropdown.
    LocationFilterChanged(Selection<String>),
    /// Listing: tag checkbox clicked.
    TagToggled(String),
    /// Listing: sort dropdown.
    SortChanged(SortOrder),
    ResetFiltersClicked,
    DeleteClicked { job_id: JobId },
    DeleteAllClicked,
    ScrapeClicked,
    /// Answer to the pending confirmation prompt.
    ConfirmAnswered(bool),
    /// Create/Edit: one form input changed.
    FieldChanged { field: FormField, value: String },
    /// Create/Edit: form submitted.
    SubmitClicked,
    NoticeDismissed,
    JobsLoaded(Result<Vec<Job>, RequestFailure>),
    LocationsLoaded(Result<Vec<String>, RequestFailure>),
    TagsLoaded(Result<Vec<String>, RequestFailure>),
    JobLoaded {
        job_id: JobId,
        result: Result<Job, RequestFailure>,
    },
    /// Create finished; any 2xx counts as success.
    JobCreated(Result<(), RequestFailure>),
    JobUpdated {
        job_id: JobId,
        result: Result<(), RequestFailure>,
    },
    JobDeleted {
        job_id: JobId,
        result: Result<(), RequestFailure>,
    },
    /// Every delete of a delete-all batch has settled.
    AllJobsDeleted { deleted: usize, failed: usize },
    /// Scrape finished; success carries the backend's status message, if any.
    ScrapeFinished(Result<Option<String>, RequestFailure>),
}
