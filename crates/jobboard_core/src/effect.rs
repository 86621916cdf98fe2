use crate::{JobForm, JobId};

/// Backend work requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobs,
    FetchLocations,
    FetchTags,
    FetchJob { job_id: JobId },
    CreateJob { form: JobForm },
    UpdateJob { job_id: JobId, form: JobForm },
    DeleteJob { job_id: JobId },
    /// One delete per id, issued concurrently; reported back once all settle.
    DeleteAll { job_ids: Vec<JobId> },
    Scrape,
}
