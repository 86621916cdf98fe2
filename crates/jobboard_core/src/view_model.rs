use crate::{FormField, Job, JobId, JobType, Notice, Route, Selection, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub notice: Option<Notice>,
    pub page: PageView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Listing(ListingView),
    Form(FormView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub cards: Vec<JobCardView>,
    pub total_jobs: usize,
    pub keyword: String,
    pub job_type: Selection<JobType>,
    pub job_type_options: Vec<Selection<JobType>>,
    pub location: Selection<String>,
    /// Always starts with `Selection::All`.
    pub location_options: Vec<Selection<String>>,
    pub tag_options: Vec<TagOptionView>,
    pub sort: SortOrder,
    pub can_delete_all: bool,
    pub empty_message: Option<&'static str>,
    pub confirm_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub tags: Vec<String>,
    pub edit_route: Route,
}

impl From<&Job> for JobCardView {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            tags: job.tags.iter().map(|t| t.trim().to_string()).collect(),
            edit_route: Route::EditJob(job.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptionView {
    pub tag: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub job_type_options: Vec<JobType>,
    pub loading: bool,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub missing: bool,
}
