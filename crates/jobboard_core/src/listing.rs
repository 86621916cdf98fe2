use crate::filter::visible_jobs;
use crate::state::Outcome;
use crate::view_model::{JobCardView, ListingView, TagOptionView};
use crate::{Effect, FilterState, Job, JobId, JobType, Msg, Notice, Selection, SortOrder};

pub const EMPTY_LISTING_TEXT: &str = "No matching jobs found.";
pub const SCRAPE_DONE_TEXT: &str = "Scraping done.";
pub const SCRAPE_FAILED_TEXT: &str = "Scraping failed. Check the log for details.";
pub const DELETE_FAILED_TEXT: &str = "Failed to delete job.";

/// An action waiting for the user's yes/no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    DeleteJob(JobId),
    DeleteAll,
    Scrape,
}

impl ConfirmRequest {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmRequest::DeleteJob(_) => "Are you sure you want to delete this job?".to_string(),
            ConfirmRequest::DeleteAll => {
                "This will permanently delete all job listings. Continue?".to_string()
            }
            ConfirmRequest::Scrape => "Run scraper to fetch new job listings?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    jobs: Vec<Job>,
    locations: Vec<String>,
    tags: Vec<String>,
    filters: FilterState,
    sort: SortOrder,
    pending_confirm: Option<ConfirmRequest>,
}

impl ListingPage {
    pub(crate) fn mount() -> (Self, Vec<Effect>) {
        (
            Self::default(),
            vec![Effect::FetchJobs, Effect::FetchLocations, Effect::FetchTags],
        )
    }

    /// Jobs in fetch order, unfiltered.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn pending_confirm(&self) -> Option<&ConfirmRequest> {
        self.pending_confirm.as_ref()
    }

    /// Jobs after filtering and sorting; a pure derivation of the page state.
    pub fn visible(&self) -> Vec<&Job> {
        visible_jobs(&self.jobs, &self.filters, self.sort)
    }

    pub(crate) fn handle(&mut self, msg: Msg) -> Outcome {
        match msg {
            Msg::KeywordChanged(keyword) => replace(&mut self.filters.keyword, keyword),
            Msg::JobTypeFilterChanged(selection) => replace(&mut self.filters.job_type, selection),
            Msg::LocationFilterChanged(selection) => replace(&mut self.filters.location, selection),
            Msg::TagToggled(tag) => {
                self.filters.toggle_tag(&tag);
                Outcome::changed()
            }
            Msg::SortChanged(order) => replace(&mut self.sort, order),
            Msg::ResetFiltersClicked => self.reset_filters(),
            Msg::DeleteClicked { job_id } => self.ask(ConfirmRequest::DeleteJob(job_id)),
            Msg::DeleteAllClicked => {
                if self.jobs.is_empty() {
                    Outcome::ignored()
                } else {
                    self.ask(ConfirmRequest::DeleteAll)
                }
            }
            Msg::ScrapeClicked => self.ask(ConfirmRequest::Scrape),
            Msg::ConfirmAnswered(accepted) => self.resolve_confirm(accepted),
            Msg::JobsLoaded(Ok(jobs)) => {
                self.jobs = jobs;
                Outcome::changed()
            }
            Msg::LocationsLoaded(Ok(locations)) => {
                self.locations = locations;
                Outcome::changed()
            }
            Msg::TagsLoaded(Ok(tags)) => {
                self.tags = tags;
                Outcome::changed()
            }
            // Failed loads keep whatever was shown before.
            Msg::JobsLoaded(Err(_)) | Msg::LocationsLoaded(Err(_)) | Msg::TagsLoaded(Err(_)) => {
                Outcome::ignored()
            }
            Msg::JobDeleted { result: Ok(()), .. } => Outcome::effect(Effect::FetchJobs),
            Msg::JobDeleted { result: Err(_), .. } => {
                Outcome::changed().with_notice(Notice::error(DELETE_FAILED_TEXT))
            }
            Msg::AllJobsDeleted { .. } => Outcome::effect(Effect::FetchJobs),
            Msg::ScrapeFinished(Ok(message)) => {
                let text = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SCRAPE_DONE_TEXT.to_string());
                Outcome::effect(Effect::FetchJobs).with_notice(Notice::info(text))
            }
            Msg::ScrapeFinished(Err(_)) => {
                Outcome::changed().with_notice(Notice::error(SCRAPE_FAILED_TEXT))
            }
            _ => Outcome::ignored(),
        }
    }

    fn reset_filters(&mut self) -> Outcome {
        let before = (self.filters.clone(), self.sort);
        self.filters = FilterState::default();
        self.sort = SortOrder::Default;
        if before == (self.filters.clone(), self.sort) {
            Outcome::ignored()
        } else {
            Outcome::changed()
        }
    }

    fn ask(&mut self, request: ConfirmRequest) -> Outcome {
        self.pending_confirm = Some(request);
        Outcome::changed()
    }

    fn resolve_confirm(&mut self, accepted: bool) -> Outcome {
        let Some(request) = self.pending_confirm.take() else {
            return Outcome::ignored();
        };
        if !accepted {
            return Outcome::changed();
        }
        match request {
            ConfirmRequest::DeleteJob(job_id) => Outcome::effect(Effect::DeleteJob { job_id }),
            ConfirmRequest::DeleteAll => {
                let job_ids: Vec<JobId> = self.jobs.iter().map(|job| job.id.clone()).collect();
                if job_ids.is_empty() {
                    Outcome::changed()
                } else {
                    Outcome::effect(Effect::DeleteAll { job_ids })
                }
            }
            ConfirmRequest::Scrape => Outcome::effect(Effect::Scrape),
        }
    }

    pub(crate) fn view(&self) -> ListingView {
        let cards: Vec<JobCardView> = self.visible().into_iter().map(JobCardView::from).collect();
        let empty_message = cards.is_empty().then_some(EMPTY_LISTING_TEXT);

        let job_type_options = std::iter::once(Selection::All)
            .chain(JobType::ALL.into_iter().map(Selection::Only))
            .collect();
        let location_options = std::iter::once(Selection::All)
            .chain(self.locations.iter().cloned().map(Selection::Only))
            .collect();
        let tag_options = self
            .tags
            .iter()
            .map(|tag| TagOptionView {
                tag: tag.clone(),
                checked: self.filters.has_tag(tag),
            })
            .collect();

        ListingView {
            cards,
            total_jobs: self.jobs.len(),
            keyword: self.filters.keyword.clone(),
            job_type: self.filters.job_type.clone(),
            job_type_options,
            location: self.filters.location.clone(),
            location_options,
            tag_options,
            sort: self.sort,
            can_delete_all: !self.jobs.is_empty(),
            empty_message,
            confirm_prompt: self.pending_confirm.as_ref().map(ConfirmRequest::prompt),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> Outcome {
    if *slot == value {
        Outcome::ignored()
    } else {
        *slot = value;
        Outcome::changed()
    }
}
