use std::sync::{mpsc, Arc};

use jobboard_core::{Effect, Job, JobForm, JobId, Msg, RequestFailure};
use jobboard_engine::{
    ApiCommand, ApiError, ApiEvent, ApiSettings, EngineError, EngineHandle, EventSink, JobPayload,
    JobRecord,
};
use jobboard_logging::{board_info, board_warn};

use super::app::UiEvent;

/// Executes core effects on the engine and feeds results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, ui_tx: mpsc::Sender<UiEvent>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { ui_tx });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = to_command(effect);
            board_info!("Running {:?}", command);
            self.engine.submit(command);
        }
    }
}

struct MsgSink {
    ui_tx: mpsc::Sender<UiEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ApiEvent) {
        if let ApiEvent::AllDeleted(report) = &event {
            if !report.failed.is_empty() {
                board_warn!(
                    "{} of {} deletes failed",
                    report.failed.len(),
                    report.failed.len() + report.deleted.len()
                );
            }
        }
        let _ = self.ui_tx.send(UiEvent::Msg(to_msg(event)));
    }
}

fn to_command(effect: Effect) -> ApiCommand {
    match effect {
        Effect::FetchJobs => ApiCommand::ListJobs,
        Effect::FetchLocations => ApiCommand::ListLocations,
        Effect::FetchTags => ApiCommand::ListTags,
        Effect::FetchJob { job_id } => ApiCommand::GetJob {
            job_id: to_api_id(job_id),
        },
        Effect::CreateJob { form } => ApiCommand::CreateJob {
            payload: to_payload(&form),
        },
        Effect::UpdateJob { job_id, form } => ApiCommand::UpdateJob {
            job_id: to_api_id(job_id),
            payload: to_payload(&form),
        },
        Effect::DeleteJob { job_id } => ApiCommand::DeleteJob {
            job_id: to_api_id(job_id),
        },
        Effect::DeleteAll { job_ids } => ApiCommand::DeleteAll {
            job_ids: job_ids.into_iter().map(to_api_id).collect(),
        },
        Effect::Scrape => ApiCommand::Scrape,
    }
}

fn to_msg(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::JobsListed(result) => Msg::JobsLoaded(
            result
                .map(|jobs| jobs.into_iter().map(to_job).collect())
                .map_err(to_failure),
        ),
        ApiEvent::JobFetched { job_id, result } => Msg::JobLoaded {
            job_id: to_core_id(job_id),
            result: result.map(to_job).map_err(to_failure),
        },
        ApiEvent::JobCreated(result) => Msg::JobCreated(result.map_err(to_failure)),
        ApiEvent::JobUpdated { job_id, result } => Msg::JobUpdated {
            job_id: to_core_id(job_id),
            result: result.map_err(to_failure),
        },
        ApiEvent::JobDeleted { job_id, result } => Msg::JobDeleted {
            job_id: to_core_id(job_id),
            result: result.map_err(to_failure),
        },
        ApiEvent::AllDeleted(report) => Msg::AllJobsDeleted {
            deleted: report.deleted.len(),
            failed: report.failed.len(),
        },
        ApiEvent::LocationsListed(result) => Msg::LocationsLoaded(result.map_err(to_failure)),
        ApiEvent::TagsListed(result) => Msg::TagsLoaded(result.map_err(to_failure)),
        ApiEvent::Scraped(result) => {
            Msg::ScrapeFinished(result.map(|reply| reply.message).map_err(to_failure))
        }
    }
}

fn to_job(record: JobRecord) -> Job {
    Job {
        id: to_core_id(record.id),
        title: record.title,
        company: record.company,
        location: record.location,
        job_type: record.job_type,
        tags: record.tags,
    }
}

fn to_api_id(job_id: JobId) -> jobboard_engine::JobId {
    jobboard_engine::JobId::from(job_id.into_string())
}

fn to_core_id(job_id: jobboard_engine::JobId) -> JobId {
    JobId::from(job_id.into_string())
}

/// Tags go out exactly as typed; the backend splits them.
fn to_payload(form: &JobForm) -> JobPayload {
    JobPayload {
        title: form.title.clone(),
        company: form.company.clone(),
        location: form.location.clone(),
        job_type: form.job_type.as_str().to_string(),
        tags: form.tags.clone(),
    }
}

fn to_failure(err: ApiError) -> RequestFailure {
    RequestFailure::new(err.to_string())
}
