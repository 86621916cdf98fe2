use std::sync::{mpsc, Arc};
use std::thread;

use jobboard_logging::{board_debug, board_error, board_warn};

use crate::batch::delete_all;
use crate::{ApiCommand, ApiError, ApiEvent, ApiSettings, JobsApi, ReqwestJobsApi};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build api client: {0}")]
    Client(#[from] ApiError),
}

/// Receives engine results. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ApiEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ApiEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ApiEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ApiEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs API commands on a background tokio runtime; each command is its own task.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api = Arc::new(ReqwestJobsApi::new(settings)?);
        Self::with_api(api, sink)
    }

    /// Convenience constructor delivering events over a channel.
    pub fn with_channel(
        api: Arc<dyn JobsApi>,
    ) -> Result<(Self, mpsc::Receiver<ApiEvent>), EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let handle = Self::with_api(api, Arc::new(ChannelEventSink::new(event_tx)))?;
        Ok((handle, event_rx))
    }

    pub fn with_api(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    sink.emit(event);
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    /// Queues a command; returns false and logs when the engine thread has exited.
    pub fn submit(&self, command: ApiCommand) -> bool {
        board_debug!("Submitting {:?}", command);
        match self.cmd_tx.send(command) {
            Ok(()) => true,
            Err(mpsc::SendError(command)) => {
                board_error!("Engine thread is gone; dropped {:?}", command);
                false
            }
        }
    }
}

async fn handle_command(api: &dyn JobsApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::ListJobs => ApiEvent::JobsListed(logged("list jobs", api.list_jobs().await)),
        ApiCommand::GetJob { job_id } => {
            let result = logged("load job", api.get_job(&job_id).await);
            ApiEvent::JobFetched { job_id, result }
        }
        ApiCommand::CreateJob { payload } => {
            ApiEvent::JobCreated(logged("create job", api.create_job(&payload).await))
        }
        ApiCommand::UpdateJob { job_id, payload } => {
            let result = logged("update job", api.update_job(&job_id, &payload).await);
            ApiEvent::JobUpdated { job_id, result }
        }
        ApiCommand::DeleteJob { job_id } => {
            let result = logged("delete job", api.delete_job(&job_id).await);
            ApiEvent::JobDeleted { job_id, result }
        }
        ApiCommand::DeleteAll { job_ids } => ApiEvent::AllDeleted(delete_all(api, &job_ids).await),
        ApiCommand::ListLocations => {
            ApiEvent::LocationsListed(logged("list locations", api.list_locations().await))
        }
        ApiCommand::ListTags => ApiEvent::TagsListed(logged("list tags", api.list_tags().await)),
        ApiCommand::Scrape => ApiEvent::Scraped(logged("scrape", api.scrape().await)),
    }
}

fn logged<T>(operation: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        board_warn!("Failed to {}: {}", operation, err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_reports_commands_dropped_after_engine_exit() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let handle = EngineHandle { cmd_tx };

        assert!(!handle.submit(ApiCommand::ListJobs));
    }
}
