//! Job board engine: REST client and background execution of API commands.
mod api;
mod batch;
mod engine;
mod types;

pub use api::{ApiSettings, JobsApi, ReqwestJobsApi};
pub use batch::delete_all;
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use types::{
    split_tags, ApiCommand, ApiError, ApiEvent, DeleteAllReport, FailureKind, JobId, JobPayload,
    JobRecord, ScrapeReply,
};
