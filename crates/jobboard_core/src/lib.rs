//! Job board core: pure page state machine and view-model helpers.
mod editor;
mod effect;
mod filter;
mod form;
mod job;
mod listing;
mod msg;
mod route;
mod state;
mod update;
mod view_model;

pub use editor::{
    FormMode, FormPage, FormPhase, CREATED_TEXT, CREATE_FAILED_TEXT, UPDATED_TEXT,
    UPDATE_FAILED_TEXT,
};
pub use effect::Effect;
pub use filter::{locale_compare, sort_jobs, visible_jobs, FilterState, Selection, SortOrder};
pub use form::{FormField, JobForm};
pub use job::{Job, JobId, JobType, UnknownJobType};
pub use listing::{
    ConfirmRequest, ListingPage, DELETE_FAILED_TEXT, EMPTY_LISTING_TEXT, SCRAPE_DONE_TEXT,
    SCRAPE_FAILED_TEXT,
};
pub use msg::{Msg, RequestFailure};
pub use route::Route;
pub use state::{AppState, Notice, NoticeLevel, Page};
pub use update::update;
pub use view_model::{
    AppViewModel, FieldView, FormView, JobCardView, ListingView, PageView, TagOptionView,
};
