use crate::editor::FormPage;
use crate::listing::ListingPage;
use crate::view_model::{AppViewModel, PageView};
use crate::{Effect, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Non-blocking replacement for an alert box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// The mounted page. Only one page is alive at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Listing(ListingPage),
    Form(FormPage),
}

impl Default for Page {
    fn default() -> Self {
        Page::Listing(ListingPage::default())
    }
}

/// What a page handler wants done after processing one message.
#[derive(Debug, Default)]
pub(crate) struct Outcome {
    pub effects: Vec<Effect>,
    pub notice: Option<Notice>,
    pub redirect: Option<Route>,
    pub changed: bool,
}

impl Outcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            changed: true,
            ..Self::default()
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_redirect(mut self, route: Route) -> Self {
        self.redirect = Some(route);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page: Page,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    /// Starts on an unmounted listing page; send `Msg::Navigate` to load it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        match &self.page {
            Page::Listing(_) => Route::Listing,
            Page::Form(page) => page.route(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let page = match &self.page {
            Page::Listing(page) => PageView::Listing(page.view()),
            Page::Form(page) => PageView::Form(page.view()),
        };
        AppViewModel {
            route: self.route(),
            notice: self.notice.clone(),
            page,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn dismiss_notice(&mut self) -> bool {
        let had_notice = self.notice.take().is_some();
        if had_notice {
            self.mark_dirty();
        }
        had_notice
    }

    /// Replaces the page with a freshly mounted one and returns its mount effects.
    pub(crate) fn navigate(&mut self, route: Route) -> Vec<Effect> {
        let (page, effects) = match route {
            Route::Listing => {
                let (page, effects) = ListingPage::mount();
                (Page::Listing(page), effects)
            }
            Route::CreateJob => {
                let (page, effects) = FormPage::mount_create();
                (Page::Form(page), effects)
            }
            Route::EditJob(job_id) => {
                let (page, effects) = FormPage::mount_edit(job_id);
                (Page::Form(page), effects)
            }
        };
        self.page = page;
        self.mark_dirty();
        effects
    }

    pub(crate) fn apply(&mut self, outcome: Outcome) -> Vec<Effect> {
        let Outcome {
            mut effects,
            notice,
            redirect,
            changed,
        } = outcome;
        if changed {
            self.mark_dirty();
        }
        if let Some(notice) = notice {
            self.notice = Some(notice);
            self.mark_dirty();
        }
        if let Some(route) = redirect {
            effects.extend(self.navigate(route));
        }
        effects
    }
}
