use crate::state::Page;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages meant for a page that is not mounted are dropped, so late
/// responses from a page the user already left cannot touch the new one.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(route) => state.navigate(route),
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        msg => {
            let outcome = match state.page_mut() {
                Page::Listing(page) => page.handle(msg),
                Page::Form(page) => page.handle(msg),
            };
            state.apply(outcome)
        }
    };

    (state, effects)
}
