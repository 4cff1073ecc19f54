use super::state::{PageState, SharedReport};
use livecost_core::AddressSubmission;
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub struct Handlers {
    pub submit: Callback<AddressSubmission>,
    pub accept: Callback<bool>,
    pub close: Callback<()>,
    pub toggle_details: Callback<()>,
    pub keydown: Callback<KeyboardEvent>,
}

impl Handlers {
    #[must_use]
    pub fn new(state: &PageState) -> Self {
        Self {
            submit: build_submit(state),
            accept: build_accept(state),
            close: build_close(state),
            toggle_details: build_toggle_details(state),
            keydown: build_keydown(state),
        }
    }
}

fn build_submit(state: &PageState) -> Callback<AddressSubmission> {
    let controller = state.controller.clone();
    let report = state.report.clone();
    Callback::from(move |submission: AddressSubmission| {
        let result = controller
            .borrow_mut()
            .submit(submission)
            .map(|computed| SharedReport::new(computed.clone()));
        match result {
            Ok(shared) => report.set(Some(shared)),
            Err(err) => log::warn!("submission not rendered: {err}"),
        }
    })
}

fn build_accept(state: &PageState) -> Callback<bool> {
    let controller = state.controller.clone();
    let disclaimer = state.disclaimer.clone();
    Callback::from(move |dont_show_again: bool| {
        let next = controller.borrow_mut().accept_disclaimer(dont_show_again);
        disclaimer.set(next);
    })
}

fn build_close(state: &PageState) -> Callback<()> {
    let controller = state.controller.clone();
    let disclaimer = state.disclaimer.clone();
    Callback::from(move |()| {
        let next = controller.borrow_mut().close_disclaimer();
        disclaimer.set(next);
    })
}

fn build_toggle_details(state: &PageState) -> Callback<()> {
    let controller = state.controller.clone();
    let details = state.details.clone();
    Callback::from(move |()| {
        let next = controller.borrow_mut().toggle_details();
        details.set(next);
    })
}

fn build_keydown(state: &PageState) -> Callback<KeyboardEvent> {
    let controller = state.controller.clone();
    let disclaimer = state.disclaimer.clone();
    Callback::from(move |event: KeyboardEvent| {
        let closed = controller.borrow_mut().key_down(&event.key());
        if closed {
            event.prevent_default();
            disclaimer.set(controller.borrow().disclaimer());
        }
    })
}
