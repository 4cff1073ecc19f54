use crate::chart::JsChart;
use crate::storage::LocalDismissalStore;
use livecost_core::{CostReport, DemoRng, ModalState, PageController, PanelState};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type Controller = PageController<DemoRng, LocalDismissalStore, JsChart>;

/// A report snapshot handed to the view. Equality is identity, so every
/// submission re-renders even when two draws happen to match.
#[derive(Clone, Debug)]
pub struct SharedReport(pub Rc<CostReport>);

impl PartialEq for SharedReport {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SharedReport {
    #[must_use]
    pub fn new(report: CostReport) -> Self {
        Self(Rc::new(report))
    }
}

#[derive(Clone)]
pub struct PageState {
    pub controller: Rc<RefCell<Controller>>,
    pub report: UseStateHandle<Option<SharedReport>>,
    pub disclaimer: UseStateHandle<ModalState>,
    pub details: UseStateHandle<PanelState>,
    pub prefers_dark: bool,
}

#[hook]
pub fn use_page_state() -> PageState {
    let controller = use_mut_ref(super::bootstrap::build_controller);
    let initial_modal = controller.borrow().disclaimer();
    PageState {
        controller,
        report: use_state(|| None::<SharedReport>),
        disclaimer: use_state(move || initial_modal),
        details: use_state(PanelState::default),
        prefers_dark: crate::theme::use_prefers_dark(),
    }
}

impl PageState {
    #[must_use]
    pub fn current_report(&self) -> Option<Rc<CostReport>> {
        self.report.as_ref().map(|shared| Rc::clone(&shared.0))
    }
}
