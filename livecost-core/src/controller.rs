//! Page controller tying the form, cards, charts, modal, and panel together.
//!
//! The controller owns everything the page mutates: the random source, the
//! chart registry, the disclaimer and collapsible state machines, and the most
//! recent report. The browser shell forwards events to it and renders what it
//! exposes; chart creation goes through a caller-supplied factory so the same
//! controller runs against fake charts in tests.
use crate::amenities::AmenityFixtures;
use crate::chart::{ChartHandle, ChartRegistry, ChartSpec};
use crate::collapsible::{Collapsible, PanelState};
use crate::disclaimer::{Disclaimer, DismissalStore, ModalState};
use crate::error::CoreError;
use crate::expenses::ExpenseConfig;
use crate::report::CostReport;
use crate::submission::AddressSubmission;
use rand::Rng;

pub struct PageController<R, S, H>
where
    R: Rng,
    S: DismissalStore,
    H: ChartHandle,
{
    expenses: ExpenseConfig,
    fixtures: AmenityFixtures,
    rng: R,
    store: S,
    charts: ChartRegistry<H>,
    disclaimer: Disclaimer,
    details: Collapsible,
    report: Option<CostReport>,
}

impl<R, S, H> PageController<R, S, H>
where
    R: Rng,
    S: DismissalStore,
    H: ChartHandle,
{
    /// Build the controller for a fresh page load. Reads the dismissal flag.
    pub fn new(expenses: ExpenseConfig, fixtures: AmenityFixtures, rng: R, store: S) -> Self {
        let disclaimer = Disclaimer::on_load(&store);
        Self {
            expenses,
            fixtures,
            rng,
            store,
            charts: ChartRegistry::new(),
            disclaimer,
            details: Collapsible::default(),
            report: None,
        }
    }

    /// Form submit: draw new figures and keep them as the current report.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured palettes do not fit the charts;
    /// the previous report stays in place.
    pub fn submit(&mut self, submission: AddressSubmission) -> Result<&CostReport, CoreError> {
        let report =
            CostReport::compute(submission, &self.expenses, &self.fixtures, &mut self.rng)?;
        log::debug!(
            "submission drew total {} / required income {}",
            report.total(),
            report.required_income()
        );
        Ok(&*self.report.insert(report))
    }

    /// Redraw both charts of the current report, replacing earlier instances.
    /// Returns the number of charts now live.
    pub fn render_charts<F>(&mut self, legend_color: &str, mut create: F) -> usize
    where
        F: FnMut(&ChartSpec, &str) -> Option<H>,
    {
        let Some(report) = self.report.as_ref() else {
            return self.charts.len();
        };
        for spec in report.charts() {
            let replaced = self.charts.contains(spec.canvas_id());
            self.charts
                .rebuild(spec.canvas_id(), || create(spec, legend_color));
            if replaced {
                log::debug!("replaced chart on `{}`", spec.canvas_id());
            }
        }
        self.charts.len()
    }

    /// Color-scheme change: restyle every live legend.
    pub fn restyle_legends(&mut self, legend_color: &str) -> usize {
        self.charts.restyle_legends(legend_color)
    }

    pub fn accept_disclaimer(&mut self, dont_show_again: bool) -> ModalState {
        self.disclaimer.accept(dont_show_again, &self.store)
    }

    pub fn close_disclaimer(&mut self) -> ModalState {
        self.disclaimer.close()
    }

    /// Document-level keydown. Returns `true` when the key closed the modal.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.disclaimer.on_key(key)
    }

    pub fn toggle_details(&mut self) -> PanelState {
        self.details.toggle()
    }

    #[must_use]
    pub const fn disclaimer(&self) -> ModalState {
        self.disclaimer.state()
    }

    #[must_use]
    pub const fn details(&self) -> PanelState {
        self.details.state()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&CostReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn charts(&self) -> &ChartRegistry<H> {
        &self.charts
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
