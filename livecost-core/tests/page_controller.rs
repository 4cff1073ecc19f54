use livecost_core::{
    AddressSubmission, AmenityCategory, AmenityFixtures, COST_CHART_ID, ChartHandle,
    ExpenseConfig, INCOME_CHART_ID, MemoryDismissalStore, ModalState, PageController, PanelState,
    WorkListPolicy, DISMISS_KEY, rng_from_seed,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Live chart count per canvas, shared between fakes and the test body.
type Ledger = Rc<RefCell<BTreeMap<String, i32>>>;

struct CountingChart {
    canvas: String,
    ledger: Ledger,
    legend: String,
}

impl ChartHandle for CountingChart {
    fn destroy(&mut self) {
        *self.ledger.borrow_mut().entry(self.canvas.clone()).or_default() -= 1;
    }

    fn set_legend_color(&mut self, color: &str) {
        self.legend = color.to_string();
    }

    fn update(&mut self) {}
}

type Controller<'a> = PageController<livecost_core::DemoRng, &'a MemoryDismissalStore, CountingChart>;

fn controller(store: &MemoryDismissalStore) -> Controller<'_> {
    PageController::new(
        ExpenseConfig::load_from_static(),
        AmenityFixtures::load_from_static(),
        rng_from_seed(0x00C0_FFEE),
        store,
    )
}

fn draw(ctrl: &mut Controller<'_>, ledger: &Ledger) -> usize {
    ctrl.render_charts("#333333", |spec, legend| {
        *ledger
            .borrow_mut()
            .entry(spec.canvas_id().to_string())
            .or_default() += 1;
        Some(CountingChart {
            canvas: spec.canvas_id().to_string(),
            ledger: Rc::clone(ledger),
            legend: legend.to_string(),
        })
    })
}

fn submission() -> AddressSubmission {
    AddressSubmission::from_raw("12 Home Way", "42 Example Rd", "", "")
}

#[test]
fn resubmitting_never_stacks_charts_on_a_canvas() {
    let store = MemoryDismissalStore::new();
    let ledger = Ledger::default();
    let mut ctrl = controller(&store);

    assert_eq!(draw(&mut ctrl, &ledger), 0, "no report yet, nothing drawn");

    ctrl.submit(submission()).unwrap();
    assert_eq!(draw(&mut ctrl, &ledger), 2);
    ctrl.submit(submission()).unwrap();
    assert_eq!(draw(&mut ctrl, &ledger), 2);

    let ledger = ledger.borrow();
    assert_eq!(ledger.get(COST_CHART_ID), Some(&1));
    assert_eq!(ledger.get(INCOME_CHART_ID), Some(&1));
}

#[test]
fn legend_restyle_reaches_every_live_chart() {
    let store = MemoryDismissalStore::new();
    let ledger = Ledger::default();
    let mut ctrl = controller(&store);
    ctrl.submit(submission()).unwrap();
    draw(&mut ctrl, &ledger);

    assert_eq!(ctrl.restyle_legends("#eeeeee"), 2);
    for id in [COST_CHART_ID, INCOME_CHART_ID] {
        assert_eq!(ctrl.charts().get(id).unwrap().legend, "#eeeeee");
    }
}

#[test]
fn report_totals_and_income_line_up() {
    let store = MemoryDismissalStore::new();
    let mut ctrl = controller(&store);
    let report = ctrl.submit(submission()).unwrap().clone();
    let sum: u64 = report.expenses.amounts().iter().sum();
    assert_eq!(report.total(), sum);
    assert_eq!(
        report.required_income(),
        livecost_core::required_income(sum, 0.7)
    );
    assert_eq!(
        report.amenities.rendered(AmenityCategory::Schools).len(),
        3
    );
}

#[test]
fn disclaimer_flow_across_reloads() {
    let store = MemoryDismissalStore::new();

    let mut first = controller(&store);
    assert_eq!(first.disclaimer(), ModalState::Shown);
    assert_eq!(first.accept_disclaimer(false), ModalState::Hidden);
    assert_eq!(store.get(DISMISS_KEY), None);

    let mut second = controller(&store);
    assert_eq!(second.disclaimer(), ModalState::Shown);
    assert!(second.key_down("Escape"));
    assert_eq!(second.disclaimer(), ModalState::Hidden);

    let mut third = controller(&store);
    third.accept_disclaimer(true);

    let fourth = controller(&store);
    assert_eq!(fourth.disclaimer(), ModalState::Hidden);
}

#[test]
fn details_panel_round_trips() {
    let store = MemoryDismissalStore::new();
    let mut ctrl = controller(&store);
    assert_eq!(ctrl.details(), PanelState::Collapsed);
    assert_eq!(ctrl.toggle_details(), PanelState::Expanded);
    assert_eq!(ctrl.toggle_details(), PanelState::Collapsed);
}

#[test]
fn echo_policy_flows_through_submission() {
    let store = MemoryDismissalStore::new();
    let mut ctrl: Controller<'_> = PageController::new(
        ExpenseConfig::default(),
        AmenityFixtures::load_from_static().with_work_policy(WorkListPolicy::EchoSubmitted),
        rng_from_seed(5),
        &store,
    );
    let report = ctrl.submit(submission()).unwrap();
    let work = report.amenities.rendered(AmenityCategory::Work);
    assert_eq!(
        work.iter().filter(|r| r.address == "42 Example Rd").count(),
        1
    );
    assert_eq!(
        work.iter()
            .filter(|r| r.name == "No secondary work address provided")
            .count(),
        1
    );
}
