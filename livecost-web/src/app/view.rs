use super::handlers::Handlers;
use super::state::PageState;
use crate::components::address_form::AddressForm;
use crate::components::amenity_lists::AmenityListsView;
use crate::components::disclaimer_modal::DisclaimerModal;
use crate::components::expense_cards::ExpenseCards;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::pie_chart::PieChart;
use crate::i18n::t;
use livecost_core::{COST_CHART_ID, INCOME_CHART_ID};
use yew::prelude::*;

pub fn render_page(state: &PageState, handlers: &Handlers) -> Html {
    let report = state.current_report();
    let expense_spec = report.as_ref().map(|r| r.expense_chart.clone());
    let income_spec = report.as_ref().map(|r| r.income_chart.clone());
    let amenities = report.as_ref().map(|r| r.amenities.clone());

    html! {
        <>
            <Header />
            <main id="main" class="page">
                <AddressForm
                    details={*state.details}
                    on_toggle_details={handlers.toggle_details.clone()}
                    on_submit={handlers.submit.clone()}
                />
                <ExpenseCards report={(*state.report).clone()} />
                <section class="charts">
                    <PieChart
                        canvas_id={COST_CHART_ID}
                        title={AttrValue::from(t("charts.expenses"))}
                        spec={expense_spec}
                    />
                    <PieChart
                        canvas_id={INCOME_CHART_ID}
                        title={AttrValue::from(t("charts.income"))}
                        spec={income_spec}
                    />
                </section>
                <AmenityListsView lists={amenities} />
            </main>
            <DisclaimerModal
                state={*state.disclaimer}
                on_accept={handlers.accept.clone()}
                on_close={handlers.close.clone()}
            />
            <Footer />
        </>
    }
}
