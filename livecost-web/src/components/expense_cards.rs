use crate::app::state::SharedReport;
use crate::i18n::{fmt_currency, fmt_number, t, tr};
use livecost_core::ExpenseCategory;
use std::collections::BTreeMap;
use yew::prelude::*;

pub const TOTAL_CARD_ID: &str = "totalCard";
pub const REQUIRED_INCOME_CARD_ID: &str = "requiredIncomeCard";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub report: Option<SharedReport>,
}

fn card(id: &'static str, title: String, amount: Option<u64>, class: &'static str) -> Html {
    let value = amount.map_or_else(|| t("expenses.placeholder"), fmt_currency);
    html! {
        <div id={id} class={classes!("card", class)}>
            <h3>{ title }</h3>
            <p>{ value }</p>
        </div>
    }
}

/// One card per expense category plus the total and required income.
#[function_component(ExpenseCards)]
pub fn expense_cards(props: &Props) -> Html {
    let report = props.report.as_ref().map(|shared| &shared.0);
    let categories = ExpenseCategory::ALL.iter().map(|category| {
        card(
            category.card_id(),
            t(category.i18n_key()),
            report.map(|r| r.expenses.get(*category)),
            "expense-card",
        )
    });
    let mpg_note = report
        .and_then(|r| r.submission.mpg)
        .map(|mpg| {
            let mpg = fmt_number(mpg);
            let mut vars = BTreeMap::new();
            vars.insert("mpg", mpg.as_str());
            html! { <p class="mpg-summary">{ tr("expenses.mpg_note", Some(&vars)) }</p> }
        })
        .unwrap_or_default();

    html! {
        <section class="expenses" aria-labelledby="expenses-heading">
            <h2 id="expenses-heading">{ t("expenses.heading") }</h2>
            <div class="card-grid">
                { for categories }
                { card(TOTAL_CARD_ID, t("expenses.total"), report.map(|r| r.total()), "total-card") }
                {
                    card(
                        REQUIRED_INCOME_CARD_ID,
                        t("expenses.required_income"),
                        report.map(|r| r.required_income()),
                        "total-card",
                    )
                }
            </div>
            { mpg_note }
        </section>
    }
}
