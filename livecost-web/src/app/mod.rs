use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

pub use state::{PageState, SharedReport};

/// Redraw charts for each new report and restyle legends when the color
/// scheme flips. Effects only run in the browser.
#[hook]
fn use_chart_sync(state: &PageState) {
    {
        let controller = state.controller.clone();
        use_effect_with((*state.report).clone(), move |report| {
            if report.is_some() {
                let legend = crate::theme::current_legend_color();
                let live = controller
                    .borrow_mut()
                    .render_charts(&legend, crate::chart::draw);
                log::debug!("{live} charts live");
            }
            || {}
        });
    }
    {
        let controller = state.controller.clone();
        use_effect_with(state.prefers_dark, move |_| {
            let legend = crate::theme::current_legend_color();
            controller.borrow_mut().restyle_legends(&legend);
            || {}
        });
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_page_state();
    let handlers = handlers::Handlers::new(&state);
    crate::a11y::use_document_keydown(handlers.keydown.clone());
    use_chart_sync(&state);
    view::render_page(&state, &handlers)
}
