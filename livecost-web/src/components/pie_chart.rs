use livecost_core::ChartSpec;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub canvas_id: AttrValue,
    pub title: AttrValue,
    /// Slices for the screen-reader list; empty before the first submission.
    #[prop_or_default]
    pub spec: Option<ChartSpec>,
}

/// Canvas host for one pie chart. Chart.js draws into the canvas after
/// render; the slice list mirrors it for assistive technology.
#[function_component(PieChart)]
pub fn pie_chart(props: &Props) -> Html {
    let slices = props
        .spec
        .as_ref()
        .map(ChartSpec::display_labels)
        .unwrap_or_default();
    html! {
        <figure class="chart-container">
            <figcaption>{ props.title.clone() }</figcaption>
            <div class="chart-canvas">
                <canvas id={props.canvas_id.clone()} role="img" aria-label={props.title.clone()}></canvas>
            </div>
            <ul class="sr-only">
                { for slices.into_iter().map(|slice| html! { <li>{ slice }</li> }) }
            </ul>
        </figure>
    }
}
