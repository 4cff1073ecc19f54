use livecost_core::PanelState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: PanelState,
    pub title: AttrValue,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Disclosure button plus the region it shows and hides.
#[function_component(Collapsible)]
pub fn collapsible(props: &Props) -> Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let content_class = classes!(
        "collapsible-content",
        props.state.is_open().then_some("open")
    );
    html! {
        <div class="collapsible">
            <button
                type="button"
                class="collapsible-toggle"
                aria-controls="detailsPanel"
                aria-expanded={props.state.aria_expanded()}
                {onclick}
            >
                { props.state.label(&props.title) }
            </button>
            <div id="detailsPanel" class={content_class} hidden={props.state.hidden()}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
