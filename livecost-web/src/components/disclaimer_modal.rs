use crate::a11y::focus_deferred;
use crate::i18n::t;
use livecost_core::ModalState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const MODAL_ID: &str = "disclaimerModal";
pub const ACCEPT_ID: &str = "disclaimerAccept";
pub const DONT_SHOW_ID: &str = "disclaimerDontShow";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: ModalState,
    /// Receives the "don't show again" checkbox value.
    pub on_accept: Callback<bool>,
    pub on_close: Callback<()>,
}

/// The disclaimer dialog. It stays in the document and toggles `hidden`, so
/// the accept button exists by the time focus moves to it.
#[function_component(DisclaimerModal)]
pub fn disclaimer_modal(props: &Props) -> Html {
    let open = props.state == ModalState::Shown;
    let dont_show = use_state(|| false);

    use_effect_with(open, |open| {
        if *open {
            focus_deferred(ACCEPT_ID);
        }
        || {}
    });

    let on_accept = {
        let cb = props.on_accept.clone();
        let dont_show = dont_show.clone();
        Callback::from(move |_: MouseEvent| cb.emit(*dont_show))
    };
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_toggle_dont_show = {
        let dont_show = dont_show.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dont_show.set(input.checked());
        })
    };

    html! {
        <div
            id={MODAL_ID}
            class={classes!("modal", open.then_some("open"))}
            role="dialog"
            aria-modal="true"
            aria-labelledby="disclaimerTitle"
            aria-describedby="disclaimerBody"
            aria-hidden={(!open).to_string()}
            hidden={!open}
        >
            <div class="modal-content">
                <button type="button" class="modal-close" aria-label={t("disclaimer.close")} onclick={on_close}>
                    {"×"}
                </button>
                <h2 id="disclaimerTitle">{ t("disclaimer.title") }</h2>
                <p id="disclaimerBody">{ t("disclaimer.body") }</p>
                <label class="dont-show">
                    <input
                        id={DONT_SHOW_ID}
                        type="checkbox"
                        checked={*dont_show}
                        onchange={on_toggle_dont_show}
                    />
                    { t("disclaimer.dont_show") }
                </label>
                <button id={ACCEPT_ID} type="button" class="modal-accept" onclick={on_accept}>
                    { t("disclaimer.accept") }
                </button>
            </div>
        </div>
    }
}
