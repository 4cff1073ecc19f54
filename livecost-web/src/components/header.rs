use crate::i18n::t;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="page-header">
            <h1>{ t("app.title") }</h1>
            <p class="tagline">{ t("app.tagline") }</p>
        </header>
    }
}
