use super::collapsible::Collapsible;
use crate::i18n::t;
use livecost_core::{AddressSubmission, PanelState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub details: PanelState,
    pub on_toggle_details: Callback<()>,
    pub on_submit: Callback<AddressSubmission>,
}

fn bind_input(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

#[function_component(AddressForm)]
pub fn address_form(props: &Props) -> Html {
    let home = use_state(String::new);
    let work = use_state(String::new);
    let second_work = use_state(String::new);
    let mpg = use_state(String::new);

    let onsubmit = {
        let (home, work, second_work, mpg) =
            (home.clone(), work.clone(), second_work.clone(), mpg.clone());
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(AddressSubmission::from_raw(&home, &work, &second_work, &mpg));
        })
    };

    html! {
        <form id="colForm" class="address-form" {onsubmit}>
            <fieldset>
                <legend>{ t("form.legend") }</legend>
                <label for="homeAddress">{ t("form.home") }</label>
                <input
                    id="homeAddress"
                    name="homeAddress"
                    type="text"
                    autocomplete="street-address"
                    required=true
                    value={(*home).clone()}
                    oninput={bind_input(&home)}
                />
                <label for="workAddress">{ t("form.work") }</label>
                <input
                    id="workAddress"
                    name="workAddress"
                    type="text"
                    required=true
                    value={(*work).clone()}
                    oninput={bind_input(&work)}
                />
            </fieldset>
            <Collapsible
                state={props.details}
                title={AttrValue::from(t("form.details"))}
                on_toggle={props.on_toggle_details.clone()}
            >
                <label for="secondWorkAddress">{ t("form.second_work") }</label>
                <input
                    id="secondWorkAddress"
                    name="secondWorkAddress"
                    type="text"
                    value={(*second_work).clone()}
                    oninput={bind_input(&second_work)}
                />
                <label for="mpg">{ t("form.mpg") }</label>
                <input
                    id="mpg"
                    name="mpg"
                    type="number"
                    min="0"
                    step="0.1"
                    inputmode="decimal"
                    value={(*mpg).clone()}
                    oninput={bind_input(&mpg)}
                />
            </Collapsible>
            <button type="submit" class="submit-btn">{ t("form.submit") }</button>
        </form>
    }
}
