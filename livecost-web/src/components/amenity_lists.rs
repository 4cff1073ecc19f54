use crate::i18n::t;
use livecost_core::{AmenityCategory, AmenityLists, AmenityRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub lists: Option<AmenityLists>,
}

fn amenity_item(record: &AmenityRecord) -> Html {
    html! {
        <li class="amenity-list-item">
            <div class="amenity-title">{ record.title() }</div>
            <div class="amenity-meta">{ record.meta_line() }</div>
        </li>
    }
}

#[function_component(AmenityListsView)]
pub fn amenity_lists(props: &Props) -> Html {
    let sections = AmenityCategory::ALL.iter().map(|category| {
        let records = props
            .lists
            .as_ref()
            .map(|lists| lists.rendered(*category))
            .unwrap_or_default();
        html! {
            <div id={category.container_id()} class="amenity-group">
                <h3>{ t(category.i18n_key()) }</h3>
                <ul class="amenity-list">
                    { for records.iter().map(amenity_item) }
                </ul>
            </div>
        }
    });
    html! {
        <section class="amenities" aria-labelledby="amenities-heading">
            <h2 id="amenities-heading">{ t("amenities.heading") }</h2>
            { for sections }
        </section>
    }
}
