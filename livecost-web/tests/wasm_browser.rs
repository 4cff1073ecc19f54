#![cfg(target_arch = "wasm32")]

use livecost_core::{DISMISS_KEY, DismissalStore, is_dismissed};
use livecost_web::dom;
use livecost_web::storage::LocalDismissalStore;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn clear_flag() {
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(DISMISS_KEY);
    }
}

#[wasm_bindgen_test]
fn local_store_round_trips_flag() {
    clear_flag();
    let store = LocalDismissalStore;
    assert!(!is_dismissed(&store));
    store.write_flag(DISMISS_KEY, "1").expect("write flag");
    assert!(is_dismissed(&store));
    clear_flag();
}

#[wasm_bindgen_test]
fn stored_flag_keeps_disclaimer_hidden() {
    LocalDismissalStore
        .write_flag(DISMISS_KEY, "1")
        .expect("write flag");
    Renderer::<livecost_web::app::App>::with_root(ensure_app_root()).render();
    let modal = dom::document()
        .and_then(|doc| doc.get_element_by_id("disclaimerModal"))
        .expect("modal element");
    assert!(!modal.class_list().contains("open"));
    clear_flag();
}

#[wasm_bindgen_test]
fn focus_helper_targets_existing_element() {
    let root = ensure_app_root();
    let doc = dom::document().expect("document");
    let button = doc.create_element("button").expect("button");
    button.set_id("focusProbe");
    root.append_child(&button).expect("append");
    assert!(dom::focus_by_id("focusProbe"));
    let active = doc
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("active element");
    assert_eq!(active.id(), "focusProbe");
    assert!(!dom::focus_by_id("missingProbe"));
}
