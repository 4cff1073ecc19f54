#![forbid(unsafe_code)]
//! Livecost Web
//!
//! Yew front end for the cost-of-living demo page: the address form, expense
//! cards, Chart.js pie charts, amenity lists, and the disclaimer dialog.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod chart;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
