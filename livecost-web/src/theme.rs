//! Color-scheme detection for chart legends.
use livecost_core::{ColorScheme, legend_color};
use yew::prelude::*;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    crate::dom::window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

/// Whether the browser currently reports a dark color scheme.
#[must_use]
pub fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        dark_scheme_query().is_some_and(|mql| mql.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// The page's computed body text color, if the browser exposes one.
#[must_use]
pub fn computed_body_color() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let win = crate::dom::window()?;
        let body = win.document()?.body()?;
        let style = win.get_computed_style(&body).ok()??;
        style.get_property_value("color").ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Legend text color for the current scheme.
#[must_use]
pub fn current_legend_color() -> String {
    legend_color(
        computed_body_color().as_deref(),
        ColorScheme::from_prefers_dark(prefers_dark()),
    )
}

/// Keeps a `change` listener attached to the dark-scheme media query until dropped.
#[cfg(target_arch = "wasm32")]
pub struct SchemeListener {
    query: web_sys::MediaQueryList,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl SchemeListener {
    #[must_use]
    pub fn attach(on_change: Callback<bool>) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let query = dark_scheme_query()?;
        let callback = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change.emit(event.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if let Err(err) =
            query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            log::warn!(
                "color scheme listener not attached: {}",
                crate::dom::js_error_message(&err)
            );
            return None;
        }
        Some(Self { query, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for SchemeListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// Tracks `prefers-color-scheme: dark`, re-rendering when it flips.
#[hook]
pub fn use_prefers_dark() -> bool {
    let dark = use_state(prefers_dark);
    {
        #[cfg(target_arch = "wasm32")]
        let dark = dark.clone();
        use_effect_with((), move |_| {
            #[cfg(target_arch = "wasm32")]
            let listener = SchemeListener::attach(Callback::from(move |matches| dark.set(matches)));
            move || {
                #[cfg(target_arch = "wasm32")]
                drop(listener);
            }
        });
    }
    *dark
}
