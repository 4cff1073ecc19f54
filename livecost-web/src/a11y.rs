// Accessibility helpers
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Move focus to `id` once the current render has been committed.
pub fn focus_deferred(id: &'static str) {
    #[cfg(target_arch = "wasm32")]
    if let Err(err) = crate::dom::defer(move || {
        if !crate::dom::focus_by_id(id) {
            log::debug!("focus target `{id}` not in the document");
        }
    }) {
        log::debug!(
            "could not schedule focus: {}",
            crate::dom::js_error_message(&err)
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(target_arch = "wasm32")]
struct DocumentKeydown {
    document: web_sys::Document,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl DocumentKeydown {
    fn attach(on_key: Callback<KeyboardEvent>) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = crate::dom::document()?;
        let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            on_key.emit(event);
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DocumentKeydown {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Forward every document-level keydown to `on_key` while mounted.
#[hook]
pub fn use_document_keydown(on_key: Callback<KeyboardEvent>) {
    use_effect_with(on_key, move |on_key| {
        #[cfg(target_arch = "wasm32")]
        let listener = DocumentKeydown::attach(on_key.clone());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = on_key;
        move || {
            #[cfg(target_arch = "wasm32")]
            drop(listener);
        }
    });
}
