//! `localStorage`-backed dismissal flag.
use livecost_core::{DismissalStore, StorageError};

/// Reads and writes the disclaimer flag in the browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDismissalStore;

#[cfg(target_arch = "wasm32")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    crate::dom::local_storage()
        .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::Unavailable(
        "localStorage requires a browser".to_string(),
    ))
}

impl DismissalStore for LocalDismissalStore {
    fn read_flag(&self, key: &str) -> Result<Option<String>, StorageError> {
        browser_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(crate::dom::js_error_message(&err)))
    }

    fn write_flag(&self, key: &str, value: &str) -> Result<(), StorageError> {
        browser_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(crate::dom::js_error_message(&err)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use livecost_core::{DISMISS_KEY, Disclaimer, ModalState};

    #[test]
    fn host_builds_report_storage_unavailable() {
        let store = LocalDismissalStore;
        assert!(matches!(
            store.read_flag(DISMISS_KEY),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.write_flag(DISMISS_KEY, "1").is_err());
    }

    #[test]
    fn unavailable_storage_still_shows_disclaimer() {
        assert_eq!(
            Disclaimer::on_load(&LocalDismissalStore).state(),
            ModalState::Shown
        );
    }
}
