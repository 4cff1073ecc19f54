//! Disclaimer modal state and its "don't show again" flag.
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage key of the dismissal flag.
pub const DISMISS_KEY: &str = "col_demo_disclaimer_ack";
/// Stored value meaning "dismissed for good".
pub const DISMISSED_VALUE: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Key-value storage for the dismissal flag.
pub trait DismissalStore {
    /// # Errors
    ///
    /// Returns an error when storage cannot be reached or read.
    fn read_flag(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error when storage cannot be reached or written.
    fn write_flag(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; `failing()` builds one that rejects every call.
#[derive(Debug, Default)]
pub struct MemoryDismissalStore {
    values: RefCell<BTreeMap<String, String>>,
    failing: bool,
}

impl MemoryDismissalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            values: RefCell::default(),
            failing: true,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl DismissalStore for MemoryDismissalStore {
    fn read_flag(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable("memory store disabled".into()));
        }
        Ok(self.get(key))
    }

    fn write_flag(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Write("memory store disabled".into()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: DismissalStore + ?Sized> DismissalStore for &S {
    fn read_flag(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_flag(key)
    }

    fn write_flag(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_flag(key, value)
    }
}

/// Whether the flag was stored earlier. Failures read as "not dismissed".
pub fn is_dismissed<S: DismissalStore + ?Sized>(store: &S) -> bool {
    match store.read_flag(DISMISS_KEY) {
        Ok(value) => value.as_deref() == Some(DISMISSED_VALUE),
        Err(err) => {
            log::warn!("disclaimer flag unreadable, showing modal: {err}");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclaimer {
    state: ModalState,
}

impl Disclaimer {
    /// Initial state for a page load.
    pub fn on_load<S: DismissalStore + ?Sized>(store: &S) -> Self {
        let state = if is_dismissed(store) {
            ModalState::Hidden
        } else {
            ModalState::Shown
        };
        Self { state }
    }

    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.state == ModalState::Shown
    }

    /// Accept button. Persists the flag when `dont_show_again` is checked;
    /// a failed write still closes the modal.
    pub fn accept<S: DismissalStore + ?Sized>(
        &mut self,
        dont_show_again: bool,
        store: &S,
    ) -> ModalState {
        if !self.is_shown() {
            return self.state;
        }
        if dont_show_again && let Err(err) = store.write_flag(DISMISS_KEY, DISMISSED_VALUE) {
            log::warn!("could not persist disclaimer dismissal: {err}");
        }
        self.close()
    }

    /// Close button.
    pub fn close(&mut self) -> ModalState {
        self.state = ModalState::Hidden;
        self.state
    }

    /// Returns `true` when the key closed the modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_shown() {
            self.close();
            return true;
        }
        false
    }
}
