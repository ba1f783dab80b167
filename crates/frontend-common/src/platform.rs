//! Capabilities the shell needs from its host
//!
//! The browser build implements these over the router, the toast surface,
//! `localStorage` and `document.body`; tests use the in-memory fakes in
//! [`crate::tests`].

use thiserror::Error;

/// Issues client-side navigations
pub trait Navigator {
    fn navigate(&self, to: &str);
}

/// Transient user notifications (toasts)
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Durable key-value storage that survives reloads
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Class list of the document body
pub trait BodyClassList {
    fn toggle_class(&self, class: &str, force: bool);
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("write rejected: {0}")]
    Rejected(String),
}
