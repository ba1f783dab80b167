//! In-memory platform fakes
//!
//! Stand-ins for the router, toasts, `localStorage` and the body class list,
//! recording everything the shell does to them.

mod login;
mod session_gate;

use crate::platform::{BodyClassList, KeyValueStore, Navigator, Notifier, StorageError};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

/// Records every navigation
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: &str) {
        self.history.borrow_mut().push(to.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

/// Records every toast
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::Error(message.to_string()));
    }
}

/// Key-value store that remembers every write
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    /// A store whose writes are all rejected
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.set(true);
        store
    }

    /// Seed a value without recording a write
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.insert(key, value);
        Ok(())
    }
}

/// Body class list kept in a set
#[derive(Debug, Default)]
pub struct MemoryBodyClasses {
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryBodyClasses {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl BodyClassList for MemoryBodyClasses {
    fn toggle_class(&self, class: &str, force: bool) {
        let mut classes = self.classes.borrow_mut();
        if force {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

/// A shell wired to a mock backend and recording fakes
pub(crate) struct Harness {
    pub server: wiremock::MockServer,
    pub client: jobtrack_http::JobtrackClient,
    pub queries: crate::cache::QueryClient,
    pub navigator: std::rc::Rc<RecordingNavigator>,
    pub notifier: std::rc::Rc<RecordingNotifier>,
    pub store: std::rc::Rc<MemoryStore>,
    pub body: std::rc::Rc<MemoryBodyClasses>,
}

impl Harness {
    pub async fn start() -> Self {
        let server = wiremock::MockServer::start().await;
        let client = jobtrack_http::JobtrackClient::new(server.uri()).unwrap();
        Self {
            server,
            client,
            queries: crate::cache::QueryClient::default(),
            navigator: std::rc::Rc::default(),
            notifier: std::rc::Rc::default(),
            store: std::rc::Rc::default(),
            body: std::rc::Rc::default(),
        }
    }

    pub fn services(&self) -> crate::dashboard::ShellServices {
        crate::dashboard::ShellServices {
            client: self.client.clone(),
            queries: self.queries.clone(),
            navigator: self.navigator.clone(),
            notifier: self.notifier.clone(),
            theme: crate::theme::ThemeSwitch::new(self.store.clone(), self.body.clone()),
        }
    }
}
