//! Response interceptors
//!
//! Every request executed by [`JobtrackClient`](super::JobtrackClient) reports
//! its outcome to the registered interceptors before the result is handed back
//! to the caller. Interceptors observe; they cannot alter or swallow the
//! result.
//!
//! Registration is deduplicated by identity: registering the same `Rc` twice
//! yields two handles onto one entry, and the entry is removed once the last
//! handle is dropped or ejected.

use super::ClientError;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Observer of completed requests
pub trait ResponseInterceptor {
    /// Called for every response with a success status
    fn on_success(&self, _status: StatusCode) {}

    /// Called for every failed request, before the error reaches the caller
    fn on_error(&self, error: &ClientError);
}

/// Identifier of a registered interceptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

struct Entry {
    id: InterceptorId,
    interceptor: Rc<dyn ResponseInterceptor>,
    handles: usize,
}

#[derive(Default)]
struct ChainInner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Ordered set of interceptors shared by all clones of a client
#[derive(Clone, Default)]
pub struct InterceptorChain {
    inner: Rc<RefCell<ChainInner>>,
}

impl InterceptorChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interceptor, or take another handle on it if it is
    /// already registered
    pub fn register(&self, interceptor: Rc<dyn ResponseInterceptor>) -> InterceptorHandle {
        let mut inner = self.inner.borrow_mut();

        let existing = inner
            .entries
            .iter_mut()
            .find(|entry| std::ptr::addr_eq(Rc::as_ptr(&entry.interceptor), Rc::as_ptr(&interceptor)));

        let id = if let Some(entry) = existing {
            entry.handles += 1;
            tracing::debug!(id = entry.id.0, "interceptor already registered");
            entry.id
        } else {
            let id = InterceptorId(inner.next_id);
            inner.next_id += 1;
            inner.entries.push(Entry {
                id,
                interceptor,
                handles: 1,
            });
            tracing::debug!(id = id.0, "interceptor registered");
            id
        };

        InterceptorHandle {
            chain: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of distinct registered interceptors
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn notify_success(&self, status: StatusCode) {
        for interceptor in self.snapshot() {
            interceptor.on_success(status);
        }
    }

    pub(crate) fn notify_error(&self, error: &ClientError) {
        for interceptor in self.snapshot() {
            interceptor.on_error(error);
        }
    }

    // Interceptors may register or eject while being notified.
    fn snapshot(&self) -> Vec<Rc<dyn ResponseInterceptor>> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|entry| entry.interceptor.clone())
            .collect()
    }
}

fn release(chain: &RefCell<ChainInner>, id: InterceptorId) {
    let mut inner = chain.borrow_mut();
    if let Some(pos) = inner.entries.iter().position(|entry| entry.id == id) {
        inner.entries[pos].handles -= 1;
        if inner.entries[pos].handles == 0 {
            inner.entries.remove(pos);
            tracing::debug!(id = id.0, "interceptor ejected");
        }
    }
}

/// Keeps an interceptor registered for as long as it lives
#[must_use = "dropping the handle ejects the interceptor"]
pub struct InterceptorHandle {
    chain: Weak<RefCell<ChainInner>>,
    id: InterceptorId,
}

impl InterceptorHandle {
    pub fn id(&self) -> InterceptorId {
        self.id
    }

    /// Eject explicitly; equivalent to dropping the handle
    pub fn eject(self) {}
}

impl Drop for InterceptorHandle {
    fn drop(&mut self) {
        if let Some(chain) = self.chain.upgrade() {
            release(&chain, self.id);
        }
    }
}
