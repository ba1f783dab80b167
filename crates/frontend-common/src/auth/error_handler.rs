//! Session expiry detection
//!
//! A [`SessionExpiryInterceptor`] sits on the HTTP client and raises the
//! shell's [`AuthErrorFlag`] whenever the backend answers 401. The flag only
//! wakes its waiter on a clean -> flagged transition, so a burst of 401s ends
//! in a single logout.

use jobtrack_http::{ClientError, ResponseInterceptor};
use std::cell::Cell;
use std::rc::Rc;
use tokio::sync::Notify;

/// One-shot "the session is gone" signal owned by the dashboard shell
#[derive(Debug, Default)]
pub struct AuthErrorFlag {
    flagged: Cell<bool>,
    notify: Notify,
}

impl AuthErrorFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag; returns true only for the call that flipped it
    pub fn raise(&self) -> bool {
        if self.flagged.replace(true) {
            return false;
        }
        self.notify.notify_one();
        true
    }

    pub fn is_raised(&self) -> bool {
        self.flagged.get()
    }

    /// Back to clean once the logout the flag triggered has run
    pub fn clear(&self) {
        self.flagged.set(false);
    }

    /// Resolves once the flag has been raised
    pub async fn raised(&self) {
        // A permit left over from an earlier raise/clear cycle wakes us
        // spuriously; re-check the flag.
        while !self.flagged.get() {
            self.notify.notified().await;
        }
    }
}

/// Raises an [`AuthErrorFlag`] on every 401 response
pub struct SessionExpiryInterceptor {
    flag: Rc<AuthErrorFlag>,
}

impl SessionExpiryInterceptor {
    pub fn new(flag: Rc<AuthErrorFlag>) -> Self {
        Self { flag }
    }
}

impl ResponseInterceptor for SessionExpiryInterceptor {
    fn on_error(&self, error: &ClientError) {
        if error.is_auth_expired() && self.flag.raise() {
            tracing::warn!(%error, "session rejected by backend, logging out");
        }
    }
}
