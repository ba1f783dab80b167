//! Query cache for server state
//!
//! Results are stored per [`QueryKey`]. Concurrent fetches of one key share a
//! single request, entries older than the stale time are refetched, and
//! [`QueryClient::invalidate_queries`] drops entries so the next read goes to
//! the network. A fetch that was still in flight when its key was invalidated
//! never lands in the cache.

use chrono::{DateTime, TimeDelta, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use jobtrack_http::ClientError;
use std::any::Any;
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Identifies one cached query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Cow<'static, str>);

impl QueryKey {
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    /// Key of the signed-in user's session
    pub const fn current_user() -> Self {
        Self(Cow::Borrowed("user"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type Value = Rc<dyn Any>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<Value, ClientError>>>;

enum Slot {
    Fetching { fetch_id: u64, fetch: SharedFetch },
    Ready { value: Value, fetched_at: DateTime<Utc> },
}

#[derive(Default)]
struct Inner {
    next_fetch_id: u64,
    slots: HashMap<QueryKey, Slot>,
}

/// Shared handle onto the query cache
#[derive(Clone)]
pub struct QueryClient {
    inner: Rc<RefCell<Inner>>,
    stale_time: Option<TimeDelta>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("QueryClient")
            .field("keys", &inner.slots.keys().collect::<Vec<_>>())
            .field("stale_time", &self.stale_time)
            .finish()
    }
}

impl QueryClient {
    /// Create a cache; `stale_time` of `None` keeps entries until invalidated
    pub fn new(stale_time: Option<TimeDelta>) -> Self {
        Self {
            inner: Rc::default(),
            stale_time,
        }
    }

    /// Return the cached value for `key`, fetching it if missing or stale
    ///
    /// Callers arriving while a fetch for `key` is in flight wait on that
    /// fetch instead of starting their own.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ClientError>
    where
        T: Clone + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>> + 'static,
    {
        let (fetch_id, fetch) = {
            let mut inner = self.inner.borrow_mut();
            match inner.slots.get(&key) {
                Some(Slot::Ready { value, fetched_at }) if self.is_fresh(*fetched_at) => {
                    if let Some(value) = value.downcast_ref::<T>() {
                        tracing::trace!(%key, "query cache hit");
                        return Ok(value.clone());
                    }
                    inner.start(key.clone(), fetcher)
                }
                Some(Slot::Fetching { fetch_id, fetch }) => {
                    tracing::trace!(%key, "joining in-flight query");
                    (*fetch_id, fetch.clone())
                }
                _ => inner.start(key.clone(), fetcher),
            }
        };

        let result = fetch.await;
        self.settle(&key, fetch_id, &result);

        let value = result?;
        value.downcast_ref::<T>().cloned().ok_or_else(|| {
            ClientError::Configuration(format!("query `{key}` is cached with another type"))
        })
    }

    /// Cached value for `key`, fresh or not, without fetching
    pub fn get_query_data<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        match self.inner.borrow().slots.get(key) {
            Some(Slot::Ready { value, .. }) => value.downcast_ref::<T>().cloned(),
            _ => None,
        }
    }

    /// Seed or overwrite the cached value for `key`
    pub fn set_query_data<T: 'static>(&self, key: QueryKey, value: T) {
        self.inner.borrow_mut().slots.insert(
            key,
            Slot::Ready {
                value: Rc::new(value),
                fetched_at: Utc::now(),
            },
        );
    }

    /// Drop the entry for `key`, or every entry when `key` is `None`
    pub fn invalidate_queries(&self, key: Option<&QueryKey>) {
        let mut inner = self.inner.borrow_mut();
        match key {
            Some(key) => {
                inner.slots.remove(key);
                tracing::debug!(%key, "query invalidated");
            }
            None => {
                inner.slots.clear();
                tracing::debug!("all queries invalidated");
            }
        }
    }

    pub fn invalidate_all(&self) {
        self.invalidate_queries(None);
    }

    /// Whether a fetch for `key` is currently in flight
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        matches!(self.inner.borrow().slots.get(key), Some(Slot::Fetching { .. }))
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        self.stale_time
            .is_none_or(|stale_time| Utc::now() - fetched_at < stale_time)
    }

    // Every waiter settles; only the first one that still finds its own fetch
    // in the slot writes the result.
    fn settle(&self, key: &QueryKey, fetch_id: u64, result: &Result<Value, ClientError>) {
        let mut inner = self.inner.borrow_mut();
        let current = matches!(
            inner.slots.get(key),
            Some(Slot::Fetching { fetch_id: id, .. }) if *id == fetch_id
        );
        if !current {
            return;
        }

        match result {
            Ok(value) => {
                inner.slots.insert(
                    key.clone(),
                    Slot::Ready {
                        value: value.clone(),
                        fetched_at: Utc::now(),
                    },
                );
            }
            Err(_) => {
                inner.slots.remove(key);
            }
        }
    }
}

impl Inner {
    fn start<T, F, Fut>(&mut self, key: QueryKey, fetcher: F) -> (u64, SharedFetch)
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>> + 'static,
    {
        let fetch_id = self.next_fetch_id;
        self.next_fetch_id += 1;

        tracing::debug!(%key, fetch_id, "fetching query");
        let fetch = fetcher()
            .map(|result| result.map(|value| Rc::new(value) as Value))
            .boxed_local()
            .shared();

        self.slots.insert(
            key,
            Slot::Fetching {
                fetch_id,
                fetch: fetch.clone(),
            },
        );
        (fetch_id, fetch)
    }
}
