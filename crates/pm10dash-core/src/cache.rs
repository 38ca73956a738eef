//! Session-scoped memoization for argument-less loaders.
//!
//! One `SessionCache` holds the result of one loader for as long as its owner
//! lives. Only successful loads are stored, so a failed fetch is retried on the
//! next call rather than replayed.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;

pub struct SessionCache<T> {
    name: &'static str,
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> SessionCache<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, or run `load` once and keep its result.
    ///
    /// The slot stays locked while `load` runs, so concurrent callers on a
    /// cold cache wait for the first load instead of starting their own.
    pub async fn get_or_try_load<F, Fut>(&self, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(value) = slot.as_ref() {
            tracing::debug!(cache = self.name, "Session cache hit");
            return Ok(Arc::clone(value));
        }

        tracing::debug!(cache = self.name, "Session cache miss");
        let value = Arc::new(load().await?);
        *slot = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Drop the cached value; the next call loads again
    pub async fn clear(&self) {
        if self.slot.lock().await.take().is_some() {
            tracing::info!(cache = self.name, "Session cache cleared");
        }
    }

    pub async fn is_populated(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
