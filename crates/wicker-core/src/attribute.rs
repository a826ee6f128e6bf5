//! Observable string attributes.
//!
//! Every component instance exposes an [`AttributeSet`]: a string-keyed,
//! string-valued map of externally visible state. Attributes are the only
//! top-down channel between components - a parent writes a descendant's
//! attribute, and the descendant (or anyone else) observes the write through
//! an explicit per-attribute subscription.
//!
//! Subscriptions are scoped: [`AttributeSet::watch`] returns an
//! [`AttributeWatch`] guard, and dropping the guard cancels the
//! subscription. Components hold their guards and drop them in `teardown`,
//! so no watcher outlives the component that registered it.
//!
//! # Idempotence
//!
//! [`AttributeSet::set`] notifies watchers only when the stored value
//! actually changes. Re-applying the current value is a no-op, which breaks
//! feedback loops between mirrored state and its watchers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use wicker_core::AttributeSet;
//!
//! let attrs = AttributeSet::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let seen_clone = seen.clone();
//! let _watch = attrs.watch("data-theme", move |change| {
//!     seen_clone.lock().push(change.value.clone());
//! });
//!
//! attrs.set("data-theme", "dark");
//! attrs.set("data-theme", "dark"); // Same value - nobody is notified
//!
//! assert_eq!(*seen.lock(), vec!["dark".to_string()]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::signal::{ScopedConnection, Signal};

/// Payload delivered to attribute watchers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeChange {
    /// The attribute name that changed.
    pub name: String,
    /// The newly applied value.
    pub value: String,
}

/// Scoped subscription to a single attribute's change channel.
///
/// Dropping the guard cancels the subscription.
pub type AttributeWatch = ScopedConnection<AttributeChange>;

/// An observable map of string attributes with one publish/subscribe
/// channel per attribute name.
///
/// `AttributeSet` is shared via `Arc` between the owning component, its
/// ancestors (for top-down writes), and any watchers, so a subscription can
/// never dangle.
#[derive(Default)]
pub struct AttributeSet {
    /// Current attribute values.
    values: RwLock<HashMap<String, String>>,
    /// Change channels, created lazily per watched name.
    channels: Mutex<HashMap<String, Arc<Signal<AttributeChange>>>>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<String> {
        self.values.read().get(name).cloned()
    }

    /// Get an attribute value, or `default` when absent.
    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    /// Parse a numeric attribute, falling back when absent or unparseable.
    pub fn get_u32_or(&self, name: &str, fallback: u32) -> u32 {
        self.values
            .read()
            .get(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(fallback)
    }

    /// Read a boolean-as-string attribute. Absent or non-`"true"` values
    /// read as `false`.
    pub fn is_active(&self, name: &str) -> bool {
        self.values.read().get(name).is_some_and(|value| value == "true")
    }

    /// Check whether an attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.read().contains_key(name)
    }

    /// The names of all present attributes, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.values.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Set an attribute value, returning `true` if the stored value changed.
    ///
    /// Watchers of this attribute are notified synchronously, before this
    /// method returns, and only on a real change.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let value = value.into();

        {
            let mut values = self.values.write();
            if values.get(&name).is_some_and(|current| *current == value) {
                return false;
            }
            values.insert(name.clone(), value.clone());
        }

        tracing::trace!(
            target: "wicker_core::attribute",
            name = %name,
            value = %value,
            "attribute changed"
        );

        let channel = self.channels.lock().get(&name).cloned();
        if let Some(channel) = channel {
            channel.emit(AttributeChange { name, value });
        }
        true
    }

    /// Set an attribute value without notifying watchers.
    pub fn set_silent(&self, name: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(name.into(), value.into());
    }

    /// Subscribe to changes of a single attribute.
    ///
    /// The returned guard cancels the subscription when dropped; tie it to
    /// the subscriber's lifetime.
    pub fn watch<F>(&self, name: impl Into<String>, slot: F) -> AttributeWatch
    where
        F: Fn(&AttributeChange) + Send + Sync + 'static,
    {
        let channel = self
            .channels
            .lock()
            .entry(name.into())
            .or_insert_with(|| Arc::new(Signal::new()))
            .clone();
        ScopedConnection::new(channel, slot)
    }

    /// Number of live watchers on an attribute.
    pub fn watcher_count(&self, name: &str) -> usize {
        self.channels
            .lock()
            .get(name)
            .map(|channel| channel.connection_count())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeSet")
            .field("values", &*self.values.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(AttributeSet: Send, Sync);
