//! Reactive property cells.
//!
//! A [`Property<T>`] wraps a value and detects changes. When `set()` is
//! called, it compares the new value with the current one and reports
//! whether the value actually changed; the caller emits the associated
//! notification signal only in that case. This change-detection discipline
//! is what keeps attribute- and theme-driven re-renders idempotent: writing
//! the same value twice notifies nobody.
//!
//! # Example
//!
//! ```
//! use wicker_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// `Property<T>` uses interior mutability, so state can be updated through a
/// shared reference - which is how components mutate their own state from
/// within watcher closures.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    ///
    /// Useful during initialization or batch updates where notifications
    /// are deferred.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// If the new value equals the current one, the value is not updated and
    /// `false` is returned. The caller should emit the associated
    /// notification signal only when this returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            let old = std::mem::replace(&mut *current, value);
            Some(old)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_basic() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);
    }

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        // Same value - no change
        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        // Different value - changed
        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_set_silent() {
        let prop = Property::new(100);
        prop.set_silent(200);
        assert_eq!(prop.get(), 200);
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new("hello".to_string());

        // Same value - no change, returns None
        let old = prop.replace("hello".to_string());
        assert!(old.is_none());

        // Different value - returns old value
        let old = prop.replace("world".to_string());
        assert_eq!(old, Some("hello".to_string()));
        assert_eq!(prop.get(), "world");
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec![1, 2, 3]);

        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<i32> = Property::default();
        assert_eq!(prop.get(), 0);

        let prop: Property<String> = Property::default();
        assert_eq!(prop.get(), "");
    }

    #[test]
    fn test_property_shared() {
        let prop = Arc::new(Property::new(0));
        let prop_clone = prop.clone();

        prop_clone.set(7);
        assert_eq!(prop.get(), 7);
    }
}
