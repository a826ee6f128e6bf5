//! Reactive primitives for wicker.
//!
//! This crate provides the foundational pieces of the wicker control kit:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification channels
//! - **Property Cells**: Values with change detection for idempotent updates
//! - **Observable Attributes**: String attribute maps with explicit
//!   per-attribute publish/subscribe channels
//!
//! Everything here assumes wicker's execution model: a single cooperative
//! thread where emission, notification, and state mutation run to completion
//! without interleaving.
//!
//! # Signal/Slot Example
//!
//! ```
//! use wicker_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Attribute Example
//!
//! ```
//! use wicker_core::AttributeSet;
//!
//! let attrs = AttributeSet::new();
//! let _watch = attrs.watch("data-active", |change| {
//!     println!("{} is now {}", change.name, change.value);
//! });
//!
//! attrs.set("data-active", "true");
//! ```

pub mod attribute;
pub mod property;
pub mod signal;

pub use attribute::{AttributeChange, AttributeSet, AttributeWatch};
pub use property::Property;
pub use signal::{ConnectionId, ScopedConnection, Signal};
