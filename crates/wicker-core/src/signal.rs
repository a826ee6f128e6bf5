//! Signal/slot system for wicker.
//!
//! This module provides the type-safe notification channel that components
//! use to communicate. Signals are emitted when something happened, and
//! connected slots (callbacks) are invoked in response.
//!
//! Delivery is simple: wicker components run on a single cooperative
//! thread, so every emission is synchronous and runs the connected slots to
//! completion, in connection order, before `emit` returns. There is no
//! queued or cross-thread delivery mode.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ScopedConnection`] - RAII connection that disconnects when dropped
//!
//! # Related Modules
//!
//! - [`crate::property`] - Reactive values that typically emit signals on change
//! - [`crate::attribute`] - Per-attribute signal channels built on this type
//!
//! # Example
//!
//! ```
//! use wicker_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// Signals are the core of the observer pattern in wicker. When a signal is
/// emitted, all connected slots are invoked with a reference to the provided
/// arguments, synchronously, in the order they were connected.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple for multiple arguments.
///
/// # Re-entrancy
///
/// Slots are cloned out of the internal lock before being invoked, so a slot
/// may freely emit other signals (including signals that share subscribers).
/// A slot must not emit the signal it is currently being invoked from; the
/// change-detection discipline in [`crate::property`] and
/// [`crate::attribute`] exists precisely to break such cycles.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ScopedConnection`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use wicker_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. This is useful during
    /// initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Otherwise every
    /// connected slot is invoked with `&args` before this method returns.
    /// Disconnections performed by a slot affect subsequent emissions, not
    /// the one in flight.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "wicker_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Clone the slots out of the lock so slots may connect, disconnect,
        // or emit other signals without deadlocking.
        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.values().map(|conn| conn.slot.clone()).collect()
        };

        tracing::trace!(
            target: "wicker_core::signal",
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection that automatically disconnects when dropped.
///
/// This is the RAII counterpart to [`Signal::connect`]: the subscription is
/// released when the owning value is destroyed, which ties watcher lifetime
/// to component lifetime instead of relying on manual bookkeeping.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use wicker_core::{ScopedConnection, Signal};
///
/// let signal = Arc::new(Signal::<i32>::new());
/// let counter = Arc::new(AtomicI32::new(0));
/// {
///     let counter = counter.clone();
///     let _conn = ScopedConnection::new(signal.clone(), move |&n| {
///         counter.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42); // counter = 42
/// }
/// signal.emit(43); // Nothing happens - connection was dropped
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
pub struct ScopedConnection<Args> {
    signal: Arc<Signal<Args>>,
    id: ConnectionId,
}

impl<Args> ScopedConnection<Args> {
    /// Connect a slot to `signal`, returning a guard that disconnects it on drop.
    pub fn new<F>(signal: Arc<Signal<Args>>, slot: F) -> Self
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = signal.connect(slot);
        Self { signal, id }
    }

    /// The underlying connection ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ScopedConnection<Args> {
    fn drop(&mut self) {
        let _ = self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(ScopedConnection<String>: Send, Sync);
