//! The component capability trait.
//!
//! Every UI element in wicker implements [`Component`]: a small capability
//! set - render, hydrate, teardown - plus event consumption (`handle`) and
//! interaction translation (`activate`). Common node state lives in
//! [`ComponentBase`] by composition; no element needs more than these hooks.
//!
//! # Lifecycle
//!
//! A component instance is created by its parent (or the application),
//! mounted into a [`ComponentTree`](super::ComponentTree), and from then on
//! driven by the tree:
//!
//! 1. **render** - called exactly once at mount; returns the owned children,
//!    which the tree mounts beneath the component.
//! 2. **hydrate** - called exactly once, after the component's subtree is
//!    mounted; attaches watchers and seeds presentation from attributes and
//!    injected contexts.
//! 3. **teardown** - called exactly once, when the component is unmounted;
//!    must release every subscription registered on objects other than the
//!    component itself (in practice: drop the scoped watch guards).
//!
//! # The three roles
//!
//! What a component is follows from the hooks it chooses to implement:
//!
//! - a **leaf control** overrides [`activate`](Component::activate),
//!   translating one interaction into one bubbling [`Event`];
//! - a **composite container** overrides [`render`](Component::render) and
//!   [`handle`](Component::handle), owning children and consuming their
//!   events;
//! - a **state mirror** overrides [`hydrate`](Component::hydrate) and
//!   [`teardown`](Component::teardown), re-rendering presentation from
//!   watched state without emitting events.
//!
//! A single type may play several roles (the theme-toggle glyphs are leaf
//! controls and state mirrors at once).
//!
//! # Example
//!
//! ```
//! use wicker::component::{Component, ComponentBase, ControlEvent, Event};
//!
//! struct Bell {
//!     base: ComponentBase,
//! }
//!
//! impl Component for Bell {
//!     fn component_base(&self) -> &ComponentBase {
//!         &self.base
//!     }
//!
//!     fn component_base_mut(&mut self) -> &mut ComponentBase {
//!         &mut self.base
//!     }
//!
//!     fn activate(&mut self) -> Option<Event> {
//!         Some(Event::new(ControlEvent::MenuToggle))
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//!
//!     fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use wicker_core::AttributeSet;

use super::base::ComponentBase;
use super::events::Event;
use super::tree::{NodeId, TreeScope};

/// The core trait for all components.
pub trait Component: Any + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the component's base.
    fn component_base(&self) -> &ComponentBase;

    /// Get a mutable reference to the component's base.
    fn component_base_mut(&mut self) -> &mut ComponentBase;

    /// Get this component as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get this component as mutable `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    // =========================================================================
    // Lifecycle Hooks
    // =========================================================================

    /// Build the component's owned children.
    ///
    /// Called exactly once when the component is mounted, before the
    /// component itself is hydrated. The default builds no children.
    fn render(&mut self) -> Vec<Box<dyn Component>> {
        Vec::new()
    }

    /// Attach watchers and seed presentation.
    ///
    /// Called exactly once, after the component's subtree is mounted.
    /// Hydration must be passive: reading attributes and registering
    /// subscriptions, never emitting events.
    fn hydrate(&mut self) {}

    /// Release external subscriptions.
    ///
    /// Called exactly once when the component is unmounted. Drop every
    /// scoped watch guard here; a subscription that survives its component
    /// is a leak.
    fn teardown(&mut self) {}

    // =========================================================================
    // Events
    // =========================================================================

    /// Consume a bubbling event.
    ///
    /// Called for events dispatched to this component or bubbling up from a
    /// descendant. Return `true` (or accept the event) to consume it and
    /// stop propagation; the default consumes nothing, which is also how
    /// unknown kinds are silently ignored.
    ///
    /// `scope` is the tree-mutation surface: mounting and unmounting
    /// children, writing descendant attributes, child lookup. State applied
    /// through it - including any watcher notifications those attribute
    /// writes trigger - is fully settled before the dispatch returns.
    fn handle(&mut self, event: &mut Event, scope: &mut TreeScope<'_>) -> bool {
        let _ = (event, scope);
        false
    }

    /// Translate one user interaction into one event.
    ///
    /// Leaf controls override this; the payload is built entirely from
    /// local/static data. Returning `None` means the interaction produces
    /// no event (e.g. submitting an empty todo draft). Re-entrant safe by
    /// construction: each call mints an independent event.
    fn activate(&mut self) -> Option<Event> {
        None
    }

    // =========================================================================
    // Base Delegation
    // =========================================================================

    /// The node id assigned at mount.
    fn node_id(&self) -> NodeId {
        self.component_base().node_id()
    }

    /// The component's name.
    fn name(&self) -> &str {
        self.component_base().name()
    }

    /// The component's shared attribute set.
    fn attributes(&self) -> Arc<AttributeSet> {
        self.component_base().attributes().clone()
    }
}
