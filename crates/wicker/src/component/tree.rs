//! The component tree: ownership, lifecycle, and event dispatch.
//!
//! A [`ComponentTree`] owns every mounted component in an arena and tracks
//! the parent/child relationships that events bubble along. It drives the
//! lifecycle - render on mount, hydrate once the subtree exists, teardown on
//! unmount (children first) - and implements the dispatch loop:
//!
//! 1. The event is delivered to the target component's `handle`.
//! 2. If the target neither returns `true` nor accepts the event, the event
//!    is delivered to the parent, and so on up the tree.
//! 3. An event nobody consumes falls off the root and is silently ignored.
//!
//! Dispatch is synchronous and run-to-completion: two `handle` invocations
//! never interleave, and attribute writes a handler performs (plus the
//! watcher notifications they trigger) settle before `dispatch` returns.

use std::fmt;
use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};
use wicker_core::AttributeSet;

use super::events::Event;
use super::traits::Component;

new_key_type! {
    /// A unique identifier for a node in a [`ComponentTree`].
    ///
    /// Ids are stable handles; they become invalid when the node is
    /// unmounted.
    pub struct NodeId;
}

/// Errors that can occur during tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The node id is invalid or has been unmounted.
    InvalidNodeId,
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNodeId => write!(f, "Invalid or unmounted node ID"),
        }
    }
}

impl std::error::Error for ComponentError {}

/// Result type for tree operations.
pub type ComponentResult<T> = std::result::Result<T, ComponentError>;

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was consumed by a handler.
    Accepted,
    /// The event fell off the root unconsumed (or the interaction produced
    /// no event).
    Ignored,
    /// The target node was not found.
    NodeNotFound,
}

impl DispatchResult {
    /// Check if the event was consumed.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Per-node bookkeeping.
///
/// The component box is taken out of its slot for the duration of its
/// `handle` call; name and attributes are cached here so lookups keep
/// working meanwhile.
struct Slot {
    component: Option<Box<dyn Component>>,
    name: String,
    attributes: Arc<AttributeSet>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The arena of mounted components.
#[derive(Default)]
pub struct ComponentTree {
    slots: SlotMap<NodeId, Slot>,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Mount a component, running its full lifecycle.
    ///
    /// The component is stamped with its node id, `render`ed, its children
    /// mounted beneath it (each running this same lifecycle), and finally
    /// `hydrate`d. Pass `None` to mount a root.
    pub fn mount(
        &mut self,
        parent: Option<NodeId>,
        mut component: Box<dyn Component>,
    ) -> ComponentResult<NodeId> {
        if let Some(parent_id) = parent {
            if !self.slots.contains_key(parent_id) {
                return Err(ComponentError::InvalidNodeId);
            }
        }

        let name = component.name().to_string();
        let attributes = component.attributes();
        let id = self.slots.insert(Slot {
            component: None,
            name,
            attributes,
            parent,
            children: Vec::new(),
        });
        if let Some(parent_id) = parent {
            self.slots[parent_id].children.push(id);
        }

        component.component_base_mut().set_node_id(id);
        tracing::trace!(
            target: "wicker::component",
            id = ?id,
            name = %self.slots[id].name,
            "mounting component"
        );

        let children = component.render();
        self.slots[id].component = Some(component);
        for child in children {
            self.mount(Some(id), child)?;
        }

        if let Some(component) = self.slots[id].component.as_mut() {
            component.hydrate();
        }
        Ok(id)
    }

    /// Unmount a node and its whole subtree.
    ///
    /// Children are torn down before their parents, and every component's
    /// `teardown` runs exactly once.
    pub fn unmount(&mut self, id: NodeId) -> ComponentResult<()> {
        if !self.slots.contains_key(id) {
            return Err(ComponentError::InvalidNodeId);
        }

        if let Some(parent_id) = self.slots[id].parent {
            if let Some(parent_slot) = self.slots.get_mut(parent_id) {
                parent_slot.children.retain(|&child| child != id);
            }
        }

        self.unmount_subtree(id);
        Ok(())
    }

    fn unmount_subtree(&mut self, id: NodeId) {
        let children = self
            .slots
            .get(id)
            .map(|slot| slot.children.clone())
            .unwrap_or_default();
        for child in children {
            self.unmount_subtree(child);
        }

        if let Some(slot) = self.slots.remove(id) {
            tracing::trace!(
                target: "wicker::component",
                id = ?id,
                name = %slot.name,
                "unmounting component"
            );
            if let Some(mut component) = slot.component {
                component.teardown();
            }
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Check if a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of mounted nodes.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Ids of all root nodes.
    pub fn roots(&self) -> Vec<NodeId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// The parent of a node.
    pub fn parent(&self, id: NodeId) -> ComponentResult<Option<NodeId>> {
        self.slots
            .get(id)
            .map(|slot| slot.parent)
            .ok_or(ComponentError::InvalidNodeId)
    }

    /// The children of a node, in mount order.
    pub fn children(&self, id: NodeId) -> ComponentResult<Vec<NodeId>> {
        self.slots
            .get(id)
            .map(|slot| slot.children.clone())
            .ok_or(ComponentError::InvalidNodeId)
    }

    /// The name a node was mounted with.
    pub fn name(&self, id: NodeId) -> ComponentResult<String> {
        self.slots
            .get(id)
            .map(|slot| slot.name.clone())
            .ok_or(ComponentError::InvalidNodeId)
    }

    /// The shared attribute set of a node.
    pub fn attributes(&self, id: NodeId) -> ComponentResult<Arc<AttributeSet>> {
        self.slots
            .get(id)
            .map(|slot| slot.attributes.clone())
            .ok_or(ComponentError::InvalidNodeId)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(
        &self,
        parent: NodeId,
        name: &str,
    ) -> ComponentResult<Option<NodeId>> {
        let slot = self.slots.get(parent).ok_or(ComponentError::InvalidNodeId)?;
        for &child in &slot.children {
            if let Some(child_slot) = self.slots.get(child) {
                if child_slot.name == name {
                    return Ok(Some(child));
                }
            }
        }
        Ok(None)
    }

    /// Get a typed reference to a mounted component.
    pub fn get<T: Component>(&self, id: NodeId) -> Option<&T> {
        self.slots
            .get(id)?
            .component
            .as_deref()?
            .as_any()
            .downcast_ref()
    }

    /// Get a typed mutable reference to a mounted component.
    pub fn get_mut<T: Component>(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id)?
            .component
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut()
    }

    /// Get an untyped reference to a mounted component.
    pub fn get_dyn(&self, id: NodeId) -> Option<&dyn Component> {
        self.slots.get(id)?.component.as_deref()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch an event: deliver to `target`, then bubble through its
    /// ancestors until a handler consumes it.
    pub fn dispatch(&mut self, target: NodeId, mut event: Event) -> DispatchResult {
        if !self.slots.contains_key(target) {
            return DispatchResult::NodeNotFound;
        }
        tracing::trace!(
            target: "wicker::component",
            kind = event.kind(),
            node = ?target,
            "dispatching event"
        );

        let mut current = target;
        loop {
            // Take the component out of its slot so its handler can be
            // given mutable access to the rest of the tree.
            let Some(mut component) = self
                .slots
                .get_mut(current)
                .and_then(|slot| slot.component.take())
            else {
                // Node vanished mid-bubble, or a handler tried to dispatch
                // into a node already being dispatched. Stop here.
                tracing::trace!(
                    target: "wicker::component",
                    node = ?current,
                    "dispatch target unavailable, stopping propagation"
                );
                return DispatchResult::Ignored;
            };

            let handled = {
                let mut scope = TreeScope { tree: self };
                component.handle(&mut event, &mut scope)
            };

            // A handler may have unmounted descendants, but never itself;
            // its slot is still expected to exist.
            if let Some(slot) = self.slots.get_mut(current) {
                slot.component = Some(component);
            }

            if handled || event.is_accepted() {
                tracing::trace!(
                    target: "wicker::component",
                    kind = event.kind(),
                    node = ?current,
                    "event consumed"
                );
                return DispatchResult::Accepted;
            }

            match self.slots.get(current).and_then(|slot| slot.parent) {
                Some(parent) => current = parent,
                None => {
                    tracing::trace!(
                        target: "wicker::component",
                        kind = event.kind(),
                        "event fell off the root unconsumed"
                    );
                    return DispatchResult::Ignored;
                }
            }
        }
    }

    /// Simulate a user interaction on a node.
    ///
    /// Calls the node's `activate` and dispatches the resulting event (if
    /// any) from that node.
    pub fn activate(&mut self, id: NodeId) -> ComponentResult<DispatchResult> {
        let slot = self.slots.get_mut(id).ok_or(ComponentError::InvalidNodeId)?;
        let component = slot
            .component
            .as_deref_mut()
            .ok_or(ComponentError::InvalidNodeId)?;

        match component.activate() {
            Some(event) => Ok(self.dispatch(id, event)),
            None => Ok(DispatchResult::Ignored),
        }
    }
}

impl fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTree")
            .field("node_count", &self.node_count())
            .finish()
    }
}

/// The tree-mutation surface available to `handle`.
///
/// Handlers receive a `TreeScope` instead of the tree itself: they can
/// mount and unmount children, write descendant attributes, and look
/// children up, but cannot start a nested dispatch - event delivery stays
/// strictly sequential.
pub struct TreeScope<'a> {
    pub(super) tree: &'a mut ComponentTree,
}

impl TreeScope<'_> {
    /// Mount a child under `parent`, running its full lifecycle.
    pub fn mount_child(
        &mut self,
        parent: NodeId,
        component: Box<dyn Component>,
    ) -> ComponentResult<NodeId> {
        self.tree.mount(Some(parent), component)
    }

    /// Unmount a node and its subtree.
    pub fn unmount(&mut self, id: NodeId) -> ComponentResult<()> {
        self.tree.unmount(id)
    }

    /// The children of a node, in mount order.
    pub fn children(&self, id: NodeId) -> ComponentResult<Vec<NodeId>> {
        self.tree.children(id)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(
        &self,
        parent: NodeId,
        name: &str,
    ) -> ComponentResult<Option<NodeId>> {
        self.tree.find_child_by_name(parent, name)
    }

    /// The shared attribute set of a node.
    pub fn attributes(&self, id: NodeId) -> ComponentResult<Arc<AttributeSet>> {
        self.tree.attributes(id)
    }

    /// Write an attribute on a node, notifying its watchers synchronously.
    ///
    /// Returns whether the stored value changed.
    pub fn set_attribute(
        &self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ComponentResult<bool> {
        Ok(self.tree.attributes(id)?.set(name, value))
    }

    /// Get a typed reference to a mounted component.
    pub fn get<T: Component>(&self, id: NodeId) -> Option<&T> {
        self.tree.get(id)
    }
}
