//! Component base implementation.
//!
//! `ComponentBase` carries the state every component instance shares: its
//! node identity, a name for lookup and debug output, and the shared
//! attribute set that exposes its externally visible state. Components
//! include it as a field and delegate; there is no base class.

use std::sync::Arc;

use slotmap::Key;
use wicker_core::AttributeSet;

use super::tree::NodeId;

/// Common state for all components.
///
/// The attribute set is shared (`Arc`) so that ancestors can write it
/// top-down and watchers can subscribe without borrowing the component.
pub struct ComponentBase {
    /// Identity within the owning tree; null until mounted.
    id: NodeId,
    /// Name used for child lookup and debug output.
    name: String,
    /// Externally visible, observable attributes.
    attributes: Arc<AttributeSet>,
}

impl ComponentBase {
    /// Create an unnamed base.
    pub fn new() -> Self {
        Self::named(String::new())
    }

    /// Create a base with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::null(),
            name: name.into(),
            attributes: Arc::new(AttributeSet::new()),
        }
    }

    /// The node id assigned at mount, or the null id before mounting.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// Whether the component has been mounted into a tree.
    pub fn is_mounted(&self) -> bool {
        !self.id.is_null()
    }

    /// Stamp the node id. Called by the tree during mount.
    pub(crate) fn set_node_id(&mut self, id: NodeId) {
        self.id = id;
    }

    /// The component's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the component. Only meaningful before mounting; the tree
    /// caches the name at mount time for lookup.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The shared attribute set.
    pub fn attributes(&self) -> &Arc<AttributeSet> {
        &self.attributes
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
