//! The component model: lifecycle, tree, and event dispatch.
//!
//! Components communicate along exactly two channels:
//!
//! - **bottom-up**: one-shot [`Event`]s that bubble from the interaction
//!   source to the nearest ancestor implementing their kind
//!   ([`ComponentTree::dispatch`]);
//! - **top-down**: observable attribute writes
//!   ([`wicker_core::AttributeSet`]), watched through explicit, scoped
//!   subscriptions.
//!
//! There is no third channel; a component never reaches into another
//! component's state directly.

pub mod base;
pub mod controls;
pub mod debug;
pub mod events;
pub mod traits;
pub mod tree;

pub use base::ComponentBase;
pub use debug::{TreeDebug, TreeFormatOptions, TreeStyle};
pub use events::{ControlEvent, Event, EventBase, IconId};
pub use traits::Component;
pub use tree::{
    ComponentError, ComponentResult, ComponentTree, DispatchResult, NodeId, TreeScope,
};
