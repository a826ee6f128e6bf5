//! Convenience re-exports for applications building on wicker.
//!
//! ```
//! use wicker::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let counter = tree.mount(None, Box::new(Counter::new())).unwrap();
//! assert_eq!(tree.get::<Counter>(counter).unwrap().value(), 0);
//! ```

pub use crate::component::controls::{
    Counter, CounterButton, CounterStep, DEFAULT_ICON_EDGE, DEFAULT_SWAP_TARGET, IconGlyph,
    IconView, MenuButton, NavLink, NavLinkSpec, NavMenu, NavPanel, ThemeToggle, TodoEntry,
    TodoInput, TodoItem, TodoItemDelete, TodoList,
};
pub use crate::component::{
    Component, ComponentBase, ComponentError, ComponentResult, ComponentTree, ControlEvent,
    DispatchResult, Event, IconId, NodeId, TreeDebug, TreeFormatOptions, TreeScope,
};
pub use crate::theme::{Theme, ThemeContext, ThemeWatch};

pub use wicker_assets::{
    AssetFetcher, AssetOutcome, AssetStore, IconResolver, ResolveState, ResolvedPair,
};
pub use wicker_core::{
    AttributeChange, AttributeSet, AttributeWatch, ConnectionId, Property, ScopedConnection,
    Signal,
};
