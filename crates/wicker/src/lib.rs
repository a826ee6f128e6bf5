//! A small event-composed UI control kit.
//!
//! wicker builds user interfaces from independent component instances that
//! communicate through exactly two channels: custom events that bubble
//! bottom-up through a [`component::ComponentTree`], and observable string
//! attributes that propagate state top-down. There is no shared engine or
//! scheduler - each control renders its own children, hydrates its own
//! watchers, and owns its own state.
//!
//! # The composition pattern
//!
//! ```
//! use std::sync::Arc;
//! use wicker::prelude::*;
//!
//! // The theme is an injected observable, not a global.
//! let theme = Arc::new(ThemeContext::new(Theme::Light));
//!
//! let mut tree = ComponentTree::new();
//! let toggle = tree
//!     .mount(None, Box::new(ThemeToggle::new(theme.clone())))
//!     .unwrap();
//!
//! // In light mode the moon glyph carries the active state; pressing it
//! // emits `clicked-moon`, which bubbles to the toggle and flips the theme.
//! let moon = tree.find_child_by_name(toggle, "moon").unwrap().unwrap();
//! tree.activate(moon).unwrap();
//! assert_eq!(theme.theme(), Theme::Dark);
//!
//! // The glyphs mirrored the change synchronously, via their scoped
//! // theme subscriptions - no event was emitted on the way back down.
//! let sun = tree.find_child_by_name(toggle, "sun").unwrap().unwrap();
//! assert!(tree.get::<IconGlyph>(sun).unwrap().is_active());
//! ```
//!
//! # Crates
//!
//! - [`wicker_core`] - signals, properties, observable attribute sets
//! - [`wicker_assets`] - the persistent icon cache and themed resolution
//! - this crate - the component model, theme context, and built-in controls

pub mod component;
pub mod prelude;
pub mod theme;

pub use component::{Component, ComponentTree, ControlEvent, Event, NodeId};
pub use theme::{Theme, ThemeContext};
