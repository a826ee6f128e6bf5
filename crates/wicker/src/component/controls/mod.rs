//! The built-in controls.
//!
//! Each control is an independent composition of the three roles the
//! component model defines - leaf controls, composite containers, and state
//! mirrors - wired together only through bubbling events and observable
//! attributes:
//!
//! - [`Counter`] / [`CounterButton`] - a running total driven by two buttons
//! - [`ThemeToggle`] / [`IconGlyph`] - sun/moon glyphs writing the theme
//! - [`IconView`] - themed display of a cached, fetched icon
//! - [`NavMenu`] / [`MenuButton`] / [`NavPanel`] / [`NavLink`] - hamburger
//!   navigation declared via `data-links`
//! - [`TodoList`] / [`TodoInput`] / [`TodoItem`] / [`TodoItemDelete`] - an
//!   entry list with data-driven rows

mod counter;
mod icon_view;
mod nav_menu;
mod theme_toggle;
mod todo_list;

pub use counter::{Counter, CounterButton, CounterStep};
pub use icon_view::{DEFAULT_ICON_EDGE, IconView};
pub use nav_menu::{DEFAULT_SWAP_TARGET, MenuButton, NavLink, NavLinkSpec, NavMenu, NavPanel};
pub use theme_toggle::{IconGlyph, ThemeToggle};
pub use todo_list::{TodoEntry, TodoInput, TodoItem, TodoItemDelete, TodoList};
