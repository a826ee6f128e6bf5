//! Hamburger navigation menu.
//!
//! A [`NavMenu`] composite owns a [`MenuButton`] leaf and a [`NavPanel`]
//! holding one [`NavLink`] per entry of the `data-links` attribute (a
//! JSON-encoded array of `{name, url, children?}`). Malformed JSON is
//! caught and logged; the panel then renders no entries and nothing fails.
//!
//! The menu's open state is mirrored top-down: toggling writes
//! `data-active` on the button and the panel together, and following any
//! link closes the menu again.
//!
//! Actual navigation is not this crate's concern. Each link declares the
//! attributes an external fragment-swap library reads
//! (`data-swap-target`, `data-swap-url`, `data-push-url`); the event bus
//! only learns that a link was followed.

use std::any::Any;

use serde::Deserialize;

use crate::component::base::ComponentBase;
use crate::component::events::{ControlEvent, Event};
use crate::component::traits::Component;
use crate::component::tree::TreeScope;
use wicker_core::{Property, Signal};

/// Container name links target when the menu does not configure one.
pub const DEFAULT_SWAP_TARGET: &str = "content";

/// One navigation entry from `data-links`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavLinkSpec {
    /// Link label; also the mounted component's name.
    pub name: String,
    /// Link target URL.
    pub url: String,
    /// Nested entries, rendered as nested links.
    #[serde(default)]
    pub children: Vec<NavLinkSpec>,
}

/// The hamburger icon button.
pub struct MenuButton {
    base: ComponentBase,
}

impl MenuButton {
    /// Create the button.
    pub fn new() -> Self {
        Self {
            base: ComponentBase::named("menu-button"),
        }
    }

    /// Whether the button mirrors the open state.
    pub fn is_active(&self) -> bool {
        self.base.attributes().is_active("data-active")
    }
}

impl Default for MenuButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MenuButton {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn activate(&mut self) -> Option<Event> {
        Some(Event::new(ControlEvent::MenuToggle))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One navigation link.
///
/// Declares the fragment-swap collaborator attributes at construction and
/// emits `LinkActivated` when followed. Nested specs render as nested
/// links, so activation bubbles through them to the menu.
pub struct NavLink {
    base: ComponentBase,
    spec: NavLinkSpec,
    swap_target: String,
}

impl NavLink {
    /// Build a link (and, at render time, its nested children).
    pub fn new(spec: NavLinkSpec, swap_target: impl Into<String>) -> Self {
        let swap_target = swap_target.into();
        let base = ComponentBase::named(&spec.name);
        let attrs = base.attributes();
        attrs.set_silent("data-swap-target", swap_target.as_str());
        attrs.set_silent("data-swap-url", spec.url.as_str());
        attrs.set_silent("data-push-url", "true");
        Self {
            base,
            spec,
            swap_target,
        }
    }

    /// The link's target URL.
    pub fn url(&self) -> &str {
        &self.spec.url
    }
}

impl Component for NavLink {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        self.spec
            .children
            .iter()
            .cloned()
            .map(|child| Box::new(NavLink::new(child, self.swap_target.clone())) as Box<dyn Component>)
            .collect()
    }

    fn activate(&mut self) -> Option<Event> {
        Some(Event::new(ControlEvent::LinkActivated {
            url: self.spec.url.clone(),
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The panel holding the generated links.
pub struct NavPanel {
    base: ComponentBase,
    links: Vec<NavLinkSpec>,
    swap_target: String,
}

impl NavPanel {
    fn new(links: Vec<NavLinkSpec>, swap_target: String) -> Self {
        Self {
            base: ComponentBase::named("nav-panel"),
            links,
            swap_target,
        }
    }

    /// Whether the panel mirrors the open state.
    pub fn is_active(&self) -> bool {
        self.base.attributes().is_active("data-active")
    }
}

impl Component for NavPanel {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        std::mem::take(&mut self.links)
            .into_iter()
            .map(|spec| Box::new(NavLink::new(spec, self.swap_target.clone())) as Box<dyn Component>)
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The navigation menu composite.
pub struct NavMenu {
    base: ComponentBase,
    open: Property<bool>,
    /// Emitted with the new open state after every toggle.
    pub toggled: Signal<bool>,
    /// Re-dispatch of followed link URLs, for the host application.
    pub link_activated: Signal<String>,
}

impl NavMenu {
    /// Create a menu; configure links via the `data-links` attribute before
    /// mounting.
    pub fn new() -> Self {
        Self {
            base: ComponentBase::named("nav-menu"),
            open: Property::new(false),
            toggled: Signal::new(),
            link_activated: Signal::new(),
        }
    }

    /// Create a menu with `data-links` already set.
    pub fn with_links_json(links_json: &str) -> Self {
        let menu = Self::new();
        menu.base.attributes().set_silent("data-links", links_json);
        menu
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Parse `data-links`, degrading to no entries on malformed JSON.
    fn parse_links(&self) -> Vec<NavLinkSpec> {
        let Some(raw) = self.base.attributes().get("data-links") else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<NavLinkSpec>>(&raw) {
            Ok(links) => links,
            Err(err) => {
                tracing::warn!(
                    target: "wicker::controls",
                    error = %err,
                    "malformed data-links JSON; rendering no navigation entries"
                );
                Vec::new()
            }
        }
    }

    /// Apply an open/closed transition and mirror it onto the button and
    /// panel together.
    fn set_open(&mut self, scope: &mut TreeScope<'_>, open: bool) {
        if !self.open.set(open) {
            return;
        }
        let flag = if open { "true" } else { "false" };
        let id = self.base.node_id();
        for child in ["menu-button", "nav-panel"] {
            if let Ok(Some(child_id)) = scope.find_child_by_name(id, child) {
                let _ = scope.set_attribute(child_id, "data-active", flag);
            }
        }
        tracing::debug!(target: "wicker::controls", open, "nav menu toggled");
        self.toggled.emit(open);
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NavMenu {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        let swap_target = self
            .base
            .attributes()
            .get_or("data-swap-target", DEFAULT_SWAP_TARGET);
        let links = self.parse_links();
        vec![
            Box::new(MenuButton::new()),
            Box::new(NavPanel::new(links, swap_target)),
        ]
    }

    fn handle(&mut self, event: &mut Event, scope: &mut TreeScope<'_>) -> bool {
        let handled = match event.payload() {
            ControlEvent::MenuToggle => {
                let next = !self.open.get();
                self.set_open(scope, next);
                true
            }
            ControlEvent::LinkActivated { url } => {
                let url = url.clone();
                self.set_open(scope, false);
                self.link_activated.emit(url);
                true
            }
            _ => false,
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
