//! Theme toggle control.
//!
//! Two [`IconGlyph`] leaves (sun, moon) and a [`ThemeToggle`] composite.
//! The glyphs are simultaneously leaf controls and state mirrors: a press
//! emits `IconClicked`, while a subscription on the injected
//! [`ThemeContext`] keeps each glyph's `data-active` attribute mirroring
//! the theme - without emitting any event, which is what breaks the
//! theme/presentation feedback loop.
//!
//! Exactly one glyph is active at any time, and it is always the opposite
//! of the current theme's primary icon: dark theme → sun active, light
//! theme → moon active (the active glyph is the one you press to leave the
//! current theme).

use std::any::Any;
use std::sync::Arc;

use crate::component::base::ComponentBase;
use crate::component::events::{ControlEvent, Event, IconId};
use crate::component::traits::Component;
use crate::component::tree::TreeScope;
use crate::theme::{Theme, ThemeContext, ThemeWatch};

fn flag(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}

/// A sun or moon glyph.
pub struct IconGlyph {
    base: ComponentBase,
    icon: IconId,
    theme: Arc<ThemeContext>,
    theme_watch: Option<ThemeWatch>,
}

impl IconGlyph {
    /// Create a glyph bound to the injected theme context.
    pub fn new(icon: IconId, theme: Arc<ThemeContext>) -> Self {
        Self {
            base: ComponentBase::named(icon.as_str()),
            icon,
            theme,
            theme_watch: None,
        }
    }

    /// Which glyph this is.
    pub fn icon(&self) -> IconId {
        self.icon
    }

    /// Whether this glyph currently carries the active state.
    pub fn is_active(&self) -> bool {
        self.base.attributes().is_active("data-active")
    }

    fn active_for(theme: Theme, icon: IconId) -> bool {
        match theme {
            Theme::Dark => icon == IconId::Sun,
            Theme::Light => icon == IconId::Moon,
        }
    }
}

impl Component for IconGlyph {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn hydrate(&mut self) {
        let attrs = self.base.attributes().clone();
        let icon = self.icon;

        // Seed from the current theme, then mirror every change.
        attrs.set("data-active", flag(Self::active_for(self.theme.theme(), icon)));

        let watch_attrs = attrs.clone();
        self.theme_watch = Some(self.theme.watch(move |&theme| {
            // Idempotent attribute write; never emits an event.
            watch_attrs.set("data-active", flag(IconGlyph::active_for(theme, icon)));
        }));
    }

    fn activate(&mut self) -> Option<Event> {
        Some(Event::new(ControlEvent::IconClicked { icon: self.icon }))
    }

    fn teardown(&mut self) {
        self.theme_watch = None;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The theme toggle composite: owns the two glyphs and writes the theme.
///
/// Clicking the sun (visible in dark mode) switches to light; clicking the
/// moon switches to dark. The glyphs' `data-active` attributes settle
/// synchronously within the dispatch, via their theme subscriptions.
pub struct ThemeToggle {
    base: ComponentBase,
    theme: Arc<ThemeContext>,
}

impl ThemeToggle {
    /// Create a toggle writing to the injected theme context.
    pub fn new(theme: Arc<ThemeContext>) -> Self {
        Self {
            base: ComponentBase::named("theme-toggle"),
            theme,
        }
    }

    /// The theme context this toggle writes.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }
}

impl Component for ThemeToggle {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self) -> Vec<Box<dyn Component>> {
        vec![
            Box::new(IconGlyph::new(IconId::Sun, self.theme.clone())),
            Box::new(IconGlyph::new(IconId::Moon, self.theme.clone())),
        ]
    }

    fn handle(&mut self, event: &mut Event, _scope: &mut TreeScope<'_>) -> bool {
        let handled = match event.payload() {
            ControlEvent::IconClicked { icon } => {
                let next = match icon {
                    IconId::Sun => Theme::Light,
                    IconId::Moon => Theme::Dark,
                };
                self.theme.set_theme(next);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::tree::{ComponentTree, DispatchResult};

    struct Fixture {
        tree: ComponentTree,
        sun: crate::component::tree::NodeId,
        moon: crate::component::tree::NodeId,
        theme: Arc<ThemeContext>,
    }

    fn fixture(initial: Theme) -> Fixture {
        let theme = Arc::new(ThemeContext::new(initial));
        let mut tree = ComponentTree::new();
        let toggle = tree
            .mount(None, Box::new(ThemeToggle::new(theme.clone())))
            .unwrap();
        let sun = tree.find_child_by_name(toggle, "sun").unwrap().unwrap();
        let moon = tree.find_child_by_name(toggle, "moon").unwrap().unwrap();
        Fixture {
            tree,
            sun,
            moon,
            theme,
        }
    }

    fn active_states(f: &Fixture) -> (bool, bool) {
        (
            f.tree.get::<IconGlyph>(f.sun).unwrap().is_active(),
            f.tree.get::<IconGlyph>(f.moon).unwrap().is_active(),
        )
    }

    #[test]
    fn test_hydrate_seeds_active_from_theme() {
        let f = fixture(Theme::Light);
        assert_eq!(active_states(&f), (false, true));

        let f = fixture(Theme::Dark);
        assert_eq!(active_states(&f), (true, false));
    }

    #[test]
    fn test_exactly_one_glyph_active_across_toggles() {
        let mut f = fixture(Theme::Light);

        for _ in 0..3 {
            // Press whichever glyph is active to flip the theme.
            let target = if f.tree.get::<IconGlyph>(f.sun).unwrap().is_active() {
                f.sun
            } else {
                f.moon
            };
            assert_eq!(f.tree.activate(target).unwrap(), DispatchResult::Accepted);

            let (sun_active, moon_active) = active_states(&f);
            assert_ne!(sun_active, moon_active, "exactly one glyph must be active");
        }
    }

    #[test]
    fn test_moon_click_switches_to_dark() {
        let mut f = fixture(Theme::Light);
        f.tree.activate(f.moon).unwrap();

        assert_eq!(f.theme.theme(), Theme::Dark);
        assert_eq!(active_states(&f), (true, false));
    }

    #[test]
    fn test_sun_click_switches_to_light() {
        let mut f = fixture(Theme::Dark);
        f.tree.activate(f.sun).unwrap();

        assert_eq!(f.theme.theme(), Theme::Light);
        assert_eq!(active_states(&f), (false, true));
    }

    #[test]
    fn test_clicking_inactive_glyph_is_idempotent() {
        let mut f = fixture(Theme::Light);
        // Sun is inactive in light mode; clicking it re-applies light.
        f.tree.activate(f.sun).unwrap();

        assert_eq!(f.theme.theme(), Theme::Light);
        assert_eq!(active_states(&f), (false, true));
    }

    #[test]
    fn test_teardown_releases_theme_subscription() {
        let theme = Arc::new(ThemeContext::new(Theme::Light));
        let mut tree = ComponentTree::new();
        let toggle = tree
            .mount(None, Box::new(ThemeToggle::new(theme.clone())))
            .unwrap();
        assert_eq!(theme.watcher_count(), 2);

        tree.unmount(toggle).unwrap();
        assert_eq!(theme.watcher_count(), 0);
    }
}
