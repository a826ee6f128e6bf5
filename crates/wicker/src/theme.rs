//! Theme state shared between components.
//!
//! The kit's theme is a single observable value with one writer (whichever
//! control the application designates, typically the
//! [`ThemeToggle`](crate::component::controls::ThemeToggle)) and any number
//! of readers. Instead of a document-global flag, a [`ThemeContext`] is
//! explicitly injected into each component that cares, and readers hold
//! scoped subscriptions that die with them.
//!
//! When the application does not pick an initial theme,
//! [`ThemeContext::detect`] derives one from the platform color-scheme
//! preference (unspecified platforms read as light).

use std::fmt;
use std::sync::Arc;

use wicker_core::{Property, ScopedConnection, Signal};

/// The two presentation themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light backgrounds, dark content.
    Light,
    /// Dark backgrounds, light content.
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The attribute-value spelling of this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the attribute-value spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoped subscription to theme changes.
pub type ThemeWatch = ScopedConnection<Theme>;

/// The injected, observable theme value.
///
/// Shared as `Arc<ThemeContext>` with every component constructed to mirror
/// or write the theme.
pub struct ThemeContext {
    current: Property<Theme>,
    changed: Arc<Signal<Theme>>,
}

impl ThemeContext {
    /// Create a context with an explicit initial theme.
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Property::new(initial),
            changed: Arc::new(Signal::new()),
        }
    }

    /// Create a context seeded from the platform color-scheme preference.
    ///
    /// Used when no explicit initial theme exists; platforms that report no
    /// preference read as light.
    pub fn detect() -> Self {
        let initial = match dark_light::detect() {
            dark_light::Mode::Dark => Theme::Dark,
            dark_light::Mode::Light | dark_light::Mode::Default => Theme::Light,
        };
        tracing::debug!(
            target: "wicker::theme",
            theme = %initial,
            "detected platform color scheme"
        );
        Self::new(initial)
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.current.get()
    }

    /// Set the theme, returning `true` if it changed.
    ///
    /// Subscribers are notified synchronously, and only on a real change -
    /// re-applying the current theme notifies nobody.
    pub fn set_theme(&self, theme: Theme) -> bool {
        if self.current.set(theme) {
            tracing::debug!(target: "wicker::theme", theme = %theme, "theme changed");
            self.changed.emit(theme);
            true
        } else {
            false
        }
    }

    /// Flip to the opposite theme and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// Subscribe to theme changes.
    ///
    /// The returned guard cancels the subscription when dropped; components
    /// hold it and drop it in `teardown`.
    pub fn watch<F>(&self, slot: F) -> ThemeWatch
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        ScopedConnection::new(self.changed.clone(), slot)
    }

    /// Number of live theme subscriptions.
    pub fn watcher_count(&self) -> usize {
        self.changed.connection_count()
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("current", &self.theme())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_set_theme_notifies_on_change_only() {
        let ctx = ThemeContext::new(Theme::Light);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let _watch = ctx.watch(move |&theme| {
            seen_clone.lock().push(theme);
        });

        assert!(ctx.set_theme(Theme::Dark));
        assert!(!ctx.set_theme(Theme::Dark)); // idempotent
        assert!(ctx.set_theme(Theme::Light));

        assert_eq!(*seen.lock(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_toggle_returns_new_theme() {
        let ctx = ThemeContext::new(Theme::Light);
        assert_eq!(ctx.toggle(), Theme::Dark);
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_watch_guard_cancels() {
        let ctx = ThemeContext::new(Theme::Light);
        let seen = Arc::new(Mutex::new(0));

        {
            let seen_clone = seen.clone();
            let _watch = ctx.watch(move |_| {
                *seen_clone.lock() += 1;
            });
            assert_eq!(ctx.watcher_count(), 1);
            ctx.set_theme(Theme::Dark);
        }

        assert_eq!(ctx.watcher_count(), 0);
        ctx.set_theme(Theme::Light);
        assert_eq!(*seen.lock(), 1);
    }
}
