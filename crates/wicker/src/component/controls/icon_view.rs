//! Themed icon display.
//!
//! An [`IconView`] is a state mirror over a shared
//! [`IconResolver`](wicker_assets::IconResolver): once the resolver is
//! `Ready`, the view presents exactly the variant matching the current
//! theme, and a theme change swaps the presentation without any new cache
//! or network work. A variant that resolved unavailable renders as absence.

use std::any::Any;
use std::sync::Arc;

use bytes::Bytes;
use wicker_assets::{IconResolver, ResolveState, ResolvedPair};

use crate::component::base::ComponentBase;
use crate::component::traits::Component;
use crate::theme::{Theme, ThemeContext, ThemeWatch};

/// Fallback edge length (px) when `data-width`/`data-height` are absent or
/// unparseable.
pub const DEFAULT_ICON_EDGE: u32 = 24;

/// A component that displays the theme-matching variant of a resolved icon.
///
/// Configuration is attribute-driven:
///
/// - `data-src-light` / `data-src-dark` - source URLs, required before
///   [`resolve`](Self::resolve)
/// - `data-width` / `data-height` - numeric strings, falling back to
///   [`DEFAULT_ICON_EDGE`]
///
/// The view owns no resolution state: everything lives in the shared
/// resolver, so destroying the view mid-resolve never leaves a callback
/// aimed at a dead component.
pub struct IconView {
    base: ComponentBase,
    theme: Arc<ThemeContext>,
    resolver: Arc<IconResolver>,
    theme_watch: Option<ThemeWatch>,
}

impl IconView {
    /// Create an unconfigured view.
    pub fn new(theme: Arc<ThemeContext>, resolver: Arc<IconResolver>) -> Self {
        Self {
            base: ComponentBase::named("icon"),
            theme,
            resolver,
            theme_watch: None,
        }
    }

    /// Create a view with both source attributes set.
    pub fn with_sources(
        theme: Arc<ThemeContext>,
        resolver: Arc<IconResolver>,
        light_url: &str,
        dark_url: &str,
    ) -> Self {
        let view = Self::new(theme, resolver);
        view.base.attributes().set_silent("data-src-light", light_url);
        view.base.attributes().set_silent("data-src-dark", dark_url);
        view
    }

    /// The shared resolver.
    pub fn resolver(&self) -> Arc<IconResolver> {
        self.resolver.clone()
    }

    /// The resolver's lifecycle state.
    pub fn state(&self) -> ResolveState {
        self.resolver.state()
    }

    /// Rendered width in pixels.
    pub fn width(&self) -> u32 {
        self.base.attributes().get_u32_or("data-width", DEFAULT_ICON_EDGE)
    }

    /// Rendered height in pixels.
    pub fn height(&self) -> u32 {
        self.base.attributes().get_u32_or("data-height", DEFAULT_ICON_EDGE)
    }

    /// The configured light/dark source URLs.
    ///
    /// # Panics
    ///
    /// Panics if either source attribute is missing. An icon view without
    /// sources is a configuration defect, surfaced at the point of use.
    pub fn sources(&self) -> (String, String) {
        let attrs = self.base.attributes();
        let Some(light) = attrs.get("data-src-light") else {
            panic!(
                "icon view '{}' is missing required attribute data-src-light",
                self.base.name()
            );
        };
        let Some(dark) = attrs.get("data-src-dark") else {
            panic!(
                "icon view '{}' is missing required attribute data-src-dark",
                self.base.name()
            );
        };
        (light, dark)
    }

    /// Drive the shared resolver over this view's configured sources.
    ///
    /// The first call fetches (cache-first); later calls return the
    /// retained pair. See [`IconResolver::resolve`].
    ///
    /// # Panics
    ///
    /// Panics if the source attributes are missing; see
    /// [`sources`](Self::sources).
    pub async fn resolve(&self) -> ResolvedPair {
        let (light, dark) = self.sources();
        self.resolver.resolve(&light, &dark).await
    }

    /// The bytes of the variant matching the current theme.
    ///
    /// `None` before resolution completes, and `None` for a variant that
    /// resolved unavailable (the element is skipped, not substituted).
    pub fn visible_bytes(&self) -> Option<Bytes> {
        let pair = self.resolver.variants()?;
        let outcome = match self.theme.theme() {
            Theme::Light => pair.light,
            Theme::Dark => pair.dark,
        };
        outcome.into_bytes()
    }
}

impl Component for IconView {
    fn component_base(&self) -> &ComponentBase {
        &self.base
    }

    fn component_base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn hydrate(&mut self) {
        let attrs = self.base.attributes().clone();
        attrs.set("data-variant", self.theme.theme().as_str());

        let watch_attrs = attrs.clone();
        self.theme_watch = Some(self.theme.watch(move |&theme| {
            watch_attrs.set("data-variant", theme.as_str());
        }));
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
