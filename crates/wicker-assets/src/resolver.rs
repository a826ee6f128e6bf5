//! Themed icon resolution.
//!
//! An [`IconResolver`] turns a pair of source URLs (light-theme variant,
//! dark-theme variant) into in-memory bytes, consulting the
//! [`AssetStore`](crate::AssetStore) before the network. Resolution happens
//! at most once per resolver:
//!
//! ```text
//! Uninitialized -> Resolving -> Ready
//! ```
//!
//! There is no transition back to `Resolving`. Once `Ready`, both variants
//! are retained in memory for the resolver's lifetime, and a theme change is
//! a pure presentation swap - no cache read, no fetch.
//!
//! A variant whose fetch fails resolves to [`AssetOutcome::Unavailable`]:
//! the failure is logged where it happens and never crosses the component
//! boundary as an error. There is no retry and no placeholder substitution.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;
use wicker_core::{Property, Signal};

use crate::fetcher::AssetFetcher;
use crate::store::AssetStore;

/// The result of resolving one asset variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetOutcome {
    /// The asset bytes, from cache or network.
    Available(Bytes),
    /// The asset could not be retrieved; the variant is skipped.
    Unavailable,
}

impl AssetOutcome {
    /// Whether bytes were retrieved.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The retrieved bytes, if any.
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Available(bytes) => Some(bytes),
            Self::Unavailable => None,
        }
    }

    /// Consume the outcome, yielding the retrieved bytes, if any.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Self::Available(bytes) => Some(bytes),
            Self::Unavailable => None,
        }
    }
}

/// Resolution lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolveState {
    /// Nothing requested yet.
    #[default]
    Uninitialized,
    /// Variants are being looked up or fetched.
    Resolving,
    /// Both variants settled (available or unavailable) and are retained.
    Ready,
}

/// Both resolved variants of a themed icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPair {
    /// The light-theme variant.
    pub light: AssetOutcome,
    /// The dark-theme variant.
    pub dark: AssetOutcome,
}

/// Resolves a themed icon's light/dark variants through cache-then-fetch.
///
/// The resolver is shared (`Arc`) between the component that displays the
/// icon and whatever drives resolution; all state lives here, so a component
/// destroyed mid-resolve is simply never consulted again.
pub struct IconResolver {
    store: Arc<AssetStore>,
    fetcher: Arc<AssetFetcher>,
    state: Property<ResolveState>,
    resolved: RwLock<Option<ResolvedPair>>,
    /// Emitted exactly once, when resolution completes.
    pub ready: Signal<ResolvedPair>,
}

impl IconResolver {
    /// Create a resolver over a shared store and fetcher.
    pub fn new(store: Arc<AssetStore>, fetcher: Arc<AssetFetcher>) -> Self {
        Self {
            store,
            fetcher,
            state: Property::new(ResolveState::Uninitialized),
            resolved: RwLock::new(None),
            ready: Signal::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ResolveState {
        self.state.get()
    }

    /// The retained variants, once `Ready`.
    pub fn variants(&self) -> Option<ResolvedPair> {
        self.resolved.read().clone()
    }

    /// Resolve both variants, consulting the cache before the network.
    ///
    /// The first call performs the work and transitions
    /// `Uninitialized -> Resolving -> Ready`; later calls return the
    /// retained pair without touching cache or network. Not re-entrant:
    /// callers drive one resolution at a time, matching the kit's
    /// single-threaded execution model.
    pub async fn resolve(&self, light_url: &str, dark_url: &str) -> ResolvedPair {
        if let Some(pair) = self.variants() {
            return pair;
        }

        self.state.set(ResolveState::Resolving);
        tracing::debug!(
            target: "wicker_assets::resolver",
            light = %light_url,
            dark = %dark_url,
            "resolving icon variants"
        );

        let light = self.resolve_one(light_url).await;
        let dark = self.resolve_one(dark_url).await;
        let pair = ResolvedPair { light, dark };

        *self.resolved.write() = Some(pair.clone());
        self.state.set(ResolveState::Ready);
        self.ready.emit(pair.clone());
        pair
    }

    /// Cache lookup, then fetch-and-store on miss.
    async fn resolve_one(&self, url: &str) -> AssetOutcome {
        match self.store.lookup(url) {
            Ok(Some(bytes)) => return AssetOutcome::Available(bytes),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(
                    target: "wicker_assets::resolver",
                    url = %url,
                    error = %err,
                    "cache lookup failed, falling through to fetch"
                );
            }
        }

        match self.fetcher.fetch(url).await {
            Ok(bytes) => {
                // Best effort: a failed store write degrades the cache, not
                // the asset.
                if let Err(err) = self.store.put(url, &bytes) {
                    tracing::warn!(
                        target: "wicker_assets::resolver",
                        url = %url,
                        error = %err,
                        "failed to store fetched asset"
                    );
                }
                AssetOutcome::Available(bytes)
            }
            Err(err) => {
                tracing::warn!(
                    target: "wicker_assets::resolver",
                    url = %url,
                    error = %err,
                    "asset fetch failed; variant unavailable"
                );
                AssetOutcome::Unavailable
            }
        }
    }
}
