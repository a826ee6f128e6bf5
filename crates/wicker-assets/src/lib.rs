//! Asset pipeline for wicker.
//!
//! This crate provides the one quasi-algorithmic piece of the control kit:
//! retrieving themed icon assets through a persistent, process-wide cache.
//!
//! - **[`AssetStore`]**: a named key→bytes cache persisted on disk, with
//!   `put`/`lookup` and nothing else (no eviction, expiry, or versioning -
//!   cached bytes are used verbatim)
//! - **[`AssetFetcher`]**: a thin async HTTP client for raw asset bytes
//! - **[`IconResolver`]**: cache-then-fetch resolution of a light/dark
//!   variant pair, with the `Uninitialized -> Resolving -> Ready` lifecycle
//!   and graceful degradation to [`AssetOutcome::Unavailable`] on failure
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wicker_assets::{AssetFetcher, AssetStore, IconResolver};
//!
//! # async fn demo() -> wicker_assets::Result<()> {
//! let store = Arc::new(AssetStore::open("icons")?);
//! let fetcher = Arc::new(AssetFetcher::new()?);
//! let resolver = IconResolver::new(store, fetcher);
//!
//! let pair = resolver
//!     .resolve(
//!         "https://assets.example/sun.svg",
//!         "https://assets.example/moon.svg",
//!     )
//!     .await;
//!
//! if let Some(bytes) = pair.light.bytes() {
//!     println!("light variant: {} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod fetcher;
mod resolver;
mod store;

pub use error::{Error, Result};
pub use fetcher::{AssetFetcher, AssetFetcherConfig};
pub use resolver::{AssetOutcome, IconResolver, ResolveState, ResolvedPair};
pub use store::AssetStore;
