//! Data-driven rules content and loaders.
//!
//! This crate reads table-specific data files into `rules-core` types:
//! - Rules configuration (TOML)
//! - Ancestry catalogs with their boosts and flaws (RON)
//! - Background catalogs with their boosts (RON)
//!
//! The engine itself never touches the filesystem; callers load content here
//! and pass plain values into `rules-core`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AncestryDefinition, AncestryLoader, BackgroundDefinition, BackgroundLoader, ConfigLoader,
    ContentFactory, LoadResult, OriginCatalog, OriginPicks,
};
