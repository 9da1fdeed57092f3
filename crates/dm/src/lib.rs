//! Umbrella crate that re-exports the `dm-*` building blocks.
//!
//! Most users want `dm::core` for the decision maker itself, `dm::behavior` to run the chosen
//! options, and `dm::assets` to author option sets as data.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use dm_core as core;

#[cfg(feature = "behavior")]
#[cfg_attr(docsrs, doc(cfg(feature = "behavior")))]
pub use dm_behavior as behavior;

#[cfg(feature = "assets")]
#[cfg_attr(docsrs, doc(cfg(feature = "assets")))]
pub use dm_assets as assets;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use dm_tools as tools;
