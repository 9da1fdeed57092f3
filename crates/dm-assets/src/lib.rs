//! Data-driven authoring of option sets.
//!
//! Option sets are plain data: names, ranks, addends and a list of stock considerations. This
//! crate defines the serializable specs, YAML loading, and the build step that turns a spec into
//! a runtime [`OptionSet`](dm_core::OptionSet) usable with any context type.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod spec;

pub use error::AssetError;
pub use spec::{ConsiderationSpec, OptionSetSpec, OptionSpec};
