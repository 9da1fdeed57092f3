//! Observation tooling for `dm-core`.
//!
//! The core exposes a single observer hook and no logging of its own; this crate provides the
//! two implementations most embeddings want: an in-memory recorder for tests and inspectors,
//! and a bridge onto `tracing` for structured logs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{DecisionEvent, EventLog, RecordingObserver, TracingObserver};
