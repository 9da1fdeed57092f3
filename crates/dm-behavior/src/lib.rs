//! Behavior execution for `dm-core` commitments.
//!
//! The decision core only picks options; something still has to run them. This crate provides
//! the minimal executor: a [`Behavior`] lifecycle trait, a runtime slot holding the behavior of
//! the currently-committed option, and a periodic [`DecisionAgent`] driver that re-evaluates on
//! a configurable cadence and feeds started/ended signals back into the maker's history.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod behavior;

pub use agent::{AgentConfig, DecisionAgent};
pub use behavior::{Behavior, BehaviorRuntime, BehaviorSet, BehaviorStatus};
