//! Deterministic, engine-agnostic utility AI decision making.
//!
//! The core idea: each cycle, score a set of named options from their considerations, prune to
//! the best rank, then draw one of the near-best-weighted options at random. Completed decisions
//! are recorded in a bounded, most-recent-first history that considerations can query ("don't
//! pick this again so soon").
//!
//! Behavior execution, scheduling and configuration authoring live in sibling crates; this crate
//! is pure in-memory computation plus the two injected capabilities it needs (a clock and a
//! random source).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod clock;
pub mod consideration;
pub mod considerations;
pub mod history;
pub mod maker;
pub mod option;
pub mod rng;
pub mod score;
pub mod scorer;
pub mod selector;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use consideration::{Consideration, DecisionContext};
pub use considerations::{
    map_range_clamped, DecisionHistoryConsideration, FixedConsideration, HistoryQueryTime,
};
pub use history::{
    BehaviorOutcome, DecisionHistory, DecisionRecord, DecisionResult, ResultMask,
    DEFAULT_MAX_RECORDS, UNSET_TIMESTAMP,
};
pub use maker::{DecisionMaker, DecisionMakerConfig, DecisionObserver, SelectionOutcome};
pub use option::{OptionSet, UtilityOption};
pub use rng::{RandomSource, SplitMix64};
pub use score::{ConsiderationScore, OptionScore};
pub use scorer::score_option;
pub use selector::select;
