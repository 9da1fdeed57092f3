//! Built-in considerations.
//!
//! Anything can be a consideration (see the closure impl in [`consideration`]); these are the
//! stock variants that authored option sets reach for.
//!
//! [`consideration`]: crate::consideration

use crate::consideration::{Consideration, DecisionContext};
use crate::history::ResultMask;
use crate::score::ConsiderationScore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which timestamp a history consideration measures elapsed time from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HistoryQueryTime {
    Started,
    Ended,
}

/// Scores an option from how long ago a named option last ran.
///
/// The elapsed time (no matching record counts as infinitely long ago) is mapped from
/// `time_range` into `multiplier_range`, clamped at both ends. With a multiplier range ending
/// at 0 near elapsed 0 this acts as a cooldown veto: "don't reselect X if it just ran".
pub struct DecisionHistoryConsideration {
    pub option_name: String,
    pub query_time: HistoryQueryTime,
    pub results: ResultMask,
    pub time_range: (f32, f32),
    pub multiplier_range: (f32, f32),
    pub description: String,
}

impl DecisionHistoryConsideration {
    pub fn new(
        option_name: impl Into<String>,
        query_time: HistoryQueryTime,
        results: ResultMask,
    ) -> Self {
        Self {
            option_name: option_name.into(),
            query_time,
            results,
            time_range: (0.0, 1.0),
            multiplier_range: (0.0, 1.0),
            description: String::new(),
        }
    }

    pub fn with_time_range(mut self, min: f32, max: f32) -> Self {
        self.time_range = (min, max);
        self
    }

    pub fn with_multiplier_range(mut self, min: f32, max: f32) -> Self {
        self.multiplier_range = (min, max);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<W> Consideration<W> for DecisionHistoryConsideration {
    fn score(&self, ctx: &DecisionContext<'_, W>) -> ConsiderationScore {
        let elapsed = match self.query_time {
            HistoryQueryTime::Started => ctx.time_since_started(&self.option_name, self.results),
            HistoryQueryTime::Ended => ctx.time_since_ended(&self.option_name, self.results),
        };

        // The sentinel means the option never ran: infinitely long ago.
        let elapsed = if elapsed < 0.0 { f32::INFINITY } else { elapsed };

        ConsiderationScore::multiplier(map_range_clamped(
            self.time_range,
            self.multiplier_range,
            elapsed,
        ))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Always contributes the same score. Mostly useful in authored data and tests.
pub struct FixedConsideration {
    pub score: ConsiderationScore,
    pub description: String,
}

impl FixedConsideration {
    pub fn new(score: ConsiderationScore) -> Self {
        Self {
            score,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<W> Consideration<W> for FixedConsideration {
    fn score(&self, _ctx: &DecisionContext<'_, W>) -> ConsiderationScore {
        self.score
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Map `value` from the `from` range into the `to` range, clamping to the ends of `to`.
///
/// A degenerate `from` range maps values at or past it to the far end and everything else to
/// the near end. Reversed ranges work in either position.
pub fn map_range_clamped(from: (f32, f32), to: (f32, f32), value: f32) -> f32 {
    let span = from.1 - from.0;
    let pct = if span == 0.0 {
        if value >= from.1 {
            1.0
        } else {
            0.0
        }
    } else {
        ((value - from.0) / span).clamp(0.0, 1.0)
    };
    to.0 + (to.1 - to.0) * pct
}
