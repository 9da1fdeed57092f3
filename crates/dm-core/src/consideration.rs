use crate::history::{DecisionHistory, ResultMask};
use crate::score::ConsiderationScore;

/// Inputs available to considerations during one evaluation cycle.
///
/// The world is whatever the embedding agent needs its considerations to see; the core never
/// looks inside it. History access is read-only.
pub struct DecisionContext<'a, W> {
    pub world: &'a W,
    pub history: &'a DecisionHistory,
    pub current_option: Option<&'a str>,
    /// Monotonic seconds at the start of the cycle.
    pub now: f32,
}

impl<W> Clone for DecisionContext<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for DecisionContext<'_, W> {}

impl<W> DecisionContext<'_, W> {
    /// Seconds since `option_name` last started with a result in `results`, or -1.
    pub fn time_since_started(&self, option_name: &str, results: ResultMask) -> f32 {
        self.history.time_since_started(self.now, option_name, results)
    }

    /// Seconds since `option_name` last ended with a result in `results`, or -1.
    pub fn time_since_ended(&self, option_name: &str, results: ResultMask) -> f32 {
        self.history.time_since_ended(self.now, option_name, results)
    }
}

/// A pure scoring function over the decision context.
///
/// Implementations must be safe to call any number of times with no side effects on shared
/// state; reading the history through the context is fine. Plain closures implement this
/// directly for ad-hoc considerations.
pub trait Consideration<W>: 'static {
    fn score(&self, ctx: &DecisionContext<'_, W>) -> ConsiderationScore;

    /// Identity shown by tooling next to this consideration's scores.
    fn description(&self) -> &str {
        ""
    }
}

impl<W, F> Consideration<W> for F
where
    F: Fn(&DecisionContext<'_, W>) -> ConsiderationScore + 'static,
{
    fn score(&self, ctx: &DecisionContext<'_, W>) -> ConsiderationScore {
        self(ctx)
    }
}
