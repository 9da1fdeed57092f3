use crate::clock::Clock;
use crate::consideration::DecisionContext;
use crate::history::{BehaviorOutcome, DecisionHistory, ResultMask};
use crate::option::OptionSet;
use crate::rng::RandomSource;
use crate::score::OptionScore;
use crate::scorer::score_option;
use crate::selector;

/// Tunables recognized by the decision maker. None of them are validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionMakerConfig {
    /// Options whose weights are close enough to the best weight take part in the random draw.
    pub minimum_weight_fraction_for_random_selection: f32,
}

impl Default for DecisionMakerConfig {
    fn default() -> Self {
        Self {
            minimum_weight_fraction_for_random_selection: 0.95,
        }
    }
}

/// Result of one evaluation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// An option was selected. `changed` is false when the already-running commitment was left
    /// alone.
    Selected {
        score: OptionScore<String>,
        changed: bool,
    },
    /// No option had positive weight. The previous commitment is left untouched.
    NoneFound,
}

/// Observation hook invoked during every cycle. All methods default to no-ops.
///
/// This is the core's entire trace surface; it carries no conditional debug logic of its own.
pub trait DecisionObserver: 'static {
    fn on_evaluated(&mut self, _score: &OptionScore<&str>) {}

    fn on_selected(&mut self, _score: &OptionScore<&str>) {}

    fn on_option_changed(&mut self, _old_option: Option<&str>, _new_option: &str) {}

    fn on_no_option_found(&mut self) {}
}

/// Orchestrates evaluation cycles and records decision outcomes.
///
/// Not reentrant-safe: the embedding system must serialize calls to `run_cycle`, the two
/// behavior notifications and the history queries onto one logical thread of control. The only
/// mutable state is the commitment and the history, both owned here.
pub struct DecisionMaker<W> {
    config: DecisionMakerConfig,
    option_sets: Vec<OptionSet<W>>,
    current_option: Option<String>,
    history: DecisionHistory,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    observers: Vec<Box<dyn DecisionObserver>>,
}

impl<W: 'static> DecisionMaker<W> {
    pub fn new(clock: impl Clock, rng: impl RandomSource) -> Self {
        Self {
            config: DecisionMakerConfig::default(),
            option_sets: Vec::new(),
            current_option: None,
            history: DecisionHistory::new(),
            clock: Box::new(clock),
            rng: Box::new(rng),
            observers: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DecisionMakerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the history, e.g. to change its record cap.
    pub fn with_history(mut self, history: DecisionHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_option_set(mut self, set: OptionSet<W>) -> Self {
        self.add_option_set(set);
        self
    }

    pub fn add_option_set(&mut self, set: OptionSet<W>) {
        self.option_sets.push(set);
    }

    pub fn register_observer(&mut self, observer: impl DecisionObserver) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> DecisionMakerConfig {
        self.config
    }

    /// The committed option's name, if any. The associated behavior may or may not have started.
    pub fn current_option(&self) -> Option<&str> {
        self.current_option.as_deref()
    }

    pub fn history(&self) -> &DecisionHistory {
        &self.history
    }

    /// Run one evaluation cycle over the base option sets.
    pub fn run_cycle(&mut self, world: &W) -> SelectionOutcome {
        self.run_cycle_with(world, &[])
    }

    /// Run one evaluation cycle over the base option sets plus `extra_sets`.
    ///
    /// Scores every option, keeps the positive-weight ones, selects per the rank/weight rules and
    /// commits the winner. Re-selecting the option whose behavior is currently in progress leaves
    /// the commitment alone; anything else replaces it and notifies observers. A cycle with no
    /// eligible option reports that and leaves the previous commitment untouched.
    pub fn run_cycle_with(&mut self, world: &W, extra_sets: &[OptionSet<W>]) -> SelectionOutcome {
        let now = self.clock.now();
        let ctx = DecisionContext {
            world,
            history: &self.history,
            current_option: self.current_option.as_deref(),
            now,
        };

        let mut scores = Vec::new();
        for set in self.option_sets.iter().chain(extra_sets.iter()) {
            for option in &set.options {
                let score = score_option(option, &ctx);
                let named = score.map(|option| option.name.as_str());
                for observer in &mut self.observers {
                    observer.on_evaluated(&named);
                }

                if score.weight > 0.0 {
                    scores.push(score);
                }
            }
        }

        let fraction = self.config.minimum_weight_fraction_for_random_selection;
        let Some(selected) = selector::select(scores, fraction, self.rng.as_mut()) else {
            for observer in &mut self.observers {
                observer.on_no_option_found();
            }
            return SelectionOutcome::NoneFound;
        };

        let score = selected.map(|option| option.name.clone());
        let changed = self.commit(&score);

        let named = OptionScore {
            rank: score.rank,
            weight: score.weight,
            option: score.option.as_str(),
        };
        for observer in &mut self.observers {
            observer.on_selected(&named);
        }

        SelectionOutcome::Selected { score, changed }
    }

    /// The behavior executor actually began running the committed option's behavior.
    ///
    /// Opens a fresh in-flight decision record stamped with the current time.
    pub fn notify_behavior_started(&mut self) {
        let now = self.clock.now();
        let name = self.current_option.clone().unwrap_or_default();
        self.history.begin(&name, now);
    }

    /// The behavior executor finished (or aborted) the behavior it last started.
    ///
    /// Completes the record captured at start time, which is the right one even if the
    /// commitment has since moved on to a different option.
    pub fn notify_behavior_ended(&mut self, outcome: BehaviorOutcome) {
        let now = self.clock.now();
        self.history.finish(now, outcome.into());
    }

    /// Seconds since `option_name` last started with a result in `results`, or -1.
    pub fn time_since_started(&self, option_name: &str, results: ResultMask) -> f32 {
        self.history
            .time_since_started(self.clock.now(), option_name, results)
    }

    /// Seconds since `option_name` last ended with a result in `results`, or -1.
    pub fn time_since_ended(&self, option_name: &str, results: ResultMask) -> f32 {
        self.history
            .time_since_ended(self.clock.now(), option_name, results)
    }

    fn commit(&mut self, score: &OptionScore<String>) -> bool {
        // Re-selecting the option that is currently running (its record is still in flight)
        // never interrupts it.
        if self.current_option.as_deref() == Some(score.option.as_str())
            && self.history.current().in_progress()
        {
            return false;
        }

        let old = std::mem::replace(&mut self.current_option, Some(score.option.clone()));
        for observer in &mut self.observers {
            observer.on_option_changed(old.as_deref(), &score.option);
        }
        true
    }
}
