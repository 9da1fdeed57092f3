use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use dm_core::{DecisionObserver, OptionScore};

/// A decision-cycle event, recorded as dumb data for later inspection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecisionEvent {
    Evaluated {
        option: String,
        rank: f32,
        weight: f32,
    },
    Selected {
        option: String,
        rank: f32,
        weight: f32,
    },
    OptionChanged {
        old_option: Option<String>,
        new_option: String,
    },
    NoOptionFound,
}

/// Shared handle to the events captured by a [`RecordingObserver`].
pub type EventLog = Rc<RefCell<Vec<DecisionEvent>>>;

/// Records every hook invocation into a shared event log.
///
/// The maker owns its observers, so keep the [`EventLog`] handle and read the events back after
/// the fact.
#[derive(Default)]
pub struct RecordingObserver {
    events: EventLog,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> EventLog {
        Rc::clone(&self.events)
    }
}

impl DecisionObserver for RecordingObserver {
    fn on_evaluated(&mut self, score: &OptionScore<&str>) {
        self.events.borrow_mut().push(DecisionEvent::Evaluated {
            option: score.option.to_owned(),
            rank: score.rank,
            weight: score.weight,
        });
    }

    fn on_selected(&mut self, score: &OptionScore<&str>) {
        self.events.borrow_mut().push(DecisionEvent::Selected {
            option: score.option.to_owned(),
            rank: score.rank,
            weight: score.weight,
        });
    }

    fn on_option_changed(&mut self, old_option: Option<&str>, new_option: &str) {
        self.events.borrow_mut().push(DecisionEvent::OptionChanged {
            old_option: old_option.map(str::to_owned),
            new_option: new_option.to_owned(),
        });
    }

    fn on_no_option_found(&mut self) {
        self.events.borrow_mut().push(DecisionEvent::NoOptionFound);
    }
}

/// Forwards hook invocations to `tracing`.
///
/// Per-option evaluations land at trace level, selection and commitment changes at debug, and a
/// cycle with no eligible option at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn on_evaluated(&mut self, score: &OptionScore<&str>) {
        tracing::trace!(
            option = score.option,
            rank = score.rank,
            weight = score.weight,
            "evaluated option"
        );
    }

    fn on_selected(&mut self, score: &OptionScore<&str>) {
        tracing::debug!(
            option = score.option,
            rank = score.rank,
            weight = score.weight,
            "selected option"
        );
    }

    fn on_option_changed(&mut self, old_option: Option<&str>, new_option: &str) {
        tracing::debug!(old = old_option, new = new_option, "option changed");
    }

    fn on_no_option_found(&mut self) {
        tracing::warn!("no eligible option found");
    }
}
