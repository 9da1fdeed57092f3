use std::collections::BTreeMap;

use dm_core::BehaviorOutcome;

/// Status of a running behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorStatus {
    Running,
    Succeeded,
    Failed,
}

impl BehaviorStatus {
    pub fn outcome(self) -> Option<BehaviorOutcome> {
        match self {
            BehaviorStatus::Running => None,
            BehaviorStatus::Succeeded => Some(BehaviorOutcome::Succeeded),
            BehaviorStatus::Failed => Some(BehaviorOutcome::Failed),
        }
    }
}

/// The behavior associated with a committed option.
///
/// The decision core does not care what a behavior does; the executor only starts, ticks and
/// cancels them. Cancellation is cooperative and reported to history as an aborted attempt.
pub trait Behavior<W>: 'static {
    fn tick(&mut self, world: &mut W) -> BehaviorStatus;

    fn cancel(&mut self, _world: &mut W) {}
}

type BehaviorFactory<W> = Box<dyn FnMut(&mut W) -> Box<dyn Behavior<W>>>;

/// Maps option names to behavior factories.
pub struct BehaviorSet<W> {
    factories: BTreeMap<String, BehaviorFactory<W>>,
}

impl<W> Default for BehaviorSet<W> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
}

impl<W> BehaviorSet<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(
        mut self,
        option_name: impl Into<String>,
        factory: impl FnMut(&mut W) -> Box<dyn Behavior<W>> + 'static,
    ) -> Self {
        self.insert(option_name, factory);
        self
    }

    pub fn insert(
        &mut self,
        option_name: impl Into<String>,
        factory: impl FnMut(&mut W) -> Box<dyn Behavior<W>> + 'static,
    ) {
        self.factories.insert(option_name.into(), Box::new(factory));
    }

    pub fn contains(&self, option_name: &str) -> bool {
        self.factories.contains_key(option_name)
    }

    pub fn build(&mut self, option_name: &str, world: &mut W) -> Option<Box<dyn Behavior<W>>> {
        let factory = self.factories.get_mut(option_name)?;
        Some(factory(world))
    }
}

struct RunningBehavior<W> {
    option_name: String,
    behavior: Box<dyn Behavior<W>>,
}

/// Holds the currently-running behavior, if any.
pub struct BehaviorRuntime<W> {
    current: Option<RunningBehavior<W>>,
}

impl<W> Default for BehaviorRuntime<W> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<W: 'static> BehaviorRuntime<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_option(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.option_name.as_str())
    }

    pub fn is_running(&self, option_name: &str) -> bool {
        self.current_option() == Some(option_name)
    }

    /// Cancel the running behavior. Returns true when one was actually cancelled.
    pub fn cancel_current(&mut self, world: &mut W) -> bool {
        let Some(mut current) = self.current.take() else {
            return false;
        };
        current.behavior.cancel(world);
        true
    }

    /// Replace the running behavior, cancelling any previous one first.
    pub fn start(
        &mut self,
        option_name: impl Into<String>,
        behavior: Box<dyn Behavior<W>>,
        world: &mut W,
    ) {
        self.cancel_current(world);
        self.current = Some(RunningBehavior {
            option_name: option_name.into(),
            behavior,
        });
    }

    /// Advance the running behavior; returns the terminal outcome when it finishes, clearing
    /// the slot.
    pub fn tick(&mut self, world: &mut W) -> Option<BehaviorOutcome> {
        let current = self.current.as_mut()?;
        let status = current.behavior.tick(world);
        let outcome = status.outcome()?;
        self.current = None;
        Some(outcome)
    }
}
