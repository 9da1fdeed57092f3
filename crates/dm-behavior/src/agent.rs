use dm_core::{BehaviorOutcome, DecisionMaker, SelectionOutcome};

use crate::behavior::{BehaviorRuntime, BehaviorSet};

/// How often an agent re-evaluates its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    pub think_every_ticks: u32,
    pub think_offset_ticks: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            think_every_ticks: 1,
            think_offset_ticks: 0,
        }
    }
}

impl AgentConfig {
    /// Spread agents with the same cadence across different ticks.
    pub fn staggered(agent_id: u64, think_every_ticks: u32) -> Self {
        let every = think_every_ticks.max(1);
        let offset = (agent_id % (every as u64)) as u32;
        Self {
            think_every_ticks: every,
            think_offset_ticks: offset,
        }
    }

    pub fn should_think(&self, tick: u64) -> bool {
        let every = self.think_every_ticks.max(1) as u64;
        ((tick + (self.think_offset_ticks as u64)) % every) == 0
    }
}

/// Periodic driver tying a [`DecisionMaker`] to its behavior executor.
///
/// On think ticks it runs a decision cycle; when the commitment changes it cancels the old
/// behavior (recording an aborted attempt), launches the new one and signals the maker that it
/// started. Every tick it advances the running behavior and forwards a terminal outcome back
/// into the maker's history.
pub struct DecisionAgent<W> {
    maker: DecisionMaker<W>,
    behaviors: BehaviorSet<W>,
    runtime: BehaviorRuntime<W>,
    config: AgentConfig,
    paused: bool,
}

impl<W: 'static> DecisionAgent<W> {
    pub fn new(maker: DecisionMaker<W>, behaviors: BehaviorSet<W>) -> Self {
        Self {
            maker,
            behaviors,
            runtime: BehaviorRuntime::new(),
            config: AgentConfig::default(),
            paused: false,
        }
    }

    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn maker(&self) -> &DecisionMaker<W> {
        &self.maker
    }

    pub fn maker_mut(&mut self) -> &mut DecisionMaker<W> {
        &mut self.maker
    }

    /// The option whose behavior is actually running, which can lag the maker's commitment.
    pub fn running_option(&self) -> Option<&str> {
        self.runtime.current_option()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume. Pausing stops decision making and behavior ticking without cancelling
    /// anything.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Cancel the running behavior, recording it as aborted. The commitment is left as-is.
    pub fn stop(&mut self, world: &mut W) {
        if self.runtime.cancel_current(world) {
            self.maker.notify_behavior_ended(BehaviorOutcome::Aborted);
        }
    }

    pub fn tick(&mut self, tick: u64, world: &mut W) {
        if self.paused {
            return;
        }

        if self.config.should_think(tick) {
            if let SelectionOutcome::Selected { score, changed } = self.maker.run_cycle(world) {
                if changed {
                    self.launch(&score.option, world);
                }
            }
        }

        if let Some(outcome) = self.runtime.tick(world) {
            self.maker.notify_behavior_ended(outcome);
        }
    }

    fn launch(&mut self, option_name: &str, world: &mut W) {
        // The interrupted attempt goes to history before the new record opens.
        if self.runtime.cancel_current(world) {
            self.maker.notify_behavior_ended(BehaviorOutcome::Aborted);
        }

        let Some(behavior) = self.behaviors.build(option_name, world) else {
            tracing::warn!(option = option_name, "no behavior registered for selected option");
            return;
        };

        tracing::debug!(option = option_name, "starting option behavior");
        self.runtime.start(option_name, behavior, world);
        self.maker.notify_behavior_started();
    }
}
