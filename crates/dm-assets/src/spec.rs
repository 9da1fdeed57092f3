use std::path::Path;

use serde::{Deserialize, Serialize};

use dm_core::{
    Consideration, ConsiderationScore, DecisionHistoryConsideration, DecisionResult,
    FixedConsideration, HistoryQueryTime, OptionSet, ResultMask, UtilityOption,
};

use crate::error::AssetError;

/// Serializable option set, loadable from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSetSpec {
    pub options: Vec<OptionSpec>,
}

impl OptionSetSpec {
    pub fn from_yaml(text: &str) -> Result<Self, AssetError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Build a runtime option set usable with any context type.
    pub fn build<W>(&self) -> OptionSet<W> {
        OptionSet::new(self.options.iter().map(OptionSpec::build).collect())
    }
}

/// One authored option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSpec {
    pub name: String,
    pub rank: f32,
    pub base_addend: f32,
    pub considerations: Vec<ConsiderationSpec>,
}

impl Default for OptionSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            rank: 0.0,
            base_addend: default_base_addend(),
            considerations: Vec::new(),
        }
    }
}

impl OptionSpec {
    pub fn build<W>(&self) -> UtilityOption<W> {
        let mut option = UtilityOption::new(self.name.clone())
            .with_rank(self.rank)
            .with_base_addend(self.base_addend);
        for consideration in &self.considerations {
            option = option.with_boxed_consideration(consideration.build());
        }
        option
    }
}

/// One consideration entry in an authored option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsiderationSpec {
    /// Scores from how long ago the named option last ran (see
    /// [`DecisionHistoryConsideration`]).
    DecisionHistory {
        option: String,
        #[serde(default = "default_query_time")]
        query: HistoryQueryTime,
        /// Results to match; empty matches nothing, so the option counts as never having run.
        #[serde(default)]
        results: Vec<DecisionResult>,
        #[serde(default = "default_unit_range")]
        time_range: [f32; 2],
        #[serde(default = "default_unit_range")]
        multiplier_range: [f32; 2],
        #[serde(default)]
        description: String,
    },
    /// Constant addend / multiplier contribution.
    Fixed {
        #[serde(default)]
        addend: f32,
        #[serde(default = "default_multiplier")]
        multiplier: f32,
        #[serde(default)]
        description: String,
    },
}

impl ConsiderationSpec {
    pub fn build<W>(&self) -> Box<dyn Consideration<W>> {
        match self {
            ConsiderationSpec::DecisionHistory {
                option,
                query,
                results,
                time_range,
                multiplier_range,
                description,
            } => {
                let mask: ResultMask = results.iter().copied().collect();
                Box::new(
                    DecisionHistoryConsideration::new(option.clone(), *query, mask)
                        .with_time_range(time_range[0], time_range[1])
                        .with_multiplier_range(multiplier_range[0], multiplier_range[1])
                        .with_description(description.clone()),
                )
            }
            ConsiderationSpec::Fixed {
                addend,
                multiplier,
                description,
            } => Box::new(
                FixedConsideration::new(ConsiderationScore {
                    addend: *addend,
                    multiplier: *multiplier,
                })
                .with_description(description.clone()),
            ),
        }
    }
}

fn default_base_addend() -> f32 {
    1.0
}

fn default_multiplier() -> f32 {
    1.0
}

fn default_query_time() -> HistoryQueryTime {
    HistoryQueryTime::Ended
}

fn default_unit_range() -> [f32; 2] {
    [0.0, 1.0]
}
