//! Scenario building: config → input → step log.

use std::fmt;
use std::str::FromStr;

use algoviz_engine::{
    bfs_steps, generate_array, generate_grid, GridLog, Mulberry32, SortAlgorithm, SortLog,
};
use algoviz_topology::{CellCoord, Grid};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which algorithm a scenario runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Bfs,
}

impl Algorithm {
    /// The sorting algorithm, for sorting scenarios.
    pub fn sort_algorithm(&self) -> Option<SortAlgorithm> {
        match self {
            Algorithm::Bubble => Some(SortAlgorithm::Bubble),
            Algorithm::Insertion => Some(SortAlgorithm::Insertion),
            Algorithm::Bfs => None,
        }
    }

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Bfs => "bfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "bfs" => Ok(Algorithm::Bfs),
            other => Err(Error::InvalidConfig(format!("unknown algorithm: {other}"))),
        }
    }
}

/// Configuration for a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Algorithm to run
    pub algorithm: Algorithm,
    /// Number of values for sorting scenarios
    pub array_len: usize,
    /// Seed text; `None` or empty draws a fresh seed per build
    pub seed: Option<String>,
    /// Side length for search scenarios
    pub grid_size: usize,
    /// Per-cell wall probability for search scenarios
    pub wall_probability: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ScenarioConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            array_len: 30,
            seed: None,
            grid_size: 20,
            wall_probability: 0.25,
        }
    }

    /// Built-in defaults overridden by `ALGOVIZ_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::builtin();

        if let Some(value) = lookup("ALGOVIZ_ALGORITHM") {
            match value.parse() {
                Ok(algorithm) => config.algorithm = algorithm,
                Err(e) => tracing::warn!(%value, error = %e, "ignoring ALGOVIZ_ALGORITHM"),
            }
        }
        if let Some(value) = lookup("ALGOVIZ_ARRAY_LEN") {
            match value.parse() {
                Ok(len) => config.array_len = len,
                Err(e) => tracing::warn!(%value, error = %e, "ignoring ALGOVIZ_ARRAY_LEN"),
            }
        }
        if let Some(value) = lookup("ALGOVIZ_SEED") {
            config.seed = Some(value);
        }
        if let Some(value) = lookup("ALGOVIZ_GRID_SIZE") {
            match value.parse() {
                Ok(size) => config.grid_size = size,
                Err(e) => tracing::warn!(%value, error = %e, "ignoring ALGOVIZ_GRID_SIZE"),
            }
        }
        if let Some(value) = lookup("ALGOVIZ_WALL_PROB") {
            match value.parse() {
                Ok(p) => config.wall_probability = p,
                Err(e) => tracing::warn!(%value, error = %e, "ignoring ALGOVIZ_WALL_PROB"),
            }
        }

        config
    }

    fn rng(&self) -> Mulberry32 {
        Mulberry32::from_seed_str(self.seed.as_deref().unwrap_or(""))
    }
}

/// The input a scenario's algorithm runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScenarioInput {
    Array {
        values: Vec<u32>,
    },
    Grid {
        grid: Grid,
        source: CellCoord,
        destination: CellCoord,
    },
}

/// The step log of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScenarioSteps {
    Sort(SortLog<u32>),
    Grid(GridLog),
}

impl ScenarioSteps {
    /// Number of steps.
    pub fn len(&self) -> usize {
        match self {
            ScenarioSteps::Sort(log) => log.len(),
            ScenarioSteps::Grid(log) => log.len(),
        }
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counts describing a built scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub algorithm: Algorithm,
    pub seed: u32,
    pub input_size: usize,
    pub steps: usize,
    /// Path length in cells for search scenarios; `Some(0)` when unreachable
    pub path_len: Option<usize>,
}

/// A generated input together with its step log.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    algorithm: Algorithm,
    /// Seed the input was drawn with
    seed: u32,
    input: ScenarioInput,
    steps: ScenarioSteps,
    #[serde(skip)]
    config: ScenarioConfig,
}

impl Scenario {
    /// Generate input and steps for `config`.
    pub fn build(config: ScenarioConfig) -> Result<Self> {
        let mut rng = config.rng();
        let seed = rng.state();
        let algorithm = config.algorithm;

        let (input, steps) = match algorithm.sort_algorithm() {
            Some(sort) => {
                let values = generate_array(config.array_len, &mut rng)?;
                let steps = sort.generate_steps(&values);
                (ScenarioInput::Array { values }, ScenarioSteps::Sort(steps))
            }
            None => {
                let grid = generate_grid(config.grid_size, config.wall_probability, &mut rng)?;
                let (source, destination) = (grid.top_left(), grid.bottom_right());
                let steps = bfs_steps(&grid, source, destination)?;
                let input = ScenarioInput::Grid {
                    grid,
                    source,
                    destination,
                };
                (input, ScenarioSteps::Grid(steps))
            }
        };

        tracing::info!(%algorithm, seed, steps = steps.len(), "scenario built");
        Ok(Self {
            algorithm,
            seed,
            input,
            steps,
            config,
        })
    }

    /// Regenerate input and steps from the same config.
    ///
    /// With a seed configured this reproduces the same input.
    pub fn reshuffle(&mut self) -> Result<()> {
        *self = Self::build(self.config.clone())?;
        Ok(())
    }

    /// The algorithm this scenario runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The integer seed the input was drawn with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The config this scenario was built from.
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// The generated input.
    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }

    /// The step log.
    pub fn steps(&self) -> &ScenarioSteps {
        &self.steps
    }

    /// Array values, for sorting scenarios.
    pub fn values(&self) -> Option<&[u32]> {
        match &self.input {
            ScenarioInput::Array { values } => Some(values),
            ScenarioInput::Grid { .. } => None,
        }
    }

    /// Grid, for search scenarios.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.input {
            ScenarioInput::Grid { grid, .. } => Some(grid),
            ScenarioInput::Array { .. } => None,
        }
    }

    /// Flip a wall and regenerate the search log on the edited grid.
    ///
    /// If the edit makes the search invalid (a wall on an endpoint) it is
    /// undone and the error returned.
    pub fn toggle_wall(&mut self, coord: CellCoord) -> Result<()> {
        self.edit_grid("toggle_wall", |grid, _, _| {
            grid.toggle_wall(coord)?;
            Ok(())
        })
    }

    /// Move the search source and regenerate the log.
    pub fn set_source(&mut self, coord: CellCoord) -> Result<()> {
        self.edit_grid("set_source", |_, source, _| {
            *source = coord;
            Ok(())
        })
    }

    /// Move the search destination and regenerate the log.
    pub fn set_destination(&mut self, coord: CellCoord) -> Result<()> {
        self.edit_grid("set_destination", |_, _, destination| {
            *destination = coord;
            Ok(())
        })
    }

    fn edit_grid(
        &mut self,
        operation: &'static str,
        edit: impl FnOnce(&mut Grid, &mut CellCoord, &mut CellCoord) -> Result<()>,
    ) -> Result<()> {
        let ScenarioInput::Grid {
            grid,
            source,
            destination,
        } = &self.input
        else {
            return Err(Error::WrongAlgorithm {
                operation,
                algorithm: self.algorithm,
            });
        };

        let (mut grid, mut source, mut destination) = (grid.clone(), *source, *destination);
        edit(&mut grid, &mut source, &mut destination)?;
        let steps = bfs_steps(&grid, source, destination)?;

        tracing::debug!(operation, steps = steps.len(), "search log regenerated");
        self.input = ScenarioInput::Grid {
            grid,
            source,
            destination,
        };
        self.steps = ScenarioSteps::Grid(steps);
        Ok(())
    }

    /// Counts for logging and `--summary`.
    pub fn summary(&self) -> ScenarioSummary {
        let (input_size, path_len) = match (&self.input, &self.steps) {
            (ScenarioInput::Grid { grid, .. }, ScenarioSteps::Grid(log)) => {
                (grid.size(), Some(log.path().len()))
            }
            (ScenarioInput::Array { values }, _) => (values.len(), None),
            (ScenarioInput::Grid { grid, .. }, _) => (grid.size(), None),
        };
        ScenarioSummary {
            algorithm: self.algorithm,
            seed: self.seed,
            input_size,
            steps: self.steps.len(),
            path_len,
        }
    }

    /// Serialize input and steps as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
