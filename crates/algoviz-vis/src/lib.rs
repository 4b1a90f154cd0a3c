//! algoviz visualization support
//!
//! Everything a renderer needs around a step log, short of drawing.
//!
//! # Architecture
//!
//! - **Scenario**: Generates an input from a config and records its step log
//! - **Playback**: Cursor that walks the log one step per tick
//! - **Snapshot**: Rebuilds array or grid state at any cursor position
//!
//! # Usage
//!
//! ```
//! use algoviz_vis::{Algorithm, ArraySnapshot, Playback, Scenario, ScenarioConfig, ScenarioSteps};
//!
//! let config = ScenarioConfig {
//!     algorithm: Algorithm::Insertion,
//!     seed: Some("demo".into()),
//!     ..ScenarioConfig::builtin()
//! };
//! let scenario = Scenario::build(config).unwrap();
//! let ScenarioSteps::Sort(log) = scenario.steps() else { unreachable!() };
//!
//! let mut playback = Playback::new(log.clone());
//! for _ in 0..10 {
//!     playback.step_forward();
//! }
//! let snap = ArraySnapshot::from_steps(scenario.values().unwrap(), playback.steps_to_current(), 10);
//! assert_eq!(snap.step, 10);
//! ```

mod error;
mod playback;
mod scenario;
mod snapshot;

pub use error::{Error, Result};
pub use playback::{Playback, DEFAULT_INTERVAL_MS};
pub use scenario::{Algorithm, Scenario, ScenarioConfig, ScenarioInput, ScenarioSteps, ScenarioSummary};
pub use snapshot::{ArraySnapshot, CellState, GridSnapshot, Highlight};

#[cfg(test)]
mod tests {
    use super::*;

    fn bfs_config() -> ScenarioConfig {
        ScenarioConfig {
            algorithm: Algorithm::Bfs,
            seed: Some("grid".into()),
            grid_size: 8,
            wall_probability: 0.2,
            ..ScenarioConfig::builtin()
        }
    }

    #[test]
    fn scenario_records_steps() {
        let scenario = Scenario::build(bfs_config()).unwrap();
        assert!(!scenario.steps().is_empty());
        assert_eq!(scenario.summary().input_size, 8);
    }

    #[test]
    fn playback_drives_grid_snapshots() {
        let scenario = Scenario::build(bfs_config()).unwrap();
        let ScenarioSteps::Grid(log) = scenario.steps() else {
            panic!("expected grid steps");
        };
        let ScenarioInput::Grid {
            grid,
            source,
            destination,
        } = scenario.input()
        else {
            panic!("expected grid input");
        };

        let mut playback = Playback::new(log.clone());
        playback.play();
        while playback.on_interval().is_some() {}
        assert!(!playback.is_playing());
        assert!(playback.is_finished());

        let snap = GridSnapshot::from_steps(
            grid,
            *source,
            *destination,
            playback.steps_to_current(),
            playback.total_steps(),
        );
        assert_eq!(snap.count(CellState::Path), log.path().len());
    }

    #[test]
    fn reshuffle_reloads_playback() {
        let mut scenario = Scenario::build(bfs_config()).unwrap();
        let ScenarioSteps::Grid(log) = scenario.steps().clone() else {
            panic!("expected grid steps");
        };
        let mut playback = Playback::new(log);
        playback.play();
        playback.on_interval();

        scenario.reshuffle().unwrap();
        let ScenarioSteps::Grid(log) = scenario.steps().clone() else {
            panic!("expected grid steps");
        };
        playback.reload(log);
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.total_steps(), scenario.steps().len());
        assert!(!playback.is_playing());
    }
}
