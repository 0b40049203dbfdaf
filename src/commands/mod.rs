//! Command implementations

pub mod assist;
pub mod play;
pub mod search;
pub mod simulate;

pub use assist::{Assistant, run_assist};
pub use play::{choose_solution, play_game};
pub use search::{load_or_enumerate, run_search};
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation, select_solutions};
