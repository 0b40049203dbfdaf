//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_assist_turn, print_game_record, print_search_report, print_simulation_statistics,
};
