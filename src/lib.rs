#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for running two dimensional cellular automata in the style of
//! [Conway's game of life](https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life).
//!
//! A [board::Board] holds the cells and knows its topology, a [rules::RuleSet] decides the next
//! state of a single cell, and [simulator::GameLogic] steps a whole board while watching for the
//! end of a simulation: too many steps, no living cells, or a board that was already seen.
//! ```
//! use life_game_types::{board_fixture, simulator::{GameLogic, TerminationReason}};
//! use life_game_types::{rules::Rule, types::Topology};
//!
//! let mut board = board_fixture(".....\n..X..\n..X..\n..X..\n.....", Topology::Solid);
//! let mut logic = GameLogic::new(Rule::Conway.rule_set(), 50);
//! assert_eq!(logic.run(&mut board), TerminationReason::LoopDetected);
//! ```

use board::Board;
use config::SimulationConfig;
use inputs::template::Template;
use types::Topology;

pub mod board;
pub mod config;
pub mod error;
pub mod inputs;
pub mod rules;
pub mod simulator;
pub mod types;

/// Loads a board from a template literal
pub fn board_fixture(template: &str, topology: Topology) -> Board {
    let template = Template::parse(template).expect("the template literal is valid");
    let mut board = Board::new(template.width(), template.height(), topology);
    board.replace_with(&template);
    board
}

/// Loads a simulation config from a json literal
pub fn config_fixture(config: &str) -> SimulationConfig {
    SimulationConfig::from_json(config).expect("the json literal is valid")
}
