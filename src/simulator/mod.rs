//! Steps a board from one generation to the next and decides when a simulation is over.
//!
//! Every step reads only the current generation and writes only a freshly allocated next one, so
//! the order in which cells are visited never matters.
mod history;

pub use history::{BoardHistory, HISTORY_SIZE};

use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::ConfigurationError;
use crate::rules::RuleSet;
use crate::types::{CellStateGettableBoard, Coordinate, SimulatorInstruments};

/// Why a simulation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// the configured number of steps has been calculated
    MaxStepsReached,
    /// no living cells are left
    BoardEmpty,
    /// the current board equals one in the history
    LoopDetected,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::MaxStepsReached => write!(f, "max steps reached"),
            TerminationReason::BoardEmpty => write!(f, "board is empty"),
            TerminationReason::LoopDetected => write!(f, "loop detected"),
        }
    }
}

/// The simulation engine. Owns the rule, the step counter and the history of past boards
#[derive(Debug, Clone)]
pub struct GameLogic {
    rule: RuleSet,
    anti_rules: bool,
    max_steps: u32,
    current_step: u32,
    history: BoardHistory,
}

impl GameLogic {
    /// Makes a simulation that stops after `max_steps`. Panics if `max_steps` is zero
    pub fn new(rule: RuleSet, max_steps: u32) -> Self {
        assert!(max_steps > 0, "max steps must be greater than zero");
        GameLogic {
            rule,
            anti_rules: false,
            max_steps,
            current_step: 1,
            history: BoardHistory::default(),
        }
    }

    /// Makes a simulation that evolves the anti rule of `rule`. Neighbor positions beyond a solid
    /// border are counted as living cells while it runs
    pub fn with_anti_rules(rule: RuleSet, max_steps: u32) -> Result<Self, ConfigurationError> {
        let mut logic = Self::new(rule.anti_rule()?, max_steps);
        logic.anti_rules = true;
        Ok(logic)
    }

    /// replaces the history with an empty one holding `size` boards
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history = BoardHistory::new(size);
        self
    }

    /// the rule cells are evolved with, already converted if anti rules are on
    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    #[allow(missing_docs)]
    pub fn uses_anti_rules(&self) -> bool {
        self.anti_rules
    }

    #[allow(missing_docs)]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// the current step, starting at 1
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[allow(missing_docs)]
    pub fn history(&self) -> &BoardHistory {
        &self.history
    }

    /// sets the step counter back to 1 and forgets the history
    pub fn reset(&mut self) {
        self.current_step = 1;
        self.history.clear();
    }

    /// the count the rule sees for the cell at `pos`
    fn neighbor_count(&self, board: &Board, pos: &Coordinate) -> usize {
        let living = board.living_neighbor_count(pos);
        if self.anti_rules {
            living + board.offgrid_neighbor_count(pos)
        } else {
            living
        }
    }

    /// Calculates one generation for the entire board
    #[instrument(level = "trace", skip_all, fields(step = self.current_step))]
    pub fn step(&mut self, board: &mut Board) {
        self.history.push(board);

        let mut next = board.empty_fields();
        for field in board.fields() {
            let pos = field.coordinate();
            let alive = self
                .rule
                .next_state(field.is_alive(), self.neighbor_count(board, &pos));
            next[pos.y as usize][pos.x as usize].set_alive(alive);
        }

        board.replace_fields(next);
        self.current_step += 1;
    }

    /// like [GameLogic::step], reporting how long the step took
    pub fn step_with_instruments<I: SimulatorInstruments>(
        &mut self,
        board: &mut Board,
        instruments: &I,
    ) {
        let start = Instant::now();
        self.step(board);
        instruments.observe_simulation(start.elapsed());
    }

    #[allow(missing_docs)]
    pub fn is_max_steps_reached(&self) -> bool {
        self.current_step >= self.max_steps
    }

    /// checks whether every cell of the board is dead
    pub fn is_empty(&self, board: &Board) -> bool {
        board.living_cell_count() == 0
    }

    /// Checks whether the board equals one of the boards in the history
    pub fn is_loop_detected(&self, board: &Board) -> bool {
        self.history.contains(board)
    }

    /// The reason the simulation should stop, if any. Max steps is checked first, then an empty
    /// board, then loops
    pub fn termination(&self, board: &Board) -> Option<TerminationReason> {
        if self.is_max_steps_reached() {
            Some(TerminationReason::MaxStepsReached)
        } else if self.is_empty(board) {
            Some(TerminationReason::BoardEmpty)
        } else if self.is_loop_detected(board) {
            Some(TerminationReason::LoopDetected)
        } else {
            None
        }
    }

    #[allow(missing_docs)]
    pub fn is_finished(&self, board: &Board) -> bool {
        self.termination(board).is_some()
    }

    /// Steps the board until the simulation is over
    pub fn run(&mut self, board: &mut Board) -> TerminationReason {
        loop {
            if let Some(reason) = self.termination(board) {
                debug!(
                    %reason,
                    step = self.current_step,
                    living = board.living_cell_count(),
                    "simulation finished"
                );
                return reason;
            }
            self.step(board);
        }
    }
}
