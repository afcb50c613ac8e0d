#![allow(missing_docs)]
//! error types for configuring simulations and placing cells
use thiserror::Error;

use crate::types::BorderSide;

/// Raised while a simulation is being configured, before any step runs
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("a rule needs at least one birth or stay alive count")]
    EmptyRule,

    #[error("neighbor count {0} is out of range, counts go from 0 to 8")]
    CountOutOfRange(u8),

    #[error("unknown rules format: {0:?}")]
    UnknownRuleFormat(String),

    #[error("the {part} rules string may contain only digits, got {value:?}")]
    NonNumericRules { part: &'static str, value: String },

    #[error("the rules string must contain at least 1 set rule part")]
    MissingRuleParts,

    #[error("no rules specified for the custom rule")]
    NoRulesSpecified,

    #[error("unknown rule: {0:?}")]
    UnknownRule(String),

    #[error("unknown object: {0:?}")]
    UnknownObject(String),

    #[error("the board {0} must be greater than zero")]
    ZeroDimension(&'static str),

    #[error("max steps must be greater than zero")]
    ZeroMaxSteps,

    #[error("the configured object does not fit: {0}")]
    Placement(#[from] TemplateError),

    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raised by the input collaborators that write cells into a board
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TemplateError {
    #[error("the template has no rows")]
    Empty,

    #[error("template row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("the template exceeds the {0} border of the board")]
    OutOfBounds(BorderSide),

    #[error("fill percentage {0} must be between 0 and 100")]
    FillPercentage(f64),
}
