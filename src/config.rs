//! JSON configuration of a whole simulation
use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::board::Board;
use crate::error::ConfigurationError;
use crate::inputs::BoardObject;
use crate::rules::{parse_digit_strings, parse_rules_string, Rule, RuleSet};
use crate::simulator::GameLogic;
use crate::types::Topology;

/// the name `rules` takes when the rule comes from the custom rule fields
pub const CUSTOM_RULE_NAME: &str = "custom";

/// Everything needed to set up a board and the logic stepping it. Missing keys take the default
/// values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    /// number of columns
    pub width: u32,
    /// number of rows
    pub height: u32,
    /// what happens at the edges of the board
    pub border: Topology,
    /// the step at which the simulation stops
    pub max_steps: u32,
    /// a rule name such as `Conway`, or `custom`
    pub rules: String,
    /// a custom rule in one of the rules string formats
    pub rules_string: Option<String>,
    /// custom birth digits, used with `rules_stay_alive` when there is no rules string
    pub rules_birth: Option<String>,
    /// custom stay alive digits
    pub rules_stay_alive: Option<String>,
    /// evolve the anti rule instead of the rule
    pub anti_rules: bool,
    /// an object such as `Glider`, placed at the center of the board
    pub object: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 20,
            height: 10,
            border: Topology::Solid,
            max_steps: 50,
            rules: Rule::Conway.name().to_string(),
            rules_string: None,
            rules_birth: None,
            rules_stay_alive: None,
            anti_rules: false,
            object: None,
        }
    }
}

impl SimulationConfig {
    /// Reads and validates a configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        // a json array would otherwise be read as the fields in declaration order
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigurationError::Malformed(serde_json::Error::custom(
                "a simulation config must be a json object",
            )));
        }
        let config: SimulationConfig = serde_json::from_value(value)?;
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            border = %config.border,
            max_steps = config.max_steps,
            rules = %config.rules,
            anti_rules = config.anti_rules,
            "loaded simulation config"
        );
        Ok(config)
    }

    /// Checks every value, including the rule, without building anything
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 {
            return Err(ConfigurationError::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(ConfigurationError::ZeroDimension("height"));
        }
        if self.max_steps == 0 {
            return Err(ConfigurationError::ZeroMaxSteps);
        }
        self.rule_set()?;
        self.board_object()?;
        Ok(())
    }

    /// The configured object, if any
    pub fn board_object(&self) -> Result<Option<BoardObject>, ConfigurationError> {
        self.object
            .as_deref()
            .map(BoardObject::from_name)
            .transpose()
    }

    /// The configured rule, before any anti rule conversion
    pub fn rule_set(&self) -> Result<RuleSet, ConfigurationError> {
        if !self.rules.eq_ignore_ascii_case(CUSTOM_RULE_NAME) {
            return Ok(Rule::from_name(&self.rules)?.rule_set());
        }

        match (&self.rules_string, &self.rules_birth, &self.rules_stay_alive) {
            (Some(rules), _, _) => parse_rules_string(rules),
            (None, None, None) => Err(ConfigurationError::NoRulesSpecified),
            // a missing digit string is an empty set
            (None, birth, stay_alive) => parse_digit_strings(
                birth.as_deref().unwrap_or_default(),
                stay_alive.as_deref().unwrap_or_default(),
            ),
        }
    }

    /// The board, holding the configured object if there is one, and the logic to step it
    pub fn build(&self) -> Result<(Board, GameLogic), ConfigurationError> {
        self.validate()?;
        let rule = self.rule_set()?;
        let logic = if self.anti_rules {
            GameLogic::with_anti_rules(rule, self.max_steps)?
        } else {
            GameLogic::new(rule, self.max_steps)
        };
        let mut board = Board::new(self.width, self.height, self.border);
        if let Some(object) = self.board_object()? {
            let center = board.center();
            object.place_on(&mut board, center)?;
        }
        Ok((board, logic))
    }
}
