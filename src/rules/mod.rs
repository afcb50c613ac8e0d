//! Birth and stay alive rules.
//!
//! A [RuleSet] is plain data: the neighbor counts at which a dead cell is born and the counts at
//! which a living cell stays alive. [Rule] is the closed table of named rules a simulation can be
//! configured with.
mod rule_format;

pub use rule_format::{parse_digit_strings, parse_rules_string, RuleFormat, RuleParts};

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::error::ConfigurationError;

/// the largest number of living neighbors a cell can have
pub const MAX_NEIGHBORS: u8 = 8;

const ALL_COUNTS_MASK: u16 = (1 << (MAX_NEIGHBORS + 1)) - 1;

/// A set of neighbor counts between 0 and 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct NeighborCounts(u16);

impl NeighborCounts {
    /// a set without counts
    pub const fn empty() -> Self {
        NeighborCounts(0)
    }

    /// every count from 0 to 8
    pub const fn all() -> Self {
        NeighborCounts(ALL_COUNTS_MASK)
    }

    /// Builds a set from counts that are known to be in range. Used for the named rules
    const fn from_known(counts: &[u8]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < counts.len() {
            mask |= 1 << counts[i];
            i += 1;
        }
        NeighborCounts(mask)
    }

    /// Builds a set from arbitrary counts, rejecting anything above 8. Duplicates collapse
    pub fn from_counts(counts: &[u8]) -> Result<Self, ConfigurationError> {
        counts.iter().try_fold(Self::empty(), |set, &count| {
            if count > MAX_NEIGHBORS {
                Err(ConfigurationError::CountOutOfRange(count))
            } else {
                Ok(NeighborCounts(set.0 | 1 << count))
            }
        })
    }

    /// checks whether `count` is part of this set
    pub fn contains(&self, count: usize) -> bool {
        count <= MAX_NEIGHBORS as usize && self.0 & (1 << count) != 0
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// the counts in this set, ascending
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        let mask = self.0;
        (0..=MAX_NEIGHBORS).filter(move |&count| mask & (1 << count) != 0)
    }

    /// `{8 - c : c in self}`
    pub fn mirrored(&self) -> Self {
        NeighborCounts(
            self.iter()
                .fold(0, |mask, count| mask | 1 << (MAX_NEIGHBORS - count)),
        )
    }

    /// `{0..8} \ self`
    pub fn complement(&self) -> Self {
        NeighborCounts(!self.0 & ALL_COUNTS_MASK)
    }

    #[allow(missing_docs)]
    pub fn union(&self, other: &NeighborCounts) -> Self {
        NeighborCounts(self.0 | other.0)
    }
}

impl TryFrom<Vec<u8>> for NeighborCounts {
    type Error = ConfigurationError;

    fn try_from(counts: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_counts(&counts)
    }
}

impl From<NeighborCounts> for Vec<u8> {
    fn from(counts: NeighborCounts) -> Self {
        counts.iter().collect()
    }
}

impl fmt::Display for NeighborCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in self.iter() {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}

/// The neighbor counts that drive one simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRuleSet", into = "RawRuleSet")]
pub struct RuleSet {
    birth: NeighborCounts,
    stay_alive: NeighborCounts,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRuleSet {
    birth: NeighborCounts,
    stay_alive: NeighborCounts,
}

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = ConfigurationError;

    fn try_from(raw: RawRuleSet) -> Result<Self, Self::Error> {
        RuleSet::new(raw.birth, raw.stay_alive)
    }
}

impl From<RuleSet> for RawRuleSet {
    fn from(rule_set: RuleSet) -> Self {
        RawRuleSet {
            birth: rule_set.birth,
            stay_alive: rule_set.stay_alive,
        }
    }
}

impl RuleSet {
    /// Makes a rule set, failing if both sets are empty
    pub fn new(
        birth: NeighborCounts,
        stay_alive: NeighborCounts,
    ) -> Result<Self, ConfigurationError> {
        if birth.is_empty() && stay_alive.is_empty() {
            return Err(ConfigurationError::EmptyRule);
        }
        Ok(RuleSet { birth, stay_alive })
    }

    /// Makes a rule set from lists of counts
    pub fn from_counts(birth: &[u8], stay_alive: &[u8]) -> Result<Self, ConfigurationError> {
        Self::new(
            NeighborCounts::from_counts(birth)?,
            NeighborCounts::from_counts(stay_alive)?,
        )
    }

    const fn known(birth: &[u8], stay_alive: &[u8]) -> Self {
        RuleSet {
            birth: NeighborCounts::from_known(birth),
            stay_alive: NeighborCounts::from_known(stay_alive),
        }
    }

    /// counts at which a dead cell is born
    pub fn birth(&self) -> NeighborCounts {
        self.birth
    }

    /// counts at which a living cell stays alive
    pub fn stay_alive(&self) -> NeighborCounts {
        self.stay_alive
    }

    /// the state of a cell in the next generation
    #[inline]
    pub fn next_state(&self, alive: bool, living_neighbors: usize) -> bool {
        if alive {
            self.stay_alive.contains(living_neighbors)
        } else {
            self.birth.contains(living_neighbors)
        }
    }

    /// Converts this rule to its anti rule, which evolves the inverted pattern.
    ///
    /// Both new sets are derived from the original sets:
    /// `stay_alive' = {0..8} \ {8 - b : b in birth}` and
    /// `birth' = {0..8} \ {8 - s : s in stay_alive}`.
    /// Applying it twice yields the original rule. Returns an error only if the anti rule of a
    /// "everything is born, everything survives" rule would be empty
    pub fn anti_rule(&self) -> Result<RuleSet, ConfigurationError> {
        let stay_alive = self.birth.mirrored().complement();
        let birth = self.stay_alive.mirrored().complement();
        RuleSet::new(birth, stay_alive)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.stay_alive)
    }
}

/// The rules a simulation can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// B3/S23
    Conway,
    /// B1357/S1357, every pattern replicates itself
    Copy,
    /// B45/S2
    Two45,
    /// B3/S12345, grows maze like corridors
    Labyrinth,
    /// B01234/S0123
    BlinkingStains,
    /// user supplied counts
    Custom(RuleSet),
}

impl Rule {
    /// the named rules, in the order they are listed to users
    pub fn all_named() -> [Rule; 5] {
        [
            Rule::Conway,
            Rule::Copy,
            Rule::Two45,
            Rule::Labyrinth,
            Rule::BlinkingStains,
        ]
    }

    /// Looks up a named rule, ignoring case. `custom` is not in the table because it needs
    /// counts, see [parse_rules_string]
    pub fn from_name(name: &str) -> Result<Rule, ConfigurationError> {
        Self::all_named()
            .iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownRule(name.to_string()))
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Conway => "Conway",
            Rule::Copy => "Copy",
            Rule::Two45 => "Two45",
            Rule::Labyrinth => "Labyrinth",
            Rule::BlinkingStains => "BlinkingStains",
            Rule::Custom(_) => "Custom",
        }
    }

    /// the counts this rule stands for
    pub fn rule_set(&self) -> RuleSet {
        match self {
            Rule::Conway => RuleSet::known(&[3], &[2, 3]),
            Rule::Copy => RuleSet::known(&[1, 3, 5, 7], &[1, 3, 5, 7]),
            Rule::Two45 => RuleSet::known(&[4, 5], &[2]),
            Rule::Labyrinth => RuleSet::known(&[3], &[1, 2, 3, 4, 5]),
            Rule::BlinkingStains => RuleSet::known(&[0, 1, 2, 3, 4], &[0, 1, 2, 3]),
            Rule::Custom(rule_set) => *rule_set,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.rule_set())
    }
}
