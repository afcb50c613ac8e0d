//! textual encodings of custom rules
use super::{NeighborCounts, RuleSet};
use crate::error::ConfigurationError;

/// The digit strings of a rules string, before they are turned into counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParts {
    /// digits at which a dead cell is born
    pub birth: String,
    /// digits at which a living cell stays alive
    pub stay_alive: String,
}

/// The supported rules string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// `<stay alive>/<birth>`, e.g. `23/3` for conway
    StayAliveSlashBirth,
    /// `<stay alive>G<stay alive and birth>`. The digits after the `G` apply to both sets
    StayAliveGStayAliveBirth,
}

impl RuleFormat {
    /// all formats, in the order they are tried
    pub fn all() -> [RuleFormat; 2] {
        [
            RuleFormat::StayAliveSlashBirth,
            RuleFormat::StayAliveGStayAliveBirth,
        ]
    }

    fn separator(&self) -> char {
        match self {
            RuleFormat::StayAliveSlashBirth => '/',
            RuleFormat::StayAliveGStayAliveBirth => 'G',
        }
    }

    /// The format a rules string is written in: digits, exactly one separator, digits
    pub fn detect(rules: &str) -> Option<RuleFormat> {
        Self::all().iter().copied().find(|format| format.matches(rules))
    }

    /// checks whether `rules` is written in this format
    pub fn matches(&self, rules: &str) -> bool {
        let separator = self.separator();
        rules.chars().filter(|c| *c == separator).count() == 1
            && rules
                .chars()
                .all(|c| c == separator || c.is_ascii_digit())
    }

    /// Splits a rules string of this format in to its birth and stay alive digits
    pub fn rule_parts(&self, rules: &str) -> Result<RuleParts, ConfigurationError> {
        let mut parts = rules.splitn(2, self.separator());
        let before = parts.next().unwrap_or_default();
        let after = parts.next().unwrap_or_default();
        if before.is_empty() && after.is_empty() {
            return Err(ConfigurationError::MissingRuleParts);
        }

        Ok(match self {
            RuleFormat::StayAliveSlashBirth => RuleParts {
                birth: after.to_string(),
                stay_alive: before.to_string(),
            },
            RuleFormat::StayAliveGStayAliveBirth => RuleParts {
                birth: after.to_string(),
                stay_alive: format!("{}{}", after, before),
            },
        })
    }
}

/// Parses a rules string in any of the supported [RuleFormat]s
pub fn parse_rules_string(rules: &str) -> Result<RuleSet, ConfigurationError> {
    let format = RuleFormat::detect(rules)
        .ok_or_else(|| ConfigurationError::UnknownRuleFormat(rules.to_string()))?;
    let parts = format.rule_parts(rules)?;
    parse_digit_strings(&parts.birth, &parts.stay_alive)
}

/// Parses separate birth and stay alive digit strings, e.g. `"3"` and `"23"`
pub fn parse_digit_strings(birth: &str, stay_alive: &str) -> Result<RuleSet, ConfigurationError> {
    RuleSet::new(
        digits_to_counts("birth", birth)?,
        digits_to_counts("stay alive", stay_alive)?,
    )
}

fn digits_to_counts(part: &'static str, digits: &str) -> Result<NeighborCounts, ConfigurationError> {
    let counts = digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| ConfigurationError::NonNumericRules {
                    part,
                    value: digits.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    NeighborCounts::from_counts(&counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn test_slash_format() {
        assert_eq!(parse_rules_string("23/3").unwrap(), Rule::Conway.rule_set());
        let two45 = parse_rules_string("2/45").unwrap();
        assert_eq!(two45, Rule::Two45.rule_set());
    }

    #[test]
    fn test_g_format() {
        // birth = 3, stay alive = 3 + 2
        assert_eq!(parse_rules_string("2G3").unwrap(), Rule::Conway.rule_set());
        let parts = RuleFormat::StayAliveGStayAliveBirth.rule_parts("45G12").unwrap();
        assert_eq!(parts.birth, "12");
        assert_eq!(parts.stay_alive, "1245");
    }

    #[test]
    fn test_one_empty_part_is_allowed() {
        let only_birth = parse_rules_string("/3").unwrap();
        assert!(only_birth.stay_alive().is_empty());
        assert!(only_birth.birth().contains(3));

        let only_stay_alive = parse_rules_string("23/").unwrap();
        assert!(only_stay_alive.birth().is_empty());
    }

    #[test]
    fn test_empty_parts_are_rejected() {
        assert!(matches!(
            parse_rules_string("/"),
            Err(ConfigurationError::MissingRuleParts)
        ));
        assert!(matches!(
            parse_rules_string("G"),
            Err(ConfigurationError::MissingRuleParts)
        ));
    }

    #[test]
    fn test_unknown_formats() {
        for rules in ["B3/S23", "23-3", "2/3/4", "", "3"].iter() {
            assert!(
                matches!(
                    parse_rules_string(rules),
                    Err(ConfigurationError::UnknownRuleFormat(_))
                ),
                "{}",
                rules
            );
        }
    }

    #[test]
    fn test_digit_strings() {
        assert_eq!(parse_digit_strings("3", "23").unwrap(), Rule::Conway.rule_set());
        assert_eq!(parse_digit_strings("33", "3223").unwrap(), Rule::Conway.rule_set());
        assert!(matches!(
            parse_digit_strings("3a", "23"),
            Err(ConfigurationError::NonNumericRules { part: "birth", .. })
        ));
        assert!(matches!(
            parse_digit_strings("3", "29"),
            Err(ConfigurationError::CountOutOfRange(9))
        ));
        assert!(matches!(
            parse_digit_strings("", ""),
            Err(ConfigurationError::EmptyRule)
        ));
    }
}
