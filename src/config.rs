//! Runtime settings loaded from environment variables.

use ledger_core::models::DuplicatePolicy;

/// Decimals used for course averages and JSON output when nothing is configured.
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound for `precision`; anything larger is clamped.
pub const MAX_PRECISION: usize = 6;

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Decimal places for course averages and JSON averages (from GRADE_LEDGER_PRECISION)
    pub precision: usize,
    /// Duplicate handling for finished courses (from GRADE_LEDGER_DEDUP_FINISHED)
    pub finished_courses: DuplicatePolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            finished_courses: DuplicatePolicy::Suppress,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from environment variables, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let precision = lookup("GRADE_LEDGER_PRECISION")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.precision);

        let finished_courses = lookup("GRADE_LEDGER_DEDUP_FINISHED")
            .and_then(|s| parse_bool(&s))
            .map(|dedup| {
                if dedup {
                    DuplicatePolicy::Suppress
                } else {
                    DuplicatePolicy::Allow
                }
            })
            .unwrap_or(defaults.finished_courses);

        Self::default()
            .with_precision(precision)
            .with_finished_courses(finished_courses)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn with_finished_courses(mut self, policy: DuplicatePolicy) -> Self {
        self.finished_courses = policy;
        self
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = LedgerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.precision, 2);
        assert_eq!(config.finished_courses, DuplicatePolicy::Suppress);
    }

    #[test]
    fn reads_variables() {
        let config = LedgerConfig::from_lookup(lookup_from(&[
            ("GRADE_LEDGER_PRECISION", "3"),
            ("GRADE_LEDGER_DEDUP_FINISHED", "no"),
        ]));
        assert_eq!(config.precision, 3);
        assert_eq!(config.finished_courses, DuplicatePolicy::Allow);
    }

    #[test]
    fn ignores_garbage_and_clamps() {
        let config = LedgerConfig::from_lookup(lookup_from(&[
            ("GRADE_LEDGER_PRECISION", "many"),
            ("GRADE_LEDGER_DEDUP_FINISHED", "maybe"),
        ]));
        assert_eq!(config, LedgerConfig::default());

        let config = LedgerConfig::from_lookup(lookup_from(&[("GRADE_LEDGER_PRECISION", "40")]));
        assert_eq!(config.precision, MAX_PRECISION);
    }
}
