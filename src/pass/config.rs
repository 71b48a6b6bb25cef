//! Generation input: enabled character classes, target length and per-class minimums.

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Minimum counts per class. A count only applies when its class is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordRequirements {
    pub min_numbers: usize,
    pub min_symbols: usize,
    pub min_uppercases: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub includes_numbers: bool,
    pub includes_letters: bool,
    pub includes_symbols: bool,
    /// Only has an effect together with `includes_letters`.
    pub includes_upper_cases: bool,
    pub password_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_requirements: Option<PasswordRequirements>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            includes_numbers: true,
            includes_letters: true,
            includes_symbols: true,
            includes_upper_cases: true,
            password_length: 16,
            password_requirements: None,
        }
    }
}

impl Configuration {
    /// Uppercasing is meaningful only when letters are in the pool.
    pub fn uses_upper_cases(&self) -> bool {
        self.includes_upper_cases && self.includes_letters
    }

    /// Requirement counts with disabled classes zeroed out.
    pub fn effective_requirements(&self) -> PasswordRequirements {
        let Some(req) = self.password_requirements else {
            return PasswordRequirements::default();
        };

        PasswordRequirements {
            min_numbers: if self.includes_numbers { req.min_numbers } else { 0 },
            min_symbols: if self.includes_symbols { req.min_symbols } else { 0 },
            min_uppercases: if self.uses_upper_cases() {
                req.min_uppercases
            } else {
                0
            },
        }
    }
}

impl PasswordRequirements {
    pub fn total(&self) -> usize {
        self.min_numbers + self.min_symbols + self.min_uppercases
    }
}

/// Coerce a length given as text (form field, CLI argument) to a positive integer.
pub fn parse_length(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(GenerateError::InvalidLength(raw.to_string())),
        Ok(n) => Ok(n),
    }
}
