//! Character pools and pool construction.

use super::Configuration;
use crate::error::{GenerateError, Result};

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!@#$%^&*";
pub const NUMBERS: &str = "0123456789";

/// Which pool a character of a generated password belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn of(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(CharClass::Lowercase),
            'A'..='Z' => Some(CharClass::Uppercase),
            '0'..='9' => Some(CharClass::Digit),
            _ if SYMBOLS.contains(c) => Some(CharClass::Symbol),
            _ => None,
        }
    }
}

/// Concatenate the enabled pools, letters first, then symbols, then numbers.
pub fn build_valuable_symbols(config: &Configuration) -> Result<Vec<char>> {
    let mut chars: Vec<char> = Vec::new();

    if config.includes_letters {
        chars.extend(LETTERS.chars());
    }

    if config.includes_symbols {
        chars.extend(SYMBOLS.chars());
    }

    if config.includes_numbers {
        chars.extend(NUMBERS.chars());
    }

    if chars.is_empty() {
        return Err(GenerateError::NoEligibleSymbols);
    }

    Ok(chars)
}

/// Effective alphabet size, counting uppercase letters when casing applies.
pub fn pool_size(config: &Configuration) -> usize {
    let mut size = 0;
    if config.includes_letters {
        size += LETTERS.len();
        if config.includes_upper_cases {
            size += LETTERS.len();
        }
    }
    if config.includes_symbols {
        size += SYMBOLS.len();
    }
    if config.includes_numbers {
        size += NUMBERS.len();
    }
    size
}

/// Estimated entropy in bits for a password of the configured length.
pub fn entropy_bits(config: &Configuration) -> f64 {
    match pool_size(config) {
        0 => 0.0,
        n => config.password_length as f64 * (n as f64).log2(),
    }
}

pub fn strength(bits: f64) -> &'static str {
    match bits {
        b if b < 40.0 => "weak",
        b if b < 64.0 => "fair",
        b if b < 100.0 => "strong",
        _ => "very strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(letters: bool, symbols: bool, numbers: bool) -> Configuration {
        Configuration {
            includes_letters: letters,
            includes_symbols: symbols,
            includes_numbers: numbers,
            includes_upper_cases: false,
            password_length: 8,
            password_requirements: None,
        }
    }

    #[test]
    fn test_pool_order_letters_symbols_numbers() {
        let pool: String = build_valuable_symbols(&config(true, true, true))
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(pool, format!("{LETTERS}{SYMBOLS}{NUMBERS}"));
    }

    #[test]
    fn test_pool_single_class() {
        let pool: String = build_valuable_symbols(&config(false, false, true))
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(pool, NUMBERS);
    }

    #[test]
    fn test_pool_empty_fails() {
        assert_eq!(
            build_valuable_symbols(&config(false, false, false)),
            Err(GenerateError::NoEligibleSymbols)
        );
    }

    #[test]
    fn test_uppercase_flag_does_not_change_pool() {
        let mut c = config(true, false, false);
        c.includes_upper_cases = true;
        assert_eq!(build_valuable_symbols(&c).unwrap().len(), 26);
    }

    #[test]
    fn test_char_class() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('^'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of('~'), None);
    }

    #[test]
    fn test_pool_size_counts_casing_only_with_letters() {
        let mut c = config(true, true, true);
        assert_eq!(pool_size(&c), 44);
        c.includes_upper_cases = true;
        assert_eq!(pool_size(&c), 70);
        c.includes_letters = false;
        assert_eq!(pool_size(&c), 18);
    }

    #[test]
    fn test_entropy_bits() {
        let c = config(false, false, true);
        let bits = entropy_bits(&c);
        assert!((bits - 8.0 * 10f64.log2()).abs() < 1e-9);
        assert_eq!(entropy_bits(&config(false, false, false)), 0.0);
    }

    #[test]
    fn test_strength_bands() {
        assert_eq!(strength(20.0), "weak");
        assert_eq!(strength(50.0), "fair");
        assert_eq!(strength(80.0), "strong");
        assert_eq!(strength(128.0), "very strong");
    }
}
