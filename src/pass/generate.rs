//! Password generation.

use tracing::{debug, trace};
use zeroize::Zeroize;

use super::Configuration;
use super::charset::{self, LETTERS, NUMBERS, SYMBOLS};
use crate::error::{GenerateError, Result};
use crate::rand::{Rand, RandomSource, Randomizer};

/// Builds passwords for one configuration. Every random decision goes
/// through the owned [`Randomizer`].
pub struct PasswordGenerator<R = Rand> {
    config: Configuration,
    randomizer: Randomizer<R>,
}

impl PasswordGenerator<Rand> {
    pub fn new(config: Configuration) -> Self {
        Self::with_randomizer(config, Randomizer::new())
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_randomizer(config: Configuration, randomizer: Randomizer<R>) -> Self {
        Self { config, randomizer }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn build_valuable_symbols(&self) -> Result<Vec<char>> {
        charset::build_valuable_symbols(&self.config)
    }

    /// One uniformly drawn character from the combined pool.
    pub fn draw_symbol(&mut self) -> Result<char> {
        let pool = self.build_valuable_symbols()?;
        self.randomizer.random_element(&pool).copied()
    }

    /// Requirements present: constrained generation, otherwise plain.
    pub fn generate(&mut self) -> Result<String> {
        if self.config.password_requirements.is_some() {
            self.generate_password_with_requirements()
        } else {
            self.generate_password()
        }
    }

    /// Draw `password_length` characters from the combined pool, flipping a
    /// coin per character for uppercase when casing applies. Draw order is
    /// the output order.
    pub fn generate_password(&mut self) -> Result<String> {
        let pool = self.build_valuable_symbols()?;
        let length = self.checked_length()?;
        let upper = self.config.uses_upper_cases();

        debug!(length, pool = pool.len(), upper, "generating password");

        let mut password = String::with_capacity(length);
        for _ in 0..length {
            let symbol = *self.randomizer.random_element(&pool)?;
            if upper && self.randomizer.random_boolean() {
                password.push(symbol.to_ascii_uppercase());
            } else {
                password.push(symbol);
            }
        }

        Ok(password)
    }

    /// Place the per-class minimums first, pad with draws from the combined
    /// pool, then shuffle so required characters land anywhere.
    pub fn generate_password_with_requirements(&mut self) -> Result<String> {
        // An empty pool is reported before any length problem.
        self.build_valuable_symbols()?;
        let length = self.checked_length()?;
        let required_total = self.config.effective_requirements().total();
        if required_total > length {
            return Err(GenerateError::RequirementsExceedLength {
                required: required_total,
                length,
            });
        }

        let required = self.required_symbols()?;
        let mut flat: Vec<char> = required
            .iter()
            .flat_map(|&(c, count)| std::iter::repeat_n(c, count))
            .collect();

        let mut chars = self.randomizer.shuffle(&flat);
        flat.zeroize();

        debug!(
            length,
            required = chars.len(),
            distinct = required.len(),
            "generating password with requirements"
        );

        while chars.len() < length {
            chars.push(self.draw_symbol()?);
        }

        let mut mixed = self.randomizer.shuffle(&chars);
        chars.zeroize();

        let password: String = mixed.iter().collect();
        mixed.zeroize();
        Ok(password)
    }

    /// Draw each class minimum from that class's own pool and tally the
    /// results as character -> count, in order of first appearance.
    fn required_symbols(&mut self) -> Result<Vec<(char, usize)>> {
        let req = self.config.effective_requirements();
        let mut tally: Vec<(char, usize)> = Vec::new();

        let classes = [
            (NUMBERS, req.min_numbers, false),
            (SYMBOLS, req.min_symbols, false),
            (LETTERS, req.min_uppercases, true),
        ];

        for (pool, count, upper) in classes {
            if count == 0 {
                continue;
            }
            let pool: Vec<char> = pool.chars().collect();
            for _ in 0..count {
                let mut c = *self.randomizer.random_element(&pool)?;
                if upper {
                    c = c.to_ascii_uppercase();
                }
                match tally.iter_mut().find(|(seen, _)| *seen == c) {
                    Some((_, n)) => *n += 1,
                    None => tally.push((c, 1)),
                }
            }
            trace!(count, upper, "drew required symbols");
        }

        Ok(tally)
    }

    fn checked_length(&self) -> Result<usize> {
        match self.config.password_length {
            0 => Err(GenerateError::InvalidLength("0".into())),
            n => Ok(n),
        }
    }
}
