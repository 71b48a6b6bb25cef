//! Password generation from character-class flags, with optional per-class
//! minimum counts.
//!
//! ```no_run
//! use passgen::pass::{Configuration, PasswordGenerator, PasswordRequirements};
//!
//! let config = Configuration {
//!     password_length: 12,
//!     password_requirements: Some(PasswordRequirements {
//!         min_numbers: 2,
//!         min_symbols: 1,
//!         min_uppercases: 1,
//!     }),
//!     ..Configuration::default()
//! };
//! let password = PasswordGenerator::new(config).generate()?;
//! # Ok::<(), passgen::GenerateError>(())
//! ```

pub mod cli;
pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::GenerateError;
