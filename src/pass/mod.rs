//! Password generation and output.

pub mod charset;
mod config;
mod generate;
pub mod output;

pub use config::{Configuration, PasswordRequirements, parse_length};
pub use generate::PasswordGenerator;
