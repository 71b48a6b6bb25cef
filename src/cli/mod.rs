//! Command-line front end.

mod args;
mod context;
pub mod prompts;

pub use args::Args;
pub use context::Context;

use anyhow::Result;
use clap::Parser;

pub fn run() -> Result<()> {
    let mut ctx = Context::new(Args::parse())?;
    ctx.run()
}
