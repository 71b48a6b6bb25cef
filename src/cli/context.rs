//! CLI context - bundles settings, flags, and clipboard state.

use std::path::Path;

use anyhow::{Result, anyhow};
use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, info, warn};
use zeroize::Zeroize;

use super::{Args, prompts};
use crate::pass::{PasswordGenerator, PasswordRequirements, charset, output, parse_length};
use crate::rand::{self, RandomSource, Randomizer, SeededRand};
use crate::settings::Settings;

/// Where a batch ends up.
enum Target {
    Terminal,
    File(String),
    Clipboard(ClipboardContext),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Result<Self> {
        prompts::set_quiet(args.quiet);

        let settings = if args.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                warn!(error = %format!("{e:#}"), "ignoring saved settings");
                prompts::warn(&format!("Failed to load settings: {e:#}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let mut ctx = Self { settings, args };
        ctx.apply_flags()?;
        Ok(ctx)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<()> {
        let config = &mut self.settings.generator;

        if let Some(ref raw) = self.args.length {
            config.password_length = parse_length(raw)?;
        }
        if let Some(num) = self.args.number {
            self.settings.number_of_passwords = num;
        }

        if self.args.no_letters {
            config.includes_letters = false;
        }
        if self.args.no_numbers {
            config.includes_numbers = false;
        }
        if self.args.no_symbols {
            config.includes_symbols = false;
        }
        if self.args.no_uppercase {
            config.includes_upper_cases = false;
        }

        if self.args.has_requirements() {
            let base = config.password_requirements.unwrap_or_default();
            config.password_requirements = Some(PasswordRequirements {
                min_numbers: self.args.min_numbers.unwrap_or(base.min_numbers),
                min_symbols: self.args.min_symbols.unwrap_or(base.min_symbols),
                min_uppercases: self.args.min_uppercases.unwrap_or(base.min_uppercases),
            });
        }

        debug!(settings = ?self.settings, "effective settings");
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        if self.args.save {
            self.settings.save_to_file()?;
            prompts::settings_saved(&Settings::path().display().to_string());
        }

        if self.args.entropy {
            let config = &self.settings.generator;
            let bits = charset::entropy_bits(config);
            prompts::entropy(
                bits,
                charset::strength(bits),
                rand::entropy_source(),
                charset::pool_size(config),
            );
        }

        let target = self.target();
        match self.args.seed {
            Some(seed) => {
                info!(seed, "using seeded generator");
                self.emit(SeededRand::new(seed), target)
            }
            None => self.emit(rand::Rand::new(), target),
        }
    }

    fn target(&self) -> Target {
        if self.args.clipboard {
            match ClipboardContext::new() {
                Ok(c) => return Target::Clipboard(c),
                Err(e) => {
                    debug!(error = %e, "clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }

        match self.args.output {
            Some(ref path) => Target::File(output::resolve_output_path(path)),
            None => Target::Terminal,
        }
    }

    /// Generate passwords and handle output.
    fn emit<R: RandomSource>(&self, source: R, target: Target) -> Result<()> {
        // `-n` is validated by clap; a hand-edited settings file can still hold 0.
        let count = self.settings.number_of_passwords.max(1);
        let mut generator =
            PasswordGenerator::with_randomizer(self.settings.generator.clone(), Randomizer::with_source(source));

        match target {
            Target::Terminal => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                output::write_batch(&mut generator, count, &mut out)
            }
            Target::File(path) => {
                let mut file = output::open_append(Path::new(&path))?;
                output::write_batch(&mut generator, count, &mut file)?;
                let full_path = std::fs::canonicalize(&path)
                    .map(|p| p.display().to_string())
                    .unwrap_or(path);
                prompts::passwords_written(count, &full_path);
                Ok(())
            }
            Target::Clipboard(mut ctx) => {
                let mut passwords = output::collect_batch(&mut generator, count)?;
                let result = ctx.set_contents(passwords.clone());
                passwords.zeroize();
                match result {
                    Ok(()) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                        Ok(())
                    }
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                        Err(anyhow!("failed to copy to clipboard: {e}"))
                    }
                }
            }
        }
    }
}
