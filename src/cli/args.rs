use clap::Parser;
use clap::builder::RangedU64ValueParser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "passgen",
    version,
    about = "Generate passwords from character classes, optionally with per-class minimums"
)]
pub struct Args {
    /// Password length (positive integer)
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Number of passwords to generate (at least 1)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub number: Option<usize>,

    /// Exclude lowercase/uppercase letters
    #[arg(long)]
    pub no_letters: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude symbols (!@#$%^&*)
    #[arg(long)]
    pub no_symbols: bool,

    /// Never uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Minimum number of digits
    #[arg(long, value_name = "N")]
    pub min_numbers: Option<usize>,

    /// Minimum number of symbols
    #[arg(long, value_name = "N")]
    pub min_symbols: Option<usize>,

    /// Minimum number of uppercase letters
    #[arg(long, value_name = "N")]
    pub min_uppercases: Option<usize>,

    /// Append passwords to a file (default: ./passgen.txt)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".")]
    pub output: Option<String>,

    /// Copy passwords to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Start from saved settings instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings for later --saved runs
    #[arg(long)]
    pub save: bool,

    /// Seed for reproducible output (not for real passwords)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print estimated entropy to stderr
    #[arg(short, long)]
    pub entropy: bool,
}

impl Args {
    pub fn has_requirements(&self) -> bool {
        self.min_numbers.is_some() || self.min_symbols.is_some() || self.min_uppercases.is_some()
    }
}
