//! Batch output of generated passwords to a writer, a file or a clipboard buffer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use zeroize::Zeroize;

use super::PasswordGenerator;
use crate::rand::RandomSource;

const DEFAULT_FILE_NAME: &str = "passgen.txt";

/// Normalize an output path: `.` or a trailing `/` names a directory and gets
/// the default file name, anything not ending in `.txt` gets the extension.
pub fn resolve_output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_FILE_NAME.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_FILE_NAME}")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}

pub fn open_append(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write `count` passwords, one per line. Each line buffer is zeroized once written.
pub fn write_batch<R, W>(generator: &mut PasswordGenerator<R>, count: usize, out: &mut W) -> Result<()>
where
    R: RandomSource,
    W: Write,
{
    debug!(count, "writing password batch");

    for _ in 0..count {
        let mut pass = generator.generate()?;
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written.context("failed to write password")?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Generate `count` passwords into one newline-separated buffer (clipboard path).
/// The caller owns the buffer and must zeroize it.
pub fn collect_batch<R: RandomSource>(generator: &mut PasswordGenerator<R>, count: usize) -> Result<String> {
    let mut passwords = String::new();
    for _ in 0..count {
        let mut pass = generator.generate()?;
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }
    Ok(passwords)
}
