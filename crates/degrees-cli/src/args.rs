//! Command-line argument parsing.
//!
//! `degrees [directory] [--max-depth N] [--json]` — the positional
//! directory overrides `data.directory` from config/env.

use degrees_core::config::CliOverrides;
use degrees_core::errors::CliError;

/// Parsed command line.
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub overrides: CliOverrides,
    pub json: bool,
}

/// Parse everything after the program name.
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args, CliError> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--max-depth" => {
                let value = iter.next().ok_or(CliError::Usage)?;
                let depth = value.parse::<u32>().map_err(|_| CliError::Usage)?;
                parsed.overrides.max_depth = Some(depth);
            }
            flag if flag.starts_with('-') => return Err(CliError::Usage),
            directory => {
                if parsed.overrides.data_directory.is_some() {
                    return Err(CliError::Usage);
                }
                parsed.overrides.data_directory = Some(directory.to_string());
            }
        }
    }

    Ok(parsed)
}
