//! Validate-and-execute step: turns an argument list into a written file.

use crate::args::parse_args;
use crate::error::{GenError, Result};
use crate::output::write_output;
use crate::payload::payload;
use std::ffi::OsString;
use std::path::PathBuf;

/// The one flag the generator requires.
pub const OUTPUT_FLAG: &str = "output";

/// Parses `tokens` (program name excluded), then writes the payload to `--output`.
///
/// An empty `--output` value counts as missing. Returns the path written.
/// Other flags are accepted and have no effect.
pub fn run<I, S>(tokens: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args = parse_args(tokens);
    tracing::debug!(flags = args.len(), "arguments parsed");

    let output = args
        .value(OUTPUT_FLAG)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or(GenError::MissingArgument(OUTPUT_FLAG))?;

    write_output(&output, payload())?;
    Ok(output)
}
