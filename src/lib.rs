pub mod cli;
pub mod codec;
pub mod logger;
pub mod report;
pub mod segment;

use std::path::Path;

use anyhow::{Context, Result};

pub use codec::{DecodeError, decode_padded, pad, padding_needed};
pub use report::{DEFAULT_INPUT, Report};
pub use segment::{SegmentKind, SegmentOutcome, SegmentReport};

/// Resolves a command-line argument to the base64 text to probe.
///
/// An existing file is read and trimmed; anything else is taken literally.
pub fn resolve_input(arg: Option<&str>) -> Result<String> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_INPUT.to_string());
    };

    let path = Path::new(arg);
    if path.is_file() {
        log::debug!("Reading input from {}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(data.trim().to_string())
    } else {
        Ok(arg.to_string())
    }
}
