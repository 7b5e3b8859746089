use std::io::Write;

use serde::Serialize;

use crate::codec::decode_padded;
use crate::segment::SegmentReport;

/// Share parameter the probe runs against when no input is given.
pub const DEFAULT_INPUT: &str =
    "V1hWdHwzOjM5NzM3NzQwNzQzNzI4NzI5NzM2NzM0NzMxNzM1NzMzNzQyNzM4NzQxNzMyNzMwMA";

pub const SEPARATOR: char = '|';

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Failed {
        error: String,
    },
    Decoded {
        decoded: String,
        parts: Vec<String>,
        segments: Vec<SegmentReport>,
    },
}

impl Report {
    /// Decodes the outer payload, splits it and probes every segment.
    ///
    /// An outer decode failure ends the run with `Report::Failed`; a segment
    /// that fails to decode is recorded and the remaining segments still run.
    pub fn build(input: &str) -> Self {
        let decoded = match decode_padded(input) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::debug!("[report] outer decode failed: {e}");
                return Report::Failed {
                    error: e.to_string(),
                };
            }
        };

        let parts: Vec<String> = decoded.split(SEPARATOR).map(str::to_string).collect();
        log::debug!("[report] {} part(s) in {} bytes", parts.len(), decoded.len());

        let segments = parts
            .iter()
            .enumerate()
            .map(|(i, part)| SegmentReport::probe(i, part))
            .collect();

        Report::Decoded {
            decoded,
            parts,
            segments,
        }
    }

    /// Writes the report as text lines.
    ///
    /// The decoded text and the parts list use `Debug` quoting, so strings
    /// appear in double quotes (`"a|b"`, `["a", "b"]`).
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Report::Failed { error } => writeln!(out, "Error decoding: {error}"),
            Report::Decoded {
                decoded,
                parts,
                segments,
            } => {
                writeln!(out, "Decoded data: {decoded:?}")?;
                writeln!(out, "Number of parts: {}", parts.len())?;
                writeln!(out, "Parts: {parts:?}")?;
                for segment in segments {
                    writeln!(out, "{}", segment.line())?;
                }
                Ok(())
            }
        }
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
