use serde::Serialize;

use crate::codec::decode_padded;

/// Role a segment plays, decided only by its index.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Name,
    SectionData,
}

impl SegmentKind {
    pub fn at(index: usize) -> Self {
        if index % 2 == 0 {
            SegmentKind::Name
        } else {
            SegmentKind::SectionData
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentOutcome {
    Name { name: String },
    UndecodableName { raw: String, error: String },
    SectionData { raw: String },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SegmentReport {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: SegmentOutcome,
}

impl SegmentReport {
    pub fn probe(index: usize, part: &str) -> Self {
        let outcome = match SegmentKind::at(index) {
            SegmentKind::Name => match decode_padded(part) {
                Ok(name) => SegmentOutcome::Name { name },
                Err(e) => {
                    log::debug!("[segment] part {index} is not a name: {e}");
                    SegmentOutcome::UndecodableName {
                        raw: part.to_string(),
                        error: e.to_string(),
                    }
                }
            },
            SegmentKind::SectionData => SegmentOutcome::SectionData {
                raw: part.to_string(),
            },
        };

        SegmentReport { index, outcome }
    }

    pub fn line(&self) -> String {
        let i = self.index;
        match &self.outcome {
            SegmentOutcome::Name { name } => format!("Part {i} (name): \"{name}\""),
            SegmentOutcome::UndecodableName { raw, error } => {
                format!("Part {i} (could not decode as name): \"{raw}\" - Error: {error}")
            }
            SegmentOutcome::SectionData { raw } => format!("Part {i} (section:data): \"{raw}\""),
        }
    }
}
