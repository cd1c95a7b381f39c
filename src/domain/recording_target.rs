use std::fmt;

use serde::{Deserialize, Serialize};

/// The three free-text sections of a project that accept dictation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSection {
    SiteDescription,
    ScopeOfEvaluation,
    Conclusions,
}

impl TextSection {
    pub fn label(&self) -> &'static str {
        match self {
            TextSection::SiteDescription => "site description",
            TextSection::ScopeOfEvaluation => "scope of evaluation",
            TextSection::Conclusions => "conclusions",
        }
    }
}

/// Field that a transcript will populate once its recording stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RecordingTarget {
    Observation(String),
    Section(TextSection),
}

impl fmt::Display for RecordingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingTarget::Observation(id) => write!(f, "observation {}", id),
            RecordingTarget::Section(section) => f.write_str(section.label()),
        }
    }
}
