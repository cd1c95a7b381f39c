use serde::{Deserialize, Serialize};

use super::BlobId;

/// A single field note attached to a project.
///
/// `audio_uri` points at a client-local recording and is never persisted; the
/// only durable effect of a recording is the transcript written to `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BlobId>,
    #[serde(skip)]
    pub audio_uri: Option<String>,
}

pub const PLACEHOLDER_OBSERVATION_CONTENT: &str = "Please add observations here.";

impl Observation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: PLACEHOLDER_OBSERVATION_CONTENT.to_string(),
            image: None,
            audio_uri: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image: BlobId) -> Self {
        self.image = Some(image);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<BlobId>,
}

impl ObservationPatch {
    pub fn apply(self, observation: &mut Observation) {
        if let Some(title) = self.title {
            observation.title = title;
        }
        if let Some(content) = self.content {
            observation.content = content;
        }
        if let Some(image) = self.image {
            observation.image = Some(image);
        }
    }
}
