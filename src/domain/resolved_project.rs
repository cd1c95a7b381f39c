use std::collections::HashMap;

use serde::Serialize;

use super::Project;

/// A project whose blob references have been resolved to fetchable URLs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProject {
    #[serde(flatten)]
    pub project: Project,
    pub cover_photo_url: Option<String>,
    /// Keyed by observation id; observations without a resolvable image are absent.
    pub observation_image_urls: HashMap<String, String>,
}

impl ResolvedProject {
    pub fn unresolved(project: Project) -> Self {
        Self {
            project,
            cover_photo_url: None,
            observation_image_urls: HashMap::new(),
        }
    }

    pub fn image_url(&self, observation_id: &str) -> Option<&str> {
        self.observation_image_urls
            .get(observation_id)
            .map(String::as_str)
    }
}
