use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::{BlobId, Observation, Project, ProjectError, Recommendation};

/// Partial update of a project document. Only fields that are `Some` overwrite
/// the stored value; arrays are replaced wholesale. `cover_photo` is the one
/// clearable field: an explicit `null` removes the cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub inspection_date: Option<String>,
    #[serde(default)]
    pub site_address: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub inspector_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_photo: Option<Option<BlobId>>,
    #[serde(default)]
    pub site_description_text: Option<String>,
    #[serde(default)]
    pub scope_of_evaluation_text: Option<String>,
    #[serde(default)]
    pub conclusions_text: Option<String>,
    #[serde(default)]
    pub observations: Option<Vec<Observation>>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default)]
    pub generated_report_url: Option<String>,
}

impl ProjectPatch {
    pub fn observations(observations: Vec<Observation>) -> Self {
        Self {
            observations: Some(observations),
            ..Self::default()
        }
    }

    pub fn recommendations(recommendations: Vec<Recommendation>) -> Self {
        Self {
            recommendations: Some(recommendations),
            ..Self::default()
        }
    }

    /// `None` clears the cover photo.
    pub fn cover_photo(cover_photo: Option<BlobId>) -> Self {
        Self {
            cover_photo: Some(cover_photo),
            ..Self::default()
        }
    }

    pub fn report_url(url: impl Into<String>) -> Self {
        Self {
            generated_report_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replacement arrays must keep ids unique; a rejected patch leaves the
    /// project untouched.
    pub fn apply(self, project: &mut Project) -> Result<(), ProjectError> {
        if let Some(observations) = &self.observations {
            if let Some(id) = first_duplicate(observations.iter().map(|o| o.id.as_str())) {
                return Err(ProjectError::DuplicateObservation(id.to_string()));
            }
        }
        if let Some(recommendations) = &self.recommendations {
            if let Some(id) = first_duplicate(recommendations.iter().map(|r| r.id.as_str())) {
                return Err(ProjectError::DuplicateRecommendation(id.to_string()));
            }
        }

        overwrite(&mut project.name, self.name);
        merge(&mut project.project_type, self.project_type);
        merge(&mut project.inspection_date, self.inspection_date);
        merge(&mut project.site_address, self.site_address);
        merge(&mut project.site_name, self.site_name);
        merge(&mut project.client_name, self.client_name);
        merge(&mut project.inspector_name, self.inspector_name);
        overwrite(&mut project.cover_photo, self.cover_photo);
        merge(&mut project.site_description_text, self.site_description_text);
        merge(&mut project.scope_of_evaluation_text, self.scope_of_evaluation_text);
        merge(&mut project.conclusions_text, self.conclusions_text);
        overwrite(&mut project.observations, self.observations);
        overwrite(&mut project.recommendations, self.recommendations);
        merge(&mut project.generated_report_url, self.generated_report_url);
        Ok(())
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Maps a present field, `null` included, to `Some`; absent fields fall back
/// to `Default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn merge<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

fn overwrite<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
