use std::collections::{HashMap, HashSet};

use super::{Observation, Project, RecordingTarget, TextSection};

/// Pending input for a free-text section, not yet committed to the project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDraft {
    pub input: String,
    pub editing: bool,
}

/// Client-side working copy of the fields a transcript can land in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDrafts {
    observations: Vec<Observation>,
    reviewing: HashSet<String>,
    sections: HashMap<TextSection, SectionDraft>,
}

impl FieldDrafts {
    pub fn from_project(project: &Project) -> Self {
        let mut drafts = Self {
            observations: project.observations.clone(),
            ..Self::default()
        };
        let seeds = [
            (TextSection::SiteDescription, &project.site_description_text),
            (TextSection::ScopeOfEvaluation, &project.scope_of_evaluation_text),
            (TextSection::Conclusions, &project.conclusions_text),
        ];
        for (section, text) in seeds {
            drafts.sections.insert(
                section,
                SectionDraft {
                    input: text.clone().unwrap_or_default(),
                    editing: false,
                },
            );
        }
        drafts
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn observation(&self, id: &str) -> Option<&Observation> {
        self.observations.iter().find(|o| o.id == id)
    }

    pub fn push_observation(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn remove_observation(&mut self, id: &str) -> bool {
        self.reviewing.remove(id);
        let before = self.observations.len();
        self.observations.retain(|o| o.id != id);
        self.observations.len() != before
    }

    pub fn is_reviewing(&self, observation_id: &str) -> bool {
        self.reviewing.contains(observation_id)
    }

    pub fn section(&self, section: TextSection) -> SectionDraft {
        self.sections.get(&section).cloned().unwrap_or_default()
    }

    pub fn set_audio_uri(&mut self, observation_id: &str, uri: &str) {
        if let Some(obs) = self
            .observations
            .iter_mut()
            .find(|o| o.id == observation_id)
        {
            obs.audio_uri = Some(uri.to_string());
        }
    }

    /// Writes `text` into the target field and flags it for review.
    /// Returns `false` when the target observation no longer exists.
    pub fn apply_transcript(&mut self, target: &RecordingTarget, text: &str) -> bool {
        match target {
            RecordingTarget::Observation(id) => {
                match self.observations.iter_mut().find(|o| &o.id == id) {
                    Some(obs) => {
                        obs.content = text.to_string();
                        self.reviewing.insert(id.clone());
                        true
                    }
                    None => false,
                }
            }
            RecordingTarget::Section(section) => {
                let draft = self.sections.entry(*section).or_default();
                draft.input = text.to_string();
                draft.editing = true;
                true
            }
        }
    }
}
