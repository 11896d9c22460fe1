use tracing::debug;

use crate::models::ExerciseSuggestion;

use super::exercise_catalog::{bodyweight_suggestions, equipment_suggestions};

/// Most suggestions returned for one request.
pub const MAX_SUGGESTIONS: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct EquipmentAdvisor;

impl EquipmentAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Suggestions for the given equipment tags, in tag order and table order
    /// within a tag. Falls back to bodyweight exercises when no tag matches.
    pub fn suggest<S: AsRef<str>>(&self, equipment: &[S]) -> Vec<ExerciseSuggestion> {
        let mut suggestions: Vec<ExerciseSuggestion> = equipment
            .iter()
            .filter_map(|tag| equipment_suggestions(tag.as_ref()))
            .flat_map(|records| records.iter().cloned())
            .collect();

        if suggestions.is_empty() {
            debug!("No equipment tag matched; using bodyweight exercises");
            suggestions.extend(bodyweight_suggestions().iter().cloned());
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
