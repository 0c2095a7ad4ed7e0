use crate::model_spec::{ReactionSpec, SolutionFillSpec, SpeciesSpec};
use serde::{Deserialize, Serialize};

/// Top-level wrapper for a model YAML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub schema_version: String,
    #[serde(default)]
    pub model_id: Option<String>,
    pub species: Vec<SpeciesSpec>,
    #[serde(default)]
    pub solution_fills: Vec<SolutionFillSpec>,
    #[serde(default)]
    pub reactions: Vec<ReactionSpec>,
}
