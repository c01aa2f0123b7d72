//! Card configuration: class-name contract and control labels
//!
//! The stylesheet is owned by the host page; the renderer only emits the
//! class names agreed here. `default_card.yaml` documents the defaults in
//! the same format callers use for overrides.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Shared default configuration used by `render`
pub static DEFAULT_CONFIG: Lazy<CardConfig> = Lazy::new(CardConfig::default);

/// Class names the card markup carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub proposal: String,
    pub question: String,
    pub destination: String,
    pub value: String,
    pub data: String,
    pub counts: String,
    pub yes_count: String,
    pub no_count: String,
    pub vote_actions: String,
    pub button: String,
    pub vote_yes: String,
    pub vote_no: String,
    pub vote_remove: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            proposal: "proposal".to_string(),
            question: "question".to_string(),
            destination: "destination".to_string(),
            value: "value".to_string(),
            data: "data".to_string(),
            counts: "counts".to_string(),
            yes_count: "yes-count".to_string(),
            no_count: "no-count".to_string(),
            vote_actions: "vote-actions".to_string(),
            button: "button".to_string(),
            vote_yes: "vote-yes".to_string(),
            vote_no: "vote-no".to_string(),
            vote_remove: "vote-remove".to_string(),
        }
    }
}

/// Visible text of the counts and vote controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub yes_count: String,
    pub no_count: String,
    pub vote_yes: String,
    pub vote_no: String,
    pub vote_remove: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            yes_count: "Yes:".to_string(),
            no_count: "No:".to_string(),
            vote_yes: "Vote Yes".to_string(),
            vote_no: "Vote No".to_string(),
            vote_remove: "Remove Vote".to_string(),
        }
    }
}

/// Complete card configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub classes: ClassNames,
    pub labels: Labels,
}

impl CardConfig {
    /// Load from YAML; omitted keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        serde_yaml::from_str(yaml).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Load from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        serde_json::from_str(json).map_err(|e| RenderError::Config(e.to_string()))
    }
}
