use serde::{Deserialize, Serialize};

/// An entity recognized in the utterance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecommendation {
    /// The matched text.
    pub entity: String,

    /// Entity type name as defined in the LUIS application.
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Character offset where the match starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    /// Character offset of the last matched character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Resolved value for prebuilt entities (dates, numbers, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<serde_json::Map<String, serde_json::Value>>,
}
