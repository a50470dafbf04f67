//! Intent records and the dialog actions LUIS attaches to them.

use serde::{Deserialize, Serialize};

use super::{nullable_vec, EntityRecommendation};

/// An intent the service matched, with its confidence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IntentRecommendation {
    /// Intent name as defined in the LUIS application.
    pub intent: String,

    /// Confidence in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Dialog actions bound to this intent. Usually empty.
    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub actions: Vec<Action>,
}

/// An action LUIS associates with an intent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Action {
    /// Whether all required parameters were filled.
    #[serde(default)]
    pub triggered: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<ActionParameter>,
}

/// A parameter slot of an [`Action`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActionParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Entities that filled this slot.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub value: Vec<EntityRecommendation>,
}
