//! The top-level response of a LUIS query.

use serde::{Deserialize, Serialize};

use super::{nullable_vec, EntityRecommendation, IntentRecommendation};

/// Intents and entities returned for one utterance, in service order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LuisResult {
    /// The utterance as the service received it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub intents: Vec<IntentRecommendation>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub entities: Vec<EntityRecommendation>,
}

impl LuisResult {
    /// Returns the first entity of the given type, if any. Matching is exact.
    pub fn try_find_entity(&self, entity_type: &str) -> Option<&EntityRecommendation> {
        self.entities.iter().find(|e| e.entity_type == entity_type)
    }

    /// Returns every entity of the given type, in response order.
    pub fn find_entities<'a>(
        &'a self,
        entity_type: &'a str,
    ) -> impl Iterator<Item = &'a EntityRecommendation> + 'a {
        self.entities
            .iter()
            .filter(move |e| e.entity_type == entity_type)
    }

    /// Returns the highest-scoring intent. Unscored intents rank last and
    /// ties go to the earlier intent.
    pub fn top_intent(&self) -> Option<&IntentRecommendation> {
        let mut best: Option<&IntentRecommendation> = None;
        for intent in &self.intents {
            let score = intent.score.unwrap_or(f64::NEG_INFINITY);
            let better = match best {
                Some(b) => score > b.score.unwrap_or(f64::NEG_INFINITY),
                None => true,
            };
            if better {
                best = Some(intent);
            }
        }
        best
    }
}
