//! The model descriptor: which LUIS application to query and with which key.

use crate::Error;

/// Identifies a published LUIS application and the key used to query it.
#[derive(Clone, PartialEq, Eq)]
pub struct LuisModel {
    model_id: String,
    subscription_key: String,
}

impl LuisModel {
    /// Creates a model descriptor. Both values must be non-blank.
    pub fn new(model_id: &str, subscription_key: &str) -> Result<Self, Error> {
        if model_id.trim().is_empty() {
            return Err(Error::InvalidModel { field: "model_id" });
        }
        if subscription_key.trim().is_empty() {
            return Err(Error::InvalidModel {
                field: "subscription_key",
            });
        }
        Ok(Self {
            model_id: model_id.to_string(),
            subscription_key: subscription_key.to_string(),
        })
    }

    /// The LUIS application id, sent as the `id` query parameter.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The subscription key, sent as the `subscription-key` query parameter.
    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }
}

impl std::fmt::Debug for LuisModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuisModel")
            .field("model_id", &self.model_id)
            .field("subscription_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        assert!(matches!(
            LuisModel::new("", "key"),
            Err(Error::InvalidModel { field: "model_id" })
        ));
        assert!(matches!(
            LuisModel::new("app", "  "),
            Err(Error::InvalidModel {
                field: "subscription_key"
            })
        ));
    }

    #[test]
    fn debug_hides_key() {
        let model = LuisModel::new("app-id", "secret-key").unwrap();
        let printed = format!("{:?}", model);
        assert!(printed.contains("app-id"));
        assert!(!printed.contains("secret-key"));
    }
}
