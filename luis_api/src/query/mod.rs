//! Query URL building for the LUIS v1 application endpoint.

use url::Url;

use crate::types::LuisModel;

/// Default LUIS v1 application endpoint.
pub const LUIS_BASE_URL: &str = "https://api.projectoxford.ai/luis/v1/application";

/// Trait implemented by query builders. Serializes a query onto an endpoint URL.
pub trait Query {
    /// Returns a copy of `url` carrying this query's parameters.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// A single utterance to be scored against a LUIS model.
pub struct LuisQuery<'a> {
    pub model: &'a LuisModel,
    pub text: &'a str,
}

impl<'a> LuisQuery<'a> {
    pub fn new(model: &'a LuisModel, text: &'a str) -> Self {
        Self { model, text }
    }
}

impl Query for LuisQuery<'_> {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("id", self.model.model_id())
            .append_pair("subscription-key", self.model.subscription_key())
            .append_pair("q", self.text);
        url
    }
}
