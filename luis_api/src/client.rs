//! HTTP client for the LUIS v1 application endpoint.

use std::time::Duration;

use url::Url;

use crate::{
    query::{LuisQuery, Query, LUIS_BASE_URL},
    types::{LuisModel, LuisResult},
    Error,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("luis_api/", env!("CARGO_PKG_VERSION"));

/// A service that can turn an utterance into a [`LuisResult`].
///
/// [`Client`] talks to the real endpoint; callers can substitute their own
/// implementation in tests.
#[allow(async_fn_in_trait)]
pub trait LuisService {
    /// Builds the query URL for `text`.
    fn build_uri(&self, text: &str) -> Result<Url, Error>;

    /// Sends one GET to `uri` and parses the response.
    async fn query_uri(&self, uri: &Url) -> Result<LuisResult, Error>;

    /// Builds the URL for `text` and sends it.
    async fn query(&self, text: &str) -> Result<LuisResult, Error> {
        let uri = self.build_uri(text)?;
        self.query_uri(&uri).await
    }
}

/// HTTP client bound to a single LUIS model.
///
/// Holds one `reqwest::Client` with a 30-second timeout. Every query is a
/// single request; nothing is retried or cached.
pub struct Client {
    client: reqwest::Client,
    model: LuisModel,
    /// Endpoint URL. Defaults to [`LUIS_BASE_URL`].
    base_url: Url,
}

impl Client {
    /// Creates a client for `model` pointing at the production endpoint.
    pub fn new(model: LuisModel) -> Result<Self, Error> {
        Self::with_base_url(LUIS_BASE_URL, model)
    }

    /// Creates a client with a custom endpoint. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, model: LuisModel) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid endpoint URL {}: {}", base_url, e);
            Error::InvalidUrl(e)
        })?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            model,
            base_url,
        })
    }

    /// The model every query from this client is scored against.
    pub fn model(&self) -> &LuisModel {
        &self.model
    }

    /// The endpoint query parameters are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl LuisService for Client {
    fn build_uri(&self, text: &str) -> Result<Url, Error> {
        Ok(LuisQuery::new(&self.model, text).add_to_url(&self.base_url))
    }

    async fn query_uri(&self, uri: &Url) -> Result<LuisResult, Error> {
        tracing::debug!("GET {}", redact_key(uri));
        let resp = self
            .client
            .get(uri.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // reqwest puts the full URL, key included, in its messages.
                let e = e.without_url();
                tracing::error!("Failed to send query: {}", e);
                Error::Request(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Request(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Query failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<LuisResult>(&body).map_err(|e| {
            tracing::error!("Failed to parse result: {} | body: {}", e, truncate_body(&body));
            Error::Parse(e)
        })
    }
}

/// Copy of `uri` safe for logs: the subscription key is masked.
fn redact_key(uri: &Url) -> String {
    let mut redacted = uri.clone();
    let pairs: Vec<(String, String)> = uri
        .query_pairs()
        .map(|(k, v)| {
            if k == "subscription-key" {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    redacted.set_query(None);
    if !pairs.is_empty() {
        redacted.query_pairs_mut().extend_pairs(pairs);
    }
    redacted.to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_key_masks_only_the_key() {
        let uri = Url::parse(
            "https://example.com/luis?id=app&subscription-key=secret&q=hello+there",
        )
        .unwrap();
        let redacted = redact_key(&uri);
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("subscription-key=***"));
        assert!(redacted.contains("id=app"));
        assert!(redacted.contains("q=hello+there"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn build_uri_uses_base_url() {
        let model = LuisModel::new("app", "key").unwrap();
        let client = Client::with_base_url("http://localhost:9999/luis", model).unwrap();
        let uri = client.build_uri("hi").unwrap();
        assert_eq!(
            uri.as_str(),
            "http://localhost:9999/luis?id=app&subscription-key=key&q=hi"
        );
    }

    #[test]
    fn model_is_kept() {
        let model = LuisModel::new("app", "key").unwrap();
        let client = Client::new(model.clone()).unwrap();
        assert_eq!(client.model(), &model);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let model = LuisModel::new("app", "key").unwrap();
        assert!(matches!(
            Client::with_base_url("not a url", model),
            Err(Error::InvalidUrl(_))
        ));
    }
}
