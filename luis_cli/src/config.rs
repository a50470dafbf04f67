//! Connection settings: command-line flags first, then environment (including `.env`).

use anyhow::{bail, Result};
use clap::Args;
use luis_api::types::LuisModel;
use luis_api::LUIS_BASE_URL;

pub const MODEL_ID_VAR: &str = "LUIS_MODEL_ID";
pub const SUBSCRIPTION_KEY_VAR: &str = "LUIS_SUBSCRIPTION_KEY";
pub const BASE_URL_VAR: &str = "LUIS_BASE_URL";

#[derive(Args, Default)]
pub struct ConnectionArgs {
    /// LUIS application id [env: LUIS_MODEL_ID]
    #[arg(long, global = true)]
    pub model_id: Option<String>,

    /// Subscription key for the application [env: LUIS_SUBSCRIPTION_KEY]
    #[arg(long, global = true)]
    pub subscription_key: Option<String>,

    /// Override the service endpoint [env: LUIS_BASE_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

/// Resolved settings for building a client.
pub struct Settings {
    pub model: LuisModel,
    pub base_url: String,
}

impl Settings {
    pub fn from_args(args: &ConnectionArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    fn resolve(args: &ConnectionArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let pick = |flag: &Option<String>, var: &str| {
            flag.clone()
                .or_else(|| env(var))
                .filter(|v| !v.trim().is_empty())
        };

        let Some(model_id) = pick(&args.model_id, MODEL_ID_VAR) else {
            bail!("missing LUIS application id: pass --model-id or set {MODEL_ID_VAR}");
        };
        let Some(subscription_key) = pick(&args.subscription_key, SUBSCRIPTION_KEY_VAR) else {
            bail!(
                "missing LUIS subscription key: pass --subscription-key or set {SUBSCRIPTION_KEY_VAR}"
            );
        };
        let base_url =
            pick(&args.base_url, BASE_URL_VAR).unwrap_or_else(|| LUIS_BASE_URL.to_string());

        Ok(Self {
            model: LuisModel::new(&model_id, &subscription_key)?,
            base_url,
        })
    }
}
