use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::{info, warn};
use reqwest::Client;

use crate::{DEFAULT_API_KEY, DEFAULT_CHAT_URL, DEFAULT_IMAGE_URL, config::Config};

pub mod api;

mod error;
pub use error::SyncAiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub chat_url: String,
    /// Prefix the prompt gets appended to
    pub image_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat_url: DEFAULT_CHAT_URL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        }
    }
}

/// Client for the HackerGpt chat and image endpoints.
///
/// `prompt`, `generate_image` and `chat` never fail, they report errors as `[ERROR] ...`
/// lines. The `try_*` variants hand the error to the caller instead.
#[derive(Debug, Clone)]
pub struct HackerGpt {
    api_key: String,
    endpoints: Endpoints,
    client: Client,
}

impl HackerGpt {
    pub fn new(api_key: impl Into<String>) -> Result<Self, SyncAiError> {
        Self::build(api_key.into(), Endpoints::default(), None)
    }

    pub fn from_config(config: &Config) -> Result<Self, SyncAiError> {
        Self::build(config.api_key.clone(), config.endpoints(), config.timeout())
    }

    fn build(
        api_key: String,
        endpoints: Endpoints,
        timeout: Option<Duration>,
    ) -> Result<Self, SyncAiError> {
        let mut builder =
            Client::builder().user_agent(concat!("syncai/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_key,
            endpoints,
            client: builder.build().map_err(SyncAiError::ClientBuild)?,
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn try_prompt(&self, request: &str) -> Result<String, SyncAiError> {
        let payload = api::PromptPayload {
            text: request,
            api_key: &self.api_key,
        };
        api::post_prompt(&self.client, &self.endpoints.chat_url, &payload).await
    }

    /// Sends `request` to the chat endpoint and returns the server's answer verbatim
    pub async fn prompt(&self, request: &str) -> String {
        match self.try_prompt(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Prompt failed: {e:?}");
                format!("[ERROR] Prompt failed: {e}")
            }
        }
    }

    /// Downloads the image for `prompt` and writes it to `filename`, or `<prompt>.png`
    pub async fn try_generate_image(
        &self,
        prompt: &str,
        filename: Option<&Path>,
    ) -> Result<PathBuf, SyncAiError> {
        let bytes = api::fetch_image(&self.client, &self.endpoints.image_url, prompt).await?;

        let path = filename
            .map(Path::to_path_buf)
            .unwrap_or_else(|| api::default_image_path(prompt));
        if let Err(source) = tokio::fs::write(&path, &bytes).await {
            return Err(SyncAiError::Write { path, source });
        }

        info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    /// Like `try_generate_image`, but reports the outcome on stdout
    pub async fn generate_image(&self, prompt: &str, filename: Option<&Path>) -> Option<PathBuf> {
        let result = self.try_generate_image(prompt, filename).await;
        println!("{}", image_report(&result));
        result.ok()
    }

    /// `generate_image` with a client built from `config`, reporting a failed build the same way
    pub async fn generate_image_with(
        config: &Config,
        prompt: &str,
        filename: Option<&Path>,
    ) -> Option<PathBuf> {
        match Self::from_config(config) {
            Ok(gpt) => gpt.generate_image(prompt, filename).await,
            Err(e) => {
                println!("{}", image_report(&Err(e)));
                None
            }
        }
    }

    /// One-shot prompt without keeping a client around. Uses `DEFAULT_API_KEY` if no key is given.
    pub async fn chat(prompt: &str, api_key: Option<&str>) -> String {
        Self::chat_with(&chat_config(api_key), prompt).await
    }

    pub async fn chat_with(config: &Config, prompt: &str) -> String {
        match Self::from_config(config) {
            Ok(gpt) => gpt.prompt(prompt).await,
            Err(e) => format!("[ERROR] chat() failed: {e}"),
        }
    }
}

fn chat_config(api_key: Option<&str>) -> Config {
    Config::default().with_api_key(api_key.unwrap_or(DEFAULT_API_KEY))
}

fn image_report(result: &Result<PathBuf, SyncAiError>) -> String {
    match result {
        Ok(path) => format!("[INFO] Image saved as: {}", path.display()),
        Err(e) => format!("[ERROR] Image generation failed: {e}"),
    }
}
