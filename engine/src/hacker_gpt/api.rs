//! Wire level access to the two HackerGpt endpoints.
//!
//! The chat endpoint takes a POST with a flat JSON body (`text`, `api_key`) and answers
//! with plain text. The image endpoint is a GET on a url prefix with the prompt appended,
//! answering with the raw image bytes. Neither response is parsed.

use std::path::PathBuf;

use bytes::Bytes;
use log::debug;
use reqwest::{Client, Response};
use serde::Serialize;

use super::SyncAiError;

type Result<T> = std::result::Result<T, SyncAiError>;

#[derive(Debug, Serialize)]
pub struct PromptPayload<'a> {
    pub text: &'a str,
    pub api_key: &'a str,
}

/// Posts `payload` to the chat endpoint and returns the response body as is
pub async fn post_prompt(
    client: &Client,
    url: &str,
    payload: &PromptPayload<'_>,
) -> Result<String> {
    debug!("Posting prompt to {url}: {:?}", payload.text);
    let resp = client.post(url).json(payload).send().await?;
    let text = error_for_status(resp).await?.text().await?;
    debug!("Prompt response ({} bytes):\n{text}", text.len());
    Ok(text)
}

/// Fetches the image for `prompt` and returns its bytes
pub async fn fetch_image(client: &Client, url_prefix: &str, prompt: &str) -> Result<Bytes> {
    let url = image_url(url_prefix, prompt);
    debug!("Fetching image from {url}");
    let resp = client.get(&url).send().await?;
    let bytes = error_for_status(resp).await?.bytes().await?;
    debug!("Received {} image bytes", bytes.len());
    Ok(bytes)
}

pub fn image_url(url_prefix: &str, prompt: &str) -> String {
    format!("{url_prefix}{prompt}")
}

/// Where an image ends up when the caller doesn't name a file
pub fn default_image_path(prompt: &str) -> PathBuf {
    PathBuf::from(format!("{prompt}.png"))
}

/// Like `Response::error_for_status`, but keeps the body for the error message
async fn error_for_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(SyncAiError::Status { status, url, body })
}
