//! Remote words API client
//!
//! Two endpoints:
//! - `GET  /word-of-the-day` → `{"word": "...", "puzzleNumber": n}`
//! - `POST /validate-word` with `{"word": "..."}` → `{"word": "...", "validWord": bool}`

use super::{SourceError, WordSource};
use crate::core::Word;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the public words API
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordOfTheDay {
    word: String,
    #[serde(default)]
    puzzle_number: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Word source backed by the remote words API
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    base_url: String,
    random: bool,
}

impl HttpWordSource {
    /// Create a client for the API at `base_url`
    ///
    /// With `random` set, each round gets a random word instead of the word of the day.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, random: bool, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            random,
        })
    }

    fn target_url(&self) -> String {
        if self.random {
            format!("{}/word-of-the-day?random=1", self.base_url)
        } else {
            format!("{}/word-of-the-day", self.base_url)
        }
    }

    fn validate_url(&self) -> String {
        format!("{}/validate-word", self.base_url)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(%status, url = %response.url(), "word service returned an error status");
        Err(SourceError::Status(status.as_u16()))
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn fetch_target_word(&self) -> Result<Word, SourceError> {
        let url = self.target_url();
        debug!(%url, "fetching target word");

        let response = check_status(self.client.get(&url).send().await?)?;
        let body: WordOfTheDay = response.json().await?;
        debug!(puzzle = ?body.puzzle_number, "target word received");

        Ok(Word::new(body.word.trim())?)
    }

    async fn validate_word(&self, word: &str) -> Result<bool, SourceError> {
        let url = self.validate_url();
        debug!(%url, word, "validating word");

        let response = self
            .client
            .post(&url)
            .json(&ValidateRequest { word })
            .send()
            .await?;
        let body: ValidateResponse = check_status(response)?.json().await?;

        Ok(body.valid_word)
    }
}
