//! Runtime configuration
//!
//! Resolved from command-line flags and environment variables by `main.rs`.

use crate::source::{DEFAULT_API_URL, HttpWordSource, ListWordSource, SourceError, WordSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Where target words come from and where guesses are validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceKind {
    /// The remote words API
    #[default]
    Remote,
    /// A local word list (embedded, or `--word-list`)
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceKind,
    pub api_url: String,
    /// Random target instead of the word of the day (remote source only)
    pub random: bool,
    /// Word list for the offline source; the embedded list when unset
    pub word_list: Option<PathBuf>,
    pub timeout: Duration,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::Remote,
            api_url: DEFAULT_API_URL.to_string(),
            random: false,
            word_list: None,
            timeout: Duration::from_secs(10),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Build the configured word source
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the HTTP client cannot be built or the word
    /// list file cannot be read.
    pub fn build_source(&self) -> Result<Arc<dyn WordSource>, SourceError> {
        match self.source {
            SourceKind::Remote => {
                info!(url = %self.api_url, random = self.random, "using remote word source");
                Ok(Arc::new(HttpWordSource::new(
                    &self.api_url,
                    self.random,
                    self.timeout,
                )?))
            }
            SourceKind::Offline => {
                let source = match &self.word_list {
                    Some(path) => ListWordSource::from_file(path)?,
                    None => ListWordSource::embedded(),
                };
                info!(words = source.len(), "using offline word source");
                Ok(Arc::new(source))
            }
        }
    }
}
