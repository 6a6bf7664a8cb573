use crate::error::Result;
use ::config::{builder::DefaultState, ConfigBuilder, Environment};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_QUERY: &str = "history";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_PREFIX: &str = "BOOKSHELF";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub base_url: String,
    /// Query used when the caller searches with an empty string.
    /// An empty value disables the fallback.
    pub default_query: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from `.env`, then `BOOKSHELF_*` environment variables.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = Self::builder()?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub(crate) fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(::config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("default_query", DEFAULT_QUERY)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("user_agent", default_user_agent())?)
    }

    pub fn default_query(&self) -> Option<&str> {
        let query = self.default_query.trim();
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("bookshelf/{}", env!("CARGO_PKG_VERSION"))
}
