use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;

use crate::boards::{HH_ENDPOINT, SUPERJOB_ENDPOINT};

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Only needed when superjob.ru is searched.
    pub superjob_api_key: Option<String>,
    pub hh_api_url: String,
    pub superjob_api_url: String,
    /// Where `<keyword>.json` files are written.
    pub data_dir: PathBuf,
    pub user_agent: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            superjob_api_key: var("SUPERJOB_API_KEY"),
            hh_api_url: var("HH_API_URL").unwrap_or_else(|| HH_ENDPOINT.to_string()),
            superjob_api_url: var("SUPERJOB_API_URL")
                .unwrap_or_else(|| SUPERJOB_ENDPOINT.to_string()),
            data_dir: var("VACANCY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            user_agent: var("HTTP_USER_AGENT").unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn superjob_api_key(&self) -> Result<&str> {
        self.superjob_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("SUPERJOB_API_KEY must be set to search superjob.ru"))
    }

    /// Blocking client shared by the boards of one run.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .user_agent(self.user_agent.clone())
            .build()
            .context("failed to build HTTP client")
    }
}
