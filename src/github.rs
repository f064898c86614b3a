use std::collections::HashMap;

use colored::*;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use thiserror::Error;

use crate::stats::LanguageStats;

pub const GITHUB_API: &str = "https://api.github.com";

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("gh-lang-stats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct Repo {
    pub name: String,
    pub languages_url: String,
}

pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(token: &str) -> Result<Client, ApiError> {
        Client::with_base_url(token, GITHUB_API)
    }

    /// The base URL is injectable so tests can point at a local server.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Client, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Lists the account's public repositories. One call, no pagination.
    pub fn list_repos(&self, username: &str) -> Result<Vec<Repo>, ApiError> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        self.get_json(&url)
    }

    /// Fetches a repository's language breakdown: language name -> bytes.
    pub fn languages(&self, repo: &Repo) -> Result<HashMap<String, u64>, ApiError> {
        self.get_json(&repo.languages_url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_JSON)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json()?)
    }
}

/// Fetches every repository's language breakdown and merges them into one
/// total. A repository whose languages call fails contributes nothing; the
/// failure is warned about and the loop keeps going.
pub fn collect_language_stats(client: &Client, repos: &[Repo]) -> LanguageStats {
    let mut totals = LanguageStats::new();

    for repo in repos {
        match client.languages(repo) {
            Ok(languages) => totals.register_repo(languages),
            Err(err) => {
                println!(
                    "{}",
                    format!(
                        "Warning: could not get languages for repository '{}': {}",
                        repo.name, err
                    )
                    .yellow()
                );
            }
        }
    }

    totals
}
