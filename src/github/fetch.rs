// src/github/fetch.rs
// =============================================================================
// This module fetches everything the dashboard needs for one node.
//
// Strategy:
// - Three independent GET requests against the GitHub REST API:
//     /users/{id}                            -> Profile
//     /users/{id}/repos?sort=stars&per_page=12 -> Vec<RepositorySummary>
//     /repos/{id}/{id}/readme                -> base64 README.md
// - Run them concurrently and wait for all three
// - If any of them fails the whole scan fails, with no partial result
//
// The one exception is a 404 on the readme: most accounts simply don't have
// a {id}/{id} profile repository, and that is "no readme", not a failure.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::dossier::{Profile, RepositorySummary};
use crate::error::AccessDenied;

/// Where the GitHub REST API lives
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// How many repositories we ask for (and keep)
pub const PAGE_SIZE: usize = 12;

/// Everything fetched for one node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The user record, with `readme` filled in when one exists
    pub profile: Profile,
    /// Top repositories, most starred first
    pub repositories: Vec<RepositorySummary>,
}

// Shape of GET /repos/{owner}/{repo}/readme (only the fields we use)
#[derive(Debug, Deserialize)]
struct ReadmeRecord {
    content: String,
    #[serde(default)]
    encoding: String,
}

/// Trims the raw identifier; None means "nothing to scan"
pub fn normalize_identifier(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Thin wrapper around a reqwest Client that knows the API layout
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
    page_size: usize,
}

impl GithubClient {
    // Creates a client for the given API base (tests point this at wiremock)
    //
    // GitHub rejects requests without a User-Agent, so we always send one.
    // No auth header is ever sent.
    pub fn new(api_base: Url, page_size: usize) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
                );
                headers
            })
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base,
            page_size,
        })
    }

    // Fetches profile, repositories and readme concurrently
    //
    // Returns: the joined Node, or AccessDenied if any request failed.
    // The caller gets nothing at all on failure, never a partial Node.
    pub async fn fetch_node(&self, identifier: &str) -> Result<Node, AccessDenied> {
        debug!(identifier, "fetching node");

        let (profile, repositories, readme) = futures::future::try_join3(
            self.fetch_profile(identifier),
            self.fetch_repositories(identifier),
            self.fetch_readme(identifier),
        )
        .await?;

        Ok(Node {
            profile: Profile { readme, ..profile },
            repositories,
        })
    }

    async fn fetch_profile(&self, identifier: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", identifier])?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self, identifier: &str) -> Result<Vec<RepositorySummary>> {
        let mut url = self.endpoint(&["users", identifier, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "stars")
            .append_pair("per_page", &self.page_size.to_string());

        let mut repos: Vec<RepositorySummary> = self.get_json(url).await?;
        repos.truncate(self.page_size);
        Ok(repos)
    }

    async fn fetch_readme(&self, identifier: &str) -> Result<Option<String>> {
        let url = self.endpoint(&["repos", identifier, identifier, "readme"])?;
        let response = self.client.get(url.clone()).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "no profile readme");
            return Ok(None);
        }

        let record: ReadmeRecord = read_json(url, response).await?;
        decode_readme(&record).map(Some)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url.clone()).send().await?;
        read_json(url, response).await
    }

    // Builds {api_base}/{segments...}. Each segment is percent-escaped, so an
    // identifier like "a/b" stays one segment. "." and ".." are not escaped
    // (url resolves them as dot segments) and are rejected instead.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(anyhow!("Invalid path segment: {:?}", dot));
        }

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base cannot have a path: {}", self.api_base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn read_json<T: DeserializeOwned>(url: Url, response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(anyhow!("Failed to fetch {}: HTTP {}", url, response.status()));
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Invalid JSON from {}", url))
}

// GitHub wraps the base64 payload at 60 columns, so strip the newlines first
fn decode_readme(record: &ReadmeRecord) -> Result<String> {
    if record.encoding != "base64" {
        return Ok(record.content.clone());
    }

    let compact: String = record
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(compact)
        .context("Readme content is not valid base64")?;

    String::from_utf8(bytes).context("Readme content is not UTF-8")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does try_join3 do?
//    - Polls three futures at the same time and waits for all of them
//    - If any returns Err, it stops waiting and returns that error
//    - Like Promise.all() in JavaScript
//
// 2. Why does `.await?` turn an anyhow::Error into AccessDenied?
//    - The ? operator calls From::from on the error
//    - error.rs implements From<anyhow::Error> for AccessDenied
//
// 3. What is DeserializeOwned?
//    - A serde trait for types that can be built from JSON without
//      borrowing from the input buffer
//    - get_json::<Profile>() and get_json::<Vec<RepositorySummary>>() share
//      one generic function thanks to it
// -----------------------------------------------------------------------------
