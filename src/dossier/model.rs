// src/dossier/model.rs
// =============================================================================
// Data types for one scan of a node (a GitHub account).
//
// Profile and RepositorySummary deserialize straight from the GitHub REST
// API responses, so the field names follow the API where we can and use
// #[serde(rename)] where the API name is awkward (stargazers_count).
//
// None of these types outlive a single invocation. They are built by the
// fetcher, read by the synthesizer and renderer, then dropped.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A GitHub user as returned by `GET /users/{login}`, plus the profile readme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    /// Decoded README.md of the `{login}/{login}` repository, if any.
    /// Not part of the user record; attached after the readme fetch.
    #[serde(skip)]
    pub readme: Option<String>,
}

impl Profile {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn bio(&self) -> Option<&str> {
        non_blank(self.bio.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn avatar_url(&self) -> Option<&str> {
        non_blank(self.avatar_url.as_deref())
    }
}

/// One entry of `GET /users/{login}/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(rename = "html_url", default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
}

impl RepositorySummary {
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    pub fn language(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }
}

/// Distinct languages seen across a node's repositories.
///
/// Backed by a BTreeSet so tags always come out in the same (alphabetical)
/// order no matter how the API ordered the repos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn from_repositories(repos: &[RepositorySummary]) -> Self {
        let languages = repos
            .iter()
            .filter_map(|repo| repo.language())
            .map(str::to_string)
            .collect();
        Self(languages)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// GitHub sends "" for some unset fields and null for others. We treat both
// the same way so every fallback kicks in for either.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
