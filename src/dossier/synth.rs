// src/dossier/synth.rs
// =============================================================================
// Builds a professional-sounding bio even when the profile is sparse.
//
// Policy:
// - If the node has a profile readme with enough real text, quote the
//   first part of it (see readme.rs)
// - Otherwise use a template built from the most-starred repo's language
//   and the public repo count
// - Either way, close with a sentence citing the total stars
//
// Every optional field has a fallback string, so the result is never empty.
// =============================================================================

use std::cmp::Reverse;

use super::model::{non_blank, Profile, RepositorySummary};
use super::readme::readme_excerpt;

const UNKNOWN_NAME: &str = "Unknown Node";
const DEFAULT_HEADLINE: &str = "DIGITAL ARCHITECT";
const DEFAULT_LANGUAGE: &str = "modern technologies";
const DEFAULT_LOCATION: &str = "Distributed Network";

/// Name shown in the dashboard header: real name, then login
pub fn display_name(profile: &Profile) -> &str {
    profile
        .name()
        .or_else(|| non_blank(Some(profile.login.as_str())))
        .unwrap_or(UNKNOWN_NAME)
}

/// One-line headline under the name: the bio, if there is one
pub fn headline(profile: &Profile) -> &str {
    profile.bio().unwrap_or(DEFAULT_HEADLINE)
}

/// Exact sum of star counts across the fetched repositories
pub fn total_stars(repos: &[RepositorySummary]) -> u64 {
    repos.iter().map(|repo| repo.stars).sum()
}

// Language of the most-starred repo. On ties the earliest repo wins, which
// matches the order GitHub returns for sort=stars.
fn top_language(repos: &[RepositorySummary]) -> &str {
    repos
        .iter()
        .min_by_key(|repo| Reverse(repo.stars))
        .and_then(|repo| repo.language())
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Writes the dossier narrative for a node
///
/// `readme` is the decoded profile readme, if the node has one.
pub fn synthesize_dossier(
    profile: &Profile,
    repos: &[RepositorySummary],
    readme: Option<&str>,
) -> String {
    let name = display_name(profile);
    let location = profile.location().unwrap_or(DEFAULT_LOCATION);

    let opening = match readme.and_then(readme_excerpt) {
        Some(excerpt) => format!(
            "{} introduces their work in their own words: \"{}\" \
             Operating from {}, they continue to push digital boundaries.",
            name, excerpt, location
        ),
        None => format!(
            "{} is a software engineering professional focused on {}. \
             With a global footprint across {} public nodes, they operate from {} \
             and continue to push digital boundaries.",
            name,
            top_language(repos),
            profile.public_repos,
            location
        ),
    };

    format!(
        "{} They have established a technical ecosystem validated by {} cumulative \
         community endorsements (stars).",
        opening,
        total_stars(repos)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile() -> Profile {
        Profile {
            name: Some("Mona Lisa".to_string()),
            login: "octocat".to_string(),
            avatar_url: None,
            bio: Some("Builds things".to_string()),
            location: Some("San Francisco".to_string()),
            public_repos: 8,
            readme: None,
        }
    }

    fn repo(language: Option<&str>, stars: u64) -> RepositorySummary {
        RepositorySummary {
            name: "repo".to_string(),
            url: "https://github.com/octocat/repo".to_string(),
            description: None,
            language: language.map(str::to_string),
            stars,
        }
    }

    #[test]
    fn test_empty_bio_and_location_fall_back() {
        let sparse = Profile {
            bio: Some(String::new()),
            location: None,
            ..profile()
        };
        assert_eq!(headline(&sparse), "DIGITAL ARCHITECT");

        let summary = synthesize_dossier(&sparse, &[], None);
        assert!(summary.contains("Distributed Network"));
        assert!(summary.contains("modern technologies"));
    }

    #[test]
    fn test_never_empty_for_default_profile() {
        let empty = Profile::default();
        assert_eq!(display_name(&empty), "Unknown Node");
        let summary = synthesize_dossier(&empty, &[], None);
        assert!(summary.starts_with("Unknown Node is a software engineering professional"));
        assert!(summary.contains("validated by 0 cumulative"));
    }

    #[test]
    fn test_login_used_when_name_missing() {
        let unnamed = Profile {
            name: None,
            ..profile()
        };
        assert_eq!(display_name(&unnamed), "octocat");
    }

    #[test]
    fn test_cites_exact_star_total() {
        let repos = vec![repo(Some("Rust"), 1200), repo(None, 34), repo(Some("Go"), 5)];
        assert_eq!(total_stars(&repos), 1239);

        let summary = synthesize_dossier(&profile(), &repos, None);
        assert!(summary.contains("validated by 1239 cumulative community endorsements"));
    }

    #[test]
    fn test_fallback_uses_top_language_and_repo_count() {
        // Not sorted on purpose: the top language comes from the star count
        let repos = vec![repo(Some("Go"), 5), repo(Some("Rust"), 90), repo(Some("C"), 90)];
        let summary = synthesize_dossier(&profile(), &repos, Some("# Hi"));
        assert!(summary.contains("focused on Rust."));
        assert!(summary.contains("across 8 public nodes"));
    }

    #[test]
    fn test_readme_excerpt_preferred() {
        let readme = "I am a **backend engineer** working on databases, \
                      compilers and developer tooling at a small startup.";
        let summary = synthesize_dossier(&profile(), &[repo(Some("Rust"), 3)], Some(readme));
        assert!(summary.contains(
            "\"I am a backend engineer working on databases, compilers and developer tooling at a small startup.\""
        ));
        assert!(!summary.contains("focused on Rust"));
        assert!(summary.ends_with("validated by 3 cumulative community endorsements (stars)."));
    }
}
