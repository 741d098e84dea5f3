// src/github/mod.rs
// =============================================================================
// This module handles fetching a node (a GitHub account) from the REST API.
//
// Currently implements:
// - Validating the identifier typed by the user
// - Fetching the user record, top 12 repos (by stars) and profile readme
//   concurrently, failing as a whole if any of them fails
// - Decoding the base64 readme content GitHub returns
//
// Deliberately missing: authentication, pagination, retries, caching.
// Unauthenticated calls are rate limited by GitHub; a rate-limited call is
// reported like any other failure ("node access denied").
// =============================================================================

mod fetch;

// Re-export the public API from fetch.rs
pub use fetch::{normalize_identifier, GithubClient, Node, DEFAULT_API_BASE, PAGE_SIZE};
