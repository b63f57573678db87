// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Pipeline pieces, leaf-first:
// - fetch:  one GET that returns parsed JSON (behind the JsonSource trait)
// - pages:  the contributors list, page by page, filtered by threshold
// - enrich: bot filtering and concurrent profile lookups
//
// Plus:
// - models: the shapes we read out of the JSON
// - repo:   parsing "owner/repo" or a GitHub URL
// =============================================================================

mod enrich;
mod fetch;
mod models;
mod pages;
mod repo;

#[cfg(test)]
pub(crate) mod testing;

pub use enrich::resolve_users;
pub use fetch::{HttpSource, JsonSource};
pub use models::UserDetail;
pub use pages::{contributor_pages, PageQuery};
pub use repo::parse_repo;
