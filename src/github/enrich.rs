// src/github/enrich.rs
// =============================================================================
// Turns contributor summaries into full user records.
//
// Steps:
// 1. Drop entries we never want in the table: no login (anonymous commits),
//    type "Bot", or a login on the ignore list
// 2. Look up every remaining profile, several at a time
// 3. Keep the lookups that worked; log and skip the ones that didn't
//
// One failed lookup never affects the others. Results come back in input
// order (`buffered`, not `buffer_unordered`), so the table order always
// follows GitHub's contribution ranking and reruns produce identical output.
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::fetch::{fetch, JsonSource};
use super::models::{ContributorSummary, UserDetail};

/// Whether a contributor belongs in the table at all.
pub fn is_listable(contributor: &ContributorSummary, ignored: &HashSet<String>) -> bool {
    match contributor.login.as_deref() {
        None => false,
        Some(_) if contributor.is_bot() => false,
        Some(login) => !ignored.contains(login),
    }
}

/// Resolves the profile of every listable contributor.
///
/// At most `concurrency` lookups are in flight at once. Lookups that fail,
/// return nothing, or return a record without a login are left out.
pub async fn resolve_users(
    source: &dyn JsonSource,
    contributors: Vec<ContributorSummary>,
    ignored: &HashSet<String>,
    concurrency: usize,
) -> Vec<UserDetail> {
    let listable: Vec<ContributorSummary> = contributors
        .into_iter()
        .filter(|contributor| is_listable(contributor, ignored))
        .collect();

    info!(count = listable.len(), "resolving contributor profiles");

    let lookups = listable.into_iter().map(move |contributor| async move {
        let outcome = resolve_one(source, &contributor).await;
        (contributor, outcome)
    });

    // Every lookup settles to its own Result; nothing short-circuits
    let settled: Vec<(ContributorSummary, Result<Option<UserDetail>>)> = stream::iter(lookups)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut users = Vec::with_capacity(settled.len());
    let mut failed = 0usize;

    for (contributor, outcome) in settled {
        let login = contributor.login.as_deref().unwrap_or_default();
        match outcome {
            Ok(Some(user)) if user.login.is_some() => users.push(user),
            Ok(_) => debug!(login, "profile lookup returned no user"),
            Err(e) => {
                failed += 1;
                warn!(login, error = %format!("{:#}", e), "profile lookup failed, skipping");
            }
        }
    }

    if failed > 0 {
        warn!(failed, resolved = users.len(), "some profiles could not be resolved");
    }

    users
}

async fn resolve_one(
    source: &dyn JsonSource,
    contributor: &ContributorSummary,
) -> Result<Option<UserDetail>> {
    let body = match fetch(source, contributor.url.as_deref()).await? {
        Some(body) => body,
        None => return Ok(None),
    };

    let mut user: UserDetail = serde_json::from_value(body).context("Malformed user profile")?;

    // The list entry already carries both links; use them if the profile doesn't
    if user.avatar_url.is_empty() {
        user.avatar_url = contributor.avatar_url.clone().unwrap_or_default();
    }
    if user.html_url.is_empty() {
        user.html_url = contributor.html_url.clone().unwrap_or_default();
    }

    Ok(Some(user))
}
