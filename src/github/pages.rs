// src/github/pages.rs
// =============================================================================
// Walks the contributors list of a repository, one page at a time.
//
// How it works:
// 1. Request page 1 with per_page=100
// 2. If the body is not a JSON array, fail the whole run with GitHub's message
// 3. Keep only entries with contributions >= threshold (order preserved)
// 4. Yield that batch
// 5. Ask for the next page only if the batch is still full
//
// GitHub returns contributors sorted by contribution count, so once a page
// has fewer than per_page qualifying entries we're past everyone who counts.
// A last page with exactly per_page qualifying entries costs one extra
// request, which comes back empty and ends the stream.
//
// Pages are strictly sequential: whether to fetch page N+1 depends on page N.
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use futures::stream::{self, Stream};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::fetch::{fetch, JsonSource};
use super::models::ContributorSummary;

/// Which list to walk and how to filter it.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub api_url: String,
    /// `owner/repo`
    pub repo: String,
    pub per_page: usize,
    pub threshold: u64,
}

impl PageQuery {
    /// URL of the `page`-th (1-based) page of the contributors list.
    pub fn page_url(&self, page: u32) -> Result<String> {
        let base = format!("{}/repos/{}/contributors", self.api_url, self.repo);
        let mut url = Url::parse(&base).with_context(|| format!("Invalid API URL: {}", base))?;

        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &page.to_string());

        Ok(url.into())
    }
}

/// Keeps the entries with at least `threshold` contributions, in their
/// original order.
pub fn filter_by_threshold(
    entries: Vec<ContributorSummary>,
    threshold: u64,
) -> Vec<ContributorSummary> {
    entries
        .into_iter()
        .filter(|entry| entry.contributions >= threshold)
        .collect()
}

/// Lazily yields one filtered batch per page, starting at page 1.
///
/// The stream is forward-only; an error ends it.
pub fn contributor_pages<'a>(
    source: &'a dyn JsonSource,
    query: &'a PageQuery,
) -> impl Stream<Item = Result<Vec<ContributorSummary>>> + 'a {
    // The state is the next page to request; None once we've seen a short page
    stream::try_unfold(Some(1u32), move |next_page| next_batch(source, query, next_page))
}

async fn next_batch(
    source: &dyn JsonSource,
    query: &PageQuery,
    next_page: Option<u32>,
) -> Result<Option<(Vec<ContributorSummary>, Option<u32>)>> {
    let page = match next_page {
        Some(page) => page,
        None => return Ok(None),
    };

    let url = query.page_url(page)?;
    let body = fetch(source, Some(&url))
        .await?
        .ok_or_else(|| anyhow!("No response for contributors page {}", page))?;

    let entries = parse_page(body, &query.repo, page)?;
    let fetched = entries.len();
    let batch = filter_by_threshold(entries, query.threshold);

    debug!(page, fetched, kept = batch.len(), "contributors page");

    let next = if batch.len() == query.per_page {
        Some(page + 1)
    } else {
        None
    };

    Ok(Some((batch, next)))
}

// A page must be a JSON array. Anything else is GitHub telling us something
// went wrong (bad repo, rate limit, ...), usually with a "message" field.
fn parse_page(body: Value, repo: &str, page: u32) -> Result<Vec<ContributorSummary>> {
    if !body.is_array() {
        match body.get("message").and_then(Value::as_str) {
            Some(message) => bail!(
                "GitHub API error while listing contributors of {}: {}",
                repo,
                message
            ),
            None => bail!(
                "Unexpected response while listing contributors of {} (page {})",
                repo,
                page
            ),
        }
    }

    serde_json::from_value(body)
        .with_context(|| format!("Malformed contributor entry on page {} of {}", page, repo))
}
