// src/pipeline.rs
// =============================================================================
// Ties the pieces together:
//
//   contributors pages ──► one combined list ──► profile lookups ──► table
//
// `generate` does the fetching and rendering, `run` also delivers the result
// (file or stdout). Both take the JSON source as a parameter so the whole
// flow can be exercised without a network.
// =============================================================================

use anyhow::Result;
use futures::TryStreamExt;
use std::io::Write;
use tracing::info;

use crate::config::Settings;
use crate::github::{self, JsonSource, PageQuery};
use crate::render::{self, TableLayout};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub document: String,
    /// Pages requested from the contributors endpoint
    pub pages: usize,
    /// Contributors at or above the threshold, before bot filtering
    pub qualifying: usize,
    /// Users that made it into the table
    pub listed: usize,
}

/// Fetches, filters, resolves and renders. Nothing is written.
pub async fn generate(source: &dyn JsonSource, settings: &Settings) -> Result<Report> {
    let query = PageQuery {
        api_url: settings.api_url.clone(),
        repo: settings.repo.clone(),
        per_page: settings.per_page,
        threshold: settings.threshold,
    };

    info!(repo = %settings.repo, threshold = settings.threshold, "listing contributors");

    // Drain every page into one list; the first error aborts the run
    let mut pages = Box::pin(github::contributor_pages(source, &query));
    let mut contributors = Vec::new();
    let mut page_count = 0usize;

    while let Some(batch) = pages.try_next().await? {
        page_count += 1;
        info!(page = page_count, qualifying = batch.len(), "fetched contributors page");
        contributors.extend(batch);
    }

    let qualifying = contributors.len();

    let users = github::resolve_users(
        source,
        contributors,
        &settings.ignored_logins,
        settings.concurrency,
    )
    .await;

    let layout = TableLayout {
        columns: settings.columns,
        avatar_size: settings.avatar_size,
        threshold: settings.threshold,
    };
    let document = render::render_table(&users, &layout);

    Ok(Report {
        document,
        pages: page_count,
        qualifying,
        listed: users.len(),
    })
}

/// Generates the document and writes it to the configured output.
pub async fn run(source: &dyn JsonSource, settings: &Settings) -> Result<Report> {
    let report = generate(source, settings).await?;

    match &settings.output {
        Some(path) => {
            render::write_output(path, &report.document).await?;
            info!(path = %path.display(), listed = report.listed, "wrote contributors table");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(report)
}
