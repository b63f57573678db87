// src/config.rs
// =============================================================================
// Fixed policy constants and the validated runtime settings.
//
// The constants are the defaults the CLI falls back to. `Settings` is what
// the rest of the program actually reads: it's built once from the parsed
// command line (see cli.rs) and never changes during a run.
// =============================================================================

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// GitHub caps `per_page` at 100 for the contributors endpoint.
pub const PAGE_SIZE: usize = 100;

/// Minimum number of contributions to appear in the table.
pub const CONTRIBUTION_THRESHOLD: u64 = 3;

/// Cells per table row.
pub const COLUMNS: usize = 5;

/// Rendered avatar width/height in pixels.
pub const AVATAR_SIZE: u32 = 64;

/// Maximum number of user lookups in flight at once.
pub const DETAIL_CONCURRENCY: usize = 32;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const DEFAULT_OUTPUT: &str = "CONTRIBUTORS.md";

// Automation accounts that show up as regular "User" entries in the
// contributors list, so the type check alone doesn't catch them.
pub const IGNORED_LOGINS: &[&str] = &[
    "actions-user",
    "allcontributors[bot]",
    "autofix-ci[bot]",
    "dependabot-preview[bot]",
    "dependabot[bot]",
    "github-actions[bot]",
    "greenkeeper[bot]",
    "renovate-bot",
    "renovate[bot]",
    "web-flow",
];

/// Everything a run needs, already validated.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repository as `owner/repo`
    pub repo: String,
    pub api_url: String,
    pub token: Option<String>,
    /// `None` means print to stdout instead of writing a file
    pub output: Option<PathBuf>,
    pub columns: usize,
    pub threshold: u64,
    pub per_page: usize,
    pub avatar_size: u32,
    pub concurrency: usize,
    /// `None` waits as long as the server takes
    pub timeout: Option<Duration>,
    pub ignored_logins: HashSet<String>,
}

impl Settings {
    /// Settings for `repo` with every other value at its default.
    pub fn new(repo: impl Into<String>) -> Self {
        Settings {
            repo: repo.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            columns: COLUMNS,
            threshold: CONTRIBUTION_THRESHOLD,
            per_page: PAGE_SIZE,
            avatar_size: AVATAR_SIZE,
            concurrency: DETAIL_CONCURRENCY,
            timeout: Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
            ignored_logins: default_ignored_logins(),
        }
    }

    /// Rejects values that would make the pipeline loop forever or divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            bail!("--columns must be at least 1");
        }
        if self.per_page == 0 || self.per_page > PAGE_SIZE {
            bail!("--per-page must be between 1 and {}", PAGE_SIZE);
        }
        if self.concurrency == 0 {
            bail!("--concurrency must be at least 1");
        }
        if self.avatar_size == 0 {
            bail!("--avatar-size must be at least 1");
        }
        Ok(())
    }
}

/// The built-in ignore-set as an owned `HashSet` (O(1) membership checks).
pub fn default_ignored_logins() -> HashSet<String> {
    IGNORED_LOGINS.iter().map(|login| login.to_string()).collect()
}
