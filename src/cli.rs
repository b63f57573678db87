// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option has a default taken from config.rs, so the common case is
// just:
//
//   contributors-table owner/repo
//
// which writes CONTRIBUTORS.md in the current directory.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{self, Settings};
use crate::github;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to generate the parsing code from the fields.
// default_value_t pulls the defaults straight from the policy constants.
#[derive(Parser, Debug)]
#[command(
    name = "contributors-table",
    version,
    about = "Render a GitHub repository's contributors as a markdown avatar table",
    long_about = "contributors-table lists everyone with enough contributions to a GitHub repository, \
                  skips bots, looks up their profiles and writes a markdown file with an avatar grid. \
                  Set GITHUB_TOKEN (or put it in .env) to avoid the anonymous rate limit."
)]
pub struct Cli {
    /// Repository to list (owner/repo or https://github.com/owner/repo)
    pub repo: String,

    /// File to write the table to (overwritten on every run)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Number of avatars per table row
    #[arg(long, default_value_t = config::COLUMNS)]
    pub columns: usize,

    /// Minimum contributions needed to be listed
    #[arg(long, default_value_t = config::CONTRIBUTION_THRESHOLD)]
    pub threshold: u64,

    /// Contributors requested per page (GitHub allows at most 100)
    #[arg(long, default_value_t = config::PAGE_SIZE)]
    pub per_page: usize,

    /// Avatar size in pixels
    #[arg(long, default_value_t = config::AVATAR_SIZE)]
    pub avatar_size: u32,

    /// Maximum number of profile lookups running at once
    #[arg(long, default_value_t = config::DETAIL_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value_t = config::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Base URL of the GitHub REST API (for GitHub Enterprise)
    #[arg(long, default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Extra login to leave out of the table (repeatable)
    #[arg(long = "ignore", value_name = "LOGIN")]
    pub ignore: Vec<String>,
}

impl Cli {
    /// Turns the raw arguments into validated settings.
    ///
    /// `token` comes from the environment, not the command line, so it
    /// doesn't end up in shell history.
    pub fn into_settings(self, token: Option<String>) -> Result<Settings> {
        let repo = github::parse_repo(&self.repo)?;

        let mut settings = Settings::new(repo);
        settings.api_url = self.api_url.trim_end_matches('/').to_string();
        settings.token = token.filter(|t| !t.trim().is_empty());
        settings.output = if self.stdout { None } else { Some(self.output) };
        settings.columns = self.columns;
        settings.threshold = self.threshold;
        settings.per_page = self.per_page;
        settings.avatar_size = self.avatar_size;
        settings.concurrency = self.concurrency;
        settings.timeout = match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        settings.ignored_logins.extend(self.ignore);

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["contributors-table", "rust-lang/rust"]).unwrap();
        let settings = cli.into_settings(None).unwrap();

        assert_eq!(settings.repo, "rust-lang/rust");
        assert_eq!(settings.output, Some(PathBuf::from("CONTRIBUTORS.md")));
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.threshold, 3);
        assert_eq!(settings.api_url, "https://api.github.com");
        assert!(settings.token.is_none());
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let cli =
            Cli::try_parse_from(["contributors-table", "user/repo", "--timeout", "0"]).unwrap();
        let settings = cli.into_settings(None).unwrap();
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "contributors-table",
            "https://github.com/user/repo.git",
            "--stdout",
            "--columns",
            "7",
            "--ignore",
            "my-bot",
            "--api-url",
            "https://ghe.example.com/api/v3/",
        ])
        .unwrap();
        let settings = cli.into_settings(Some("secret".to_string())).unwrap();

        assert_eq!(settings.repo, "user/repo");
        assert_eq!(settings.output, None);
        assert_eq!(settings.columns, 7);
        assert_eq!(settings.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(settings.token.as_deref(), Some("secret"));
        assert!(settings.ignored_logins.contains("my-bot"));
        assert!(settings.ignored_logins.contains("renovate[bot]"));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let cli = Cli::try_parse_from(["contributors-table", "user/repo"]).unwrap();
        let settings = cli.into_settings(Some("  ".to_string())).unwrap();
        assert!(settings.token.is_none());
    }

    #[test]
    fn test_zero_columns_fails() {
        let cli =
            Cli::try_parse_from(["contributors-table", "user/repo", "--columns", "0"]).unwrap();
        assert!(cli.into_settings(None).is_err());
    }
}
