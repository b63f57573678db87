// src/github/repo.rs
// =============================================================================
// Parses the repository argument into an "owner/repo" slug.
//
// Supported formats:
//   - owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo/tree/main   (anything after the repo is ignored)
// =============================================================================

use anyhow::{anyhow, Result};

/// Returns the `owner/repo` slug for a repository argument.
///
/// Example:
///   "https://github.com/rust-lang/rust" -> "rust-lang/rust"
pub fn parse_repo(input: &str) -> Result<String> {
    let trimmed = input.trim();

    // Remove common prefixes
    let path = trimmed
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    // A bare slug has no host part; a URL must point at github.com
    let path = match path.strip_prefix("github.com/") {
        Some(rest) => rest,
        None if path.contains("://") || path.starts_with("github.com") => {
            return Err(anyhow!("Not a GitHub URL: {}", trimmed));
        }
        None if trimmed != path => {
            return Err(anyhow!("Not a GitHub URL: {}", trimmed));
        }
        None => path,
    };

    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();

    if parts.len() < 2 {
        return Err(anyhow!(
            "Invalid repository '{}': expected owner/repo",
            trimmed
        ));
    }

    let owner = parts[0];
    let repo = parts[1].trim_end_matches(".git");

    if repo.is_empty() {
        return Err(anyhow!(
            "Invalid repository '{}': expected owner/repo",
            trimmed
        ));
    }

    Ok(format!("{}/{}", owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug() {
        assert_eq!(parse_repo("rust-lang/rust").unwrap(), "rust-lang/rust");
    }

    #[test]
    fn test_parse_github_url() {
        assert_eq!(
            parse_repo("https://github.com/rust-lang/rust").unwrap(),
            "rust-lang/rust"
        );
    }

    #[test]
    fn test_parse_github_url_with_git() {
        assert_eq!(
            parse_repo("https://github.com/user/repo.git").unwrap(),
            "user/repo"
        );
    }

    #[test]
    fn test_parse_github_url_with_extra_path() {
        assert_eq!(
            parse_repo("github.com/user/repo/tree/main").unwrap(),
            "user/repo"
        );
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(parse_repo("https://gitlab.com/user/repo").is_err());
    }

    #[test]
    fn test_parse_missing_repo() {
        assert!(parse_repo("just-an-owner").is_err());
        assert!(parse_repo("https://github.com/owner").is_err());
    }
}
