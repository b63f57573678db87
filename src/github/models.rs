// src/github/models.rs
// =============================================================================
// The two JSON shapes we read from GitHub.
//
// Every field has a serde default: anonymous contributors come back without
// a login or URL, and an error body ({"message": "Not Found"}) decodes into a
// UserDetail with no login, which the enricher then drops.
// =============================================================================

use serde::Deserialize;

/// One entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContributorSummary {
    pub login: Option<String>,
    /// "User", "Bot" or "Anonymous"
    #[serde(rename = "type")]
    pub kind: String,
    pub contributions: u64,
    /// API URL of the user's profile (`/users/{login}`)
    pub url: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

impl ContributorSummary {
    pub fn is_bot(&self) -> bool {
        self.kind == "Bot"
    }
}

/// The fields we use from `GET /users/{login}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserDetail {
    pub login: Option<String>,
    /// Display name; many accounts leave it empty
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}

impl UserDetail {
    /// Text shown under the avatar: the display name, or the login if there
    /// is no usable name.
    pub fn label(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.login.as_deref().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_api_json() {
        let summary: ContributorSummary = serde_json::from_value(json!({
            "login": "octocat",
            "id": 1,
            "type": "User",
            "contributions": 42,
            "url": "https://api.github.com/users/octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
            "html_url": "https://github.com/octocat",
            "site_admin": false
        }))
        .unwrap();

        assert_eq!(summary.login.as_deref(), Some("octocat"));
        assert_eq!(summary.contributions, 42);
        assert!(!summary.is_bot());
    }

    #[test]
    fn test_anonymous_summary() {
        let summary: ContributorSummary = serde_json::from_value(json!({
            "email": "someone@example.com",
            "name": "Someone",
            "type": "Anonymous",
            "contributions": 7
        }))
        .unwrap();

        assert_eq!(summary.login, None);
        assert_eq!(summary.url, None);
    }

    #[test]
    fn test_error_body_has_no_login() {
        let user: UserDetail =
            serde_json::from_value(json!({ "message": "Not Found" })).unwrap();
        assert_eq!(user.login, None);
    }

    #[test]
    fn test_label_prefers_name() {
        let mut user = UserDetail {
            login: Some("octocat".to_string()),
            name: Some("The Octocat".to_string()),
            ..Default::default()
        };
        assert_eq!(user.label(), "The Octocat");

        user.name = Some("   ".to_string());
        assert_eq!(user.label(), "octocat");

        user.name = None;
        assert_eq!(user.label(), "octocat");
    }
}
