use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::cache::CachedClient;
use crate::config::Config;

const RECENT_REPOSITORIES: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub html_url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
}

/// Read-only lookups against the GitHub REST API, served through the shared cache.
pub struct GitHubClient {
    base_url: String,
    username: String,
    headers: HeaderMap,
    http: CachedClient,
}

impl GitHubClient {
    pub fn new(config: &Config, http: CachedClient) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("Portfolio-AI-Assistant"));
        if let Some(token) = &config.github_token {
            match HeaderValue::from_str(&format!("token {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Ignoring malformed GITHUB_TOKEN: {}", e),
            }
        }

        Self {
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
            username: config.github_username.clone(),
            headers,
            http,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let body = match self.http.get_json(&url, self.headers.clone()).await {
            Ok(body) => body,
            Err(e) => {
                warn!("GitHub API request to {} failed: {}", endpoint, e);
                return None;
            }
        };
        match serde_json::from_value(body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Unexpected GitHub API payload from {}: {}", endpoint, e);
                None
            }
        }
    }

    /// Profile plus the most recently updated repositories, or `None` if
    /// either lookup fails. Failures are logged and never propagated.
    pub async fn fetch_snapshot(&self) -> Option<ProfileSnapshot> {
        let profile_endpoint = format!("/users/{}", self.username);
        let repos_endpoint = format!("/users/{}/repos?sort=updated&per_page=10", self.username);

        let (profile, repositories) = tokio::join!(
            self.fetch::<Profile>(&profile_endpoint),
            self.fetch::<Vec<Repository>>(&repos_endpoint)
        );

        let profile = profile?;
        let mut repositories = repositories?;
        repositories.truncate(RECENT_REPOSITORIES);
        debug!(
            "Fetched GitHub snapshot for {} with {} repositories",
            self.username,
            repositories.len()
        );

        Some(ProfileSnapshot {
            profile,
            repositories,
        })
    }
}

pub fn format_for_context(snapshot: &ProfileSnapshot) -> String {
    let profile = &snapshot.profile;
    let mut context = String::from("\n\nLIVE GITHUB DATA:\n");
    context.push_str(&format!("GitHub Profile: {}\n", profile.html_url));
    context.push_str(&format!(
        "Followers: {} | Following: {}\n",
        profile.followers, profile.following
    ));
    context.push_str(&format!("Public Repositories: {}\n\n", profile.public_repos));

    context.push_str("RECENT REPOSITORIES:\n");
    for (index, repo) in snapshot.repositories.iter().enumerate() {
        let last_updated = repo
            .updated_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description");

        context.push_str(&format!("{}. {}\n", index + 1, repo.name));
        context.push_str(&format!("   Description: {}\n", description));
        context.push_str(&format!(
            "   Stars: {} | Forks: {}\n",
            repo.stargazers_count, repo.forks_count
        ));
        context.push_str(&format!("   Last Updated: {}\n", last_updated));
        context.push_str(&format!("   URL: {}\n\n", repo.html_url));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            profile: Profile {
                html_url: "https://github.com/hridyeshh".to_string(),
                followers: 12,
                following: 3,
                public_repos: 20,
                created_at: None,
            },
            repositories: vec![
                Repository {
                    name: "furniar".to_string(),
                    description: Some("AR furniture app".to_string()),
                    stargazers_count: 4,
                    forks_count: 1,
                    updated_at: Some(Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap()),
                    html_url: "https://github.com/hridyeshh/furniar".to_string(),
                },
                Repository {
                    name: "scratch".to_string(),
                    description: None,
                    stargazers_count: 0,
                    forks_count: 0,
                    updated_at: None,
                    html_url: "https://github.com/hridyeshh/scratch".to_string(),
                },
            ],
        }
    }

    #[test]
    fn context_lists_profile_and_repositories() {
        let context = format_for_context(&snapshot());
        assert!(context.starts_with("\n\nLIVE GITHUB DATA:\nGitHub Profile: https://github.com/hridyeshh\n"));
        assert!(context.contains("Followers: 12 | Following: 3\n"));
        assert!(context.contains("Public Repositories: 20\n\nRECENT REPOSITORIES:\n"));
        assert!(context.contains("1. furniar\n   Description: AR furniture app\n"));
        assert!(context.contains("   Last Updated: 2025-03-09\n"));
        assert!(context.contains("2. scratch\n   Description: No description\n"));
    }

    #[test]
    fn repository_payload_tolerates_missing_counts() {
        let repo: Repository = serde_json::from_value(serde_json::json!({
            "name": "demo",
            "description": null,
            "updated_at": "2024-11-02T08:15:00Z",
            "html_url": "https://github.com/x/demo"
        }))
        .unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.updated_at.map(|at| at.format("%Y-%m-%d").to_string()).as_deref(), Some("2024-11-02"));
    }
}
