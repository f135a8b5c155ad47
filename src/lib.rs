pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod model;
pub mod portfolio;
pub mod prompt;
pub mod router;
pub mod web;

use reqwest::Client;

use cache::CachedClient;
use config::Config;
use github::GitHubClient;
use model::GeminiModel;

// App state structure
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
    /// `None` when no generation API key is configured.
    pub model: Option<GeminiModel>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Client::new();
        let cached = CachedClient::new(client.clone(), config.cache_ttl);
        let github = GitHubClient::new(&config, cached);
        let model = config
            .gemini_api_key
            .clone()
            .map(|key| GeminiModel::new(&config, key, client));

        Self {
            config,
            github,
            model,
        }
    }
}
