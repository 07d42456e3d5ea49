/// Profile host used when `PROFILESCOPE_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";

/// Desktop browser `User-Agent` sent with every profile request by default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Scheme and host the `/@{username}` path is appended to.
    pub base_url: String,
    pub user_agent: String,
    /// Total request timeout. `None` keeps the HTTP client's default (no timeout).
    pub request_timeout_secs: Option<u64>,
}
