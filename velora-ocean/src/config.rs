//! Backend base-URL resolution.

/// Base URL used when the client runs on the same machine as the backend.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Port the analysis backend listens on.
pub const API_PORT: u16 = 8000;

/// Where the analysis backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Use an explicit base URL. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Derive the backend URL from the host the client was served from.
    ///
    /// Local hosts use [`DEFAULT_API_URL`]; any other host is assumed to run
    /// the backend on [`API_PORT`] of the same machine.
    pub fn for_hostname(hostname: &str) -> Self {
        match hostname.trim() {
            "" | "localhost" | "127.0.0.1" => Self::default(),
            host => Self::new(format!("http://{}:{}", host, API_PORT)),
        }
    }

    /// An explicit, non-empty override wins; otherwise the hostname rule applies.
    pub fn resolve(override_url: Option<&str>, hostname: Option<&str>) -> Self {
        match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::for_hostname(hostname.unwrap_or_default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/query`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_uses_default() {
        assert_eq!(ApiConfig::for_hostname("localhost").base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::for_hostname("").base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_network_hostname() {
        let config = ApiConfig::for_hostname("192.168.1.20");
        assert_eq!(config.base_url(), "http://192.168.1.20:8000");
    }

    #[test]
    fn test_override_wins() {
        let config = ApiConfig::resolve(Some("https://velora.example.org/api/"), Some("localhost"));
        assert_eq!(config.base_url(), "https://velora.example.org/api");
        assert_eq!(config.endpoint("/query"), "https://velora.example.org/api/query");

        let config = ApiConfig::resolve(Some("  "), Some("ocean-box"));
        assert_eq!(config.base_url(), "http://ocean-box:8000");
    }

    #[test]
    fn test_root_endpoint() {
        assert_eq!(ApiConfig::default().endpoint("/"), "http://127.0.0.1:8000/");
    }
}
