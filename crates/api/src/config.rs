/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Number of folders in the image catalog (default: `100`).
    pub total_folders: i64,
    /// Base URL of the static asset host serving the catalog.
    pub asset_base_url: String,
    /// Timeout for the per-folder label fetch in seconds (default: `10`).
    pub label_fetch_timeout_secs: u64,
}

/// Default asset host: the raw-content mirror of the study's data repository.
const DEFAULT_ASSET_BASE_URL: &str =
    "https://raw.githubusercontent.com/imrnh/xai_blind_test/main/data/output";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `TOTAL_FOLDERS`            | `100`                      |
    /// | `ASSET_BASE_URL`           | study data mirror          |
    /// | `LABEL_FETCH_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let total_folders: i64 = std::env::var("TOTAL_FOLDERS")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("TOTAL_FOLDERS must be a valid i64");
        assert!(total_folders > 0, "TOTAL_FOLDERS must be positive");

        let asset_base_url =
            std::env::var("ASSET_BASE_URL").unwrap_or_else(|_| DEFAULT_ASSET_BASE_URL.into());

        let label_fetch_timeout_secs: u64 = std::env::var("LABEL_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("LABEL_FETCH_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            total_folders,
            asset_base_url,
            label_fetch_timeout_secs,
        }
    }
}
