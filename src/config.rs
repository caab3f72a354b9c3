use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key, sent with every provider call
    pub tmdb_api_key: String,

    /// TMDB REST API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix for poster image URLs
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Prefix for public movie page links
    #[serde(default = "default_tmdb_site_url")]
    pub tmdb_site_url: String,

    /// Outbound request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub tmdb_timeout_secs: Option<u64>,

    /// Path of the persisted detail cache
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_tmdb_site_url() -> String {
    "https://www.themoviedb.org/movie".to_string()
}

fn default_cache_file() -> String {
    "tmdb_cache.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
