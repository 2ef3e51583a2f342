//! Application configuration loading from environment variables.
//!
//! Everything is read once at startup. `.env` files are honoured through `dotenvy` in `main`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,masjid_map_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `DATASET_BASE_URL`: Fetch dataset documents over HTTP from this base URL. When unset,
//!   documents are read from `DATASET_DIR`.
//! - `DATASET_DIR`: Directory holding `mosques.json`, `carparks.json`, `musollas.json`
//!   (default: "./data")
//! - `DATASET_FETCH_TIMEOUT_SECONDS`: HTTP fetch timeout (default: 10)
//! - `STATIC_DIR`: Front-end assets served as the fallback route (default: "./public")
//! - `LOAD_ON_STARTUP`: Load all datasets when the server starts (default: true)
//! - `MAP_CENTER_LAT` / `MAP_CENTER_LNG`: Initial map centre (default: Singapore)
//! - `MAP_INITIAL_ZOOM`: Initial zoom (default: 13)
//! - `MAP_MAX_ZOOM`: Maximum zoom (default: 19)
//! - `MAP_SEARCH_ZOOM`: Zoom used when flying to a search hit (default: 17)
//! - `MAP_TILE_URL`: Tile URL template
//! - `MAP_TILE_ATTRIBUTION`: Tile attribution HTML
//! - `NOTICE_HISTORY_LIMIT`: Notices kept for `/api/v1/notices` (default: 50)
//! - `QUOTE_ROTATION_SECONDS`: Seconds each hadith quote stays up (default: 10)

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL for dataset documents; `None` selects the file source
    pub dataset_base_url: Option<String>,

    pub dataset_dir: String,

    pub dataset_fetch_timeout_seconds: u64,

    /// Directory of static front-end assets
    pub static_dir: String,

    pub load_on_startup: bool,

    pub map: MapSettings,

    /// Number of notices retained in memory
    pub notice_history_limit: usize,

    pub quote_rotation_seconds: u64,
}

/// Map view parameters handed to the browser client.
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lng: f64,
    pub initial_zoom: u8,
    pub max_zoom: u8,
    pub search_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 1.3521,
            center_lng: 103.8198,
            initial_zoom: 13,
            max_zoom: 19,
            search_zoom: 17,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            dataset_base_url: None,
            dataset_dir: "./data".to_string(),
            dataset_fetch_timeout_seconds: 10,
            static_dir: "./public".to_string(),
            load_on_startup: true,
            map: MapSettings::default(),
            notice_history_limit: 50,
            quote_rotation_seconds: 10,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the map
    /// settings are inconsistent.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();
        let map = MapSettings {
            center_lat: env_or("MAP_CENTER_LAT", defaults.map.center_lat)?,
            center_lng: env_or("MAP_CENTER_LNG", defaults.map.center_lng)?,
            initial_zoom: env_or("MAP_INITIAL_ZOOM", defaults.map.initial_zoom)?,
            max_zoom: env_or("MAP_MAX_ZOOM", defaults.map.max_zoom)?,
            search_zoom: env_or("MAP_SEARCH_ZOOM", defaults.map.search_zoom)?,
            tile_url: env_or("MAP_TILE_URL", defaults.map.tile_url)?,
            tile_attribution: env_or("MAP_TILE_ATTRIBUTION", defaults.map.tile_attribution)?,
        };

        let config = Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            dataset_base_url: env_optional("DATASET_BASE_URL"),
            dataset_dir: env_or("DATASET_DIR", defaults.dataset_dir)?,
            dataset_fetch_timeout_seconds: env_or(
                "DATASET_FETCH_TIMEOUT_SECONDS",
                defaults.dataset_fetch_timeout_seconds,
            )?,
            static_dir: env_or("STATIC_DIR", defaults.static_dir)?,
            load_on_startup: env_or("LOAD_ON_STARTUP", defaults.load_on_startup)?,
            map,
            notice_history_limit: env_or("NOTICE_HISTORY_LIMIT", defaults.notice_history_limit)?,
            quote_rotation_seconds: env_or(
                "QUOTE_ROTATION_SECONDS",
                defaults.quote_rotation_seconds,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(-90.0..=90.0).contains(&self.map.center_lat)
            || !(-180.0..=180.0).contains(&self.map.center_lng)
        {
            anyhow::bail!("MAP_CENTER_LAT/MAP_CENTER_LNG out of range");
        }
        if self.map.initial_zoom > self.map.max_zoom || self.map.search_zoom > self.map.max_zoom {
            anyhow::bail!("MAP_INITIAL_ZOOM and MAP_SEARCH_ZOOM must not exceed MAP_MAX_ZOOM");
        }
        Ok(())
    }
}

/// Load an optional environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
