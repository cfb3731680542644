use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Comma-separated origin list honoured on top of `cors.allowed_origins`.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub cors: CorsConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the remote row-storage API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    pub insert_path: String,
    pub table_name: String,
    pub api_token: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub build_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            insert_path: "/rows/".to_string(),
            table_name: "Table1".to_string(),
            api_token: String::new(),
            timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age_seconds: 3600,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("frontend/build"),
        }
    }
}

impl RemoteConfig {
    pub fn insert_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.insert_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl FrontendConfig {
    pub fn static_dir(&self) -> PathBuf {
        self.build_dir.join("static")
    }

    pub fn index_file(&self) -> PathBuf {
        self.build_dir.join("index.html")
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(origins) = std::env::var(CORS_ORIGINS_ENV) {
            app_config.cors.allowed_origins = parse_origins(&origins);
        }

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.remote.base_url.is_empty() {
            return Err(ConfigError::Message(
                "Remote base URL must be set (APP_REMOTE__BASE_URL)".to_string(),
            ));
        }

        if self.remote.table_name.is_empty() {
            return Err(ConfigError::Message(
                "Remote table name cannot be empty".to_string(),
            ));
        }

        if self.remote.api_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "Remote API token must be set (APP_REMOTE__API_TOKEN)".to_string(),
            ));
        }

        if self.remote.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Remote timeout must be greater than 0".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "At least one CORS origin must be configured".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
