use contracts::domain::a025_connection_n11::aggregate::ConnectionN11;
use contracts::enums::n11_service::N11_DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub n11: N11Config,
}

#[derive(Deserialize, Clone)]
pub struct N11Config {
    pub app_key: String,
    pub app_secret: String,
    /// Логировать параметры каждого запроса (appSecret маскируется)
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    N11_DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl N11Config {
    /// Конфигурация с адресом и таймаутом по умолчанию
    pub fn from_connection(connection: &ConnectionN11) -> Self {
        Self {
            app_key: connection.app_key.clone(),
            app_secret: connection.app_secret.clone(),
            debug: false,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn connection(&self) -> ConnectionN11 {
        ConnectionN11::new(self.app_key.clone(), self.app_secret.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for N11Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("N11Config")
            .field("app_key", &self.connection().masked_key())
            .field("app_secret", &"****")
            .field("debug", &self.debug)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[n11]
app_key = ""
app_secret = ""
debug = false
base_url = "https://api.n11.com/ws"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config (empty credentials)
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load configuration from the given file
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
