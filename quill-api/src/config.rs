use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub cors: Option<CorsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Completion providers, tried in the order Ollama, Groq, Hugging Face.
/// A hosted provider without credentials is left out of the chain.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    pub ollama_url: Option<String>,
    /// Set to false to skip the local Ollama endpoint entirely
    pub ollama_enabled: Option<bool>,
    pub groq_api_key: Option<String>,
    pub groq_base_url: Option<String>,
    pub huggingface_token: Option<String>,
    pub huggingface_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Directory for daily-rolling log files, in addition to stdout
    pub directory: Option<PathBuf>,
}

/// Environment variables that override the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub port: Option<u16>,
    pub ollama_url: Option<String>,
    pub groq_api_key: Option<String>,
    pub huggingface_token: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            port: var("PORT").and_then(|p| p.parse().ok()),
            ollama_url: var("OLLAMA_URL"),
            groq_api_key: var("GROQ_API_KEY"),
            huggingface_token: var("HUGGING_FACE_TOKEN"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            providers: ProvidersConfig::default(),
            cors: Some(CorsConfig {
                allowed_origins: default_allowed_origins(),
            }),
            logging: None,
        }
    }
}

impl ApiConfig {
    /// Load the config file (creating a commented default on first run) and
    /// apply environment overrides.
    pub fn load(config_path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = config_path.unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, default_config_file(&get_default_db_path())).map_err(
                |e| ConfigError::Message(format!("Failed to write default config: {e}")),
            )?;
        }

        let config = Self::from_file(&config_path, EnvOverrides::from_env())?;
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path, overrides: EnvOverrides) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option("providers.ollama_url", overrides.ollama_url)?
            .set_override_option("providers.groq_api_key", overrides.groq_api_key)?
            .set_override_option("providers.huggingface_token", overrides.huggingface_token)?
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        config.database.path = expand_tilde(&config.database.path);
        if let Some(logging) = config.logging.as_mut() {
            logging.directory = logging.directory.as_deref().map(expand_tilde);
        }

        Ok(config)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors
            .as_ref()
            .map(|c| c.allowed_origins.clone())
            .unwrap_or_else(default_allowed_origins)
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_config_file(db_path: &Path) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
path = "{}"

[cors]
allowed_origins = ["http://localhost:5173", "http://localhost:3000"]

# Completion providers are tried in order: Ollama, Groq, Hugging Face.
# Environment variables OLLAMA_URL, GROQ_API_KEY and HUGGING_FACE_TOKEN
# override these values.
[providers]
# ollama_url = "http://localhost:11434"
# ollama_enabled = true
# groq_api_key = "your-groq-key"
# huggingface_token = "your-hf-token"

[logging]
# directory = "~/.local/share/quill/logs"
"#,
        db_path.display()
    )
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("quill/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("quill/quill.db")
    } else {
        PathBuf::from("quill.db")
    }
}
