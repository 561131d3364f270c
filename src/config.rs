use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure loaded from steady_mind.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Lexicon source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexiconConfig {
    /// Optional word file, one lowercase word per line. Builtin defaults apply when unset
    /// or unreadable.
    pub path: Option<PathBuf>,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "steady_mind=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("STEADY_LOG")
            && !level.trim().is_empty()
        {
            config.log_level = level;
        }

        config
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses STEADY_MIND_CONFIG environment variable or defaults to "steady_mind.toml".
    pub fn load() -> anyhow::Result<Self> {
        // Load environment variables: STEADY_ENV_FILE if set, else ./.env
        if let Ok(env_path) = std::env::var("STEADY_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path =
            std::env::var("STEADY_MIND_CONFIG").unwrap_or_else(|_| "steady_mind.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides (env-first)
        if let Ok(path) = std::env::var("STEADY_LEXICON_PATH")
            && !path.trim().is_empty()
        {
            config.lexicon.path = Some(PathBuf::from(path));
            tracing::debug!("STEADY_LEXICON_PATH env override applied");
        }

        config.runtime = RuntimeConfig::load_from_env();

        Ok(config)
    }
}
