use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::profile::{ActivityLevel, GoalPace};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub dashboard: Dashboard,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Fallbacks used when a command omits the activity level or goal pace.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal_pace: GoalPace,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default = "default_recent_entries")]
    pub recent_entries: u32,
}

fn default_recent_entries() -> u32 {
    7
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            recent_entries: default_recent_entries(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents).with_context(|| format!("invalid config at {path:?}"))
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Resolve an alias to its full token, or return the input unchanged.
    pub fn resolve_alias(&self, input: &str) -> String {
        self.aliases
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    pub fn activity_level(&self, token: Option<&str>) -> ActivityLevel {
        match token {
            Some(t) => ActivityLevel::from_token(&self.resolve_alias(t)),
            None => self.defaults.activity_level,
        }
    }

    pub fn goal_pace(&self, token: Option<&str>) -> GoalPace {
        match token {
            Some(t) => GoalPace::from_token(&self.resolve_alias(t)),
            None => self.defaults.goal_pace,
        }
    }

    /// Short tokens written by `init`.
    pub fn default_aliases() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("sed".into(), "sedentary".into());
        m.insert("lt".into(), "light".into());
        m.insert("mod".into(), "moderate".into());
        m.insert("int".into(), "intense".into());
        m.insert("vi".into(), "very_intense".into());
        m
    }

    pub fn data_dir() -> anyhow::Result<PathBuf> {
        if let Ok(home) = std::env::var("SLIMTRACK_HOME") {
            return Ok(PathBuf::from(home));
        }
        dirs::home_dir()
            .map(|home| home.join(".slimtrack"))
            .context("cannot resolve home directory")
    }

    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    pub fn db_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("data.db"))
    }
}
