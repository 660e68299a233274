use std::path::Path;

use serde::Deserialize;

/// Server configuration, loaded from a TOML file selected with `-c`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// TCP listen address, host:port.
    pub listen: String,
    /// Password required from clients; empty disables authentication.
    pub require_pass: String,
    pub log_level: String,
    /// Base directory holding the 16 numbered engine directories.
    pub data_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:6379".to_string(),
            require_pass: String::new(),
            log_level: "info".to_string(),
            data_path: "./lodis_data".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: Config = toml::from_str(
            r#"
            Listen = "0.0.0.0:7000"
            RequirePass = "hunter2"
            LogLevel = "debug"
            DataPath = "/var/lib/lodis"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.listen, "0.0.0.0:7000");
        assert_eq!(cfg.require_pass, "hunter2");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.data_path, "/var/lib/lodis");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg: Config = toml::from_str(r#"Listen = "127.0.0.1:6400""#).unwrap();
        assert_eq!(cfg.listen, "127.0.0.1:6400");
        assert!(cfg.require_pass.is_empty());
        assert_eq!(cfg.log_level, "info");
    }
}
