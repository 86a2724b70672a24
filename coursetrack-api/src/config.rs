use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub database: Option<DatabaseConfig>,
    pub auth: Option<AuthConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            server: Some(ServerConfig::default()),
            database: None,
            auth: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite file; the platform data directory is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// Password expected in `x-admin-password` on delete requests
    pub admin_password: Option<String>,
}

impl ApiConfig {
    /// Loads the config file (writing a default one first if it is missing),
    /// then applies `COURSETRACK_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](Self::load), reading overrides from `env` instead of
    /// the process environment when given.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path(),
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            let default_config = toml::to_string_pretty(&ApiConfig::default()).map_err(|e| {
                ConfigError::Message(format!("Failed to render default config: {e}"))
            })?;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config: ApiConfig = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("COURSETRACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.database.as_ref()?.path.as_deref()
    }

    pub fn admin_password(&self) -> Option<String> {
        self.auth.as_ref()?.admin_password.clone()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("coursetrack").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("api.toml");

        let (config, loaded_from) = ApiConfig::load(Some(&path)).unwrap();

        assert!(path.exists());
        assert_eq!(loaded_from, path);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.server().port, 8080);
        assert!(config.admin_password().is_none());
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 9000

[database]
path = "/tmp/coursetrack-test.sqlite3"

[auth]
admin_password = "12345"
"#,
        )
        .unwrap();

        let (config, _) = ApiConfig::load(Some(&path)).unwrap();

        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 9000);
        assert_eq!(
            config.database_path(),
            Some(Path::new("/tmp/coursetrack-test.sqlite3"))
        );
        assert_eq!(config.admin_password().as_deref(), Some("12345"));
        assert!(config.cors.is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 9000

[auth]
admin_password = "from-file"
"#,
        )
        .unwrap();

        let env = Map::from([
            ("COURSETRACK_SERVER__PORT".to_string(), "9100".to_string()),
            (
                "COURSETRACK_AUTH__ADMIN_PASSWORD".to_string(),
                "12345".to_string(),
            ),
        ]);
        let (config, _) = ApiConfig::load_with_env(Some(&path), Some(env)).unwrap();

        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 9100);
        assert_eq!(config.admin_password().as_deref(), Some("12345"));
    }

    #[test]
    fn test_env_only_server_section_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.toml");
        std::fs::write(&path, "[database]\npath = \"/tmp/coursetrack.sqlite3\"\n").unwrap();

        let env = Map::from([("COURSETRACK_SERVER__PORT".to_string(), "9200".to_string())]);
        let (config, _) = ApiConfig::load_with_env(Some(&path), Some(env)).unwrap();

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 9200);
        assert!(config.admin_password().is_none());
    }
}
