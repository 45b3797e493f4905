//! Configuration layering, fallback logic, and environment overrides

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use jsr_core::error::JsrError;
use tracing::debug;

use crate::toml::{JsrToml, RegistrySection};
use crate::ConfigResult;

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "jsr.toml";

/// Prefix of the environment variables read by [`ConfigLayering`]
pub const ENV_PREFIX: &str = "JSR_REGISTRY_";

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
}

/// Merges configuration layers, lowest priority first
pub struct ConfigLayering;

/// Configuration source tracking
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Global `~/.jsr/config.toml`
    Global(Utf8PathBuf),
    /// `jsr.toml` in the working directory or one of its parents
    Project(Utf8PathBuf),
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd }
    }

    /// Find a configuration file in the project (walks up directory tree)
    pub fn find_config_path(&self, filename: &str) -> Option<Utf8PathBuf> {
        self.cwd
            .ancestors()
            .map(|dir| dir.join(filename))
            .find(|path| path.is_file())
    }

    /// Load the nearest project jsr.toml, if any
    pub async fn load_project_config(&self) -> ConfigResult<Option<(JsrToml, ConfigSource)>> {
        match self.find_config_path(CONFIG_FILE_NAME) {
            Some(path) => {
                let config = crate::toml::load_from_file(&path).await?;
                Ok(Some((config, ConfigSource::Project(path))))
            }
            None => Ok(None),
        }
    }

    /// Path of the global configuration file
    pub fn global_config_path() -> ConfigResult<Utf8PathBuf> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            JsrError::invalid_config("home_dir", "Could not determine home directory")
        })?;

        let home_dir = Utf8PathBuf::try_from(home_dir).map_err(|e| {
            JsrError::invalid_config("home_dir", format!("Invalid home directory path: {}", e))
        })?;

        Ok(home_dir.join(".jsr").join("config.toml"))
    }

    /// Load global configuration
    pub async fn load_global_config(&self) -> ConfigResult<Option<(JsrToml, ConfigSource)>> {
        let path = Self::global_config_path()?;
        Self::load_optional(&path, ConfigSource::Global(path.clone())).await
    }

    /// Resolve registry settings from every layer, reading the process environment
    pub async fn load(&self, cli_overrides: RegistrySection) -> ConfigResult<RegistrySection> {
        let env_overrides = ConfigLayering::collect_env_overrides();
        self.load_with_env(cli_overrides, &env_overrides).await
    }

    /// Resolve registry settings with an explicit set of environment overrides
    pub async fn load_with_env(
        &self,
        cli_overrides: RegistrySection,
        env_overrides: &HashMap<String, String>,
    ) -> ConfigResult<RegistrySection> {
        // A missing home directory only disables the global layer
        let global = match Self::global_config_path() {
            Ok(_) => self.load_global_config().await?,
            Err(_) => None,
        };
        let project = self.load_project_config().await?;

        for (_, source) in global.iter().chain(project.iter()) {
            debug!(?source, "loaded registry configuration");
        }

        ConfigLayering::merge_configs(
            global.map(|(config, _)| config),
            project.map(|(config, _)| config),
            env_overrides,
            cli_overrides,
        )
    }

    async fn load_optional(
        path: &Utf8Path,
        source: ConfigSource,
    ) -> ConfigResult<Option<(JsrToml, ConfigSource)>> {
        if path.is_file() {
            let config = crate::toml::load_from_file(path).await?;
            Ok(Some((config, source)))
        } else {
            Ok(None)
        }
    }
}

impl ConfigLayering {
    /// Merge global < project < environment < command line
    pub fn merge_configs(
        global_config: Option<JsrToml>,
        project_config: Option<JsrToml>,
        env_overrides: &HashMap<String, String>,
        cli_overrides: RegistrySection,
    ) -> ConfigResult<RegistrySection> {
        let mut merged = RegistrySection::default();

        if let Some(global) = global_config {
            merged.merge_from(global.registry);
        }

        if let Some(project) = project_config {
            merged.merge_from(project.registry);
        }

        merged.merge_from(Self::env_section(env_overrides)?);

        // Command-line flags have the highest priority
        merged.merge_from(cli_overrides);

        crate::toml::validate_config(&JsrToml {
            registry: merged.clone(),
        })?;

        Ok(merged)
    }

    /// Build a registry section from `JSR_REGISTRY_*` variables
    fn env_section(overrides: &HashMap<String, String>) -> ConfigResult<RegistrySection> {
        let mut section = RegistrySection::default();

        for (key, value) in overrides {
            match key.strip_prefix(ENV_PREFIX) {
                Some("HOSTNAME") => {
                    section.hostname = Some(value.clone());
                }
                Some("PROTOCOL") => {
                    section.protocol = Some(value.parse()?);
                }
                Some("TIMEOUT_SECS") => {
                    let timeout = value.parse().map_err(|e| {
                        JsrError::invalid_config(
                            key.as_str(),
                            format!("Invalid number '{}': {}", value, e),
                        )
                    })?;
                    section.timeout_secs = Some(timeout);
                }
                Some("USER_AGENT") => {
                    section.user_agent = Some(value.clone());
                }
                _ => {
                    // Unknown environment variable, ignore
                }
            }
        }

        Ok(section)
    }

    /// Collect environment variable overrides
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsr_core::types::Protocol;
    use tempfile::TempDir;

    fn temp_path(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    fn registry(hostname: &str) -> JsrToml {
        JsrToml {
            registry: RegistrySection {
                hostname: Some(hostname.to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_find_config_path_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_path(&temp_dir);
        let nested = root.join("packages").join("app");
        tokio::fs::create_dir_all(&nested).await.unwrap();
        tokio::fs::write(root.join(CONFIG_FILE_NAME), "[registry]\nhostname = \"localhost:8000\"\n")
            .await
            .unwrap();

        let loader = ConfigLoader::new(nested);
        assert_eq!(
            loader.find_config_path(CONFIG_FILE_NAME),
            Some(root.join(CONFIG_FILE_NAME))
        );

        let (config, source) = loader.load_project_config().await.unwrap().unwrap();
        assert_eq!(config.registry.hostname.as_deref(), Some("localhost:8000"));
        assert_eq!(source, ConfigSource::Project(root.join(CONFIG_FILE_NAME)));
    }

    #[tokio::test]
    async fn test_missing_project_config() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(temp_path(&temp_dir));
        assert!(loader.find_config_path("does-not-exist.toml").is_none());
    }

    #[tokio::test]
    async fn test_invalid_project_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_path(&temp_dir);
        tokio::fs::write(root.join(CONFIG_FILE_NAME), "[registry\n").await.unwrap();

        let loader = ConfigLoader::new(root);
        let error = loader.load_project_config().await.unwrap_err();
        assert!(matches!(error, JsrError::ConfigParse { .. }));
    }

    #[test]
    fn test_merge_configs() {
        let mut project = registry("localhost:8000");
        project.registry.timeout_secs = Some(10);

        let env_overrides = HashMap::from([
            ("JSR_REGISTRY_PROTOCOL".to_string(), "http".to_string()),
            ("JSR_REGISTRY_TIMEOUT_SECS".to_string(), "20".to_string()),
            ("UNRELATED".to_string(), "ignored".to_string()),
        ]);

        let cli_overrides = RegistrySection {
            timeout_secs: Some(5),
            ..Default::default()
        };

        let merged = ConfigLayering::merge_configs(
            Some(registry("global.example")),
            Some(project),
            &env_overrides,
            cli_overrides,
        )
        .unwrap();

        // Project config should take precedence over global
        assert_eq!(merged.hostname.as_deref(), Some("localhost:8000"));

        // Environment override should be applied
        assert_eq!(merged.protocol, Some(Protocol::Http));

        // CLI override should be applied (highest priority)
        assert_eq!(merged.timeout_secs, Some(5));
    }

    #[test]
    fn test_merge_with_no_layers() {
        let merged =
            ConfigLayering::merge_configs(None, None, &HashMap::new(), RegistrySection::default())
                .unwrap();
        assert_eq!(merged, RegistrySection::default());
    }

    #[test]
    fn test_invalid_env_override() {
        let env_overrides =
            HashMap::from([("JSR_REGISTRY_TIMEOUT_SECS".to_string(), "soon".to_string())]);
        let error = ConfigLayering::merge_configs(
            None,
            None,
            &env_overrides,
            RegistrySection::default(),
        )
        .unwrap_err();
        assert!(matches!(error, JsrError::InvalidConfig { ref field, .. } if field == "JSR_REGISTRY_TIMEOUT_SECS"));

        let env_overrides =
            HashMap::from([("JSR_REGISTRY_PROTOCOL".to_string(), "gopher".to_string())]);
        assert!(ConfigLayering::merge_configs(
            None,
            None,
            &env_overrides,
            RegistrySection::default()
        )
        .is_err());
    }

    #[test]
    fn test_collect_env_overrides() {
        std::env::set_var("JSR_REGISTRY_USER_AGENT", "env-agent");
        std::env::set_var("NOT_JSR_VAR", "ignored");

        let overrides = ConfigLayering::collect_env_overrides();

        assert_eq!(
            overrides.get("JSR_REGISTRY_USER_AGENT").map(String::as_str),
            Some("env-agent")
        );
        assert!(!overrides.contains_key("NOT_JSR_VAR"));

        // Clean up
        std::env::remove_var("JSR_REGISTRY_USER_AGENT");
        std::env::remove_var("NOT_JSR_VAR");
    }

    #[test]
    fn test_load_with_env_blocking() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_path(&temp_dir);
        std::fs::write(root.join(CONFIG_FILE_NAME), "[registry]\nprotocol = \"http\"\n").unwrap();

        let loader = ConfigLoader::new(root);
        let env_overrides =
            HashMap::from([("JSR_REGISTRY_HOSTNAME".to_string(), "localhost:9000".to_string())]);
        let settings = tokio_test::block_on(
            loader.load_with_env(RegistrySection::default(), &env_overrides),
        )
        .unwrap();

        assert_eq!(settings.protocol, Some(Protocol::Http));
        assert_eq!(settings.hostname.as_deref(), Some("localhost:9000"));
    }
}
