// src/core/config.rs
use crate::core::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL};
use crate::core::error::{AppError, Result};
use crate::store::{load_catalog, LocalizationStore};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default, rename = "catalog")]
    catalogs: Vec<CatalogConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogConfigToml {
    source: String,
    path: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}

/// One catalog file to load into one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSpec {
    pub source: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub catalogs: Vec<CatalogSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: LevelFilter::Info,
            catalogs: Vec::new(),
        }
    }
}

impl Config {
    /// First existing file from [`get_config_paths`], or defaults.
    pub async fn load() -> Result<Self> {
        for path in get_config_paths() {
            if path.exists() {
                return Self::from_file(&path).await;
            }
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let mut config = Self::from_toml_str(&content, path.parent())?;
        config.config_path = Some(path.to_path_buf());
        log::debug!(
            "Config loaded from {} ({} catalogs)",
            path.display(),
            config.catalogs.len()
        );
        Ok(config)
    }

    /// Relative catalog paths are resolved against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let log_level = LevelFilter::from_str(&file.general.log_level).map_err(|_| {
            AppError::Config(format!("Invalid log_level: {}", file.general.log_level))
        })?;

        let catalogs = file
            .catalogs
            .into_iter()
            .map(|c| {
                if c.source.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "Catalog {} has an empty source",
                        c.path
                    )));
                }
                let path = PathBuf::from(&c.path);
                let path = match base_dir {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path,
                };
                Ok(CatalogSpec {
                    source: c.source,
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config_path: None,
            log_level,
            catalogs,
        })
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Register every configured namespace and merge its catalog in.
    /// Returns the number of entries loaded.
    pub fn apply(&self, store: &RwLock<LocalizationStore>) -> Result<usize> {
        let mut loaded = 0;
        for catalog in &self.catalogs {
            let entries = load_catalog(&catalog.path)?;
            loaded += entries.len();
            store
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .register_with(&catalog.source, entries);
        }
        log::info!(
            "Loaded {} entries from {} catalogs",
            loaded,
            self.catalogs.len()
        );
        Ok(loaded)
    }
}

/// Config search order: working directory, then next to the executable.
pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("", None).expect("valid");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.catalogs.is_empty());
    }

    #[test]
    fn catalogs_resolve_against_base_dir() {
        let content = r#"
[general]
log_level = "debug"

[[catalog]]
source = "/srv/plugins/acme/acme.php"
path = "catalogs/acme.json"

[[catalog]]
source = "/srv/plugins/other/other.php"
path = "/abs/other.toml"
"#;
        let config = Config::from_toml_str(content, Some(Path::new("/etc/l10n"))).expect("valid");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.catalogs.len(), 2);
        assert_eq!(
            config.catalogs[0].path,
            PathBuf::from("/etc/l10n/catalogs/acme.json")
        );
        assert_eq!(config.catalogs[1].path, PathBuf::from("/abs/other.toml"));
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = Config::from_toml_str("[general]\nlog_level = \"loud\"", None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn rejects_blank_source() {
        let content = "[[catalog]]\nsource = \"  \"\npath = \"a.json\"";
        assert!(Config::from_toml_str(content, None).is_err());
    }

    #[tokio::test]
    async fn from_file_and_apply() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("acme.json"),
            r#"{"title": "Acme", "item": {"singular": "Item", "plural": "Items"}}"#,
        )
        .expect("write catalog");
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &config_path,
            "[[catalog]]\nsource = \"/srv/acme.php\"\npath = \"acme.json\"\n",
        )
        .expect("write config");

        let config = Config::from_file(&config_path).await.expect("valid");
        assert_eq!(config.config_path(), Some(config_path.as_path()));

        let store = RwLock::new(LocalizationStore::new());
        assert_eq!(config.apply(&store).expect("catalogs load"), 2);

        let store = store.read().expect("lock");
        assert_eq!(
            store.get("/srv/acme.php", "item", true, false).as_deref(),
            Some("Items")
        );
    }

    #[test]
    fn apply_fails_on_missing_catalog() {
        let config = Config {
            config_path: None,
            log_level: LevelFilter::Info,
            catalogs: vec![CatalogSpec {
                source: "/srv/acme.php".into(),
                path: PathBuf::from("/definitely/not/here.json"),
            }],
        };
        let store = RwLock::new(LocalizationStore::new());
        assert!(config.apply(&store).is_err());
    }
}
