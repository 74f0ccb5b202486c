//! Configuration for readworthy.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (READWORTHY_HOME, READWORTHY_CATALOG, READWORTHY_LOCALE)
//! 2. Config file (.readworthy/config.yaml)
//! 3. Defaults (~/.readworthy, built-in catalog)
//!
//! Config file discovery:
//! - Searches current directory and parents for .readworthy/config.yaml
//! - Paths in config file are relative to the project root (parent of .readworthy/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::Locale;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".readworthy";
const CONFIG_FILE: &str = "config.yaml";
const CATALOG_FILE: &str = "catalog.json";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Catalog file (relative to the project root)
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub views: Option<ViewsConfig>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    pub featured: Option<usize>,
    pub recent: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<Locale>,
    pub tag_preview: Option<usize>,
}

/// Sizes of the recency views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub featured: usize,
    pub recent: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            featured: 2,
            recent: 6,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub locale: Locale,
    pub tag_preview: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            tag_preview: 3,
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to readworthy home
    pub home: PathBuf,
    /// Catalog file; `None` means the built-in catalog
    pub catalog: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Recency view sizes
    pub views: ViewSettings,
    /// Presentation settings
    pub display: DisplaySettings,
}

/// Environment overrides, read once
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    home: Option<PathBuf>,
    catalog: Option<PathBuf>,
    locale: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            home: std::env::var("READWORTHY_HOME").ok().map(PathBuf::from),
            catalog: std::env::var("READWORTHY_CATALOG").ok().map(PathBuf::from),
            locale: std::env::var("READWORTHY_LOCALE").ok(),
        }
    }
}

/// Find config file by searching a directory and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Combine config file, environment and defaults
fn resolve(
    config_file: Option<PathBuf>,
    env: EnvOverrides,
    default_home: PathBuf,
) -> Result<ResolvedConfig> {
    let parsed = match &config_file {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };

    let home = env.home.unwrap_or(default_home);

    let file_catalog = match (&config_file, parsed.as_ref().and_then(|c| c.catalog.as_ref())) {
        (Some(config_path), Some(catalog)) => {
            // Base directory is the parent of .readworthy/ (i.e., grandparent of config.yaml)
            let base_dir = config_path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."));
            Some(resolve_path(base_dir, catalog))
        }
        _ => None,
    };

    let catalog = env.catalog.or(file_catalog).or_else(|| {
        let home_catalog = home.join(CATALOG_FILE);
        home_catalog.exists().then_some(home_catalog)
    });

    let views = parsed
        .as_ref()
        .and_then(|c| c.views.as_ref())
        .map(|v| {
            let defaults = ViewSettings::default();
            ViewSettings {
                featured: v.featured.unwrap_or(defaults.featured),
                recent: v.recent.unwrap_or(defaults.recent),
            }
        })
        .unwrap_or_default();

    let file_display = parsed.as_ref().and_then(|c| c.display.as_ref());
    let defaults = DisplaySettings::default();
    let locale = match env.locale {
        Some(raw) => raw
            .parse::<Locale>()
            .with_context(|| format!("Invalid READWORTHY_LOCALE: {}", raw))?,
        None => file_display
            .and_then(|d| d.locale)
            .unwrap_or(defaults.locale),
    };
    let display = DisplaySettings {
        locale,
        tag_preview: file_display
            .and_then(|d| d.tag_preview)
            .unwrap_or(defaults.tag_preview),
    };

    Ok(ResolvedConfig {
        home,
        catalog,
        config_file,
        views,
        display,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    resolve(find_config_file(&cwd), EnvOverrides::from_env(), default_home)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
