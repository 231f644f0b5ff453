//! Layered configuration for seo-score.
//!
//! Sources merge lowest first: built-in defaults, the per-user
//! `config.<ext>` (`~/.config/seo-score/` on Linux), project files, files
//! passed with `--config`, and finally `SEO_SCORE_*` environment variables.
//!
//! Project files are looked up from the working directory upward. The first
//! directory holding any of `.seo.<ext>`, `seo.<ext>`, `.seo-score.<ext>`
//! or `seo-score.<ext>` supplies all of its matches, merged in that order;
//! the walk gives up above a `.git` directory. `<ext>` is `toml`, `yaml`,
//! `yml` or `json`.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use seo_score_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("."))
//!     .load()?;
//! println!("site host: {:?} from {:?}", config.site_host, sources.primary_file());
//! # Ok::<(), seo_score_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The configuration for seo-score.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and `SEO_SCORE_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for daily-rolling JSONL log files; unset means no file log.
    pub log_dir: Option<Utf8PathBuf>,
    /// Host the content is served from (e.g., `blog.example.com`).
    ///
    /// `http(s)://` links to any other host count as outbound; links back
    /// to this host count as neither. Without it, every `http(s)://` link
    /// is outbound.
    pub site_host: Option<String>,
    /// Default minimum overall score for `analyze` and `batch` (0--100).
    pub min_score: Option<u8>,
    /// Default minimum reading-ease score for the `readability` command.
    pub min_readability: Option<f64>,
    /// Largest content file or MCP payload accepted, in bytes (5 MiB when unset).
    pub max_input_bytes: Option<usize>,
    /// Accept inputs of any size; `max_input_bytes` is then ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Effective input limit: `None` when disabled, else the configured or
    /// default byte count.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Configured site host, or `""` when unset.
    pub fn site_host(&self) -> &str {
        self.site_host.as_deref().unwrap_or_default()
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`], for `info` to report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file with the final say: last explicit file, else the last
    /// project file, else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// File extensions tried in each directory; later ones win on conflict.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Directory name under the platform config dir.
const APP_NAME: &str = "seo-score";

/// Project file stems, lowest precedence first.
const APP_NAMES: &[&str] = &["seo", "seo-score"];

/// A directory containing this entry ends the upward project search.
const SEARCH_BOUNDARY: &str = ".git";

/// Builder that layers config files and environment over [`Config::default`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that reads the user config and nothing else until told where
    /// to search.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Search for project files from `dir` upward, stopping at the first
    /// directory that has any or at a `.git` boundary.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Merge `path` after every discovered file. Repeatable; the last one
    /// added wins.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Skip the per-user config so tests only see their own files.
    #[cfg(test)]
    const fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Merge defaults, user config, project files, explicit files, then
    /// `SEO_SCORE_*` variables, and report which files took part.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let mut sources = ConfigSources::default();
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if self.user_config {
            sources.user_file = user_config_file();
        }
        if let Some(root) = &self.search_root {
            sources.project_files = project_files(root);
        }
        sources.explicit_files = self.explicit_files;

        let files = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files);
        for file in files {
            tracing::debug!(%file, "merging config file");
            figment = merge_file(figment, file);
        }

        // SEO_SCORE_SITE_HOST=blog.example.com, SEO_SCORE_MIN_SCORE=70, ...
        let config: Config = figment
            .merge(Env::prefixed("SEO_SCORE_").lowercase(true))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Config files of the closest directory at or above `start` that has any.
///
/// Within that directory the order is `seo` before `seo-score`, and a
/// dotfile before the plain name, so figment's last-wins merge gives
/// `seo-score.<ext>` the final say.
fn project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = APP_NAMES
            .iter()
            .flat_map(|name| [format!(".{name}"), (*name).to_string()])
            .flat_map(|stem| CONFIG_EXTENSIONS.iter().map(move |ext| format!("{stem}.{ext}")))
            .map(|file| dir.join(file))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        // A repository root ends the walk, but only above the start dir.
        if dir != start && dir.join(SEARCH_BOUNDARY).exists() {
            break;
        }
    }
    Vec::new()
}

/// First `config.<ext>` in the platform config dir
/// (`~/.config/seo-score/` on Linux).
fn user_config_file() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let dir = Utf8Path::from_path(dirs.config_dir())?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge one file, picking the provider by extension (TOML by default).
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}
