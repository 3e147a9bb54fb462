//! Layered configuration for series detection.
//!
//! Sources are merged in order, later sources overriding earlier ones:
//!
//! 1. built-in defaults,
//! 2. `config.toml` in the platform configuration directory (if present),
//! 3. files passed explicitly (TOML, YAML or JSON, chosen by extension),
//! 4. environment variables prefixed with `SHELF_`, with `__` separating
//!    nested keys (e.g. `SHELF_SERIES__MIN_VOLUMES=3`).
//!
//! ```toml
//! [series]
//! min_volumes = 2
//! read_status = "read"
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use shelf_series::{GroupingOptions, MIN_SERIES_VOLUMES, SeriesGrouper};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

const ENV_PREFIX: &str = "SHELF_";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Series grouping options, the `[series]` table
    pub series: GroupingOptions,
}

impl Config {
    /// Loads configuration from the default locations and the environment.
    #[instrument]
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment(std::iter::empty::<PathBuf>())?)
    }

    /// Loads configuration with `path` layered over the default locations,
    /// and the environment layered over that.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(Self::figment([path.as_ref()])?)
    }

    /// Builds the layered [`Figment`] without extracting it.
    pub fn figment<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(default_file) = default_config_file()
            && default_file.is_file()
        {
            tracing::debug!(path = %default_file.display(), "merging default configuration file");
            figment = figment.merge(Toml::file(default_file));
        }
        for file in files {
            figment = merge_file(figment, file.as_ref())?;
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extracts and validates configuration from an arbitrary [`Figment`].
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is within range.
    pub fn validate(&self) -> Result<()> {
        if self.series.min_volumes < MIN_SERIES_VOLUMES {
            exn::bail!(ErrorKind::Invalid(format!(
                "series.min_volumes must be at least {MIN_SERIES_VOLUMES}, found {}",
                self.series.min_volumes
            )));
        }
        if self.series.read_status.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("series.read_status must not be blank".to_string()));
        }
        Ok(())
    }

    /// A fresh, empty-cached grouper using these options.
    pub fn grouper(&self) -> SeriesGrouper {
        SeriesGrouper::with_options(self.series.clone())
    }
}

/// The platform-specific configuration directory, if one can be determined.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
}

fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}
