use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::controller::{Options, DEFAULT_CONTAINER_ID, MAX_MONTH_COUNT};
use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "BINCAL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("bincal").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".bincal.toml"));
    }

    locations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Html,
    Text,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "text" | "txt" => Ok(Format::Text),
            _ => Err(Error::new(
                ErrorKind::ConfigParse,
                &format!("Unknown output format '{}'", s),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    pub format: Format,
    pub title: String,
}

impl Default for OutputSpec {
    fn default() -> Self {
        OutputSpec {
            format: Format::Html,
            title: "Binary calendar".to_owned(),
        }
    }
}

/// The `[calendar]` section. Fields left out fall back to a full year
/// starting in January, the same as having no config file at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarSpec {
    pub id: String,
    pub month: Option<i64>,
    pub year: Option<i64>,
    pub count: Option<i64>,
}

impl Default for CalendarSpec {
    fn default() -> Self {
        CalendarSpec {
            id: DEFAULT_CONTAINER_ID.to_owned(),
            month: Some(0),
            year: None,
            count: Some(MAX_MONTH_COUNT as i64),
        }
    }
}

impl From<CalendarSpec> for Options {
    fn from(spec: CalendarSpec) -> Self {
        Options::new(&spec.id, spec.count, spec.month, spec.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarSpec,
    pub output: OutputSpec,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Loads `path` if given, otherwise the first config found in the usual
/// locations. Without any config file the defaults are used.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::ConfigNotFound,
                &path.display().to_string(),
            ));
        }
        return Config::from_path(path);
    }

    load_from_locations(&find_configfile_locations())
}

/// Loads the first of `locations` that exists, or the defaults if none does.
pub fn load_from_locations(locations: &[PathBuf]) -> Result<Config> {
    for location in locations {
        if location.exists() {
            log::debug!("Using config {}", location.display());
            return Config::from_path(location);
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}
