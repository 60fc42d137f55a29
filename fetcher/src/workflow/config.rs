use anyhow::{bail, Context};
use flightcore::prelude::{AreaConfig, FilterConfig, DEFAULT_DATE_FORMAT};
use flightcore::processing::is_valid_date_format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";
pub const DEFAULT_JSON_OUT: &str = "flights.json";
pub const DEFAULT_CSV_OUT: &str = "flights.csv";

/// Static HTTP Basic credential for the upstream API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub area: AreaConfig,
    pub base_url: String,
    pub date_format: String,
    pub json_out: PathBuf,
    pub csv_out: PathBuf,
    pub credentials: Option<Credentials>,
    /// Ask upstream for the radius' bounding box only instead of every state.
    pub bounded_query: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            area: AreaConfig::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            json_out: PathBuf::from(DEFAULT_JSON_OUT),
            csv_out: PathBuf::from(DEFAULT_CSV_OUT),
            credentials: None,
            bounded_query: false,
        }
    }
}

impl FetchConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading fetch config {}", path_ref.display()))?;
        let config: FetchConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing fetch config {}", path_ref.display()))?;
        if !is_valid_date_format(&config.date_format) {
            bail!(
                "invalid date_format {:?} in fetch config {}",
                config.date_format,
                path_ref.display()
            );
        }
        Ok(config)
    }

    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig::new(self.area, self.date_format.clone())
    }

    /// Re-roots relative output paths under `dir`.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        if self.json_out.is_relative() {
            self.json_out = dir.join(&self.json_out);
        }
        if self.csv_out.is_relative() {
            self.csv_out = dir.join(&self.csv_out);
        }
        self
    }
}
