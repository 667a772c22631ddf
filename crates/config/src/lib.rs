//! Configuration models and loaders for the GMAT script generator.

use std::path::Path;

use gmat_core::{
    DEFAULT_FORMATION, DEFAULT_REPORT_PATH, DEFAULT_TIME_AMOUNT, DEFAULT_TIME_UNIT,
    KeplerianElements,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub mod templates;

pub use templates::{
    ForceModelConfig, PropagatorConfig, ReportFileConfig, SpacecraftDefaults, TemplateConfig,
};

/// Scenario manifest describing one script end to end.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioManifest {
    pub formations: Vec<FormationConfig>,
    /// Emit the default force model and propagator.
    #[serde(default = "default_true")]
    pub force_model: bool,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub mission: Option<MissionConfig>,
}

/// A named group of satellites declared together.
#[derive(Debug, Deserialize, Clone)]
pub struct FormationConfig {
    #[serde(default = "default_formation_name")]
    pub name: String,
    pub satellites: Vec<SatelliteConfig>,
}

impl FormationConfig {
    /// Satellite names in declaration order.
    pub fn satellite_names(&self) -> Vec<&str> {
        self.satellites.iter().map(|sat| sat.name.as_str()).collect()
    }

    /// Element records paired positionally with [`Self::satellite_names`].
    pub fn elements(&self) -> Vec<KeplerianElements> {
        self.satellites.iter().map(|sat| sat.elements.into()).collect()
    }
}

/// One spacecraft entry in a formation.
#[derive(Debug, Deserialize, Clone)]
pub struct SatelliteConfig {
    pub name: String,
    pub elements: ElementsConfig,
}

/// Keplerian elements as spelled in manifests.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ElementsConfig {
    pub sma: f64,
    pub ecc: f64,
    pub inc: f64,
    pub raan: f64,
    pub aop: f64,
    pub ta: f64,
}

impl From<ElementsConfig> for KeplerianElements {
    fn from(value: ElementsConfig) -> Self {
        KeplerianElements {
            sma: value.sma,
            ecc: value.ecc,
            inc: value.inc,
            raan: value.raan,
            aop: value.aop,
            ta: value.ta,
        }
    }
}

/// Report-file request.
#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_report_path")]
    pub path: String,
    pub traits: Vec<String>,
}

/// Propagation step of the mission sequence.
#[derive(Debug, Deserialize, Clone)]
pub struct MissionConfig {
    pub satellite: String,
    #[serde(default = "default_time_amount")]
    pub amount: f64,
    #[serde(default = "default_time_unit")]
    pub unit: String,
    /// Formation to propagate; the latest declared one when omitted.
    #[serde(default)]
    pub formation: Option<String>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a scenario manifest from a YAML or TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioManifest, ConfigError> {
    let path = path.as_ref();
    let manifest: ScenarioManifest = load_document(path)?;
    info!(
        path = %path.display(),
        formations = manifest.formations.len(),
        "loaded scenario manifest"
    );
    Ok(manifest)
}

/// Load template overrides from a YAML or TOML file.
pub fn load_templates<P: AsRef<Path>>(path: P) -> Result<TemplateConfig, ConfigError> {
    let path = path.as_ref();
    let templates = load_document(path)?;
    info!(path = %path.display(), "loaded template overrides");
    Ok(templates)
}

fn load_document<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let contents = std::fs::read_to_string(path)?;
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_formation_name() -> String {
    DEFAULT_FORMATION.to_string()
}

fn default_report_path() -> String {
    DEFAULT_REPORT_PATH.to_string()
}

fn default_time_amount() -> f64 {
    DEFAULT_TIME_AMOUNT
}

fn default_time_unit() -> String {
    DEFAULT_TIME_UNIT.to_string()
}
