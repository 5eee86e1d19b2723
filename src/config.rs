use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main scaler configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScalerConfig {
    /// Smallest serving count the control allows
    #[serde(default = "default_min_portions")]
    pub min_portions: u32,
    /// Largest serving count the control allows
    #[serde(default = "default_max_portions")]
    pub max_portions: u32,
    /// Extractors configuration
    #[serde(default)]
    pub extractors: ExtractorsConfig,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            min_portions: default_min_portions(),
            max_portions: default_max_portions(),
            extractors: ExtractorsConfig::default(),
        }
    }
}

/// Configuration for document extractors
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExtractorsConfig {
    /// Order in which extractors should be tried
    #[serde(default = "default_extractors")]
    pub order: Vec<String>,
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            order: default_extractors(),
        }
    }
}

// Default value functions
fn default_min_portions() -> u32 {
    1
}

fn default_max_portions() -> u32 {
    20
}

fn default_extractors() -> Vec<String> {
    vec!["heading_list".to_string(), "json_ld".to_string()]
}

impl ScalerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCALER__ prefix
    /// 2. recipe_scaler.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCALER__MAX_PORTIONS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScalerConfig::load`] for the source priority.
pub fn load_config() -> Result<ScalerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_scaler").required(false))
        // Use double underscore for nested: RECIPE_SCALER__EXTRACTORS__ORDER
        .add_source(
            Environment::with_prefix("RECIPE_SCALER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
