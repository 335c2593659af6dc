use super::{
    evolution::EvolutionConfig,
    report::ReportConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::QuadgaError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `QUADGA_EVOLUTION__POPULATION_SIZE=40`
pub const ENV_PREFIX: &str = "QUADGA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), QuadgaError> {
        self.evolution.validate()?;
        self.report.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.evolution.to_manifest(), self.report.to_manifest()]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML or JSON file (by extension), layered with environment overrides
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), QuadgaError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(QuadgaError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let config: AppConfig = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        self.replace(config)
    }

    /// Defaults layered with environment overrides only
    pub fn load_from_env(&self) -> Result<(), QuadgaError> {
        let config: AppConfig = ::config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        self.replace(config)
    }

    fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn replace(&self, config: AppConfig) -> Result<(), QuadgaError> {
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), QuadgaError> {
        let toml_str = toml::to_string_pretty(&*self.read_lock()?)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, QuadgaError> {
        Ok(self.read_lock()?.clone())
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), QuadgaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, AppConfig>, QuadgaError> {
        self.config
            .read()
            .map_err(|_| QuadgaError::Configuration("Config lock poisoned".to_string()))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, QuadgaError> {
        self.config
            .write()
            .map_err(|_| QuadgaError::Configuration("Config lock poisoned".to_string()))
    }
}
