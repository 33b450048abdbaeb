use crate::config::{ConfigError, load_config};
use foundry_logger::LogSettings;
use foundry_registry::{Object, ObjectConfig, Registry, RegistryError, RegistryErrorExt};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The document a host reads at startup: the objects to build and how to log.
///
/// ```toml
/// [log]
/// level = "debug"
///
/// [[objects]]
/// name = "printer"
/// options = { prefix = "> " }
///
/// [[objects]]
/// name = "file"
/// options = "LICENSE"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub objects: Vec<ObjectConfig>,
    pub log: LogSettings,
}

impl Manifest {
    /// Loads a manifest through [`load_config`].
    ///
    /// # Errors
    /// See [`load_config`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Builds every listed object in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the failing object's [`RegistryError`], annotated with its
    /// position in the manifest.
    pub fn build(&self, registry: &Registry) -> Result<Vec<Box<dyn Object>>, RegistryError> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, config)| -> Result<Box<dyn Object>, RegistryError> {
                let object = registry
                    .create_from(config)
                    .context(format!("manifest entry #{}", index + 1))?;
                info!(name = %config.name, id = object.id(), "Object created");
                Ok(object)
            })
            .collect()
    }
}
