//! Sum type definitions loaded from TOML.
//!
//! A definitions file lists sum types in order; each one is created and sealed
//! when the file is built into a [`Registry`]:
//!
//! ```toml
//! [[types]]
//! name = "Maybe"
//! variants = [{ name = "Nothing" }, { name = "Just", fields = ["x"] }]
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::slice;

use serde::Deserialize;
use tagged_core::{Name, SumType, SumTypeDefinition, SumTypeError};
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct TypesConfig {
    #[serde(default)]
    pub types: Vec<SumTypeDefinition>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read definitions at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse definitions at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid definitions at {path:?}: {source}")]
    Invalid { path: PathBuf, source: RegistryError },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("sum type #{index}: {source}")]
    Define { index: usize, source: SumTypeError },
    #[error("sum type `{name}` is defined more than once")]
    DuplicateType { name: Name },
}

impl TypesConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read definitions at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse definitions at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    /// Create and seal every listed sum type, in file order.
    pub fn build(&self) -> Result<Registry, RegistryError> {
        let mut seen = HashSet::with_capacity(self.types.len());
        let mut types = Vec::with_capacity(self.types.len());

        for (index, definition) in self.types.iter().enumerate() {
            let sum_type = definition
                .build()
                .map_err(|source| RegistryError::Define { index, source })?;
            if !seen.insert(sum_type.name().clone()) {
                return Err(RegistryError::DuplicateType {
                    name: sum_type.name().clone(),
                });
            }
            types.push(sum_type);
        }

        Ok(Registry { types })
    }
}

/// Load a definitions file and build every sum type it declares.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry, ConfigError> {
    let path = path.as_ref();
    let registry = TypesConfig::load(path)?
        .build()
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("Loaded {} sum type(s) from {:?}", registry.len(), path);
    Ok(registry)
}

/// Sealed sum types keyed by name, in definition order.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    types: Vec<SumType>,
}

impl Registry {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SumType> {
        self.types.iter().find(|sum_type| sum_type.name() == name)
    }

    pub fn iter(&self) -> slice::Iter<'_, SumType> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SumType;
    type IntoIter = slice::Iter<'a, SumType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
