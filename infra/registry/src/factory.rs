use crate::error::{BoxError, RegistryError};
use crate::object::Object;
use foundry_options::Options;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Builds an object from its options.
pub type Constructor =
    Arc<dyn Fn(&Options) -> Result<Box<dyn Object>, BoxError> + Send + Sync + 'static>;

/// Descriptive metadata published with a factory. All fields are free-form.
///
/// Fields are `Cow` so that modules can declare their metadata as a `const`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub author: Cow<'static, str>,
    pub repository: Cow<'static, str>,
    pub license: Cow<'static, str>,
}

impl Info {
    /// Metadata with only a name set.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// A constructor paired with its metadata, registered under a unique name.
///
/// Immutable once built; the registry hands out shared references.
#[derive(Clone)]
pub struct Factory {
    name: String,
    info: Info,
    constructor: Option<Constructor>,
}

impl Factory {
    pub fn new(name: impl Into<String>, info: Info, constructor: Option<Constructor>) -> Self {
        Self { name: name.into(), info, constructor }
    }

    /// Registration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn info(&self) -> &Info {
        &self.info
    }

    #[must_use]
    pub const fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Runs the constructor against `options`.
    ///
    /// # Errors
    /// Returns [`RegistryError::ConstructorUndefined`] when the factory has no
    /// constructor and [`RegistryError::Constructor`] when the constructor
    /// fails.
    pub fn create(&self, options: &Options) -> Result<Box<dyn Object>, RegistryError> {
        let Some(constructor) = &self.constructor else {
            return Err(RegistryError::ConstructorUndefined {
                name: self.name.clone(),
                context: None,
            });
        };
        constructor(options).map_err(|source| RegistryError::Constructor {
            name: self.name.clone(),
            source,
            context: None,
        })
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("name", &self.name)
            .field("info", &self.info)
            .field("constructor", &self.constructor.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
