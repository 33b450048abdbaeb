use crate::config::ObjectConfig;
use crate::error::{BoxError, RegistryError};
use crate::factory::{Factory, Info};
use crate::object::Object;
use foundry_options::Options;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, trace, warn};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A thread-safe store of factories keyed by unique name.
///
/// Cloning is cheap and yields a handle to the same store. Registration takes
/// the write lock; lookups and listings share the read lock. Constructors run
/// after the lock is released, so they may use the registry themselves.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    factories: Arc<RwLock<FxHashMap<String, Arc<Factory>>>>,
}

impl Registry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Registers `constructor` under `name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if `name` is already taken.
    ///
    /// # Examples
    /// ```rust
    /// use foundry_options::Options;
    /// use foundry_registry::{Info, Object, Registry};
    ///
    /// #[derive(Debug)]
    /// struct Clock;
    ///
    /// impl Object for Clock {
    ///     fn id(&self) -> &str { "Clock" }
    /// }
    ///
    /// # fn main() -> Result<(), foundry_registry::RegistryError> {
    /// let registry = Registry::new();
    /// registry.register("clock", Info::named("clock"), |_: &Options| Ok(Box::new(Clock)))?;
    ///
    /// let clock = registry.create("clock", &Options::new())?;
    /// assert_eq!(clock.id(), "Clock");
    /// # Ok(())
    /// # }
    /// ```
    pub fn register<F>(
        &self,
        name: impl Into<String>,
        info: Info,
        constructor: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&Options) -> Result<Box<dyn Object>, BoxError> + Send + Sync + 'static,
    {
        self.register_factory(Factory::new(name, info, Some(Arc::new(constructor))))
    }

    /// Registers a prebuilt factory under its own name.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the name is already taken; the
    /// existing entry is left untouched.
    pub fn register_factory(&self, factory: Factory) -> Result<(), RegistryError> {
        let mut factories = self.factories.write();
        if factories.contains_key(factory.name()) {
            error!(name = factory.name(), "Factory registered twice");
            return Err(RegistryError::Duplicate { name: factory.name().to_owned(), context: None });
        }

        debug!(name = factory.name(), version = %factory.info().version, "Factory registered");
        factories.insert(factory.name().to_owned(), Arc::new(factory));
        Ok(())
    }

    /// Like [`Registry::register`], but a duplicate name is fatal.
    ///
    /// # Panics
    /// Panics if `name` is already registered.
    #[track_caller]
    pub fn must_register<F>(&self, name: impl Into<String>, info: Info, constructor: F)
    where
        F: Fn(&Options) -> Result<Box<dyn Object>, BoxError> + Send + Sync + 'static,
    {
        if let Err(err) = self.register(name, info, constructor) {
            panic!("{err}");
        }
    }

    /// Returns the factory registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Factory>> {
        let factory = self.factories.read().get(name).cloned();
        trace!(name, found = factory.is_some(), "Factory lookup");
        factory
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Snapshot of every factory in ascending name order.
    ///
    /// Later registrations do not affect a returned snapshot.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<Factory>> {
        let mut factories: Vec<_> = self.factories.read().values().cloned().collect();
        factories.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        factories
    }

    /// Registration names in ascending order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.list().iter().map(|factory| factory.name().to_owned()).collect()
    }

    /// Metadata of every factory, ordered by registration name.
    #[must_use]
    pub fn infos(&self) -> Vec<Info> {
        self.list().iter().map(|factory| factory.info().clone()).collect()
    }

    /// Builds an object with the factory registered under `name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] for an unknown name, otherwise
    /// whatever [`Factory::create`] returns.
    pub fn create(&self, name: &str, options: &Options) -> Result<Box<dyn Object>, RegistryError> {
        let Some(factory) = self.get(name) else {
            warn!(name, "Cannot create object from an unknown factory");
            return Err(RegistryError::NotFound { name: name.to_owned(), context: None });
        };

        factory.create(options).inspect_err(|err| {
            warn!(name, error = %err, "Object creation failed");
        })
    }

    /// Builds an object from a decoded `(name, options)` pair.
    ///
    /// # Errors
    /// See [`Registry::create`].
    pub fn create_from(&self, config: &ObjectConfig) -> Result<Box<dyn Object>, RegistryError> {
        self.create(&config.name, &config.options)
    }

    /// Like [`Registry::create`], but any failure is fatal.
    ///
    /// # Panics
    /// Panics if the factory is unknown or the constructor fails.
    #[track_caller]
    #[must_use]
    pub fn must_create(&self, name: &str, options: &Options) -> Box<dyn Object> {
        match self.create(name, options) {
            Ok(object) => object,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`Registry::create_from`], but any failure is fatal.
    ///
    /// # Panics
    /// Panics if the factory is unknown or the constructor fails.
    #[track_caller]
    #[must_use]
    pub fn must_create_from(&self, config: &ObjectConfig) -> Box<dyn Object> {
        self.must_create(&config.name, &config.options)
    }
}
