//! # Registry
//!
//! A concurrent registry of named object constructors.
//!
//! ## Overview
//!
//! Modules publish a [`Factory`] (metadata plus a constructor) under a unique
//! name; hosts later build objects by name from an [`Options`] bag. The
//! registry is an explicit value: a host can assemble a private one or share
//! [`Registry::global`].
//!
//! * **Unique names**: a second registration under the same name is rejected
//!   with [`RegistryError::Duplicate`]; `must_*` variants escalate to a panic.
//! * **Concurrent**: `FxHashMap` behind a `parking_lot::RwLock`; lookups share
//!   the read lock.
//! * **Stable listing**: [`Registry::list`] returns a sorted snapshot.
//!
//! # Example
//!
//! ```rust
//! use foundry_options::{Options, options};
//! use foundry_registry::{BoxError, Info, Object, Registry, RegistryError};
//!
//! #[derive(Debug)]
//! struct Greeter { name: String }
//!
//! impl Object for Greeter {
//!     fn id(&self) -> &str { "Greeter" }
//! }
//!
//! fn greeter(options: &Options) -> Result<Box<dyn Object>, BoxError> {
//!     Ok(Box::new(Greeter { name: options.string_or("name", "world") }))
//! }
//!
//! fn main() -> Result<(), RegistryError> {
//!     let registry = Registry::new();
//!     registry.register("greeter", Info::named("greeter"), greeter)?;
//!
//!     let object = registry.create("greeter", &options! { "name" => "Ada" })?;
//!     let greeter = object.downcast_ref::<Greeter>().unwrap();
//!     assert_eq!(greeter.name, "Ada");
//!
//!     assert!(matches!(
//!         registry.create("missing", &Options::new()),
//!         Err(RegistryError::NotFound { .. })
//!     ));
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod factory;
mod object;
mod registry;

pub use config::ObjectConfig;
pub use error::{BoxError, RegistryError, RegistryErrorExt};
pub use factory::{Constructor, Factory, Info};
pub use foundry_options::Options;
pub use object::Object;
pub use registry::Registry;
