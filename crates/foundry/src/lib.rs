//! Facade crate for Foundry.
//! Re-exports the option bag, registry and kernel, and registers the built-in objects.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Add `foundry` with the desired object features (`file`, `printer`; both default).
//! - Call [`init`] once at startup to register them, then create objects by name.
//!
//! ```rust
//! use foundry::{Registry, options};
//!
//! let registry = Registry::new();
//! foundry::init(&registry).unwrap();
//!
//! let printer = registry.create("printer", &options! { "prefix" => "> " }).unwrap();
//! assert_eq!(printer.id(), "StdoutPrinter");
//! ```

pub use foundry_kernel as kernel;
pub use foundry_kernel::Manifest;
pub use foundry_options::{self as options, Options, Value, options};
pub use foundry_registry::{
    BoxError, Constructor, Factory, Info, Object, ObjectConfig, Registry, RegistryError,
    RegistryErrorExt,
};

/// Built-in objects and their build-time availability.
pub mod objects {
    #[cfg(feature = "file")]
    pub use foundry_file as file;
    #[cfg(feature = "printer")]
    pub use foundry_printer as printer;

    /// Build-time enabled objects (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "file")]
        "file",
        #[cfg(feature = "printer")]
        "printer",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registers every enabled built-in object with `registry`.
///
/// # Errors
/// Returns the first registration error, typically a duplicate name.
#[cfg_attr(not(any(feature = "file", feature = "printer")), allow(unused_variables))]
pub fn init(registry: &Registry) -> Result<(), RegistryError> {
    #[cfg(feature = "file")]
    objects::file::register(registry)?;

    #[cfg(feature = "printer")]
    objects::printer::register(registry)?;

    tracing::info!(objects = ?objects::ENABLED, "Built-in objects registered");
    Ok(())
}

/// Creates an object through the process-wide registry.
///
/// # Errors
/// See [`Registry::create`].
pub fn create(name: &str, options: &Options) -> Result<Box<dyn Object>, RegistryError> {
    Registry::global().create(name, options)
}

/// Creates an object through the process-wide registry; any failure is fatal.
///
/// # Panics
/// Panics if the factory is unknown or its constructor fails.
#[track_caller]
#[must_use]
pub fn must_create(name: &str, options: &Options) -> Box<dyn Object> {
    Registry::global().must_create(name, options)
}
