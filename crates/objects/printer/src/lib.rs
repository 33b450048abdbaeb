//! Stdout printer object.
//!
//! Registered as `"printer"`. The optional `prefix` option is written before
//! every line.

use foundry_registry::{BoxError, Info, Object, Options, Registry, RegistryError};
use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, Write};

/// Registration name.
pub const NAME: &str = "printer";

pub const INFO: Info = Info {
    name: Cow::Borrowed(NAME),
    description: Cow::Borrowed("Writes lines to standard output"),
    version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    author: Cow::Borrowed("Foundry"),
    repository: Cow::Borrowed(""),
    license: Cow::Borrowed(env!("CARGO_PKG_LICENSE")),
};

#[foundry_derive::foundry_object(id = "StdoutPrinter")]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct StdoutPrinter {
    prefix: String,
}

impl StdoutPrinter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Writes `message` and a newline to standard output.
    ///
    /// # Errors
    /// Propagates write failures on stdout.
    pub fn println(&self, message: impl Display) -> io::Result<()> {
        self.write_line(&mut io::stdout().lock(), message)
    }

    /// Writes `message` and a newline to `out`.
    ///
    /// # Errors
    /// Propagates write failures on `out`.
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W, message: impl Display) -> io::Result<()> {
        writeln!(out, "{}{message}", self.prefix)
    }
}

/// Builds a [`StdoutPrinter`].
///
/// # Errors
/// Infallible; the `Result` matches the constructor signature.
pub fn construct(options: &Options) -> Result<Box<dyn Object>, BoxError> {
    Ok(Box::new(StdoutPrinter::new(options.string("prefix"))))
}

/// Registers the printer under [`NAME`].
///
/// # Errors
/// Returns [`RegistryError::Duplicate`] if the name is taken.
pub fn register(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(NAME, INFO, construct)
}
