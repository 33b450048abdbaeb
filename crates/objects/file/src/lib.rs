//! File opener object.
//!
//! Registered as `"file"`. Reads the path from the `filename` option, or from
//! the raw payload when the configuration is a bare string, and opens it
//! read-only. The handle is closed when the object is dropped.
mod error;

pub use crate::error::{FileError, FileErrorExt};

use foundry_registry::{BoxError, Info, Object, Options, Registry, RegistryError};
use std::borrow::Cow;
use std::fs::{File, Metadata};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Registration name.
pub const NAME: &str = "file";

pub const INFO: Info = Info {
    name: Cow::Borrowed(NAME),
    description: Cow::Borrowed("Opens a file read-only; the handle closes when the object is dropped"),
    version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    author: Cow::Borrowed("Foundry"),
    repository: Cow::Borrowed(""),
    license: Cow::Borrowed(env!("CARGO_PKG_LICENSE")),
};

/// An open, readable file.
#[foundry_derive::foundry_object(id = "FileOpener")]
pub struct FileObject {
    path: PathBuf,
    file: File,
}

impl FileObject {
    /// Opens `path` read-only.
    ///
    /// # Errors
    /// Returns [`FileError::Open`] when the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| FileError::Open {
            path: path.display().to_string(),
            source,
            context: None,
        })?;
        Ok(Self { path, file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    /// Propagates the underlying I/O error.
    pub fn metadata(&self) -> io::Result<Metadata> {
        self.file.metadata()
    }

    #[must_use]
    pub fn into_inner(self) -> File {
        self.file
    }
}

impl Read for FileObject {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for FileObject {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

/// Builds a [`FileObject`] from `filename`, falling back to the raw payload.
///
/// # Errors
/// Returns [`FileError::MissingFilename`] or [`FileError::Open`], boxed.
pub fn construct(options: &Options) -> Result<Box<dyn Object>, BoxError> {
    let filename = Some(options.string("filename"))
        .filter(|name| !name.is_empty())
        .or_else(|| options.raw())
        .filter(|name| !name.is_empty())
        .ok_or(FileError::MissingFilename { context: None })?;

    tracing::debug!(filename = %filename, "Opening file");
    Ok(Box::new(FileObject::open(filename)?))
}

/// Registers the file opener under [`NAME`].
///
/// # Errors
/// Returns [`RegistryError::Duplicate`] if the name is taken.
pub fn register(registry: &Registry) -> Result<(), RegistryError> {
    registry.register(NAME, INFO, construct)
}
