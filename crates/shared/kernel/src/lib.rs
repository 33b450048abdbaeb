//! Kernel utilities shared by Foundry hosts.
//! Keep this crate lightweight; it covers configuration loading and the object manifest.
//!
//! ## Config loading
//! ```rust,no_run
//! use foundry_kernel::Manifest;
//!
//! let manifest = Manifest::load("foundry.toml")?;
//! println!("{} objects", manifest.objects.len());
//! # Ok::<(), foundry_kernel::config::ConfigError>(())
//! ```
pub mod config;
mod manifest;

pub use manifest::Manifest;
