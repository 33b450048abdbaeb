#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Foundry crates.
//!
//! * [`macro@foundry_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@foundry_object`] implements `foundry_registry::Object` for a struct.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros in doctests; the consuming crates exercise them in their tests.

mod error;
mod object;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, Error>` and to `Result<T, Source>` for every wrapped source type.
/// * **Conversions**: Implements `From<Source>` for variants holding a `source` field,
///   so upstream errors propagate with `?`.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
/// * **Formatting helper**: Emits a private `format_context` function for `#[error]` strings.
///
/// # Requirements
///
/// 1. The item must be an **enum** with **named-field** variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a `source` (or `#[source]`/`#[from]`) field must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[foundry_derive::foundry_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn foundry_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

/// Attribute macro implementing `foundry_registry::Object` for a struct.
///
/// The object identifier defaults to the struct name and can be overridden with
/// `id = "..."`. `Debug` is derived unless the struct already derives it.
///
/// # Example
///
/// ```rust,ignore
/// #[foundry_derive::foundry_object(id = "StdoutPrinter")]
/// pub struct StdoutPrinter {
///     prefix: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn foundry_object(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    object::expand(args.into(), input).into()
}

/// Collects the trait names listed in `#[derive(...)]` attributes, keeping the last path segment.
fn derived_traits(attrs: &[syn::Attribute]) -> fxhash::FxHashSet<String> {
    let mut traits = fxhash::FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}
