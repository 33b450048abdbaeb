//! # Options
//!
//! A dynamically typed key/value bag handed to object constructors, with typed
//! accessors that never fail.
//!
//! Every accessor takes a key and returns a value of the requested type. When
//! the key is absent, holds [`Value::Null`], or holds something that cannot be
//! converted *exactly*, the caller's default (or the type's zero value) is
//! returned instead. Narrowing numeric conversions are exact-or-default: `3.5`
//! read as an integer yields the default, `4.0` yields `4`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::TimeDelta;
//! use foundry_options::options;
//!
//! let opts = options! {
//!     "filename" => "LICENSE",
//!     "retries" => 3u8,
//!     "ratio" => 4.0,
//!     "timeout" => "1h30m",
//! };
//!
//! assert_eq!(opts.string("filename"), "LICENSE");
//! assert_eq!(opts.int("retries"), 3);
//! assert_eq!(opts.uint("ratio"), 4);
//! assert_eq!(opts.duration("timeout"), TimeDelta::minutes(90));
//! assert_eq!(opts.int_or("missing", -1), -1);
//! ```

mod bag;
mod coerce;
mod duration;
mod layout;
mod value;

pub use bag::{Options, RAW_KEY};
pub use duration::{format_duration, parse_duration};
pub use layout::parse_time;
pub use value::{Textual, Value};

/// Builds an [`Options`] bag from `key => value` pairs.
///
/// Values go through [`Value::from`], so any supported primitive, string,
/// sequence or chrono type can be used directly.
///
/// ```rust
/// let opts = foundry_options::options! { "s" => "text", "b" => true };
/// assert!(opts.bool("b"));
/// ```
#[macro_export]
macro_rules! options {
    () => {
        $crate::Options::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut options = $crate::Options::new();
        $( options.insert($key, $value); )+
        options
    }};
}
