use foundry_options::Options;
use serde::{Deserialize, Deserializer};

/// A decoded `(name, options)` pair naming a factory and its input.
///
/// `options` accepts either a mapping or a bare string; a string becomes the
/// raw payload of [`Options::from_raw`].
///
/// ```rust
/// use foundry_registry::ObjectConfig;
///
/// let config: ObjectConfig = serde_json::from_str(r#"{"name":"file","options":"LICENSE"}"#)?;
/// assert_eq!(config.options.raw().as_deref(), Some("LICENSE"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(default, deserialize_with = "payload")]
    pub options: Options,
}

impl ObjectConfig {
    pub fn new(name: impl Into<String>, options: Options) -> Self {
        Self { name: name.into(), options }
    }

    /// Config whose options are a single opaque string.
    pub fn raw(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::new(name, Options::from_raw(payload))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Raw(String),
    Options(Options),
}

fn payload<'de, D>(deserializer: D) -> Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Payload::deserialize(deserializer)? {
        Payload::Raw(text) => Options::from_raw(text),
        Payload::Options(options) => options,
    })
}
