use foundry_registry::{BoxError, Info, Object, Options};
use std::borrow::Cow;

#[foundry_derive::foundry_object(id = "Lamp")]
pub struct Lamp {
    pub watts: u64,
}

pub const fn lamp_info() -> Info {
    Info {
        name: Cow::Borrowed("lamp"),
        description: Cow::Borrowed("A lamp with a configurable wattage"),
        version: Cow::Borrowed("1.0.0"),
        author: Cow::Borrowed("Foundry"),
        repository: Cow::Borrowed(""),
        license: Cow::Borrowed("MIT"),
    }
}

/// Reads `watts`, or the raw payload when built from a bare string.
pub fn lamp(options: &Options) -> Result<Box<dyn Object>, BoxError> {
    let watts = options.uint_or("watts", options.raw().and_then(|raw| raw.parse().ok()).unwrap_or(0));
    if watts == 0 {
        return Err("watts must be positive".into());
    }
    Ok(Box::new(Lamp { watts }))
}
