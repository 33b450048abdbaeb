use crate::Options;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::sync::Arc;

/// A custom value that can only be consumed through its textual rendering.
///
/// Blanket-implemented for every `Display + Debug + Send + Sync` type.
pub trait Textual: fmt::Display + fmt::Debug + Send + Sync {}

impl<T: fmt::Display + fmt::Debug + Send + Sync + ?Sized> Textual for T {}

/// A dynamically typed option value.
///
/// Integer widths collapse into [`Value::Int`] / [`Value::Uint`] on conversion.
/// Float widths stay distinct because exact narrowing depends on them.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Explicit "no value"; treated exactly like an absent key.
    #[default]
    Null,
    String(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Time(DateTime<FixedOffset>),
    /// Signed elapsed time with nanosecond precision.
    Duration(TimeDelta),
    /// Anything else that renders as text.
    Custom(Arc<dyn Textual>),
    Strings(Vec<String>),
    Bools(Vec<bool>),
    Ints(Vec<i64>),
    Uints(Vec<u64>),
    F32s(Vec<f32>),
    F64s(Vec<f64>),
    /// Heterogeneous sequence, as produced by self-describing decoders.
    List(Vec<Self>),
    /// Nested option bag.
    Map(Options),
}

impl Value {
    /// Wraps a textual-renderable value.
    pub fn custom(value: impl Textual + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(
            self,
            Self::Strings(_)
                | Self::Bools(_)
                | Self::Ints(_)
                | Self::Uints(_)
                | Self::F32s(_)
                | Self::F64s(_)
                | Self::List(_)
        )
    }

    /// Short name of the stored variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Time(_) => "time",
            Self::Duration(_) => "duration",
            Self::Custom(_) => "custom",
            Self::Strings(_) => "[string]",
            Self::Bools(_) => "[bool]",
            Self::Ints(_) => "[int]",
            Self::Uints(_) => "[uint]",
            Self::F32s(_) => "[f32]",
            Self::F64s(_) => "[f64]",
            Self::List(_) => "[any]",
            Self::Map(_) => "map",
        }
    }
}

macro_rules! from_lossless {
    ($($source:ty => $variant:ident / $seq:ident ($target:ty)),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }

            impl From<Vec<$source>> for Value {
                fn from(values: Vec<$source>) -> Self {
                    Self::$seq(values.into_iter().map(<$target>::from).collect())
                }
            }
        )*
    };
}

macro_rules! from_scalar {
    ($($source:ty => $variant:ident / $seq:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<Vec<$source>> for Value {
                fn from(values: Vec<$source>) -> Self {
                    Self::$seq(values)
                }
            }
        )*
    };
}

from_scalar! {
    String => String / Strings,
    bool => Bool / Bools,
    i64 => Int / Ints,
    u64 => Uint / Uints,
    f32 => F32 / F32s,
    f64 => F64 / F64s,
}

from_lossless! {
    i8 => Int / Ints(i64),
    i16 => Int / Ints(i64),
    i32 => Int / Ints(i64),
    u8 => Uint / Uints(u64),
    u16 => Uint / Uints(u64),
    u32 => Uint / Uints(u64),
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::Strings(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

impl From<std::time::Duration> for Value {
    fn from(value: std::time::Duration) -> Self {
        Self::Duration(TimeDelta::from_std(value).unwrap_or(TimeDelta::MAX))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Time(value.fixed_offset())
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::List(values)
    }
}

impl From<Options> for Value {
    fn from(value: Options) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, a sequence or a map of option values")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    // Decoders report every non-negative integer as unsigned; keep the signed
    // variant whenever it fits.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Uint(v), Value::Int))
    }

    fn visit_f32<E: de::Error>(self, v: f32) -> Result<Value, E> {
        Ok(Value::F32(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::F64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut options = Options::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            options.insert(key, value);
        }
        Ok(Value::Map(options))
    }
}
