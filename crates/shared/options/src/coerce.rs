//! Conversion rules behind the [`Options`](crate::Options) accessors.
//!
//! Scalar rules return `None` when the value cannot be converted exactly; the
//! accessor substitutes the caller's default. Sequence rules convert element by
//! element with a zero default per element.

use crate::duration::{format_duration, parse_duration};
use crate::layout::parse_time;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};

/// Largest magnitude below which every integer is exactly representable as `f64`.
const MAX_EXACT_FLOAT_INT: i64 = 1 << 53;
/// 2^63, the first `f64` above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// 2^64, the first `f64` above `u64::MAX`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Text of values that are only usable through their rendering.
fn rendered(value: &Value) -> Option<String> {
    match value {
        Value::Custom(custom) => Some(custom.to_string()),
        Value::Duration(d) => Some(format_duration(*d)),
        Value::Time(t) => Some(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        _ => None,
    }
}

pub(crate) fn format_f64(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    v.to_string()
}

pub(crate) fn format_f32(v: f32) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    v.to_string()
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

fn parse_uint(text: &str) -> Option<u64> {
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

fn exact_i64(v: f64) -> Option<i64> {
    (v.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&v)).then_some(v as i64)
}

fn exact_u64(v: f64) -> Option<u64> {
    (v.fract() == 0.0 && (0.0..U64_BOUND).contains(&v)).then_some(v as u64)
}

fn exact_f64_from_i64(v: i64) -> Option<f64> {
    (-MAX_EXACT_FLOAT_INT..=MAX_EXACT_FLOAT_INT).contains(&v).then_some(v as f64)
}

fn exact_f64_from_u64(v: u64) -> Option<f64> {
    (v <= MAX_EXACT_FLOAT_INT.unsigned_abs()).then_some(v as f64)
}

// --- Scalars ---

pub(crate) fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Uint(u) => Some(u.to_string()),
        Value::F32(f) => Some(format_f32(*f)),
        Value::F64(f) => Some(format_f64(*f)),
        other => rendered(other),
    }
}

pub(crate) fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(i) => Some(*i != 0),
        Value::Uint(u) => Some(*u != 0),
        Value::F32(f) => Some(*f != 0.0),
        Value::F64(f) => Some(*f != 0.0),
        Value::String(s) => parse_bool(s),
        other => rendered(other).as_deref().and_then(parse_bool),
    }
}

pub(crate) fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Uint(u) => i64::try_from(*u).ok(),
        Value::F32(f) => exact_i64(f64::from(*f)),
        Value::F64(f) => exact_i64(*f),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => parse_int(s),
        other => rendered(other).as_deref().and_then(parse_int),
    }
}

pub(crate) fn to_uint(value: &Value) -> Option<u64> {
    match value {
        Value::Uint(u) => Some(*u),
        Value::Int(i) => u64::try_from(*i).ok(),
        Value::F32(f) => exact_u64(f64::from(*f)),
        Value::F64(f) => exact_u64(*f),
        Value::Bool(b) => Some(u64::from(*b)),
        Value::String(s) => parse_uint(s),
        other => rendered(other).as_deref().and_then(parse_uint),
    }
}

pub(crate) fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::F64(f) => Some(*f),
        Value::F32(f) => Some(f64::from(*f)),
        Value::Int(i) => exact_f64_from_i64(*i),
        Value::Uint(u) => exact_f64_from_u64(*u),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_float(s),
        other => rendered(other).as_deref().and_then(parse_float),
    }
}

pub(crate) fn to_duration(value: &Value, default: TimeDelta) -> TimeDelta {
    match value {
        Value::Duration(d) => *d,
        Value::String(s) => parse_duration(s).unwrap_or(default),
        Value::Custom(_) | Value::Time(_) => {
            rendered(value).as_deref().and_then(parse_duration).unwrap_or(default)
        },
        other => to_int(other).map_or(default, TimeDelta::nanoseconds),
    }
}

pub(crate) fn to_time(value: &Value, default: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    match value {
        Value::Time(t) => *t,
        Value::String(s) => parse_time(s).unwrap_or(default),
        Value::Custom(_) | Value::Duration(_) => {
            rendered(value).as_deref().and_then(parse_time).unwrap_or(default)
        },
        other => to_int(other)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map_or(default, |t| t.fixed_offset()),
    }
}

// --- Sequences ---

pub(crate) fn to_strings(value: &Value) -> Option<Vec<String>> {
    let items = match value {
        Value::Strings(items) => items.clone(),
        Value::Bools(items) => items.iter().map(ToString::to_string).collect(),
        Value::Ints(items) => items.iter().map(ToString::to_string).collect(),
        Value::Uints(items) => items.iter().map(ToString::to_string).collect(),
        Value::F32s(items) => items.iter().copied().map(format_f32).collect(),
        Value::F64s(items) => items.iter().copied().map(format_f64).collect(),
        Value::List(items) => items.iter().map(|v| to_string(v).unwrap_or_default()).collect(),
        _ => return None,
    };
    Some(items)
}

pub(crate) fn to_ints(value: &Value) -> Option<Vec<i64>> {
    let items = match value {
        Value::Ints(items) => items.clone(),
        Value::Uints(items) => items.iter().map(|u| i64::try_from(*u).unwrap_or(0)).collect(),
        Value::F32s(items) => {
            items.iter().map(|f| exact_i64(f64::from(*f)).unwrap_or(0)).collect()
        },
        Value::F64s(items) => items.iter().map(|f| exact_i64(*f).unwrap_or(0)).collect(),
        Value::List(items) => items.iter().map(|v| to_int(v).unwrap_or(0)).collect(),
        _ => return None,
    };
    Some(items)
}

pub(crate) fn to_floats(value: &Value) -> Option<Vec<f64>> {
    let items = match value {
        Value::F64s(items) => items.clone(),
        Value::F32s(items) => items.iter().copied().map(f64::from).collect(),
        Value::Ints(items) => {
            items.iter().map(|i| exact_f64_from_i64(*i).unwrap_or(0.0)).collect()
        },
        Value::Uints(items) => {
            items.iter().map(|u| exact_f64_from_u64(*u).unwrap_or(0.0)).collect()
        },
        Value::List(items) => items.iter().map(|v| to_float(v).unwrap_or(0.0)).collect(),
        _ => return None,
    };
    Some(items)
}

pub(crate) fn to_bools(value: &Value) -> Option<Vec<bool>> {
    let items = match value {
        Value::Bools(items) => items.clone(),
        Value::Strings(items) => items.iter().map(|s| parse_bool(s).unwrap_or(false)).collect(),
        Value::List(items) => items.iter().map(|v| to_bool(v).unwrap_or(false)).collect(),
        _ => return None,
    };
    Some(items)
}
