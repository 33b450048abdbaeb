//! Duration literals such as `"300ms"`, `"-1.5h"` or `"2h45m"`.

use chrono::TimeDelta;

/// 2^63 nanoseconds; the magnitude of `i64::MIN`.
const OVERFLOW: u64 = 1 << 63;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

fn unit_nanos(unit: &str) -> Option<u64> {
    Some(match unit {
        "ns" => NANOSECOND,
        // Micro sign (U+00B5) and Greek mu (U+03BC) are both accepted.
        "us" | "\u{b5}s" | "\u{3bc}s" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    })
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Integer part of one component; `None` once it exceeds 2^63.
fn leading_int(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        let next = acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        (next <= OVERFLOW).then_some(next)
    })
}

/// Fraction digits as `(value, scale)`; digits past `u64` precision are dropped.
fn leading_fraction(digits: &str) -> (u64, f64) {
    let mut value = 0u64;
    let mut scale = 1.0;
    for b in digits.bytes() {
        let Some(next) = value.checked_mul(10).and_then(|v| v.checked_add(u64::from(b - b'0')))
        else {
            break;
        };
        if next > OVERFLOW - 1 {
            break;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale)
}

/// Parses a duration literal.
///
/// A literal is an optional sign followed by one or more decimal numbers,
/// each with an optional fraction and a mandatory unit (`ns`, `us`/`µs`, `ms`,
/// `s`, `m`, `h`). The bare literal `0` is also accepted. Returns `None` on
/// malformed input or when the total exceeds the signed 64-bit nanosecond
/// range.
///
/// ```rust
/// use chrono::TimeDelta;
/// use foundry_options::parse_duration;
///
/// assert_eq!(parse_duration("1h30m"), Some(TimeDelta::minutes(90)));
/// assert_eq!(parse_duration("-1.5s"), Some(TimeDelta::milliseconds(-1500)));
/// assert_eq!(parse_duration("15"), None);
/// ```
#[must_use]
pub fn parse_duration(text: &str) -> Option<TimeDelta> {
    let (negative, mut s) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if s == "0" {
        return Some(TimeDelta::zero());
    }
    if s.is_empty() {
        return None;
    }

    let mut total = 0u64;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return None;
        }

        let (int_digits, rest) = split_digits(s);
        let mut component = leading_int(int_digits)?;
        s = rest;

        let mut fraction = (0, 1.0);
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (frac_digits, rest) = split_digits(rest);
            fraction = leading_fraction(frac_digits);
            has_fraction = !frac_digits.is_empty();
            s = rest;
        }
        if int_digits.is_empty() && !has_fraction {
            return None;
        }

        let unit_end = s.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(s.len());
        let per = unit_nanos(&s[..unit_end])?;
        s = &s[unit_end..];

        if component > OVERFLOW / per {
            return None;
        }
        component *= per;
        let (frac_value, scale) = fraction;
        if frac_value > 0 {
            component = component.checked_add((frac_value as f64 * (per as f64 / scale)) as u64)?;
            if component > OVERFLOW {
                return None;
            }
        }
        total = total.checked_add(component).filter(|t| *t <= OVERFLOW)?;
    }

    let nanos = if negative { 0i64.checked_sub_unsigned(total)? } else { i64::try_from(total).ok()? };
    Some(TimeDelta::nanoseconds(nanos))
}

/// Fraction of `value` below `10^precision` as `".ddd"` without trailing
/// zeros (empty when zero), plus the remaining whole part.
fn split_fraction(value: u64, precision: u32) -> (String, u64) {
    let scale = 10u64.pow(precision);
    let fraction = value % scale;
    let digits = if fraction == 0 {
        String::new()
    } else {
        let padded = format!("{fraction:0width$}", width = precision as usize);
        format!(".{}", padded.trim_end_matches('0'))
    };
    (digits, value / scale)
}

/// Renders a duration as a literal accepted by [`parse_duration`], e.g.
/// `"1h30m0s"`, `"1.5s"` or `"250ms"`. Values beyond the 64-bit nanosecond
/// range saturate.
///
/// ```rust
/// use chrono::TimeDelta;
/// use foundry_options::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::minutes(15)), "15m0s");
/// assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.5ms");
/// ```
#[must_use]
pub fn format_duration(delta: TimeDelta) -> String {
    let nanos = delta
        .num_nanoseconds()
        .unwrap_or(if delta < TimeDelta::zero() { i64::MIN } else { i64::MAX });
    let sign = if nanos < 0 { "-" } else { "" };
    let magnitude = nanos.unsigned_abs();

    if magnitude < SECOND {
        let (unit, precision) = match magnitude {
            0 => return "0s".to_owned(),
            1..MICROSECOND => ("ns", 0),
            MICROSECOND..MILLISECOND => ("\u{b5}s", 3),
            _ => ("ms", 6),
        };
        let (fraction, whole) = split_fraction(magnitude, precision);
        return format!("{sign}{whole}{fraction}{unit}");
    }

    let (fraction, seconds) = split_fraction(magnitude, 9);
    let mut out = format!("{}{fraction}s", seconds % 60);
    let minutes = seconds / 60;
    if minutes > 0 {
        out = format!("{}m{out}", minutes % 60);
        let hours = minutes / 60;
        if hours > 0 {
            out = format!("{hours}h{out}");
        }
    }
    format!("{sign}{out}")
}
