//! Known textual timestamp layouts, tried in order.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    /// `Z` or `±hh:mm`.
    Rfc3339,
    /// `±hhmm`.
    Numeric,
    /// Alphabetic abbreviation such as `MST`, marked `%Z` in the format.
    Abbreviation,
    /// No zone in the text; interpreted as UTC.
    Utc,
}

#[derive(Debug)]
struct Layout {
    name: &'static str,
    format: &'static str,
    zone: Zone,
}

const fn layout(name: &'static str, format: &'static str, zone: Zone) -> Layout {
    Layout { name, format, zone }
}

const LAYOUTS: [Layout; 13] = [
    layout("RFC3339", "%Y-%m-%dT%H:%M:%S%.f%:z", Zone::Rfc3339),
    layout("DateTime", "%Y-%m-%d %H:%M:%S%.f%:z", Zone::Rfc3339),
    layout("DayMonthYear", "%d/%m/%Y %H:%M:%S%.f%:z", Zone::Rfc3339),
    layout("RFC3339Nano", "%Y-%m-%dT%H:%M:%S%.f%:z", Zone::Rfc3339),
    layout("RFC1123", "%a, %d %b %Y %H:%M:%S%.f %Z", Zone::Abbreviation),
    layout("RFC1123Z", "%a, %d %b %Y %H:%M:%S%.f %z", Zone::Numeric),
    layout("RFC822", "%d %b %y %H:%M %Z", Zone::Abbreviation),
    layout("RFC822Z", "%d %b %y %H:%M %z", Zone::Numeric),
    layout("RFC850", "%A, %d-%b-%y %H:%M:%S%.f %Z", Zone::Abbreviation),
    layout("ANSIC", "%a %b %e %H:%M:%S%.f %Y", Zone::Utc),
    layout("Layout", "%m/%d %I:%M:%S%.f%p '%y %z", Zone::Numeric),
    layout("RubyDate", "%a %b %d %H:%M:%S%.f %z %Y", Zone::Numeric),
    layout("UnixDate", "%a %b %e %H:%M:%S%.f %Z %Y", Zone::Abbreviation),
];

const HOUR: i32 = 3600;

const SHORT_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LONG_DAYS: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Removes a leading `%a`/`%A` weekday from both `format` and `text`.
///
/// The weekday must be spelled correctly but is not checked against the date.
fn strip_weekday<'f, 't>(format: &'f str, text: &'t str) -> Option<(&'f str, &'t str)> {
    let (days, rest) = if let Some(rest) = format.strip_prefix("%a") {
        (&SHORT_DAYS, rest)
    } else if let Some(rest) = format.strip_prefix("%A") {
        (&LONG_DAYS, rest)
    } else {
        return Some((format, text));
    };

    let separator = &rest[..rest.find('%').unwrap_or(rest.len())];
    let day = days.iter().find(|day| {
        text.get(..day.len()).is_some_and(|head| head.eq_ignore_ascii_case(day))
    })?;
    let text = text[day.len()..].strip_prefix(separator)?;
    Some((&rest[separator.len()..], text))
}

/// Whether `text` ends in a `±hh:mm` offset.
fn has_colon_offset(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some(tail) = bytes.len().checked_sub(6).map(|start| &bytes[start..]) else {
        return false;
    };
    matches!(tail[0], b'+' | b'-')
        && tail[1].is_ascii_digit()
        && tail[2].is_ascii_digit()
        && tail[3] == b':'
        && tail[4].is_ascii_digit()
        && tail[5].is_ascii_digit()
}

/// Two-digit years 69-99 belong to the 1900s; chrono only moves 70-99 there.
fn pivot_two_digit_year(time: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    if time.year() == 2069 { time.with_year(1969) } else { Some(time) }
}

/// Offset in seconds east of UTC for a zone abbreviation.
///
/// The RFC 822 names are known; any other run of three to five uppercase
/// letters is accepted with a zero offset.
fn abbreviation_offset(abbreviation: &str) -> Option<i32> {
    let offset = match abbreviation {
        "UT" | "UTC" | "GMT" | "Z" => 0,
        "EST" => -5 * HOUR,
        "EDT" | "AST" => -4 * HOUR,
        "CST" => -6 * HOUR,
        "CDT" => -5 * HOUR,
        "MST" => -7 * HOUR,
        "MDT" => -6 * HOUR,
        "PST" => -8 * HOUR,
        "PDT" => -7 * HOUR,
        other if (3..=5).contains(&other.len())
            && other.bytes().all(|b| b.is_ascii_uppercase()) =>
        {
            0
        },
        _ => return None,
    };
    Some(offset)
}

fn numeric_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    format!("{sign}{:02}{:02}", seconds / 3600, seconds % 3600 / 60)
}

impl Layout {
    fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        let (format, text) = strip_weekday(self.format, text)?;
        let time = match self.zone {
            Zone::Rfc3339 => {
                let normalized = text
                    .strip_suffix('Z')
                    .map_or_else(|| text.to_owned(), |head| format!("{head}+00:00"));
                if !has_colon_offset(&normalized) {
                    return None;
                }
                DateTime::parse_from_str(&normalized, format).ok()
            },
            Zone::Numeric => DateTime::parse_from_str(text, format).ok(),
            Zone::Utc => {
                let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
                let naive = NaiveDateTime::parse_from_str(&collapsed, format).ok()?;
                Some(naive.and_utc().fixed_offset())
            },
            Zone::Abbreviation => parse_abbreviated(format, text),
        }?;

        if format.contains("%y") { pivot_two_digit_year(time) } else { Some(time) }
    }
}

/// Swaps the abbreviation for its numeric offset, then parses with `%z`.
fn parse_abbreviated(format: &str, text: &str) -> Option<DateTime<FixedOffset>> {
    let format_tokens: Vec<&str> = format.split_whitespace().collect();
    let position = format_tokens.iter().position(|token| *token == "%Z")?;
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != format_tokens.len() {
        return None;
    }

    let offset = numeric_offset(abbreviation_offset(tokens[position])?);
    tokens[position] = &offset;
    DateTime::parse_from_str(&tokens.join(" "), &format.replace("%Z", "%z")).ok()
}

/// Parses `text` against the known layouts and returns the first match.
///
/// Layout order: RFC 3339, `YYYY-MM-DD hh:mm:ss±hh:mm`,
/// `DD/MM/YYYY hh:mm:ss±hh:mm`, RFC 3339 with nanoseconds, RFC 1123 (named and
/// numeric zone), RFC 822 (named and numeric zone), RFC 850, ANSI C, the
/// reference layout `01/02 03:04:05PM '06 -0700`, Ruby date and Unix date.
///
/// ```rust
/// use foundry_options::parse_time;
///
/// let t = parse_time("2022-01-02 15:14:00+07:00").unwrap();
/// assert_eq!(t.to_rfc3339(), "2022-01-02T15:14:00+07:00");
/// assert!(parse_time("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_time(text: &str) -> Option<DateTime<FixedOffset>> {
    let (layout, time) =
        LAYOUTS.iter().find_map(|layout| layout.parse(text).map(|time| (layout, time)))?;
    trace!(layout = layout.name, "Timestamp matched");
    Some(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching_layout(text: &str) -> Option<&'static str> {
        LAYOUTS.iter().find(|layout| layout.parse(text).is_some()).map(|layout| layout.name)
    }

    #[test]
    fn space_separated_is_not_rfc3339() {
        assert_eq!(matching_layout("2022-01-02T15:14:00+07:00"), Some("RFC3339"));
        assert_eq!(matching_layout("2022-01-02 15:14:00+07:00"), Some("DateTime"));
        assert_eq!(matching_layout("02/01/2022 15:14:00Z"), Some("DayMonthYear"));
    }

    #[test]
    fn every_layout_family_is_reachable() {
        let cases = [
            ("2006-01-02T15:04:05.999999999Z", "RFC3339"),
            ("Mon, 02 Jan 2006 15:04:05 MST", "RFC1123"),
            ("Mon, 02 Jan 2006 15:04:05 -0700", "RFC1123Z"),
            ("02 Jan 06 15:04 MST", "RFC822"),
            ("02 Jan 06 15:04 -0700", "RFC822Z"),
            ("Monday, 02-Jan-06 15:04:05 MST", "RFC850"),
            ("Mon Jan  2 15:04:05 2006", "ANSIC"),
            ("01/02 03:04:05PM '06 -0700", "Layout"),
            ("Mon Jan 02 15:04:05 -0700 2006", "RubyDate"),
            ("Mon Jan  2 15:04:05 MST 2006", "UnixDate"),
        ];
        for (text, expected) in cases {
            assert_eq!(matching_layout(text), Some(expected), "{text}");
        }
    }

    #[test]
    fn weekday_is_checked_for_spelling_only() {
        let cases = [
            ("Tue, 02 Jan 2006 15:04:05 MST", "RFC1123"),
            ("Sun, 02 Jan 2006 15:04:05 -0700", "RFC1123Z"),
            ("Friday, 02-Jan-06 15:04:05 MST", "RFC850"),
            ("Tue Jan  2 15:04:05 2006", "ANSIC"),
            ("Wed Jan 02 15:04:05 -0700 2006", "RubyDate"),
            ("Thu Jan  2 15:04:05 MST 2006", "UnixDate"),
        ];
        for (text, expected) in cases {
            assert_eq!(matching_layout(text), Some(expected), "{text}");
        }

        let wrong = parse_time("Tue, 02 Jan 2006 15:04:05 MST").map(|t| t.to_rfc3339());
        assert_eq!(wrong.as_deref(), Some("2006-01-02T15:04:05-07:00"));

        assert_eq!(parse_time("Tus, 02 Jan 2006 15:04:05 MST"), None);
        assert_eq!(parse_time("Mon 02 Jan 2006 15:04:05 MST"), None);
        assert_eq!(parse_time("Mon, 02-Jan-06 15:04:05 MST"), None);
    }

    #[test]
    fn two_digit_years_pivot_at_69() {
        let year = |text: &str| parse_time(text).map(|t| t.year());
        assert_eq!(year("02 Jan 68 15:04 -0700"), Some(2068));
        assert_eq!(year("02 Jan 69 15:04 -0700"), Some(1969));
        assert_eq!(year("02 Jan 70 15:04 MST"), Some(1970));
        assert_eq!(year("02 Jan 00 15:04 MST"), Some(2000));
        assert_eq!(year("Monday, 02-Jan-69 15:04:05 MST"), Some(1969));
        assert_eq!(year("01/02 03:04:05PM '69 -0700"), Some(1969));
    }

    #[test]
    fn rfc3339_requires_uppercase_z_or_colon_offset() {
        assert!(parse_time("2022-01-02T15:14:00Z").is_some());
        assert!(parse_time("2022-01-02T15:14:00-05:30").is_some());
        assert_eq!(parse_time("2022-01-02T15:14:00z"), None);
        assert_eq!(parse_time("2022-01-02T15:14:00+0700"), None);
        assert_eq!(parse_time("2022-01-02 15:14:00+0700"), None);
        assert!(!has_colon_offset("+07:0"));
    }

    #[test]
    fn abbreviations_resolve_offsets() {
        assert_eq!(abbreviation_offset("GMT"), Some(0));
        assert_eq!(abbreviation_offset("PDT"), Some(-7 * HOUR));
        assert_eq!(abbreviation_offset("WIB"), Some(0));
        assert_eq!(abbreviation_offset("mst"), None);
        assert_eq!(numeric_offset(-7 * HOUR), "-0700");
        assert_eq!(numeric_offset(5 * HOUR + 1800), "+0530");
    }
}
