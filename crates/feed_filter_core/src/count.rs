//! View-count label parsing.
//!
//! Labels arrive in whatever unit and locale the host renders: `1,234 views`,
//! `12K views`, `1.2M views`, `3 lakh views`, `No views`, `Live`. Parsing
//! never fails loudly; anything that cannot be read becomes
//! [`ParsedCount::Unknown`].

use once_cell::sync::Lazy;
use regex::Regex;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const MILLION: u64 = 1_000_000;
const CRORE: u64 = 10_000_000;
const BILLION: u64 = 1_000_000_000;

/// First number in the text, with an optional single decimal part. A third
/// group catches a second separator (`1.2.3k`), which makes the number malformed.
static LEADING_DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)(?:[.,](\d+))?([.,]\d)?").expect("leading decimal regex")
});

/// "view" or "views" as a whole word, so "reviews" or "interviews" never match.
static VIEW_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bviews?\b").expect("view word regex"));

/// Number with an optional unit at the very end of the text, such as the
/// `4.5k ` in `streamed 3 days ago · 4.5k `.
static TRAILING_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:[., ][0-9]{2,3})*(?:[.,][0-9]+)?\s*(?:lakh|crore|million|billion|[kmb])?\s*$")
        .expect("trailing count regex")
});

/// Result of reading a count label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedCount {
    /// Best-effort count on a linear scale.
    Count(u64),
    /// The label did not carry a readable count.
    Unknown,
}

impl ParsedCount {
    pub fn count(self) -> Option<u64> {
        match self {
            ParsedCount::Count(value) => Some(value),
            ParsedCount::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, ParsedCount::Unknown)
    }
}

impl From<Option<u64>> for ParsedCount {
    fn from(value: Option<u64>) -> Self {
        value.map_or(ParsedCount::Unknown, ParsedCount::Count)
    }
}

/// Parse a count label into a number on a single linear scale.
///
/// Unit words are checked in a fixed order (`lakh`, `crore`, `k`, `m`, `b`)
/// because later units are substrings of earlier ones (`lakh` contains `k`).
pub fn parse_count(label: &str) -> ParsedCount {
    let text = normalize(label);

    if !text.chars().any(|c| c.is_ascii_digit()) {
        return if is_no_views_phrase(&text) {
            ParsedCount::Count(0)
        } else {
            ParsedCount::Unknown
        };
    }

    let Some(segment) = count_segment(&text) else {
        return ParsedCount::Unknown;
    };

    let value = if segment.contains("lakh") {
        scaled_leading_decimal(segment, LAKH)
    } else if segment.contains("crore") {
        scaled_leading_decimal(segment, CRORE)
    } else if segment.contains('k') {
        scaled_leading_decimal(segment, THOUSAND)
    } else if segment.contains('m') {
        // also covers "million"
        scaled_leading_decimal(segment, MILLION)
    } else if segment.contains('b') {
        scaled_leading_decimal(segment, BILLION)
    } else {
        grouped_integer(segment)
    };

    value.into()
}

/// True for the explicit "no views" wording, which is the only digit-free
/// label that maps to a real count.
pub fn is_no_views_phrase(text: &str) -> bool {
    matches!(normalize(text).as_str(), "no views" | "no view")
}

/// Lowercased, trimmed copy with non-breaking spaces turned into plain spaces.
pub(crate) fn normalize(label: &str) -> String {
    label
        .chars()
        .map(|c| if c == NBSP || c == NARROW_NBSP { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// The part of the label that carries the count.
///
/// With a view word present this is the number and unit right before it, so
/// `members only ·` or `streamed 3 days ago ·` never reach the unit checks.
/// Without one (`1.234 aufrufe`) it runs from the first digit to the end.
/// `None` when the number before the view word is glued to a stray
/// separator, as in `1.2.3k views`.
fn count_segment(text: &str) -> Option<&str> {
    let before_view_word = VIEW_WORD_RE.find_iter(text).find_map(|word| {
        let before = &text[..word.start()];
        TRAILING_COUNT_RE.find(before).map(|number| (before, number))
    });

    match before_view_word {
        Some((before, number)) if before[..number.start()].ends_with(['.', ',']) => None,
        Some((_, number)) => Some(number.as_str().trim()),
        None => {
            let start = text.find(|c: char| c.is_ascii_digit()).unwrap_or(0);
            Some(text[start..].trim())
        }
    }
}

fn scaled_leading_decimal(text: &str, unit: u64) -> Option<u64> {
    let caps = LEADING_DECIMAL_RE.captures(text)?;
    if caps.get(3).is_some() {
        return None;
    }
    let whole: u128 = caps.get(1)?.as_str().parse().ok()?;
    let mut value = whole.checked_mul(u128::from(unit))?;

    if let Some(fraction) = caps.get(2) {
        // Digits beyond nine cannot move the result at any supported unit.
        let digits = &fraction.as_str()[..fraction.as_str().len().min(9)];
        let numerator: u128 = digits.parse().ok()?;
        let denominator = 10u128.pow(digits.len() as u32);
        value = value.checked_add(numerator * u128::from(unit) / denominator)?;
    }

    u64::try_from(value).ok()
}

/// Reads the first run of digits, joining groups split by `,`, `.` or a space.
///
/// A separator only counts when it is followed by a full group: three digits,
/// or two after a comma for Indian grouping (`1,23,456`). Anything else ends
/// the run, so `500 3 days ago` reads as 500.
fn grouped_integer(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let digit_run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let first = digit_run(start);
    let mut digits = String::from(&text[start..start + first]);
    let mut cursor = start + first;

    while let Some(&separator) = bytes.get(cursor) {
        if !matches!(separator, b',' | b'.' | b' ') {
            break;
        }
        let group = digit_run(cursor + 1);
        let full_group = group == 3 || (group == 2 && separator == b',');
        if !full_group {
            break;
        }
        digits.push_str(&text[cursor + 1..cursor + 1 + group]);
        cursor += 1 + group;
    }

    digits.parse().ok()
}
