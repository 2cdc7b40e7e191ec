//! Requested page count.
//!
//! The count comes from configuration (a number) or from free text typed by the
//! user (the text before the cursor in an editor, or a positional CLI argument).
//! Both paths end in a [`Count`], which is always at least one: a non-positive or
//! non-numeric request is clamped rather than rejected.
//!
//! Free text is read the way editors read a leading integer: leading whitespace
//! is skipped, an optional sign is accepted, and the run of ASCII digits that
//! follows is the number. `"3 notes"` asks for three pages, `"notes"` for one.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "i64")]
pub struct Count(usize);

impl Count {
    pub const ONE: Count = Count(1);

    pub fn clamp(requested: i64) -> Self {
        if requested < 1 {
            Count::ONE
        } else {
            Count(usize::try_from(requested).unwrap_or(usize::MAX))
        }
    }

    pub fn parse_lenient(text: &str) -> Self {
        parse_leading_int(text).map(Count::clamp).unwrap_or(Count::ONE)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::ONE
    }
}

impl From<Count> for i64 {
    fn from(count: Count) -> Self {
        i64::try_from(count.0).unwrap_or(i64::MAX)
    }
}

/// Accepts integers, floats (truncated) and text (read leniently), so a
/// hand-edited `count = "many"` means one page instead of a load error.
impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}

struct CountVisitor;

impl Visitor<'_> for CountVisitor {
    type Value = Count;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a page count")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Count, E> {
        Ok(Count::clamp(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Count, E> {
        Ok(Count::clamp(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Count, E> {
        // `as` saturates and maps NaN to 0.
        Ok(Count::clamp(v.trunc() as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Count, E> {
        Ok(Count::parse_lenient(v))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leading integer of `text`, saturating on overflow. `None` when there are no digits.
fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = &rest[..rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
