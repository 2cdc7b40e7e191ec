//! Logseq file conventions.
//!
//! - Journal files are named `YYYY_MM_DD` and titled like `Jan 15th, 2024`.
//! - Page file stems encode the namespace separator `/` as `___` and
//!   percent-encode characters that are not safe in file names.
//! - Page properties are the `key:: value` lines (markdown) or `#+key: value`
//!   lines (org) at the very top of the file.
//! - References are `[[Page]]`, `#[[Page]]` and `#tag`.

use chrono::{Datelike, NaiveDate};
use pulldown_cmark::{Event, Parser, Tag};
use std::collections::BTreeMap;
use std::ops::Range;

pub const JOURNAL_FILE_FORMAT: &str = "%Y_%m_%d";
const NAMESPACE_FILE_SEP: &str = "___";
const UNSAFE_FILE_CHARS: &[char] = &['<', '>', ':', '"', '\\', '|', '?', '*', '#', '%'];
const ORG_CODE_BLOCKS: &[&str] = &["src", "example", "export"];

/// Journal page title for a date, e.g. `Jan 15th, 2024`.
pub fn journal_title(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%b"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Inverse of [`journal_title`]. Accepts any ordinal suffix spelling.
pub fn parse_journal_title(title: &str) -> Option<NaiveDate> {
    let (month_day, year) = title.trim().split_once(',')?;
    let (month, day) = month_day.trim().split_once(' ')?;
    let day = day.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    NaiveDate::parse_from_str(&format!("{} {} {}", month, day, year.trim()), "%b %d %Y").ok()
}

pub fn journal_file_stem(date: NaiveDate) -> String {
    date.format(JOURNAL_FILE_FORMAT).to_string()
}

pub fn parse_journal_file_stem(stem: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stem, JOURNAL_FILE_FORMAT).ok()
}

/// File stem for a page title.
pub fn encode_file_stem(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c == '/' {
            out.push_str(NAMESPACE_FILE_SEP);
        } else if UNSAFE_FILE_CHARS.contains(&c) {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Page title for a file stem.
pub fn decode_file_stem(stem: &str) -> String {
    percent_decode(&stem.replace(NAMESPACE_FILE_SEP, "/"))
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// Leading page properties and the number of lines they occupy.
///
/// Blank lines before the first property are skipped; the block ends at the
/// first line that is not a property.
pub fn parse_page_properties(content: &str, org: bool) -> (BTreeMap<String, String>, usize) {
    let mut props = BTreeMap::new();
    let mut consumed = 0;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() && props.is_empty() {
            consumed += 1;
            continue;
        }
        let parsed = if org {
            parse_org_property(trimmed)
        } else {
            parse_md_property(trimmed)
        };
        match parsed {
            Some((key, value)) => {
                props.insert(key, value);
                consumed += 1;
            }
            None => break,
        }
    }
    if props.is_empty() {
        consumed = 0;
    }
    (props, consumed)
}

fn parse_md_property(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once("::")?;
    valid_property_key(key).then(|| (key.to_lowercase(), value.trim().to_string()))
}

fn parse_org_property(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("#+")?;
    let (key, value) = rest.split_once(':')?;
    valid_property_key(key).then(|| (key.to_lowercase(), value.trim().to_string()))
}

fn valid_property_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Page titles listed in a property value: `[[a]], b, #c`.
pub fn property_refs(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .trim_start_matches('#')
                .trim_start_matches("[[")
                .trim_end_matches("]]")
                .trim()
                .to_string()
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// References in a markdown document, skipping code spans and code blocks.
///
/// Refs are read from the source text rather than from parsed text events, so
/// inline markup inside a title (`[[G *x* y]]`) is kept as written.
pub fn markdown_refs(content: &str) -> Vec<String> {
    let code: Vec<Range<usize>> = Parser::new(content)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(_)) | Event::Code(_) => Some(range),
            _ => None,
        })
        .collect();

    let mut text = String::with_capacity(content.len());
    for (i, c) in content.char_indices() {
        if c != '\n' && code.iter().any(|r| r.contains(&i)) {
            text.push(' ');
        } else {
            text.push(c);
        }
    }
    text_refs(&text)
}

/// References in an org document.
///
/// `#+` directive lines are not text, and `#+BEGIN_SRC` / `#+BEGIN_EXAMPLE`
/// blocks are code up to their `#+END_` line.
pub fn org_refs(content: &str) -> Vec<String> {
    let mut text = String::with_capacity(content.len());
    let mut code_end: Option<String> = None;
    for line in content.lines() {
        let directive = line.trim_start().to_ascii_lowercase();
        if let Some(end) = &code_end {
            if directive.starts_with(end.as_str()) {
                code_end = None;
            }
            continue;
        }
        if let Some(kind) = directive.strip_prefix("#+begin_") {
            let kind = kind.split_whitespace().next().unwrap_or_default();
            if ORG_CODE_BLOCKS.contains(&kind) {
                code_end = Some(format!("#+end_{}", kind));
            }
            continue;
        }
        if directive.starts_with("#+") {
            continue;
        }
        text.push_str(line);
        text.push('\n');
    }
    text_refs(&text)
}

/// References in plain text.
pub fn text_refs(text: &str) -> Vec<String> {
    let mut refs = Vec::new();
    collect_bracket_refs(text, &mut refs);
    collect_tag_refs(text, &mut refs);
    refs
}

fn collect_bracket_refs(text: &str, refs: &mut Vec<String>) {
    let mut rest = text;
    while let Some(start) = rest.find("[[") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("]]") else {
            break;
        };
        let inner = &after[..end];
        // Nested `[[a [[b]]` keeps the innermost reference.
        let inner = inner.rsplit("[[").next().unwrap_or(inner).trim();
        if !inner.is_empty() && !inner.contains('\n') {
            refs.push(inner.to_string());
        }
        rest = &after[end + 2..];
    }
}

fn collect_tag_refs(text: &str, refs: &mut Vec<String>) {
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        if c == '#' && prev.map_or(true, char::is_whitespace) {
            let tail = &text[i + 1..];
            if tail.starts_with('[') {
                prev = Some(c);
                continue;
            }
            let end = tail
                .find(|ch: char| ch.is_whitespace() || matches!(ch, ',' | ';' | ')' | ']' | '"'))
                .unwrap_or(tail.len());
            let tag = tail[..end].trim_end_matches(['.', '!', '?', ':']);
            // `#+title` directives and `##` heading runs are not tags.
            if !tag.is_empty() && !tag.starts_with(['+', '#']) {
                refs.push(tag.to_string());
            }
        }
        prev = Some(c);
    }
}
