//! # Rendering Module
//!
//! Turns `CmdResult` values into text. Every function returns a `String` and
//! takes an explicit `color` flag; printing and terminal detection happen in
//! `commands.rs`.
//!
//! Layout math (widths, truncation, padding) is Unicode-aware: page names are
//! measured with `unicode-width`, so CJK titles and emoji line up too.

use super::styles::{paint, INFO, MUTED, SUCCESS, TAG, TIME, TITLE, WARNING};
use chrono::{DateTime, Utc};
use randnoteapp::attributes::Dimension;
use randnoteapp::commands::{CmdMessage, CmdResult, MessageLevel};
use randnoteapp::model::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const TAGS_WIDTH: usize = 40;
const ELLIPSIS: char = '…';

/// The picked links, exactly as they would be written into a page.
pub fn render_outline(result: &CmdResult) -> String {
    result.outline.clone().unwrap_or_default()
}

pub fn render_messages(messages: &[CmdMessage], color: bool) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &*INFO,
                MessageLevel::Success => &*SUCCESS,
                MessageLevel::Warning => &*WARNING,
            };
            format!("{}\n", paint(style, &msg.content, color))
        })
        .collect()
}

/// One line per page: name, attribute markers, last update.
pub fn render_page_list(pages: &[Page], color: bool) -> String {
    let title_width = LINE_WIDTH - TAGS_WIDTH - TIME_WIDTH;
    let mut out = String::new();
    for page in pages {
        let title = truncate_to_width(page.display_name(), title_width);
        let title_pad = " ".repeat(title_width.saturating_sub(title.width()));

        let tags = Dimension::ALL
            .iter()
            .filter(|dim| dim.holds(page))
            .map(|dim| dim.name())
            .collect::<Vec<_>>()
            .join(" ");
        let tags_pad = " ".repeat(TAGS_WIDTH.saturating_sub(tags.width()));

        let time = page
            .updated_at
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(format_time_ago)
            .unwrap_or_default();

        let line = format!(
            "{}{}{}{}{}",
            paint(&TITLE, &title, color),
            title_pad,
            paint(&TAG, &tags, color),
            tags_pad,
            paint(&TIME, &format!("{:>width$}", time, width = TIME_WIDTH), color),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Footer after a pick that went somewhere other than stdout.
pub fn render_written(result: &CmdResult, color: bool) -> String {
    match &result.written_to {
        Some(path) => format!("{}\n", paint(&MUTED, &path.display().to_string(), color)),
        None => String::new(),
    }
}

pub fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result).map(|json| json + "\n")
}

/// Cut `text` to at most `max` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use randnoteapp::blocks::Block;
    use randnoteapp::model::{NamespaceRef, PageFile};
    use std::path::PathBuf;

    #[test]
    fn outline_is_printed_verbatim() {
        let result = CmdResult {
            outline: Some("- [[A]]\n- [[B]]\n".to_string()),
            ..Default::default()
        };
        assert_eq!(render_outline(&result), "- [[A]]\n- [[B]]\n");
        assert_eq!(render_outline(&CmdResult::default()), "");
    }

    #[test]
    fn messages_one_per_line() {
        let messages = vec![
            CmdMessage::warning("No pages found"),
            CmdMessage::success("Added 2 links to Inbox"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "No pages found\nAdded 2 links to Inbox\n"
        );
        assert!(render_messages(&messages, true).contains("\u{1b}["));
    }

    #[test]
    fn page_list_shows_markers() {
        let pages = vec![
            Page::new("Projects/Alpha")
                .with_file(PageFile::at("pages/Projects___Alpha.md"))
                .with_namespace(NamespaceRef::named("projects")),
            Page::new("Someday"),
        ];
        let out = render_page_list(&pages, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Projects/Alpha "));
        assert!(lines[0].ends_with("namespace"));
        assert!(lines[1].ends_with("dangling"));
    }

    #[test]
    fn page_list_shows_age() {
        let mut page = Page::new("Old").with_file(PageFile::at("pages/Old.md"));
        page.updated_at = Some((Utc::now() - chrono::Duration::hours(3)).timestamp_millis());
        let out = render_page_list(&[page], false);
        assert!(out.contains("3 hours ago"), "{out}");
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("日本語のページ", 5), "日本…");
    }

    #[test]
    fn written_path_footer() {
        let result = CmdResult {
            written_to: Some(PathBuf::from("/graph/pages/Inbox.md")),
            ..Default::default()
        };
        assert_eq!(render_written(&result, false), "/graph/pages/Inbox.md\n");
    }

    #[test]
    fn json_output_carries_pages_and_blocks() {
        let result = CmdResult {
            listed_pages: vec![Page::new("Alpha")],
            blocks: vec![Block::new("[[Alpha]]")],
            outline: Some("- [[Alpha]]\n".to_string()),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(json["listed_pages"][0]["originalName"], "Alpha");
        assert_eq!(json["blocks"][0]["content"], "[[Alpha]]");
        assert_eq!(json["outline"], "- [[Alpha]]\n");
        assert_eq!(json["messages"], serde_json::json!([]));
    }
}
