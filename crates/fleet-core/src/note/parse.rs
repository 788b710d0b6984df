//! Metadata extraction from markdown notes
//!
//! Tags come from two places: a `tags:` (or `tag:`) key in YAML front
//! matter, and inline `#tag` tokens in the body. Headings are ATX style
//! (`#` to `######`). Fenced code blocks and inline code spans are skipped.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::{Heading, NoteMetadata};

static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static INLINE_TAG_RE: OnceLock<Regex> = OnceLock::new();
static CODE_SPAN_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| {
        Regex::new(r"^(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("valid heading regex")
    })
}

fn inline_tag_re() -> &'static Regex {
    INLINE_TAG_RE
        .get_or_init(|| Regex::new(r"(?:^|\s)#([\w/-]+)").expect("valid inline tag regex"))
}

fn code_span_re() -> &'static Regex {
    CODE_SPAN_RE.get_or_init(|| Regex::new(r"`[^`]*`").expect("valid code span regex"))
}

/// Extract tags and headings from note content
#[tracing::instrument(skip(content), fields(path = ?path))]
pub fn parse_metadata(content: &str, path: Option<&Path>) -> NoteMetadata {
    let (frontmatter, body) = split_frontmatter(content);

    let mut tags = frontmatter
        .map(|yaml| frontmatter_tags(yaml, path))
        .unwrap_or_default();
    let mut headings = Vec::new();

    let mut fence: Option<&str> = None;
    for line in body.lines() {
        let trimmed = line.trim_start();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            fence = Some("```");
            continue;
        }
        if trimmed.starts_with("~~~") {
            fence = Some("~~~");
            continue;
        }

        let line = code_span_re().replace_all(line, "");

        if let Some(caps) = heading_re().captures(&line) {
            headings.push(Heading::new(caps[1].len() as u8, caps[2].trim()));
        }

        for caps in inline_tag_re().captures_iter(&line) {
            let tag = &caps[1];
            if is_valid_tag(tag) {
                tags.push(tag.to_string());
            }
        }
    }

    let mut seen = std::collections::HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));

    NoteMetadata {
        tags: (!tags.is_empty()).then_some(tags),
        headings: (!headings.is_empty()).then_some(headings),
    }
}

/// Split a leading `---` delimited block from the body.
fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    // Empty front matter closes immediately
    if let Some(body) = rest.strip_prefix("---") {
        return (Some(""), body.trim_start_matches(['\r', '\n']));
    }

    match rest.find("\n---") {
        Some(end) => {
            let yaml = &rest[..end];
            let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
            (Some(yaml), body)
        }
        None => (None, content),
    }
}

/// Tags from front matter; a malformed block degrades to no tags.
fn frontmatter_tags(yaml: &str, path: Option<&Path>) -> Vec<String> {
    if yaml.trim().is_empty() {
        return Vec::new();
    }

    let value: serde_yaml::Value = match serde_yaml::from_str(yaml) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "ignoring malformed front matter");
            return Vec::new();
        }
    };

    let raw = value.get("tags").or_else(|| value.get("tag"));
    let mut tags = Vec::new();
    match raw {
        Some(serde_yaml::Value::Sequence(items)) => {
            for item in items {
                if let Some(s) = item.as_str() {
                    push_tag_words(s, &mut tags);
                }
            }
        }
        Some(serde_yaml::Value::String(s)) => push_tag_words(s, &mut tags),
        _ => {}
    }
    tags
}

fn push_tag_words(raw: &str, tags: &mut Vec<String>) {
    for word in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let tag = word.trim_start_matches('#');
        if is_valid_tag(tag) {
            tags.push(tag.to_string());
        }
    }
}

/// A tag needs at least one character that is not a digit.
fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_digit())
}
