//! Anchor generation for linkable objects
//!
//! Anchors end up in published documentation as URL fragments, so the
//! output for a given prefix and title must never change between runs.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// How letter case is treated when slugging a title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugStyle {
    /// `Event Content` becomes `event-content`
    #[default]
    Lowercase,
    /// `Event Content` becomes `Event-Content`
    PreserveCase,
}

/// Slug a title for use in a URL fragment.
///
/// Leading and trailing separators are dropped and every run of
/// non-alphanumeric characters becomes a single `-`.
pub fn slugify(text: &str, style: SlugStyle) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            match style {
                SlugStyle::Lowercase => slug.extend(ch.to_lowercase()),
                SlugStyle::PreserveCase => slug.push(ch),
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slug used when a title has no alphanumeric characters at all
pub const UNTITLED_SLUG: &str = "untitled";

/// Anchor for a titled object: `{prefix}_{slug(title)}`, or
/// `{prefix}_untitled` when the title slugs to nothing.
pub fn anchor_for(prefix: &str, title: &str, style: SlugStyle) -> String {
    let slug = slugify(title, style);
    if slug.is_empty() {
        format!("{}_{}", prefix, UNTITLED_SLUG)
    } else {
        format!("{}_{}", prefix, slug)
    }
}

/// Anchor prefix for an API operation, e.g. `get_matrixclientv3roomsroomidevent`
/// for `GET /_matrix/client/v3/rooms/{roomId}/event`. `section` separates
/// request and response tables (`request`, `response-200`).
pub fn operation_prefix(method: &str, path: &str, section: Option<&str>) -> String {
    let path: String = path
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let base = format!("{}_{}", method.to_ascii_lowercase(), path);

    match section {
        Some(section) => format!("{}_{}", base, slugify(section, SlugStyle::Lowercase)),
        None => base,
    }
}
