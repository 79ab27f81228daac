// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Marking of html that was copied from an editor, so that pasting it back
//! can skip the cleanup applied to foreign content.

/// Mime type under which the editor's own html is stored.
pub const INTERNAL_HTML_MIME: &str = "x-tinymce/html";

const INTERNAL_MARK: &str = "<!-- x-tinymce/html -->";

pub fn mark_internal_html(html: &str) -> String {
    format!("{INTERNAL_MARK}{html}")
}

pub fn is_internal_html(html: &str) -> bool {
    html.trim_start().starts_with(INTERNAL_MARK)
}

/// Strip the marker, if any.
pub fn unmark_internal_html(html: &str) -> &str {
    let trimmed = html.trim_start();
    trimmed.strip_prefix(INTERNAL_MARK).unwrap_or(html)
}
