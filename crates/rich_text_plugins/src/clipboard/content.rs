// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Platform;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// The data put on the clipboard for a cut or copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardContent {
    pub html: String,
    pub text: String,
}

/// What the clipboard handlers need to know about the current selection.
pub trait SelectionSnapshot {
    fn is_collapsed(&self) -> bool;

    /// The selection as plain text.
    fn text(&self) -> String;

    /// The selection serialised as html, including the inline formatting
    /// that wraps it.
    fn contextual_html(&self) -> String;

    /// Whether the range covers one text node from its first to its last
    /// character.
    fn spans_whole_text_node(&self) -> bool;

    /// Whether the element the selection resolves to is a block.
    fn selected_node_is_block(&self) -> bool;

    /// The outer html of the element the selection resolves to.
    fn selected_node_outer_html(&self) -> String;
}

/// Build the clipboard payload for `selection`.
///
/// Selecting the whole text of an inline element (say a link) copies the
/// element itself, not just its text.
pub fn selection_content<S>(selection: &S, platform: &Platform) -> ClipboardContent
where
    S: SelectionSnapshot + ?Sized,
{
    let html = if selection.spans_whole_text_node()
        && !selection.selected_node_is_block()
    {
        selection.selected_node_outer_html()
    } else {
        selection.contextual_html()
    };
    ClipboardContent {
        html,
        text: normalize_clipboard_text(&selection.text(), platform),
    }
}

/// Use the platform's line breaks and turn no-break spaces into plain
/// spaces.
pub fn normalize_clipboard_text(text: &str, platform: &Platform) -> String {
    let text = if platform.uses_crlf_line_breaks() {
        LINE_BREAK.replace_all(text, "\r\n").into_owned()
    } else {
        text.to_owned()
    };
    text.replace('\u{00A0}', " ")
}
