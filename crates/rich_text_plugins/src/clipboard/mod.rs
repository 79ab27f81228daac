// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Cut and copy handling.
//!
//! Builds the html and plain text payload for the current selection and
//! writes it through the clipboard API when the platform has a working one.
//! Otherwise the host is asked to copy from an offscreen element holding
//! the marked html.

mod content;
mod cut_copy;
mod internal_html;
mod writer;

pub use content::{
    normalize_clipboard_text, selection_content, ClipboardContent,
    SelectionSnapshot,
};
pub use cut_copy::{
    copy, cut, handle_clipboard_event, ClipboardAction, ClipboardOutcome,
    ClipboardWrite,
};
pub use internal_html::{
    is_internal_html, mark_internal_html, unmark_internal_html,
    INTERNAL_HTML_MIME,
};
pub use writer::{
    has_working_clipboard_api, write_html5_clipboard, ClipboardMime,
    ClipboardTarget,
};
