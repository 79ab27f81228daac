// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{AsRefStr, Display};
use tracing::debug;

use super::{
    mark_internal_html, selection_content, write_html5_clipboard,
    ClipboardContent, ClipboardTarget, SelectionSnapshot,
};
use crate::Platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ClipboardAction {
    Cut,
    Copy,
}

/// How the payload reaches the clipboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardWrite {
    /// Written through the clipboard API. The browser's default handling
    /// of the event must be prevented.
    Native,
    /// The host has to put `html` into an offscreen editable element,
    /// select it and let the browser copy it, then restore the selection.
    Offscreen { html: String },
}

/// The result of handling a cut or copy event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardOutcome {
    pub action: ClipboardAction,
    pub content: ClipboardContent,
    pub write: ClipboardWrite,
}

impl ClipboardOutcome {
    pub fn prevent_default(&self) -> bool {
        self.write == ClipboardWrite::Native
    }

    /// Whether the selection has to be deleted once the write is done.
    ///
    /// The delete has to run outside the event handler, some browsers
    /// refuse nested editing commands.
    pub fn delete_selection(&self) -> bool {
        self.action == ClipboardAction::Cut
    }
}

/// Handle a cut or copy event. A collapsed selection leaves the event to
/// the browser and returns `None`.
pub fn handle_clipboard_event<S, T>(
    action: ClipboardAction,
    selection: &S,
    target: Option<&mut T>,
    platform: &Platform,
) -> Option<ClipboardOutcome>
where
    S: SelectionSnapshot + ?Sized,
    T: ClipboardTarget + ?Sized,
{
    if selection.is_collapsed() {
        return None;
    }
    let content = selection_content(selection, platform);
    let write = if write_html5_clipboard(target, platform, &content) {
        ClipboardWrite::Native
    } else {
        debug!(%action, "Falling back to an offscreen clipboard copy");
        ClipboardWrite::Offscreen {
            html: mark_internal_html(&content.html),
        }
    };
    Some(ClipboardOutcome {
        action,
        content,
        write,
    })
}

pub fn cut<S, T>(
    selection: &S,
    target: Option<&mut T>,
    platform: &Platform,
) -> Option<ClipboardOutcome>
where
    S: SelectionSnapshot + ?Sized,
    T: ClipboardTarget + ?Sized,
{
    handle_clipboard_event(ClipboardAction::Cut, selection, target, platform)
}

pub fn copy<S, T>(
    selection: &S,
    target: Option<&mut T>,
    platform: &Platform,
) -> Option<ClipboardOutcome>
where
    S: SelectionSnapshot + ?Sized,
    T: ClipboardTarget + ?Sized,
{
    handle_clipboard_event(ClipboardAction::Copy, selection, target, platform)
}
