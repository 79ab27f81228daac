// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::warn;

use super::ClipboardContent;
use crate::{ClipboardError, Platform};

/// The formats written to the clipboard, in writing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ClipboardMime {
    #[strum(serialize = "text/html")]
    Html,
    #[strum(serialize = "text/plain")]
    PlainText,
    #[strum(serialize = "x-tinymce/html")]
    InternalHtml,
}

/// The data transfer object of a cut or copy event.
pub trait ClipboardTarget {
    /// Whether the host exposes a usable `setData`.
    fn supports_set_data(&self) -> bool {
        true
    }

    fn clear_data(&mut self) -> Result<(), ClipboardError>;

    fn set_data(
        &mut self,
        mime: ClipboardMime,
        data: &str,
    ) -> Result<(), ClipboardError>;
}

/// iOS exposes the clipboard API but ignores it for cut, and legacy Edge
/// mangles html written through it.
pub fn has_working_clipboard_api<T>(target: Option<&T>, platform: &Platform) -> bool
where
    T: ClipboardTarget + ?Sized,
{
    !platform.ios
        && !platform.is_ms_edge()
        && target.is_some_and(|target| target.supports_set_data())
}

/// Write `content` through the clipboard API. Returns `false` when the API
/// is unusable or the target refused any of the data, in which case the
/// caller falls back to an offscreen copy.
pub fn write_html5_clipboard<T>(
    target: Option<&mut T>,
    platform: &Platform,
    content: &ClipboardContent,
) -> bool
where
    T: ClipboardTarget + ?Sized,
{
    let Some(target) = target else {
        return false;
    };
    if !has_working_clipboard_api(Some(&*target), platform) {
        return false;
    }
    match write_all(target, content) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "Native clipboard write failed");
            false
        }
    }
}

fn write_all<T>(target: &mut T, content: &ClipboardContent) -> Result<(), ClipboardError>
where
    T: ClipboardTarget + ?Sized,
{
    target.clear_data()?;
    target.set_data(ClipboardMime::Html, &content.html)?;
    target.set_data(ClipboardMime::PlainText, &content.text)?;
    target.set_data(ClipboardMime::InternalHtml, &content.html)?;
    Ok(())
}
