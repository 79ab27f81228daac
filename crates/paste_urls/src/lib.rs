// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Heuristics for recognising URLs in pasted text.
//!
//! Used by the smart paste logic to decide whether pasted content should
//! become a link around the current selection or an image.

use once_cell::sync::Lazy;
use regex::Regex;

// `;` is allowed on top of the usual set, as RFC 3986 permits it in paths.
// Unicode is off: only ASCII letters and digits count as word characters.
static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^https?://[\w?\-/+=.;&%@~#]+$").unwrap());

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)\.(gif|jpe?g|png)$").unwrap());

/// Whether `text` is, in its entirety, an absolute `http` or `https` URL
/// made of ASCII characters.
pub fn is_absolute_url(text: &str) -> bool {
    ABSOLUTE_URL.is_match(text)
}

/// Whether `text` is an absolute URL pointing at a gif, jpeg or png image.
///
/// The extension must follow a literal `.` and is matched regardless of
/// case, so `photo.PNG` counts but `photopng` does not.
pub fn is_image_url(text: &str) -> bool {
    is_absolute_url(text) && IMAGE_EXTENSION.is_match(text)
}
