// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use thiserror::Error;

use crate::clipboard::ClipboardMime;

/// Failures reported by a [`crate::clipboard::ClipboardTarget`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard data transfer is not available")]
    Unavailable,

    #[error("Clipboard rejected {mime} data: {reason}")]
    Rejected { mime: ClipboardMime, reason: String },
}
