// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Smart paste: pasting a URL over a selection links the selection, and
//! (when enabled) pasting an image URL inserts the image.

mod settings;
mod smart_paste;

pub use settings::PasteSettings;
pub use smart_paste::{
    insert_content, plan_paste, LinkAttributes, PastePlan, PasteSink,
    PasteStep,
};
