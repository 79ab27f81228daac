// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

/// Paste behaviour configured by the embedding application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasteSettings {
    /// Try to link the selection or insert images from pasted URLs.
    pub smart_paste: bool,
    /// Let pasted inline formatting merge with the surrounding formatting.
    pub merge_formats: bool,
    /// Insert an `<img>` when an image URL is pasted. Off by default, so
    /// pasting an image address gives the address.
    pub paste_image_urls: bool,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            smart_paste: true,
            merge_formats: true,
            paste_image_urls: false,
        }
    }
}

impl PasteSettings {
    pub fn with_smart_paste(mut self, enabled: bool) -> Self {
        self.smart_paste = enabled;
        self
    }

    pub fn with_merge_formats(mut self, enabled: bool) -> Self {
        self.merge_formats = enabled;
        self
    }

    pub fn with_image_urls(mut self, enabled: bool) -> Self {
        self.paste_image_urls = enabled;
        self
    }
}
