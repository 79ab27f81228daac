// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Host platform detection.
//!
//! A few behaviours depend on which browser engine and operating system the
//! editor runs in. [`Platform`] captures the flags that matter and can be
//! built explicitly or derived from a user agent string.

use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

static WINDOWS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bwindows\b").unwrap());

static IOS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"iPad|iPhone|iPod").unwrap());

/// The layout engine of the host browser.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HostEngine {
    /// Firefox.
    Gecko,
    /// Chrome, Safari and the Chromium based Edge.
    WebKit,
    /// Internet Explorer.
    Trident,
    /// The legacy (pre-Chromium) Edge.
    EdgeHtml,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Platform {
    pub engine: HostEngine,
    pub ios: bool,
    pub windows: bool,
}

impl Platform {
    pub fn new(engine: HostEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Detect the platform from a browser user agent string.
    ///
    /// Legacy Edge and Chromium both advertise `AppleWebKit` and Firefox is
    /// the only engine that sends a `Gecko/` token, so the checks run from
    /// the most to the least specific engine.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let engine = if user_agent.contains("Edge/") {
            HostEngine::EdgeHtml
        } else if user_agent.contains("MSIE ")
            || user_agent.contains("Trident/")
        {
            HostEngine::Trident
        } else if user_agent.contains("AppleWebKit") {
            HostEngine::WebKit
        } else if user_agent.contains("Gecko/") {
            HostEngine::Gecko
        } else {
            HostEngine::Other
        };
        Self {
            engine,
            ios: IOS.is_match(user_agent),
            windows: WINDOWS.is_match(user_agent),
        }
    }

    pub fn is_ms_edge(&self) -> bool {
        self.engine == HostEngine::EdgeHtml
    }

    /// Whether plain text put on the clipboard should use `\r\n` line
    /// breaks.
    pub fn uses_crlf_line_breaks(&self) -> bool {
        self.windows
            && matches!(self.engine, HostEngine::WebKit | HostEngine::Trident)
    }
}
