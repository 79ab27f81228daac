// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Plugin logic for a rich text editor that is independent of any concrete
//! DOM or browser:
//!
//! - [`FormatChangeTracker`] keeps track of which named formats apply to the
//!   current selection and tells registered observers when that changes.
//! - [`clipboard`] prepares cut and copy payloads and decides between the
//!   native clipboard API and the offscreen fallback.
//! - [`paste`] decides how pasted content is inserted (smart paste).
//!
//! The host supplies the document through [`DomHost`] and the format
//! definitions through [`FormatMatcher`].

pub mod clipboard;
mod dom_host;
mod error;
mod format_changed;
mod format_matcher;
pub mod paste;
mod platform;

#[cfg(test)]
mod tests;

pub use crate::dom_host::{DomHost, NodeChangeSource};
pub use crate::error::ClipboardError;
pub use crate::format_changed::{
    extend_chain_for_engine, resolve_ancestor_chain, FormatChangeTracker,
    FormatContext, FormatObserver, SharedObserver, SubscriptionRegistry,
    TrackerState,
};
pub use crate::format_matcher::{FormatMatcher, MatchOptions};
pub use crate::platform::{HostEngine, Platform};
