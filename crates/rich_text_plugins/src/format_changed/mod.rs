// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Tracking of the formats that apply around the selection.
//!
//! Toolbars register observers for format names through
//! [`FormatChangeTracker::format_changed`]. On every node change the
//! tracker works out which registered formats match an element around the
//! selection and calls the observers of each format whose state flipped.

mod ancestor_chain;
mod subscriptions;
mod tracker;

pub use ancestor_chain::{extend_chain_for_engine, resolve_ancestor_chain};
pub use subscriptions::{
    FormatContext, FormatObserver, SharedObserver, SubscriptionRegistry,
};
pub use tracker::{FormatChangeTracker, TrackerState};
