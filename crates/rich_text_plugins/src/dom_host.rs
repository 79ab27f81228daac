// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::fmt::Debug;

/// Read access to the host document, as needed to work out which elements
/// surround the selection.
///
/// Nodes are cheap handles (an index, a path or a reference counted
/// pointer); the tracker clones them into ancestor chains and hands them
/// back to observers.
pub trait DomHost {
    type Node: Clone + Debug;

    /// The chain of nodes from `reference` outward to the editing root,
    /// innermost first. `reference` itself is included.
    fn parents(&self, reference: &Self::Node) -> Vec<Self::Node>;

    fn is_element(&self, node: &Self::Node) -> bool;

    /// Whether `node` is editor bookkeeping (e.g. a `data-mce-bogus`
    /// element) rather than user content.
    fn is_internal_marker(&self, node: &Self::Node) -> bool;

    fn child_count(&self, node: &Self::Node) -> usize;

    fn first_child(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// The host's selection and content change notifications.
///
/// [`crate::FormatChangeTracker`] calls [`subscribe_node_changes`] exactly
/// once, when it starts tracking. From then on the host is expected to call
/// [`crate::FormatChangeTracker::node_changed`] for every change, one at a
/// time.
///
/// [`subscribe_node_changes`]: NodeChangeSource::subscribe_node_changes
pub trait NodeChangeSource {
    fn subscribe_node_changes(&mut self);
}
