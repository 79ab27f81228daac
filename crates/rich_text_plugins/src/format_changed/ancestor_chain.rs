// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::{DomHost, HostEngine};

/// Build the chain of elements around `reference`, innermost first.
///
/// Text nodes and editor bookkeeping elements are dropped, then the
/// engine specific correction from [`extend_chain_for_engine`] is applied.
pub fn resolve_ancestor_chain<H>(
    host: &H,
    reference: &H::Node,
    engine: HostEngine,
) -> Vec<H::Node>
where
    H: DomHost + ?Sized,
{
    let mut chain: Vec<H::Node> = host
        .parents(reference)
        .into_iter()
        .filter(|node| host.is_element(node) && !host.is_internal_marker(node))
        .collect();
    extend_chain_for_engine(engine, host, &mut chain);
    chain
}

/// Compensate for Gecko reporting a selection higher up the tree than other
/// engines do.
///
/// After a triple click Firefox puts the selection on a container (e.g. the
/// `<div>` around a `<p><b>..</b></p>`) where Chrome puts it on the
/// paragraph. While the first element of the chain has a single child which
/// itself has children, that child is pushed onto the front of the chain,
/// so the chain starts from the same place it would in other engines.
///
/// Other engines leave the chain untouched.
pub fn extend_chain_for_engine<H>(
    engine: HostEngine,
    host: &H,
    chain: &mut Vec<H::Node>,
) where
    H: DomHost + ?Sized,
{
    if engine != HostEngine::Gecko {
        return;
    }
    while let Some(first) = chain.first() {
        if host.child_count(first) != 1 {
            break;
        }
        let Some(child) = host.first_child(first) else {
            break;
        };
        if host.child_count(&child) == 0 {
            break;
        }
        chain.insert(0, child);
    }
}
