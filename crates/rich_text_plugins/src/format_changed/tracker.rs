// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::rc::Rc;

use tracing::{debug, trace};

use super::resolve_ancestor_chain;
use super::subscriptions::{
    FormatContext, SharedObserver, SubscriptionRegistry,
};
use crate::{DomHost, FormatMatcher, HostEngine, NodeChangeSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerState {
    /// Nobody has registered yet, node changes are ignored.
    Uninitialized,
    Tracking,
}

/// Per-editor state for format change notifications.
///
/// Each editing session owns one tracker; nothing is shared between
/// trackers, so several editors can live side by side.
///
/// A tracker starts [`TrackerState::Uninitialized`] and moves to
/// [`TrackerState::Tracking`] the first time an observer is registered (or
/// when [`start_tracking`] is called). From then on every
/// [`node_changed`] call recomputes the formats around the selection and
/// notifies the observers of formats that were switched on or off.
///
/// [`start_tracking`]: FormatChangeTracker::start_tracking
/// [`node_changed`]: FormatChangeTracker::node_changed
#[derive(Debug)]
pub struct FormatChangeTracker<N> {
    state: TrackerState,
    engine: HostEngine,
    registry: SubscriptionRegistry<N>,
    /// Indices into `registry` of the formats currently reported active.
    active: BTreeSet<usize>,
}

impl<N> FormatChangeTracker<N>
where
    N: Clone + Debug,
{
    pub fn new(engine: HostEngine) -> Self {
        Self {
            state: TrackerState::Uninitialized,
            engine,
            registry: SubscriptionRegistry::new(),
            active: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn engine(&self) -> HostEngine {
        self.engine
    }

    pub fn registry(&self) -> &SubscriptionRegistry<N> {
        &self.registry
    }

    /// Subscribe to `source` and start with no active formats. Does
    /// nothing when already tracking.
    pub fn start_tracking<S>(&mut self, source: &mut S)
    where
        S: NodeChangeSource + ?Sized,
    {
        if self.state == TrackerState::Tracking {
            return;
        }
        source.subscribe_node_changes();
        self.active.clear();
        self.state = TrackerState::Tracking;
        debug!(engine = %self.engine, "Started tracking format changes");
    }

    /// Call `observer` whenever one of the comma separated `formats` is
    /// switched on or off around the selection.
    ///
    /// With `similar` set, equivalent formats count as a match (see
    /// [`crate::MatchOptions`]). The first registration of a format decides
    /// this for all its observers.
    pub fn format_changed<S, F>(
        &mut self,
        source: &mut S,
        formats: &str,
        observer: F,
        similar: bool,
    ) where
        S: NodeChangeSource + ?Sized,
        F: FnMut(bool, &FormatContext<'_, N>) + 'static,
    {
        self.format_changed_shared(
            source,
            formats,
            Rc::new(RefCell::new(observer)),
            similar,
        );
    }

    /// Like [`format_changed`](Self::format_changed) for an observer the
    /// caller keeps a handle to.
    pub fn format_changed_shared<S>(
        &mut self,
        source: &mut S,
        formats: &str,
        observer: SharedObserver<N>,
        similar: bool,
    ) where
        S: NodeChangeSource + ?Sized,
    {
        self.start_tracking(source);
        self.registry.register(formats, observer, similar);
    }

    pub fn is_active(&self, format: &str) -> bool {
        self.active_formats().any(|f| f == format)
    }

    /// Currently active formats, in registration order.
    pub fn active_formats(&self) -> impl Iterator<Item = &str> {
        self.active
            .iter()
            .filter_map(|index| self.registry.entry(*index))
            .map(|s| s.name())
    }

    /// Handle a selection or content change reported for `reference`.
    pub fn node_changed<H, M>(&mut self, host: &H, matcher: &M, reference: &N)
    where
        H: DomHost<Node = N> + ?Sized,
        M: FormatMatcher<N> + ?Sized,
    {
        if self.state == TrackerState::Uninitialized {
            return;
        }
        let chain = resolve_ancestor_chain(host, reference, self.engine);
        self.process_chain(matcher, reference, &chain);
    }

    /// Diff the registered formats against an already resolved ancestor
    /// chain and notify observers of every transition.
    pub fn process_chain<M>(&mut self, matcher: &M, reference: &N, chain: &[N])
    where
        M: FormatMatcher<N> + ?Sized,
    {
        if self.state == TrackerState::Uninitialized {
            return;
        }

        let mut matched = BTreeSet::new();
        for (index, subscription) in self.registry.entries() {
            let format = subscription.name();
            let options = subscription.options();
            for node in chain {
                if matcher.matches(node, format, options) {
                    if !self.active.contains(&index) {
                        trace!(format, ?node, "Format activated");
                        subscription.notify(true, node, chain);
                        self.active.insert(index);
                    }
                    matched.insert(index);
                    break;
                }
                if matcher.is_non_inherited_boundary(node, format) {
                    break;
                }
            }
        }

        let stale: Vec<usize> =
            self.active.difference(&matched).copied().collect();
        for index in stale {
            self.active.remove(&index);
            if let Some(subscription) = self.registry.entry(index) {
                trace!(format = subscription.name(), "Format deactivated");
                subscription.notify(false, reference, chain);
            }
        }
    }
}
