// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::MatchOptions;

/// What an observer is told about a format transition.
#[derive(Debug)]
pub struct FormatContext<'a, N> {
    /// The matching element when the format became active, or the node the
    /// change was reported for when it became inactive.
    pub node: &'a N,
    pub format: &'a str,
    /// The ancestor chain the decision was made on, innermost first.
    pub ancestors: &'a [N],
}

/// Receives format transitions. Implemented for any
/// `FnMut(bool, &FormatContext<N>)`.
pub trait FormatObserver<N> {
    fn format_changed(&mut self, active: bool, context: &FormatContext<'_, N>);
}

impl<N, F> FormatObserver<N> for F
where
    F: FnMut(bool, &FormatContext<'_, N>),
{
    fn format_changed(&mut self, active: bool, context: &FormatContext<'_, N>) {
        self(active, context)
    }
}

/// An observer that may be registered for several formats at once.
pub type SharedObserver<N> = Rc<RefCell<dyn FormatObserver<N>>>;

pub(crate) struct FormatSubscription<N> {
    name: String,
    options: MatchOptions,
    observers: Vec<SharedObserver<N>>,
}

impl<N> FormatSubscription<N> {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn options(&self) -> MatchOptions {
        self.options
    }

    /// Call every observer, in registration order.
    pub(crate) fn notify(&self, active: bool, node: &N, ancestors: &[N]) {
        let context = FormatContext {
            node,
            format: &self.name,
            ancestors,
        };
        for observer in &self.observers {
            observer.borrow_mut().format_changed(active, &context);
        }
    }
}

impl<N> fmt::Debug for FormatSubscription<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatSubscription")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observers per format name, in the order the formats were first
/// registered.
///
/// Entries are never removed. The [`MatchOptions`] of a format are fixed by
/// its first registration.
pub struct SubscriptionRegistry<N> {
    subscriptions: Vec<FormatSubscription<N>>,
    by_name: HashMap<String, usize>,
}

impl<N> Default for SubscriptionRegistry<N> {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<N> fmt::Debug for SubscriptionRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.subscriptions).finish()
    }
}

impl<N> SubscriptionRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `observer` to each of the comma separated `formats`.
    ///
    /// Names are taken as given, including empty ones. `similar` is only
    /// recorded for formats seen here for the first time.
    pub fn register(
        &mut self,
        formats: &str,
        observer: SharedObserver<N>,
        similar: bool,
    ) {
        for name in formats.split(',') {
            let index = match self.by_name.get(name) {
                Some(index) => *index,
                None => {
                    let index = self.subscriptions.len();
                    self.subscriptions.push(FormatSubscription {
                        name: name.to_owned(),
                        options: MatchOptions::similar(similar),
                        observers: Vec::new(),
                    });
                    self.by_name.insert(name.to_owned(), index);
                    index
                }
            };
            self.subscriptions[index].observers.push(Rc::clone(&observer));
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn contains(&self, format: &str) -> bool {
        self.by_name.contains_key(format)
    }

    /// Format names in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.subscriptions.iter().map(|s| s.name())
    }

    pub fn options(&self, format: &str) -> Option<MatchOptions> {
        self.get(format).map(|s| s.options())
    }

    pub fn observer_count(&self, format: &str) -> usize {
        self.get(format).map_or(0, |s| s.observers.len())
    }

    fn get(&self, format: &str) -> Option<&FormatSubscription<N>> {
        self.by_name
            .get(format)
            .map(|index| &self.subscriptions[*index])
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&FormatSubscription<N>> {
        self.subscriptions.get(index)
    }

    pub(crate) fn entries(
        &self,
    ) -> impl Iterator<Item = (usize, &FormatSubscription<N>)> {
        self.subscriptions.iter().enumerate()
    }
}
