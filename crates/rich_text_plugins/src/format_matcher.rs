// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

/// Options passed through to [`FormatMatcher::matches`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Accept formats that are equivalent rather than identical, e.g. any
    /// heading level when asked about `h1`.
    pub similar: bool,
}

impl MatchOptions {
    pub fn similar(similar: bool) -> Self {
        Self { similar }
    }
}

/// The host's format definitions.
///
/// How a format maps onto elements, attributes or styles is entirely up to
/// the implementation; the tracker only asks the two questions below.
pub trait FormatMatcher<N> {
    /// Whether `node` applies `format`.
    fn matches(&self, node: &N, format: &str, options: MatchOptions) -> bool;

    /// Whether `format` is scoped to `node` and must not be inherited by
    /// the content inside it from elements further out.
    fn is_non_inherited_boundary(&self, node: &N, format: &str) -> bool;
}

impl<N, M> FormatMatcher<N> for &M
where
    M: FormatMatcher<N> + ?Sized,
{
    fn matches(&self, node: &N, format: &str, options: MatchOptions) -> bool {
        (**self).matches(node, format, options)
    }

    fn is_non_inherited_boundary(&self, node: &N, format: &str) -> bool {
        (**self).is_non_inherited_boundary(node, format)
    }
}
