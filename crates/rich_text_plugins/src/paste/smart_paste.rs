// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use html_escape::encode_double_quoted_attribute;
use paste_urls::{is_absolute_url, is_image_url};
use tracing::debug;

use super::PasteSettings;

/// Attributes of a link created from a pasted URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAttributes {
    pub href: String,
    pub target: String,
}

impl LinkAttributes {
    fn new_tab(href: &str) -> Self {
        Self {
            href: href.to_owned(),
            target: "_blank".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasteStep {
    /// Insert `html` as pasted content.
    InsertHtml { html: String, merge: bool },
    /// Turn the selection into a link.
    InsertLink(LinkAttributes),
    /// Insert `html` (an `<img>`) as regular content.
    InsertImage { html: String },
}

/// The steps for a paste. Each step is its own undo level, so undoing a
/// smart paste first gives back the text as pasted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PastePlan {
    pub steps: Vec<PasteStep>,
}

impl PastePlan {
    fn single(step: PasteStep) -> Self {
        Self { steps: vec![step] }
    }

    fn with_transform(plain: PasteStep, transform: PasteStep) -> Self {
        Self {
            steps: vec![plain, transform],
        }
    }

    pub fn is_smart(&self) -> bool {
        self.steps.len() > 1
    }
}

/// Decide how `html` should be pasted over the current selection.
pub fn plan_paste(
    settings: &PasteSettings,
    selection_collapsed: bool,
    html: &str,
) -> PastePlan {
    let plain = PasteStep::InsertHtml {
        html: html.to_owned(),
        merge: settings.merge_formats,
    };
    if !settings.smart_paste {
        return PastePlan::single(plain);
    }
    if !selection_collapsed && is_absolute_url(html) {
        debug!("Linking the selection to the pasted URL");
        return PastePlan::with_transform(
            plain,
            PasteStep::InsertLink(LinkAttributes::new_tab(html)),
        );
    }
    if settings.paste_image_urls && is_image_url(html) {
        debug!("Inserting an image for the pasted URL");
        let image = format!("<img src=\"{}\">", encode_double_quoted_attribute(html));
        return PastePlan::with_transform(
            plain,
            PasteStep::InsertImage { html: image },
        );
    }
    PastePlan::single(plain)
}

/// The editor operations a paste is carried out with.
pub trait PasteSink {
    fn insert_pasted_html(&mut self, html: &str, merge: bool);

    fn insert_link(&mut self, link: &LinkAttributes);

    fn insert_html(&mut self, html: &str);

    /// Close the current undo level.
    fn add_undo_level(&mut self);
}

/// Paste `html` into `sink`, applying smart paste if enabled.
pub fn insert_content<K>(
    settings: &PasteSettings,
    sink: &mut K,
    selection_collapsed: bool,
    html: &str,
) -> PastePlan
where
    K: PasteSink + ?Sized,
{
    let plan = plan_paste(settings, selection_collapsed, html);
    for (index, step) in plan.steps.iter().enumerate() {
        if index > 0 {
            sink.add_undo_level();
        }
        match step {
            PasteStep::InsertHtml { html, merge } => {
                sink.insert_pasted_html(html, *merge)
            }
            PasteStep::InsertLink(link) => sink.insert_link(link),
            PasteStep::InsertImage { html } => sink.insert_html(html),
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        log: Vec<String>,
    }

    impl PasteSink for RecordingSink {
        fn insert_pasted_html(&mut self, html: &str, merge: bool) {
            self.log.push(format!("paste {html} merge={merge}"));
        }

        fn insert_link(&mut self, link: &LinkAttributes) {
            self.log.push(format!("link {} target={}", link.href, link.target));
        }

        fn insert_html(&mut self, html: &str) {
            self.log.push(format!("insert {html}"));
        }

        fn add_undo_level(&mut self) {
            self.log.push("undo level".to_owned());
        }
    }

    const URL: &str = "https://matrix.org/docs";
    const IMAGE: &str = "https://matrix.org/logo.png?a=1&b=2.png";

    fn paste(settings: PasteSettings, collapsed: bool, html: &str) -> String {
        let mut sink = RecordingSink::default();
        insert_content(&settings, &mut sink, collapsed, html);
        sink.log.join("\n")
    }

    #[test]
    fn url_over_selection_becomes_a_link() {
        assert_eq!(
            paste(PasteSettings::default(), false, URL),
            indoc! {"
                paste https://matrix.org/docs merge=true
                undo level
                link https://matrix.org/docs target=_blank"
            }
        );
    }

    #[test]
    fn url_at_caret_is_pasted_as_text() {
        assert_eq!(
            paste(PasteSettings::default(), true, URL),
            "paste https://matrix.org/docs merge=true"
        );
    }

    #[test]
    fn non_url_over_selection_is_pasted() {
        let plan = plan_paste(&PasteSettings::default(), false, "<b>hello</b>");
        assert!(!plan.is_smart());
        assert_eq!(
            plan.steps,
            vec![PasteStep::InsertHtml {
                html: "<b>hello</b>".to_owned(),
                merge: true
            }]
        );
    }

    #[test]
    fn disabled_smart_paste_never_links() {
        let settings = PasteSettings::default()
            .with_smart_paste(false)
            .with_merge_formats(false);
        assert_eq!(
            paste(settings, false, URL),
            "paste https://matrix.org/docs merge=false"
        );
    }

    #[test]
    fn image_urls_are_text_by_default() {
        assert_eq!(
            paste(PasteSettings::default(), true, IMAGE),
            format!("paste {IMAGE} merge=true")
        );
    }

    #[test]
    fn image_urls_insert_an_escaped_image_when_enabled() {
        let settings = PasteSettings::default().with_image_urls(true);
        assert_eq!(
            paste(settings, true, IMAGE),
            indoc! {r#"
                paste https://matrix.org/logo.png?a=1&b=2.png merge=true
                undo level
                insert <img src="https://matrix.org/logo.png?a=1&amp;b=2.png">"#
            }
        );
    }

    #[test]
    fn linking_wins_over_images() {
        let settings = PasteSettings::default().with_image_urls(true);
        let plan = plan_paste(&settings, false, IMAGE);
        assert_eq!(
            plan.steps[1],
            PasteStep::InsertLink(LinkAttributes {
                href: IMAGE.to_owned(),
                target: "_blank".to_owned(),
            })
        );
    }
}
