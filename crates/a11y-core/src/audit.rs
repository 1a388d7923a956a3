// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed markup checklist run by `debug()`.
//!
//! Each rule is a CSS selector list; a rule is violated when it matches at
//! least one element. The checklist only reports, it never edits the page.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Failure to evaluate one selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// The host rejected the selector.
    #[error("selector rejected: {0}")]
    Selector(String),
}

/// Something that can count elements matching a selector list.
pub trait AuditTarget {
    /// Number of elements matching `selector`.
    fn count_matches(&self, selector: &str) -> Result<usize, AuditError>;
}

/// One checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditRule {
    /// Stable identifier.
    pub id: &'static str,
    /// What the rule flags.
    pub description: &'static str,
    /// Selector list matching offending elements.
    pub selector: &'static str,
}

/// Display toggles for `debug()`. All default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditOptions {
    /// Report warnings.
    pub css_warnings: bool,
    /// Report errors.
    pub css_errors: bool,
    /// Report obsolete markup.
    pub css_obsoletes: bool,
    /// Show a floating violation counter.
    pub floating_counter: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            css_warnings: true,
            css_errors: true,
            css_obsoletes: true,
            floating_counter: true,
        }
    }
}

/// A violated rule and how many elements tripped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    /// The rule.
    pub rule: &'static AuditRule,
    /// Matching element count (always > 0).
    pub count: usize,
}

/// Outcome of a checklist run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Violated rules, in checklist order.
    pub findings: Vec<Finding>,
    /// Rules whose selector the host could not evaluate.
    pub skipped: Vec<&'static str>,
}

impl AuditReport {
    /// Total offending elements across all findings.
    pub fn total(&self) -> usize {
        self.findings.iter().map(|f| f.count).sum()
    }

    /// Whether `id` was violated.
    pub fn violated(&self, id: &str) -> bool {
        self.findings.iter().any(|f| f.rule.id == id)
    }
}

/// The checklist, in reporting order.
pub static RULES: &[AuditRule] = &[
    AuditRule {
        id: "width-height-in-markup",
        description: "width/height attributes on non-media elements",
        selector: ":not(img):not(object):not(embed):not(svg):not(canvas)[width], \
                   :not(img):not(object):not(embed):not(svg):not(canvas)[height]",
    },
    AuditRule {
        id: "disabled-class-without-disabled",
        description: "button styled as disabled but not disabled",
        selector: "button[class*=\"disabled\"]:not([disabled]):not([readonly])",
    },
    AuditRule {
        id: "empty-button",
        description: "empty button without an accessible name",
        selector: "button:empty:not([aria-label]):not([aria-labelledby]):not([title])",
    },
    AuditRule {
        id: "empty-button-attributes",
        description: "button with an empty naming attribute",
        selector: "button[title=\"\"], button[aria-label=\"\"], button[aria-labelledby=\"\"]",
    },
    AuditRule {
        id: "empty-for-attribute",
        description: "label with an empty for attribute",
        selector: "label[for=\"\"], label[for=\" \"]",
    },
    AuditRule {
        id: "empty-href-attribute",
        description: "link with an empty href",
        selector: "a[href=\"\"], a[href=\" \"]",
    },
    AuditRule {
        id: "empty-link",
        description: "empty link without an accessible name",
        selector: "a:empty[title=\"\"], a:empty[aria-label=\"\"], a:empty[aria-labelledby=\"\"], \
                   a:empty:not([title]):not([aria-label]):not([aria-labelledby])",
    },
    AuditRule {
        id: "incorrect-charset",
        description: "document charset is not utf-8",
        selector: "meta[charset]:not([charset=\"utf-8\"]):not([charset=\"UTF-8\"])",
    },
    AuditRule {
        id: "ungrouped-inputs",
        description: "radio or checkbox without a name",
        selector: "[type=\"radio\"]:not([name]), [type=\"checkbox\"]:not(:only-of-type):not([name])",
    },
    AuditRule {
        id: "invalid-dir-attribute",
        description: "dir attribute other than rtl, ltr or auto",
        selector: "[dir]:not([dir=\"rtl\"]):not([dir=\"ltr\"]):not([dir=\"auto\"])",
    },
    AuditRule {
        id: "inline-event-handlers",
        description: "inline event handler attributes",
        selector: "[onafterprint], [onbeforeprint], [onbeforeunload], [onerror], [onhaschange], \
                   [onload], [onmessage], [onoffline], [ononline], [onpagehide], [onpageshow], \
                   [onpopstate], [onredo], [onresize], [onstorage], [onundo], [onunload], \
                   [onblur], [onchange], [oncontextmenu], [onfocus], [onformchange], \
                   [onforminput], [oninput], [oninvalid], [onreset], [onselect], [onsubmit], \
                   [onkeydown], [onkeypress], [onkeyup], [onclick], [ondblclick], [ondrag], \
                   [ondragend], [ondragenter], [ondragleave], [ondragover], [ondragstart], \
                   [ondrop], [onmousedown], [onmousemove], [onmouseout], [onmouseover], \
                   [onmouseup], [onmousewheel], [onscroll], [onabort], [oncanplay], \
                   [oncanplaythrough], [ondurationchange], [onemptied], [onended], [onloadeddata], \
                   [onloadedmetadata], [onloadstart], [onpause], [onplay], [onplaying], \
                   [onprogress], [onratechange], [onreadystatechange], [onseeked], [onseeking], \
                   [onstalled], [onsuspend], [ontimeupdate], [onvolumechange], [onwaiting]",
    },
    AuditRule {
        id: "charset-not-first",
        description: "charset meta is not the first child of head",
        selector: "head > :first-child:not([charset])",
    },
    AuditRule {
        id: "nested-interactive",
        description: "interactive content nested in interactive content",
        selector: "a a[href], button a[href], a audio[controls], button audio[controls], \
                   a video[controls], button video[controls], a button, button button, \
                   a details, button details, a embed, button embed, a iframe, button iframe, \
                   a img[usemap], button img[usemap], a label, button label, a select, \
                   button select, a textarea, button textarea, a input[type]:not([hidden]), \
                   button input[type]:not([hidden]), form form, label label, meter meter, \
                   progress progress",
    },
    AuditRule {
        id: "form-missing-action",
        description: "form without an action",
        selector: "form:not([action]), form[action=\" \"], form[action=\"\"]",
    },
    AuditRule {
        id: "image-missing-alt",
        description: "image without alt text",
        selector: "img[alt=\" \"], area[alt=\" \"], input[type=\"image\"][alt=\" \"], \
                   img:not([alt]), area:not([alt]), input[type=\"image\"]:not([alt])",
    },
    AuditRule {
        id: "role-img-missing-label",
        description: "role=img without an accessible name",
        selector: "[role=\"img\"]:not([aria-label]):not([aria-labelledby])",
    },
    AuditRule {
        id: "input-missing-label",
        description: "form control without a label hook",
        selector: "input:not([type=\"button\"]):not([type=\"submit\"]):not([type=\"hidden\"])\
                   :not([type=\"reset\"]):not([type=\"image\"]):not([id]):not([aria-label])\
                   :not([title]):not([aria-labelledby]), \
                   textarea:not([id]):not([aria-label]):not([aria-labelledby]), \
                   select:not([id]):not([aria-label]):not([aria-labelledby])",
    },
    AuditRule {
        id: "missing-lang",
        description: "html element without a language",
        selector: "html:not([lang]), html[lang=\" \"], html[lang=\"\"]",
    },
    AuditRule {
        id: "empty-title",
        description: "empty title element",
        selector: "title:empty",
    },
    AuditRule {
        id: "image-missing-source",
        description: "image without a usable source",
        selector: "img:not([src]):not([srcset]), img[src=\"\"], img[src=\" \"], img[src=\"#\"], \
                   img[src=\"/\"], img[srcset=\"\"], img[srcset=\" \"], img[srcset=\"#\"], \
                   img[srcset=\"/\"], input[type=\"image\"]:not([src]):not([srcset]), \
                   input[type=\"image\"][src=\"\"], input[type=\"image\"][src=\" \"], \
                   input[type=\"image\"][src=\"#\"], input[type=\"image\"][src=\"/\"], \
                   input[type=\"image\"][srcset=\"\"], input[type=\"image\"][srcset=\" \"], \
                   input[type=\"image\"][srcset=\"#\"], input[type=\"image\"][srcset=\"/\"]",
    },
    AuditRule {
        id: "iframe-missing-title",
        description: "iframe without a title",
        selector: "iframe:not([title]), iframe[title=\" \"], iframe[title=\"\"]",
    },
];

/// Run every rule against `target` and log the violations.
pub fn run<A>(options: AuditOptions, target: &A) -> AuditReport
where
    A: AuditTarget + ?Sized,
{
    let mut report = AuditReport::default();
    for rule in RULES {
        match target.count_matches(rule.selector) {
            Ok(0) => {}
            Ok(count) => {
                if options.css_warnings {
                    warn!(rule = rule.id, count, "{}", rule.description);
                }
                report.findings.push(Finding { rule, count });
            }
            Err(err) => {
                warn!(rule = rule.id, error = %err, "audit rule skipped");
                report.skipped.push(rule.id);
            }
        }
    }
    info!(
        violated = report.findings.len(),
        elements = report.total(),
        skipped = report.skipped.len(),
        "accessibility audit finished"
    );
    report
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    struct Counts(HashMap<&'static str, usize>);

    impl AuditTarget for Counts {
        fn count_matches(&self, selector: &str) -> Result<usize, AuditError> {
            if selector.contains(":only-of-type") {
                return Err(AuditError::Selector(selector.to_owned()));
            }
            Ok(self.0.get(selector).copied().unwrap_or(0))
        }
    }

    fn rule(id: &str) -> &'static AuditRule {
        RULES.iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<_> = RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn inline_event_selector_covers_handlers_once() {
        let selector = rule("inline-event-handlers").selector;
        assert!(selector.starts_with("[onafterprint], "));
        assert!(selector.contains("[onchange]"));
        assert_eq!(selector.matches("[onerror]").count(), 1);
    }

    #[test]
    fn selector_lists_have_no_dangling_commas() {
        for rule in RULES {
            assert!(!rule.selector.trim_end().ends_with(','), "{}", rule.id);
        }
    }

    #[test]
    fn report_collects_violations_and_skips() {
        let mut counts = HashMap::new();
        counts.insert(rule("image-missing-alt").selector, 3);
        counts.insert(rule("empty-title").selector, 1);
        let report = run(AuditOptions::default(), &Counts(counts));

        assert!(report.violated("image-missing-alt"));
        assert!(report.violated("empty-title"));
        assert!(!report.violated("missing-lang"));
        assert_eq!(report.total(), 4);
        assert_eq!(report.skipped, vec!["ungrouped-inputs"]);
    }

    #[test]
    fn options_default_to_true_when_omitted() {
        let options: AuditOptions = serde_json::from_str(r#"{"cssErrors":false}"#).unwrap();
        assert!(options.css_warnings);
        assert!(!options.css_errors);
        assert!(options.floating_counter);
    }
}
