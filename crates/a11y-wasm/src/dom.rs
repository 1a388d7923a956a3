// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! web-sys implementation of the document and audit ports.

use a11y_core::audit::{AuditError, AuditTarget};
use a11y_core::document_port::{DocumentPort, ACTIVE_CLASS, OPEN_CLASS, READABLE_FONT_CLASS};
use a11y_core::Counter;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

/// Handles to the live elements the widget mutates.
///
/// Cheap to clone; clones refer to the same DOM nodes.
#[derive(Clone)]
pub struct WebDocument {
    body: HtmlElement,
    container: HtmlElement,
    scaling_label: Element,
    font_scaling_label: Element,
    readable_button: Element,
}

impl WebDocument {
    /// Wrap already-built widget elements.
    pub fn new(
        body: HtmlElement,
        container: HtmlElement,
        scaling_label: Element,
        font_scaling_label: Element,
        readable_button: Element,
    ) -> Self {
        Self {
            body,
            container,
            scaling_label,
            font_scaling_label,
            readable_button,
        }
    }
}

fn check(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(op, ?err, "DOM update failed");
    }
}

fn set_class(element: &Element, class: &str, present: bool) -> Result<(), JsValue> {
    let list = element.class_list();
    if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    }
}

impl DocumentPort for WebDocument {
    fn set_zoom(&mut self, factor: f64) {
        check(
            "zoom",
            self.body.style().set_property("zoom", &factor.to_string()),
        );
    }

    fn set_font_size(&mut self, percent: i32) {
        check(
            "font-size",
            self.body
                .style()
                .set_property("font-size", &format!("{percent}%")),
        );
    }

    fn set_readable_font(&mut self, enabled: bool) {
        check(
            "readable-font",
            set_class(&self.body, READABLE_FONT_CLASS, enabled),
        );
        check(
            "readable-font button",
            set_class(&self.readable_button, ACTIVE_CLASS, enabled),
        );
    }

    fn set_label(&mut self, counter: Counter, label: &str) {
        let target = match counter {
            Counter::Scaling => &self.scaling_label,
            Counter::FontScaling => &self.font_scaling_label,
        };
        target.set_text_content(Some(label));
    }

    fn set_panel_visible(&mut self, visible: bool) {
        let display = if visible { "flex" } else { "none" };
        check(
            "panel display",
            self.container.style().set_property("display", display),
        );
    }

    fn set_panel_open_class(&mut self, open: bool) {
        check("panel class", set_class(&self.container, OPEN_CLASS, open));
    }
}

/// Runs audit selectors against the host document.
pub struct PageAudit(pub Document);

impl AuditTarget for PageAudit {
    fn count_matches(&self, selector: &str) -> Result<usize, AuditError> {
        self.0
            .query_selector_all(selector)
            .map(|list| list.length() as usize)
            .map_err(|err| AuditError::Selector(format!("{err:?}")))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::fixture::{detached, document};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn font_size_and_display_are_inline_styles() {
        let mut page = detached();
        page.doc.set_font_size(120);
        page.doc.set_panel_visible(true);
        assert_eq!(
            page.body.style().get_property_value("font-size").unwrap(),
            "120%"
        );
        assert_eq!(
            page.container.style().get_property_value("display").unwrap(),
            "flex"
        );

        page.doc.set_panel_visible(false);
        assert_eq!(
            page.container.style().get_property_value("display").unwrap(),
            "none"
        );
    }

    #[wasm_bindgen_test]
    fn readable_font_marks_body_and_button() {
        let mut page = detached();
        page.doc.set_readable_font(true);
        page.doc.set_readable_font(true);
        assert!(page.body.class_list().contains(READABLE_FONT_CLASS));
        assert!(page.readable_button.class_list().contains(ACTIVE_CLASS));
        assert_eq!(page.body.class_list().length(), 1);

        page.doc.set_readable_font(false);
        assert!(!page.body.class_list().contains(READABLE_FONT_CLASS));
        assert!(!page.readable_button.class_list().contains(ACTIVE_CLASS));
    }

    #[wasm_bindgen_test]
    fn labels_and_open_class_target_their_elements() {
        let mut page = detached();
        page.doc.set_label(Counter::Scaling, "+20%");
        page.doc.set_label(Counter::FontScaling, "Default");
        page.doc.set_panel_open_class(true);

        assert_eq!(page.scaling_label.text_content().as_deref(), Some("+20%"));
        assert_eq!(
            page.font_scaling_label.text_content().as_deref(),
            Some("Default")
        );
        assert!(page.container.class_list().contains(OPEN_CLASS));

        page.doc.set_panel_open_class(false);
        assert!(!page.container.class_list().contains(OPEN_CLASS));
    }

    #[wasm_bindgen_test]
    fn audit_counts_live_matches() {
        let document = document();
        let audit = PageAudit(document.clone());
        let selector = "a[href=\"\"]";
        let before = audit.count_matches(selector).unwrap();

        let link = document.create_element("a").unwrap();
        link.set_attribute("href", "").unwrap();
        document.body().unwrap().append_child(&link).unwrap();
        assert_eq!(audit.count_matches(selector).unwrap(), before + 1);
        link.remove();
    }

    #[wasm_bindgen_test]
    fn malformed_selector_is_reported() {
        assert!(matches!(
            PageAudit(document()).count_matches("[["),
            Err(AuditError::Selector(_))
        ));
    }
}
