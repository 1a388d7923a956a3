// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! DOM skeleton of the widget: open button, panel, controls.

use a11y_core::WidgetConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom::WebDocument;
use crate::style::{stylesheet, ARROW_DOWN_ICON, ARROW_UP_ICON, OPEN_ICON};

const CREDIT_URL: &str = "https://www.nonstopgreen.com";
const CREDIT_TEXT: &str = "Web Accessibility Solution By NonStopGreen";

/// Clickable elements the bindings attach listeners to.
pub struct Controls {
    /// Floating open button.
    pub open: Element,
    /// Close button in the footer.
    pub close: Element,
    /// Content scaling plus.
    pub scaling_plus: Element,
    /// Content scaling minus.
    pub scaling_minus: Element,
    /// Font scaling plus.
    pub font_plus: Element,
    /// Font scaling minus.
    pub font_minus: Element,
    /// Readable-font feature button.
    pub readable_font: Element,
}

/// Result of building the shell.
pub struct Shell {
    /// Effect target for the widget.
    pub document: WebDocument,
    /// Event sources.
    pub controls: Controls,
}

fn element(doc: &Document, tag: &str, classes: &[&str]) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    for class in classes {
        el.class_list().add_1(class)?;
    }
    Ok(el)
}

fn with_text(el: Element, text: &str) -> Element {
    el.set_text_content(Some(text));
    el
}

struct Range {
    root: Element,
    minus: Element,
    plus: Element,
    label: Element,
}

fn custom_range(doc: &Document, title: &str) -> Result<Range, JsValue> {
    let root = element(doc, "div", &["a11y-action-box", "a11y-action-box-big"])?;
    let heading = with_text(element(doc, "h4", &["a11y-action-box-title"])?, title);
    let range = element(doc, "div", &["a11y-custom-range"])?;

    let minus = element(
        doc,
        "button",
        &["a11y-custom-range-minus", "a11y-custom-range-button"],
    )?;
    minus.set_attribute("aria-label", &format!("Decrease {}", title.to_lowercase()))?;
    minus.set_inner_html(ARROW_DOWN_ICON);

    let plus = element(
        doc,
        "button",
        &["a11y-custom-range-plus", "a11y-custom-range-button"],
    )?;
    plus.set_attribute("aria-label", &format!("Increase {}", title.to_lowercase()))?;
    plus.set_inner_html(ARROW_UP_ICON);

    let label = element(doc, "div", &["a11y-custom-range-body"])?;
    label.set_attribute("aria-live", "polite")?;

    range.append_child(&minus)?;
    range.append_child(&label)?;
    range.append_child(&plus)?;
    root.append_child(&heading)?;
    root.append_child(&range)?;

    Ok(Range {
        root,
        minus,
        plus,
        label,
    })
}

/// Inject the stylesheet, open button and (hidden) panel into the page.
pub fn build(doc: &Document, config: &WidgetConfig) -> Result<Shell, JsValue> {
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let style = with_text(element(doc, "style", &[])?, &stylesheet(config));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => body.append_child(&style)?,
    };

    let open = element(doc, "button", &["a11y-open-button"])?;
    open.set_attribute("aria-label", "Open accessibility menu")?;
    open.set_inner_html(OPEN_ICON);
    body.append_child(&open)?;

    let container: HtmlElement = element(doc, "div", &["a11y-widget"])?
        .dyn_into()
        .map_err(JsValue::from)?;
    container.set_attribute("role", "dialog")?;
    container.set_attribute("aria-label", "Accessibility Adjustments")?;

    let header = element(doc, "header", &["a11y-header"])?;

    let hero = element(doc, "section", &["a11y-hero"])?;
    hero.append_child(&with_text(
        element(doc, "h2", &["a11y-hero-title"])?,
        "Accessibility Adjustments",
    ))?;

    let panel_body = element(doc, "section", &["a11y-body"])?;
    let actions = element(doc, "section", &["a11y-actions-box"])?;
    actions.append_child(&with_text(element(doc, "h3", &[])?, "Content Adjustments"))?;
    let group = element(doc, "div", &["a11y-actions-group"])?;

    let scaling = custom_range(doc, "Content Scaling")?;
    let readable_font = with_text(
        element(doc, "div", &["a11y-action-box", "a11y-action-button"])?,
        "Readable Font",
    );
    readable_font.set_attribute("role", "button")?;
    readable_font.set_attribute("tabindex", "0")?;
    let font = custom_range(doc, "Font Scaling")?;

    group.append_child(&scaling.root)?;
    group.append_child(&readable_font)?;
    group.append_child(&font.root)?;
    actions.append_child(&group)?;
    panel_body.append_child(&actions)?;

    let footer = element(doc, "footer", &["a11y-footer"])?;
    let close = with_text(element(doc, "button", &["a11y-close"])?, "\u{2716}");
    close.set_attribute("aria-label", "Close accessibility menu")?;
    let credit = with_text(element(doc, "a", &["a11y-by"])?, CREDIT_TEXT);
    credit.set_attribute("href", CREDIT_URL)?;
    credit.set_attribute("target", "_blank")?;
    credit.set_attribute("rel", "noopener")?;
    footer.append_child(&close)?;
    footer.append_child(&credit)?;

    container.append_child(&header)?;
    container.append_child(&hero)?;
    container.append_child(&panel_body)?;
    container.append_child(&footer)?;
    body.append_child(&container)?;

    Ok(Shell {
        document: WebDocument::new(
            body,
            container,
            scaling.label,
            font.label,
            readable_font.clone(),
        ),
        controls: Controls {
            open,
            close,
            scaling_plus: scaling.plus,
            scaling_minus: scaling.minus,
            font_plus: font.plus,
            font_minus: font.minus,
            readable_font,
        },
    })
}
