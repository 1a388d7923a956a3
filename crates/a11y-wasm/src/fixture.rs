// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Detached DOM nodes shared by the browser tests.
#![allow(clippy::unwrap_used)]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::WebDocument;

/// A [`WebDocument`] over nodes that are not attached to the page, plus
/// handles to inspect them.
pub struct Detached {
    pub doc: WebDocument,
    pub body: HtmlElement,
    pub container: HtmlElement,
    pub scaling_label: Element,
    pub font_scaling_label: Element,
    pub readable_button: Element,
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn html(tag: &str) -> HtmlElement {
    document().create_element(tag).unwrap().dyn_into().unwrap()
}

pub fn detached() -> Detached {
    let body = html("div");
    let container = html("div");
    let scaling_label = document().create_element("div").unwrap();
    let font_scaling_label = document().create_element("div").unwrap();
    let readable_button = document().create_element("div").unwrap();
    let doc = WebDocument::new(
        body.clone(),
        container.clone(),
        scaling_label.clone(),
        font_scaling_label.clone(),
        readable_button.clone(),
    );
    Detached {
        doc,
        body,
        container,
        scaling_label,
        font_scaling_label,
        readable_button,
    }
}
