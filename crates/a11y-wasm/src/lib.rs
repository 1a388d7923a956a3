// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen bindings for the a11y widget.
//!
//! Exposes an `A11y` class to the host page. Construction validates options
//! and loads `localStorage`; `init()` builds the panel, renders the persisted
//! state and wires the controls to the core widget.
#![deny(missing_docs)]

pub mod dom;
pub mod shell;
pub mod storage;
pub mod style;
pub mod timer;

#[cfg(all(test, target_arch = "wasm32"))]
mod fixture;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use a11y_core::audit::{AuditOptions, AuditReport};
use a11y_core::{A11yWidget, ConfigService, Counter, Direction, WidgetOptions};
use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

use crate::dom::{PageAudit, WebDocument};
use crate::storage::LocalStorageStore;
use crate::timer::TimeoutScheduler;

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

type Widget = A11yWidget<ConfigService<LocalStorageStore>>;
type Listener = Closure<dyn FnMut(Event)>;

/// Widget state shared between the exported class and DOM listeners.
struct Runtime {
    widget: Widget,
    view: Option<(WebDocument, TimeoutScheduler)>,
}

impl Runtime {
    fn adjust(&mut self, counter: Counter, direction: Direction) {
        let Some((doc, _)) = self.view.as_mut() else {
            return;
        };
        match counter {
            Counter::Scaling => self.widget.adjust_scaling(direction, doc),
            Counter::FontScaling => self.widget.adjust_font_scaling(direction, doc),
        };
    }

    fn toggle_readable_font(&mut self) {
        if let Some((doc, _)) = self.view.as_mut() {
            self.widget.toggle_readable_font(doc);
        }
    }

    fn toggle_open(&mut self) {
        if let Some((doc, scheduler)) = self.view.as_mut() {
            self.widget.toggle_open(doc, scheduler);
        }
    }
}

fn listen(
    target: &Element,
    runtime: &Rc<RefCell<Runtime>>,
    action: fn(&mut Runtime),
) -> Result<Listener, JsValue> {
    let weak: Weak<RefCell<Runtime>> = Rc::downgrade(runtime);
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        match runtime.try_borrow_mut() {
            Ok(mut runtime) => action(&mut runtime),
            Err(_) => warn!("widget busy, event dropped"),
        };
    });
    target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    Ok(listener)
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no window"))
}

/// One violated checklist rule, as handed back to JavaScript.
#[derive(Debug, Serialize)]
struct FindingView {
    id: &'static str,
    description: &'static str,
    count: usize,
}

fn findings(report: &AuditReport) -> Vec<FindingView> {
    report
        .findings
        .iter()
        .map(|f| FindingView {
            id: f.rule.id,
            description: f.rule.description,
            count: f.count,
        })
        .collect()
}

/// The accessibility widget, as seen from JavaScript.
#[wasm_bindgen]
pub struct A11y {
    runtime: Rc<RefCell<Runtime>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl A11y {
    /// Validate `options` (`{color, position, minScale, maxScale, minFontSize,
    /// maxFontSize}`, all optional) and load saved preferences.
    ///
    /// Throws when `position` is not `"left"` or `"right"`. Nothing is added
    /// to the page until `init()`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<A11y, JsError> {
        let options: WidgetOptions = if options.is_undefined() || options.is_null() {
            WidgetOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(js_error)?
        };
        let store = LocalStorageStore::from_window(&window()?);
        let widget = A11yWidget::new(options, ConfigService::new(store)).map_err(js_error)?;
        Ok(Self {
            runtime: Rc::new(RefCell::new(Runtime { widget, view: None })),
            listeners: Vec::new(),
        })
    }

    /// Build the panel, apply the saved preferences and bind the controls.
    ///
    /// Calling `init()` again is a no-op.
    pub fn init(&mut self) -> Result<(), JsError> {
        if self.runtime.borrow().view.is_some() {
            debug!("init called twice");
            return Ok(());
        }
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        let shell = {
            let runtime = self.runtime.borrow();
            shell::build(&document, runtime.widget.config()).map_err(|err| {
                JsError::new(&format!("failed to build widget: {err:?}"))
            })?
        };

        let mut doc = shell.document;
        let scheduler = TimeoutScheduler::new(window, doc.clone());
        {
            let mut runtime = self.runtime.borrow_mut();
            runtime.widget.init(&mut doc);
            runtime.view = Some((doc, scheduler));
        }

        let controls = shell.controls;
        let bindings: [(&Element, fn(&mut Runtime)); 7] = [
            (&controls.open, Runtime::toggle_open),
            (&controls.close, Runtime::toggle_open),
            (&controls.readable_font, Runtime::toggle_readable_font),
            (&controls.scaling_plus, |rt| rt.adjust(Counter::Scaling, Direction::Increase)),
            (&controls.scaling_minus, |rt| rt.adjust(Counter::Scaling, Direction::Decrease)),
            (&controls.font_plus, |rt| rt.adjust(Counter::FontScaling, Direction::Increase)),
            (&controls.font_minus, |rt| rt.adjust(Counter::FontScaling, Direction::Decrease)),
        ];
        for (target, action) in bindings {
            let listener = listen(target, &self.runtime, action)
                .map_err(|err| JsError::new(&format!("failed to bind control: {err:?}")))?;
            self.listeners.push(listener);
        }
        Ok(())
    }

    /// Open or close the panel.
    pub fn toggle(&self) {
        self.runtime.borrow_mut().toggle_open();
    }

    /// Step content scaling (`"increase"`/`"in"` or `"decrease"`/`"out"`).
    #[wasm_bindgen(js_name = adjustScaling)]
    pub fn adjust_scaling(&self, direction: &str) -> Result<(), JsError> {
        let direction: Direction = direction.parse().map_err(js_error)?;
        self.runtime
            .borrow_mut()
            .adjust(Counter::Scaling, direction);
        Ok(())
    }

    /// Step font scaling (`"increase"`/`"in"` or `"decrease"`/`"out"`).
    #[wasm_bindgen(js_name = adjustFontScaling)]
    pub fn adjust_font_scaling(&self, direction: &str) -> Result<(), JsError> {
        let direction: Direction = direction.parse().map_err(js_error)?;
        self.runtime
            .borrow_mut()
            .adjust(Counter::FontScaling, direction);
        Ok(())
    }

    /// Flip readable-font mode.
    #[wasm_bindgen(js_name = toggleReadableFont)]
    pub fn toggle_readable_font(&self) {
        self.runtime.borrow_mut().toggle_readable_font();
    }

    /// Whether the panel is open.
    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.runtime.borrow().widget.is_open()
    }

    /// Current content scaling label (`"Default"`, `"+10%"`, ...).
    #[wasm_bindgen(js_name = scalingLabel)]
    pub fn scaling_label(&self) -> String {
        self.runtime.borrow().widget.scaling_label()
    }

    /// Current font scaling label.
    #[wasm_bindgen(js_name = fontScalingLabel)]
    pub fn font_scaling_label(&self) -> String {
        self.runtime.borrow().widget.font_scaling_label()
    }

    /// Run the markup checklist against the page and return the violated
    /// rules as `[{id, description, count}]`.
    pub fn debug(&self, options: JsValue) -> Result<JsValue, JsError> {
        let options: AuditOptions = if options.is_undefined() || options.is_null() {
            AuditOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(js_error)?
        };
        let document = window()?
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        let report = self
            .runtime
            .borrow()
            .widget
            .debug(options, &PageAudit(document));
        serde_wasm_bindgen::to_value(&findings(&report)).map_err(js_error)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::fixture::document;
    use a11y_core::PREFS_KEY;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, Storage};

    fn local_storage() -> Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    fn widget_count() -> u32 {
        document().query_selector_all(".a11y-widget").unwrap().length()
    }

    fn newest(selector: &str) -> HtmlElement {
        let list = document().query_selector_all(selector).unwrap();
        list.item(list.length() - 1).unwrap().dyn_into().unwrap()
    }

    fn inside(container: &HtmlElement, selector: &str) -> HtmlElement {
        container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn started() -> A11y {
        local_storage().remove_item(PREFS_KEY).unwrap();
        let Ok(mut a11y) = A11y::new(JsValue::UNDEFINED) else {
            panic!("default options rejected");
        };
        assert!(a11y.init().is_ok());
        a11y
    }

    #[wasm_bindgen_test]
    fn invalid_position_throws_before_touching_the_page() {
        let before = widget_count();
        let options = serde_wasm_bindgen::to_value(&WidgetOptions {
            position: Some("center".into()),
            ..WidgetOptions::default()
        })
        .unwrap();

        assert!(A11y::new(options).is_err());
        assert_eq!(widget_count(), before);
    }

    #[wasm_bindgen_test]
    fn second_init_builds_nothing() {
        let mut a11y = started();
        let after_first = widget_count();
        assert!(a11y.init().is_ok());
        assert_eq!(widget_count(), after_first);
    }

    #[wasm_bindgen_test]
    fn clicks_reach_the_widget() {
        let a11y = started();
        let container = newest(".a11y-widget");
        assert_eq!(
            container.style().get_property_value("display").unwrap(),
            "none"
        );

        newest(".a11y-open-button").click();
        assert!(a11y.is_open());
        assert_eq!(
            container.style().get_property_value("display").unwrap(),
            "flex"
        );

        inside(&container, ".a11y-custom-range-plus").click();
        assert_eq!(a11y.scaling_label(), "+10%");
        assert_eq!(
            inside(&container, ".a11y-custom-range-body").text_content().as_deref(),
            Some("+10%")
        );

        inside(&container, ".a11y-action-button").click();
        assert!(document()
            .body()
            .unwrap()
            .class_list()
            .contains(a11y_core::document_port::READABLE_FONT_CLASS));
        a11y.toggle_readable_font();

        inside(&container, ".a11y-close").click();
        assert!(!a11y.is_open());

        assert!(a11y.adjust_scaling("decrease").is_ok());
        local_storage().remove_item(PREFS_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn methods_validate_direction_and_persist() {
        let a11y = started();
        assert!(a11y.adjust_font_scaling("up").is_err());
        assert!(a11y.adjust_font_scaling("out").is_ok());
        assert_eq!(a11y.font_scaling_label(), "-10%");
        assert_eq!(
            local_storage().get_item(PREFS_KEY).unwrap().as_deref(),
            Some(r#"{"scaling":0,"readableFont":false,"fontScaling":-10}"#)
        );

        assert!(a11y.adjust_font_scaling("in").is_ok());
        local_storage().remove_item(PREFS_KEY).unwrap();
    }
}
