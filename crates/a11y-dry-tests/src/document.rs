// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording document fake.

use a11y_core::document_port::DocumentPort;
use a11y_core::Counter;

/// One call made through [`DocumentPort`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocCall {
    /// `set_zoom`
    Zoom(f64),
    /// `set_font_size`
    FontSize(i32),
    /// `set_readable_font`
    ReadableFont(bool),
    /// `set_label`
    Label(Counter, String),
    /// `set_panel_visible`
    PanelVisible(bool),
    /// `set_panel_open_class`
    PanelOpenClass(bool),
}

/// [`DocumentPort`] that keeps the resulting visual state plus a call log.
///
/// Fresh instances mirror an untouched page: zoom `1.0`, font size `100%`,
/// no classes, panel hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingDocument {
    /// Current zoom factor.
    pub zoom: f64,
    /// Current body font size percentage.
    pub font_size: i32,
    /// Readable-font class present on the body (and button active).
    pub readable_font: bool,
    /// Content scaling label, once rendered.
    pub scaling_label: Option<String>,
    /// Font scaling label, once rendered.
    pub font_scaling_label: Option<String>,
    /// Panel container displayed.
    pub panel_visible: bool,
    /// Open class present on the panel container.
    pub panel_open_class: bool,
    /// Every call, in order.
    pub calls: Vec<DocCall>,
}

impl Default for RecordingDocument {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            font_size: 100,
            readable_font: false,
            scaling_label: None,
            font_scaling_label: None,
            panel_visible: false,
            panel_open_class: false,
            calls: Vec::new(),
        }
    }
}

impl RecordingDocument {
    /// Create an untouched document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the call log, keeping the visual state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DocumentPort for RecordingDocument {
    fn set_zoom(&mut self, factor: f64) {
        self.zoom = factor;
        self.calls.push(DocCall::Zoom(factor));
    }

    fn set_font_size(&mut self, percent: i32) {
        self.font_size = percent;
        self.calls.push(DocCall::FontSize(percent));
    }

    fn set_readable_font(&mut self, enabled: bool) {
        self.readable_font = enabled;
        self.calls.push(DocCall::ReadableFont(enabled));
    }

    fn set_label(&mut self, counter: Counter, label: &str) {
        let slot = match counter {
            Counter::Scaling => &mut self.scaling_label,
            Counter::FontScaling => &mut self.font_scaling_label,
        };
        *slot = Some(label.to_owned());
        self.calls.push(DocCall::Label(counter, label.to_owned()));
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
        self.calls.push(DocCall::PanelVisible(visible));
    }

    fn set_panel_open_class(&mut self, open: bool) {
        self.panel_open_class = open;
        self.calls.push(DocCall::PanelOpenClass(open));
    }
}
