// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for applying visual effects to the host document without
//! depending on a specific DOM binding.

use crate::adjust::Counter;

/// Body class applied while readable-font mode is on.
pub const READABLE_FONT_CLASS: &str = "a11y-readable-font";
/// Class marking the readable-font button as active.
pub const ACTIVE_CLASS: &str = "a11y-active";
/// Class that runs the panel's open transition.
pub const OPEN_CLASS: &str = "a11y-open";

/// Visual effect sink for the widget.
///
/// Every method must be idempotent: applying the same value twice leaves the
/// document as if it had been applied once.
pub trait DocumentPort {
    /// Set the document zoom factor (`1.0` = unscaled).
    fn set_zoom(&mut self, factor: f64);

    /// Set the body font size as a percentage (`100` = unscaled).
    fn set_font_size(&mut self, percent: i32);

    /// Add or remove [`READABLE_FONT_CLASS`] on the body and mark the feature
    /// button with [`ACTIVE_CLASS`] accordingly.
    fn set_readable_font(&mut self, enabled: bool);

    /// Show the display label of a counter.
    fn set_label(&mut self, counter: Counter, label: &str);

    /// Show (`display: flex`) or hide (`display: none`) the panel container.
    fn set_panel_visible(&mut self, visible: bool);

    /// Add or remove [`OPEN_CLASS`] on the panel container.
    fn set_panel_open_class(&mut self, open: bool);
}
