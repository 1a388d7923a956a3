// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted accessibility preferences.

use serde::{Deserialize, Serialize};

use crate::adjust::{snap, STEP};
use crate::options::WidgetConfig;

/// Saved preferences for one browser.
///
/// Serialized as `{"scaling":0,"readableFont":false,"fontScaling":0}`. Every
/// field is optional on the way in; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceRecord {
    /// Content scaling offset in percent (multiples of 10).
    pub scaling: i32,
    /// Readable-font mode.
    pub readable_font: bool,
    /// Font scaling offset in percent (multiples of 10).
    pub font_scaling: i32,
}

impl PreferenceRecord {
    /// Snap both counters onto the step grid, then clamp them into the
    /// bounds of `config`.
    ///
    /// Returns `true` when either counter moved.
    pub fn normalize(&mut self, config: &WidgetConfig) -> bool {
        let scaling = config.scale_bounds().clamp(snap(self.scaling, STEP));
        let font_scaling = config.font_bounds().clamp(snap(self.font_scaling, STEP));
        let changed = scaling != self.scaling || font_scaling != self.font_scaling;
        self.scaling = scaling;
        self.font_scaling = font_scaling;
        changed
    }
}
