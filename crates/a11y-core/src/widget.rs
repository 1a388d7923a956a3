// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The widget controller: owns the preference record and drives effects.
//!
//! The controller never touches a DOM directly. Each entry point computes the
//! new state, applies it through the supplied [`DocumentPort`], and persists
//! the record through its [`SettingsStore`] before returning.

use tracing::{debug, info, instrument};

use crate::adjust::{self, Counter, Direction, STEP};
use crate::audit::{self, AuditOptions, AuditReport, AuditTarget};
use crate::config::SettingsStore;
use crate::document_port::DocumentPort;
use crate::options::{A11yError, WidgetConfig, WidgetOptions};
use crate::prefs::PreferenceRecord;
use crate::schedule::Scheduler;
use crate::toggle::{PanelToggle, ToggleState};

/// One widget instance per page.
pub struct A11yWidget<S> {
    config: WidgetConfig,
    prefs: PreferenceRecord,
    store: S,
    panel: PanelToggle,
}

impl<S> A11yWidget<S>
where
    S: SettingsStore,
{
    /// Validate `options` and load the persisted record.
    ///
    /// Fails with [`A11yError::Config`] before touching the store when the
    /// options are invalid.
    pub fn new(options: WidgetOptions, store: S) -> Result<Self, A11yError> {
        let config = options.validate()?;
        let mut prefs = store.load_prefs();
        if prefs.normalize(&config) {
            debug!(?prefs, "loaded preferences normalized to step and bounds");
        }
        Ok(Self {
            config,
            prefs,
            store,
            panel: PanelToggle::new(),
        })
    }

    /// Render the loaded state onto the document and persist the record.
    #[instrument(skip_all)]
    pub fn init<D>(&mut self, doc: &mut D)
    where
        D: DocumentPort + ?Sized,
    {
        self.apply(Counter::Scaling, doc);
        self.apply(Counter::FontScaling, doc);
        doc.set_readable_font(self.prefs.readable_font);
        doc.set_panel_open_class(false);
        doc.set_panel_visible(false);
        self.store.save_prefs(&self.prefs);
        info!(prefs = ?self.prefs, position = %self.config.position(), "a11y widget initialised");
    }

    /// Step content scaling. Returns the new value.
    pub fn adjust_scaling<D>(&mut self, direction: Direction, doc: &mut D) -> i32
    where
        D: DocumentPort + ?Sized,
    {
        self.adjust_counter(Counter::Scaling, direction, doc)
    }

    /// Step font scaling. Returns the new value.
    pub fn adjust_font_scaling<D>(&mut self, direction: Direction, doc: &mut D) -> i32
    where
        D: DocumentPort + ?Sized,
    {
        self.adjust_counter(Counter::FontScaling, direction, doc)
    }

    /// Flip readable-font mode. Returns the new state.
    pub fn toggle_readable_font<D>(&mut self, doc: &mut D) -> ToggleState
    where
        D: DocumentPort + ?Sized,
    {
        let state = ToggleState::from(self.prefs.readable_font).flipped();
        self.prefs.readable_font = state.is_on();
        doc.set_readable_font(state.is_on());
        self.store.save_prefs(&self.prefs);
        debug!(?state, "readable font toggled");
        state
    }

    /// Open or close the panel. Returns the new state.
    pub fn toggle_open<D, T>(&mut self, doc: &mut D, scheduler: &mut T) -> ToggleState
    where
        D: DocumentPort + ?Sized,
        T: Scheduler + ?Sized,
    {
        self.panel.toggle(doc, scheduler)
    }

    /// Run the markup checklist against the host page.
    pub fn debug<A>(&self, options: AuditOptions, target: &A) -> AuditReport
    where
        A: AuditTarget + ?Sized,
    {
        audit::run(options, target)
    }

    /// Whether the panel is open.
    pub const fn is_open(&self) -> bool {
        self.panel.state().is_on()
    }

    /// Current preference record.
    pub const fn prefs(&self) -> &PreferenceRecord {
        &self.prefs
    }

    /// Validated configuration.
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Settings store backing this widget.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Display string for content scaling.
    pub fn scaling_label(&self) -> String {
        adjust::label(self.prefs.scaling)
    }

    /// Display string for font scaling.
    pub fn font_scaling_label(&self) -> String {
        adjust::label(self.prefs.font_scaling)
    }

    fn adjust_counter<D>(&mut self, counter: Counter, direction: Direction, doc: &mut D) -> i32
    where
        D: DocumentPort + ?Sized,
    {
        let (slot, bounds) = match counter {
            Counter::Scaling => (&mut self.prefs.scaling, self.config.scale_bounds()),
            Counter::FontScaling => (&mut self.prefs.font_scaling, self.config.font_bounds()),
        };
        let current = *slot;
        let next = adjust::adjust(current, direction, bounds, STEP);
        if next == current {
            debug!(?counter, ?direction, value = current, "counter at bound");
            return current;
        }
        *slot = next;
        self.apply(counter, doc);
        self.store.save_prefs(&self.prefs);
        debug!(?counter, ?direction, from = current, to = next, "counter adjusted");
        next
    }

    fn apply<D>(&self, counter: Counter, doc: &mut D)
    where
        D: DocumentPort + ?Sized,
    {
        match counter {
            Counter::Scaling => {
                doc.set_zoom(adjust::zoom(self.prefs.scaling));
                doc.set_label(counter, &self.scaling_label());
            }
            Counter::FontScaling => {
                doc.set_font_size(adjust::font_size_percent(self.prefs.font_scaling));
                doc.set_label(counter, &self.font_scaling_label());
            }
        }
    }
}
