// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Two-state toggles: readable font and panel open/close.

use tracing::debug;

use crate::document_port::DocumentPort;
use crate::schedule::{PanelAction, Scheduler, TimerId, CLOSE_DELAY, OPEN_DELAY};

/// State of a binary toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// Inactive / closed.
    #[default]
    Off,
    /// Active / open.
    On,
}

impl ToggleState {
    /// The opposite state.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// `true` for [`ToggleState::On`].
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

/// Panel open/close machine with a two-phase, cancellable transition.
///
/// Opening shows the container immediately and adds the open class on the
/// next tick. Closing drops the open class immediately and hides the container
/// after [`CLOSE_DELAY`]. A toggle always cancels the second phase of the
/// previous one before scheduling its own, so a stale task can never act on a
/// newer state.
#[derive(Debug, Default)]
pub struct PanelToggle {
    state: ToggleState,
    pending: Option<TimerId>,
}

impl PanelToggle {
    /// A closed panel with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub const fn state(&self) -> ToggleState {
        self.state
    }

    /// Handle of the deferred task from the last toggle, if any.
    pub const fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Flip the panel and run the first phase of the transition.
    pub fn toggle<D, S>(&mut self, doc: &mut D, scheduler: &mut S) -> ToggleState
    where
        D: DocumentPort + ?Sized,
        S: Scheduler + ?Sized,
    {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
        self.state = self.state.flipped();
        let id = match self.state {
            ToggleState::On => {
                doc.set_panel_visible(true);
                scheduler.schedule(OPEN_DELAY, PanelAction::AddOpenClass)
            }
            ToggleState::Off => {
                doc.set_panel_open_class(false);
                scheduler.schedule(CLOSE_DELAY, PanelAction::Hide)
            }
        };
        self.pending = Some(id);
        debug!(state = ?self.state, timer = id.0, "panel toggled");
        self.state
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::adjust::Counter;
    use std::time::Duration;

    #[derive(Default)]
    struct Panel {
        visible: bool,
        open_class: bool,
    }

    impl DocumentPort for Panel {
        fn set_zoom(&mut self, _factor: f64) {}
        fn set_font_size(&mut self, _percent: i32) {}
        fn set_readable_font(&mut self, _enabled: bool) {}
        fn set_label(&mut self, _counter: Counter, _label: &str) {}
        fn set_panel_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
        fn set_panel_open_class(&mut self, open: bool) {
            self.open_class = open;
        }
    }

    #[derive(Default)]
    struct Queue {
        next: u64,
        tasks: Vec<(TimerId, Duration, PanelAction)>,
        cancelled: Vec<TimerId>,
    }

    impl Scheduler for Queue {
        fn schedule(&mut self, delay: Duration, action: PanelAction) -> TimerId {
            self.next += 1;
            let id = TimerId(self.next);
            self.tasks.push((id, delay, action));
            id
        }
        fn cancel(&mut self, id: TimerId) {
            self.tasks.retain(|(t, _, _)| *t != id);
            self.cancelled.push(id);
        }
    }

    impl Queue {
        fn run_all(&mut self, doc: &mut Panel) {
            for (_, _, action) in self.tasks.drain(..) {
                action.apply(doc);
            }
        }
    }

    #[test]
    fn flip_and_from_bool() {
        assert_eq!(ToggleState::Off.flipped(), ToggleState::On);
        assert_eq!(ToggleState::On.flipped(), ToggleState::Off);
        assert_eq!(ToggleState::from(true), ToggleState::On);
        assert!(!ToggleState::default().is_on());
    }

    #[test]
    fn open_shows_now_and_adds_class_on_next_tick() {
        let mut panel = PanelToggle::new();
        let mut doc = Panel::default();
        let mut queue = Queue::default();

        assert_eq!(panel.toggle(&mut doc, &mut queue), ToggleState::On);
        assert!(doc.visible);
        assert!(!doc.open_class);
        assert_eq!(queue.tasks.len(), 1);
        assert_eq!(queue.tasks[0].1, OPEN_DELAY);

        queue.run_all(&mut doc);
        assert!(doc.open_class);
    }

    #[test]
    fn close_drops_class_now_and_hides_after_transition() {
        let mut panel = PanelToggle::new();
        let mut doc = Panel::default();
        let mut queue = Queue::default();
        panel.toggle(&mut doc, &mut queue);
        queue.run_all(&mut doc);

        assert_eq!(panel.toggle(&mut doc, &mut queue), ToggleState::Off);
        assert!(!doc.open_class);
        assert!(doc.visible);
        assert_eq!(queue.tasks[0].1, CLOSE_DELAY);

        queue.run_all(&mut doc);
        assert!(!doc.visible);
    }

    #[test]
    fn rapid_reopen_cancels_pending_hide() {
        let mut panel = PanelToggle::new();
        let mut doc = Panel::default();
        let mut queue = Queue::default();
        panel.toggle(&mut doc, &mut queue);
        queue.run_all(&mut doc);

        panel.toggle(&mut doc, &mut queue);
        let hide = panel.pending().unwrap();
        panel.toggle(&mut doc, &mut queue);

        assert!(queue.cancelled.contains(&hide));
        queue.run_all(&mut doc);
        assert!(doc.visible);
        assert!(doc.open_class);
    }
}
