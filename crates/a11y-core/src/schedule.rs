// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deferred panel work and the scheduler port that runs it.

use std::time::Duration;

use crate::document_port::DocumentPort;

/// Delay before the open class is added (next scheduling tick).
pub const OPEN_DELAY: Duration = Duration::ZERO;
/// Delay before a closed panel is hidden; matches the CSS transition.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Opaque handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Second phase of a panel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Add the open class once the container is visible.
    AddOpenClass,
    /// Hide the container after the closing transition ran.
    Hide,
}

impl PanelAction {
    /// Apply this action to the document.
    pub fn apply<D>(self, doc: &mut D)
    where
        D: DocumentPort + ?Sized,
    {
        match self {
            Self::AddOpenClass => doc.set_panel_open_class(true),
            Self::Hide => doc.set_panel_visible(false),
        }
    }
}

/// Timer port.
///
/// Implementations run `action` against their document handle once `delay`
/// has elapsed, unless the task was cancelled first.
pub trait Scheduler {
    /// Schedule `action` to run after `delay`.
    fn schedule(&mut self, delay: Duration, action: PanelAction) -> TimerId;
    /// Cancel a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}
