// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Manually driven scheduler fake.

use std::collections::BTreeMap;
use std::time::Duration;

use a11y_core::document_port::DocumentPort;
use a11y_core::schedule::{PanelAction, Scheduler, TimerId};

/// [`Scheduler`] on a virtual clock that only moves when a test calls
/// [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TimerId, (Duration, PanelAction)>,
    cancelled: Vec<TimerId>,
}

impl ManualScheduler {
    /// Clock at zero, nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Tasks still queued, by id.
    pub fn pending(&self) -> Vec<(TimerId, PanelAction)> {
        self.tasks.iter().map(|(id, (_, action))| (*id, *action)).collect()
    }

    /// Ids cancelled so far, in call order.
    pub fn cancelled(&self) -> &[TimerId] {
        &self.cancelled
    }

    /// Move the clock forward by `by` and run every task that became due,
    /// earliest first (ties in scheduling order). Returns how many ran.
    pub fn advance<D>(&mut self, by: Duration, doc: &mut D) -> usize
    where
        D: DocumentPort + ?Sized,
    {
        self.now += by;
        let mut due: Vec<(Duration, TimerId, PanelAction)> = self
            .tasks
            .iter()
            .filter(|(_, (at, _))| *at <= self.now)
            .map(|(id, (at, action))| (*at, *id, *action))
            .collect();
        due.sort_by_key(|(at, id, _)| (*at, *id));
        for (_, id, action) in &due {
            self.tasks.remove(id);
            action.apply(doc);
        }
        due.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, action: PanelAction) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.tasks.insert(id, (self.now + delay, action));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.tasks.remove(&id);
        self.cancelled.push(id);
    }
}
