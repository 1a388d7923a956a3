// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `setTimeout`-backed [`Scheduler`].

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use a11y_core::schedule::{PanelAction, Scheduler, TimerId};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom::WebDocument;

struct Pending {
    handle: i32,
    fired: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut()>,
}

/// Runs panel actions on the browser event loop.
///
/// Callbacks stay owned here until they fire or are cancelled; fired entries
/// are pruned on the next schedule.
pub struct TimeoutScheduler {
    window: Window,
    doc: WebDocument,
    next_id: u64,
    pending: HashMap<TimerId, Pending>,
}

impl TimeoutScheduler {
    /// Scheduler applying actions to `doc`.
    pub fn new(window: Window, doc: WebDocument) -> Self {
        Self {
            window,
            doc,
            next_id: 0,
            pending: HashMap::new(),
        }
    }

    /// Number of actions that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.values().filter(|p| !p.fired.get()).count()
    }
}

impl Drop for TimeoutScheduler {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            if !pending.fired.get() {
                self.window.clear_timeout_with_handle(pending.handle);
            }
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay: Duration, action: PanelAction) -> TimerId {
        self.pending.retain(|_, p| !p.fired.get());
        self.next_id += 1;
        let id = TimerId(self.next_id);

        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let mut doc = self.doc.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !flag.replace(true) {
                action.apply(&mut doc);
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                self.pending.insert(
                    id,
                    Pending {
                        handle,
                        fired,
                        _callback: callback,
                    },
                );
            }
            Err(err) => {
                warn!(?err, ?action, "setTimeout failed, applying panel action now");
                action.apply(&mut self.doc);
            }
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(pending) = self.pending.remove(&id) {
            if !pending.fired.get() {
                self.window.clear_timeout_with_handle(pending.handle);
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::fixture::detached;
    use a11y_core::document_port::DocumentPort;
    use a11y_core::schedule::CLOSE_DELAY;
    use wasm_bindgen_test::*;

    fn display(page: &crate::fixture::Detached) -> String {
        page.container.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn cancel_drops_only_the_named_timeout() {
        let mut page = detached();
        page.doc.set_panel_visible(true);
        let mut scheduler = TimeoutScheduler::new(web_sys::window().unwrap(), page.doc.clone());

        let hide = scheduler.schedule(CLOSE_DELAY, PanelAction::Hide);
        let open = scheduler.schedule(CLOSE_DELAY, PanelAction::AddOpenClass);
        assert_ne!(hide, open);
        assert_eq!(scheduler.pending(), 2);

        scheduler.cancel(hide);
        assert_eq!(scheduler.pending(), 1);
        scheduler.cancel(hide);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(display(&page), "flex");

        scheduler.cancel(open);
        assert_eq!(scheduler.pending(), 0);
    }

    #[wasm_bindgen_test]
    fn unknown_id_cancel_is_a_no_op() {
        let page = detached();
        let mut scheduler = TimeoutScheduler::new(web_sys::window().unwrap(), page.doc.clone());
        scheduler.cancel(TimerId(42));
        assert_eq!(scheduler.pending(), 0);
    }

    #[wasm_bindgen_test]
    fn scheduled_action_does_not_run_synchronously() {
        let mut page = detached();
        page.doc.set_panel_visible(true);
        let mut scheduler = TimeoutScheduler::new(web_sys::window().unwrap(), page.doc.clone());
        scheduler.schedule(Duration::ZERO, PanelAction::Hide);
        assert_eq!(display(&page), "flex");
        drop(scheduler);
    }
}
