//! Browser interval driving the simulated grading run

use leptos::prelude::*;
use rubber_grading_common::{SimulationTicket, UploadSession, SIMULATION_INTERVAL};

/// Owns at most one interval. Cleared on completion, on a stale tick, on
/// `stop` and when the owning component is cleaned up.
#[derive(Clone, Copy)]
pub struct SimulationTimer {
    session: RwSignal<UploadSession>,
    handle: StoredValue<Option<(SimulationTicket, IntervalHandle)>>,
}

impl SimulationTimer {
    pub fn new(session: RwSignal<UploadSession>) -> Self {
        let timer = Self {
            session,
            handle: StoredValue::new(None),
        };
        on_cleanup(move || timer.stop());
        timer
    }

    pub fn start(&self, ticket: SimulationTicket) {
        self.stop();

        let timer = *self;
        let tick = move || {
            let outcome = timer.session.try_update(|s| s.tick(ticket));
            // None: the session signal is gone with its page
            if outcome.map_or(true, |t| t.is_final()) {
                timer.finish(ticket);
            }
        };

        match set_interval_with_handle(tick, SIMULATION_INTERVAL) {
            Ok(handle) => self.handle.set_value(Some((ticket, handle))),
            Err(e) => gloo::console::error!("could not start grading timer", e),
        }
    }

    pub fn stop(&self) {
        if let Some((_, handle)) = self.handle.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    fn finish(&self, ticket: SimulationTicket) {
        let current = self.handle.try_with_value(|h| h.map(|(t, _)| t)).flatten();
        if current == Some(ticket) {
            self.stop();
        }
    }
}
