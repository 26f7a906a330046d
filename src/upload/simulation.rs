//! Simulated grading pipeline as a cancellable tokio task

use rubber_grading_common::{GradingResult, SimulationTicket, Tick, UploadSession};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub type SharedSession = Arc<Mutex<UploadSession>>;

/// A poisoned lock still holds a consistent session; every mutation is a
/// whole-field assignment.
pub fn lock_session(session: &SharedSession) -> MutexGuard<'_, UploadSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationStatus {
    Running(u8),
    Completed(GradingResult),
    Cancelled,
}

/// Drives `UploadSession::tick` on a fixed period.
///
/// The task stops on its own when the run completes or goes stale. Dropping
/// the handle aborts it.
pub struct SimulationTask {
    handle: JoinHandle<()>,
    status: watch::Receiver<SimulationStatus>,
}

impl SimulationTask {
    pub fn spawn(session: SharedSession, ticket: SimulationTicket, period: Duration) -> Self {
        let (tx, rx) = watch::channel(SimulationStatus::Running(0));

        let handle = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;
                let tick = lock_session(&session).tick(ticket);
                match tick {
                    Tick::Progress(percent) => {
                        tracing::trace!(percent, "simulated grading progress");
                        let _ = tx.send(SimulationStatus::Running(percent));
                    }
                    Tick::Completed(result) => {
                        tracing::debug!(grade = %result.grade, "simulated grading finished");
                        let _ = tx.send(SimulationStatus::Completed(result));
                        break;
                    }
                    Tick::Stale => {
                        tracing::debug!("simulation ticket went stale, stopping timer");
                        let _ = tx.send(SimulationStatus::Cancelled);
                        break;
                    }
                }
            }
        });

        Self { handle, status: rx }
    }

    pub fn subscribe(&self) -> watch::Receiver<SimulationStatus> {
        self.status.clone()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the run to end. `None` when it was cancelled.
    pub async fn finished(&self) -> Option<GradingResult> {
        wait_for_result(self.subscribe()).await
    }
}

impl Drop for SimulationTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn wait_for_result(mut status: watch::Receiver<SimulationStatus>) -> Option<GradingResult> {
    loop {
        let current = status.borrow_and_update().clone();
        match current {
            SimulationStatus::Completed(result) => return Some(result),
            SimulationStatus::Cancelled => return None,
            SimulationStatus::Running(_) => {}
        }
        if status.changed().await.is_err() {
            // sender gone: aborted mid-run
            return match &*status.borrow() {
                SimulationStatus::Completed(result) => Some(result.clone()),
                _ => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubber_grading_common::{Grade, Submission};

    const PERIOD: Duration = Duration::from_millis(1);

    fn start(session: &SharedSession, name: &str) -> SimulationTicket {
        match lock_session(session).submit(name, "data:image/png;base64,AAAA".into()) {
            Submission::Simulating(ticket) => ticket,
            Submission::Graded(_) => panic!("expected simulated path for {}", name),
        }
    }

    #[tokio::test]
    async fn test_task_completes_with_fixed_result() {
        let session: SharedSession = Arc::new(Mutex::new(UploadSession::new()));
        let ticket = start(&session, "photo123.png");

        let task = SimulationTask::spawn(session.clone(), ticket, PERIOD);
        let result = task.finished().await.expect("should complete");

        assert_eq!(result.grade, Grade::Rss1);
        assert_eq!(result.price_per_kg, 185);
        let guard = lock_session(&session);
        assert!(!guard.is_processing());
        assert_eq!(guard.progress_percent(), 100);
    }

    #[tokio::test]
    async fn test_progress_is_monotonic() {
        let session: SharedSession = Arc::new(Mutex::new(UploadSession::new()));
        let ticket = start(&session, "photo123.png");
        let task = SimulationTask::spawn(session.clone(), ticket, PERIOD);

        let mut rx = task.subscribe();
        let mut seen = vec![0u8];
        loop {
            if rx.changed().await.is_err() {
                break;
            }
            match rx.borrow_and_update().clone() {
                SimulationStatus::Running(p) => seen.push(p),
                SimulationStatus::Completed(_) => break,
                SimulationStatus::Cancelled => panic!("unexpected cancel"),
            }
        }

        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);
        assert!(seen.iter().all(|p| *p <= 100));
        assert_eq!(lock_session(&session).progress_percent(), 100);
    }

    #[tokio::test]
    async fn test_reset_stops_task_without_late_result() {
        let session: SharedSession = Arc::new(Mutex::new(UploadSession::new()));
        let ticket = start(&session, "photo123.png");
        let task = SimulationTask::spawn(session.clone(), ticket, Duration::from_millis(5));

        lock_session(&session).reset();
        assert_eq!(task.finished().await, None);
        assert!(lock_session(&session).state().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_aborts() {
        let session: SharedSession = Arc::new(Mutex::new(UploadSession::new()));
        let ticket = start(&session, "photo123.png");
        let task = SimulationTask::spawn(session.clone(), ticket, Duration::from_secs(60));

        task.cancel();
        assert_eq!(task.finished().await, None);
        assert!(lock_session(&session).result().is_none());
    }
}
