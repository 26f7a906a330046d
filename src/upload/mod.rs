//! Upload & grade widget driven from the terminal

pub mod simulation;

pub use simulation::{lock_session, SharedSession, SimulationStatus, SimulationTask};

use crate::error::Result;
use crate::export::{self, ReportFiles};
use crate::scanner::ImageInfo;
use rubber_grading_common::{
    GradingResult, SessionPhase, Submission, UploadSession, UploadSessionState, UploadedFile,
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// What happened right after a file was taken
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    /// Matched by file name, no delay
    Graded(GradingResult),
    /// Simulated pipeline started
    Simulating,
}

/// One upload session plus the timer task that may be driving it
pub struct UploadWidget {
    session: SharedSession,
    simulation: Option<SimulationTask>,
    period: Duration,
}

impl UploadWidget {
    pub fn new(period: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(UploadSession::new())),
            simulation: None,
            period,
        }
    }

    /// Takes a file. Must run inside a tokio runtime when the simulated
    /// path is taken.
    pub fn submit(&mut self, file: &UploadedFile) -> Submitted {
        self.cancel_simulation();

        let submission = lock_session(&self.session).submit(&file.name, file.data_url());
        match submission {
            Submission::Graded(result) => {
                tracing::debug!(file = %file.name, grade = %result.grade, "graded from file name");
                Submitted::Graded(result)
            }
            Submission::Simulating(ticket) => {
                tracing::debug!(file = %file.name, "no grade token, simulating");
                self.simulation = Some(SimulationTask::spawn(
                    self.session.clone(),
                    ticket,
                    self.period,
                ));
                Submitted::Simulating
            }
        }
    }

    pub async fn submit_image(&mut self, image: &ImageInfo) -> Result<Submitted> {
        let file = image.read().await?;
        Ok(self.submit(&file))
    }

    pub fn state(&self) -> UploadSessionState {
        lock_session(&self.session).state().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        lock_session(&self.session).phase()
    }

    /// Progress feed of the running simulation, if any
    pub fn progress(&self) -> Option<watch::Receiver<SimulationStatus>> {
        self.simulation.as_ref().map(SimulationTask::subscribe)
    }

    /// Current result, waiting for the simulation when one is running
    pub async fn result(&self) -> Option<GradingResult> {
        if let Some(result) = lock_session(&self.session).result().cloned() {
            return Some(result);
        }
        match &self.simulation {
            Some(task) => task.finished().await,
            None => None,
        }
    }

    /// Cancels any running timer and empties the session. Idempotent.
    pub fn reset(&mut self) {
        self.cancel_simulation();
        lock_session(&self.session).reset();
    }

    /// Writes the text report and a copy of the image into `dir`.
    /// `Ok(None)` when there is no result yet.
    pub fn download_report(&self, dir: &Path, generated_at: &str) -> Result<Option<ReportFiles>> {
        let (report, image_data_url) = {
            let session = lock_session(&self.session);
            let Some(report) = session.report(generated_at) else {
                return Ok(None);
            };
            (report, session.state().selected_image_data_url.clone())
        };
        export::write_report(&report, image_data_url.as_deref(), dir).map(Some)
    }

    fn cancel_simulation(&mut self) {
        if let Some(task) = self.simulation.take() {
            if !task.is_finished() {
                tracing::debug!("cancelling in-flight simulation");
            }
            task.cancel();
        }
    }
}

impl Default for UploadWidget {
    fn default() -> Self {
        Self::new(rubber_grading_common::SIMULATION_INTERVAL)
    }
}
