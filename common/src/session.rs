//! Upload session state machine
//!
//! `Empty → ResultReady` when the file name matches a preset,
//! `Empty → Processing → ResultReady` otherwise. `reset` goes back to `Empty`.
//!
//! The session does not own a timer. A driver (tokio task, browser interval)
//! calls [`UploadSession::tick`] with the ticket it got from `submit`. Every
//! `submit` and `reset` moves the session to a new generation, so ticks from
//! an older timer come back as [`Tick::Stale`] and change nothing.

use crate::grading::{result_from_file_name, simulated_result, PROGRESS_STEP};
use crate::report::GradingReport;
use crate::types::{GradingResult, UploadSessionState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Empty,
    Processing,
    ResultReady,
}

/// Handle for one simulated pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTicket {
    generation: u64,
}

/// What `submit` did
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// File name matched; the result is already set
    Graded(GradingResult),
    /// Fallback path; drive `tick` with this ticket until it completes
    Simulating(SimulationTicket),
}

/// Outcome of one timer tick
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    Progress(u8),
    Completed(GradingResult),
    /// The ticket belongs to a reset or replaced run. Stop the timer.
    Stale,
}

impl Tick {
    /// Whether the driver should stop its timer
    pub fn is_final(&self) -> bool {
        !matches!(self, Tick::Progress(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    state: UploadSessionState,
    generation: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadSessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&GradingResult> {
        self.state.result.as_ref()
    }

    pub fn progress_percent(&self) -> u8 {
        self.state.progress_percent
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.result.is_some() {
            SessionPhase::ResultReady
        } else if self.state.is_processing {
            SessionPhase::Processing
        } else {
            SessionPhase::Empty
        }
    }

    /// Takes a chosen file. The data URL is stored for display only.
    pub fn submit(&mut self, file_name: &str, image_data_url: String) -> Submission {
        self.generation = self.generation.wrapping_add(1);
        self.state = UploadSessionState {
            selected_image_data_url: Some(image_data_url),
            selected_file_name: (!file_name.is_empty()).then(|| file_name.to_string()),
            ..UploadSessionState::default()
        };

        match result_from_file_name(file_name) {
            Some(result) => {
                self.state.progress_percent = 100;
                self.state.result = Some(result.clone());
                Submission::Graded(result)
            }
            None => {
                self.state.is_processing = true;
                self.state.progress_percent = 0;
                Submission::Simulating(SimulationTicket {
                    generation: self.generation,
                })
            }
        }
    }

    pub fn is_current(&self, ticket: SimulationTicket) -> bool {
        ticket.generation == self.generation && self.state.is_processing
    }

    /// Advances the simulated pipeline by one step.
    ///
    /// Progress goes 0 → 100 in steps of 10; the tick that finds it at 100
    /// ends processing and sets the fixed result.
    pub fn tick(&mut self, ticket: SimulationTicket) -> Tick {
        if !self.is_current(ticket) {
            return Tick::Stale;
        }

        if self.state.progress_percent >= 100 {
            let result = simulated_result();
            self.state.is_processing = false;
            self.state.progress_percent = 100;
            self.state.result = Some(result.clone());
            return Tick::Completed(result);
        }

        self.state.progress_percent = self
            .state
            .progress_percent
            .saturating_add(PROGRESS_STEP)
            .min(100);
        Tick::Progress(self.state.progress_percent)
    }

    /// Back to the empty session. Idempotent.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = UploadSessionState::default();
    }

    /// Report for the current result, or `None` when there is nothing to report
    pub fn report(&self, generated_at: &str) -> Option<GradingReport> {
        let result = self.state.result.clone()?;
        Some(GradingReport::new(
            result,
            self.state.selected_file_name.clone(),
            generated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    const URL: &str = "data:image/png;base64,AAAA";

    fn run_to_end(session: &mut UploadSession, ticket: SimulationTicket) -> Vec<Tick> {
        let mut ticks = Vec::new();
        loop {
            let tick = session.tick(ticket);
            let done = tick.is_final();
            ticks.push(tick);
            if done {
                return ticks;
            }
        }
    }

    #[test]
    fn test_filename_match_is_immediate() {
        let mut session = UploadSession::new();
        let submission = session.submit("sample_RSS3_final.jpg", URL.to_string());

        let Submission::Graded(result) = submission else {
            panic!("expected immediate result");
        };
        assert_eq!(result.grade, Grade::Rss3);
        assert_eq!(session.phase(), SessionPhase::ResultReady);
        assert_eq!(session.progress_percent(), 100);
        assert!(!session.is_processing());
        assert_eq!(session.state().selected_file_name.as_deref(), Some("sample_RSS3_final.jpg"));
        assert_eq!(session.state().selected_image_data_url.as_deref(), Some(URL));
    }

    #[test]
    fn test_simulated_path_progress() {
        let mut session = UploadSession::new();
        let Submission::Simulating(ticket) = session.submit("photo123.png", URL.to_string()) else {
            panic!("expected simulation");
        };
        assert_eq!(session.phase(), SessionPhase::Processing);
        assert_eq!(session.progress_percent(), 0);
        assert!(session.result().is_none());

        let ticks = run_to_end(&mut session, ticket);
        assert_eq!(ticks.len(), 11);

        let progress: Vec<u8> = ticks
            .iter()
            .filter_map(|t| match t {
                Tick::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(progress, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));

        match ticks.last() {
            Some(Tick::Completed(result)) => {
                assert_eq!(result.grade, Grade::Rss1);
                assert_eq!(result.moisture_percent, 12.5);
                assert_eq!(result.price_per_kg, 185);
                assert_eq!(result.quality_label, "Premium");
            }
            other => panic!("unexpected last tick: {:?}", other),
        }
        assert_eq!(session.phase(), SessionPhase::ResultReady);
        assert!(!session.is_processing());
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn test_rss5_takes_simulated_path() {
        let mut session = UploadSession::new();
        assert!(matches!(
            session.submit("RSS5_sheet.jpg", URL.to_string()),
            Submission::Simulating(_)
        ));
    }

    #[test]
    fn test_reset_returns_to_empty_from_any_phase() {
        let mut session = UploadSession::new();
        session.reset();
        assert!(session.state().is_empty());

        session.submit("rss1.jpg", URL.to_string());
        session.reset();
        assert!(session.state().is_empty());
        assert_eq!(session.phase(), SessionPhase::Empty);

        let Submission::Simulating(ticket) = session.submit("x.jpg", URL.to_string()) else {
            panic!("expected simulation");
        };
        session.tick(ticket);
        session.reset();
        session.reset();
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_stale_tick_after_reset_is_ignored() {
        let mut session = UploadSession::new();
        let Submission::Simulating(ticket) = session.submit("x.jpg", URL.to_string()) else {
            panic!("expected simulation");
        };
        session.tick(ticket);
        session.reset();

        for _ in 0..20 {
            assert_eq!(session.tick(ticket), Tick::Stale);
        }
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_old_ticket_cannot_touch_new_upload() {
        let mut session = UploadSession::new();
        let Submission::Simulating(old) = session.submit("a.jpg", URL.to_string()) else {
            panic!("expected simulation");
        };
        session.reset();
        session.submit("rss4.jpg", URL.to_string());

        assert_eq!(session.tick(old), Tick::Stale);
        assert_eq!(session.result().map(|r| r.grade), Some(Grade::Rss4));
    }

    #[test]
    fn test_completed_ticket_goes_stale() {
        let mut session = UploadSession::new();
        let Submission::Simulating(ticket) = session.submit("a.jpg", URL.to_string()) else {
            panic!("expected simulation");
        };
        run_to_end(&mut session, ticket);
        assert_eq!(session.tick(ticket), Tick::Stale);
    }

    #[test]
    fn test_report_requires_result() {
        let mut session = UploadSession::new();
        assert!(session.report("2024-01-15T14:30:00.000Z").is_none());

        session.submit("a.jpg", URL.to_string());
        assert!(session.report("2024-01-15T14:30:00.000Z").is_none());

        session.reset();
        session.submit("rss2_farm.jpg", URL.to_string());
        let report = session.report("2024-01-15T14:30:00.000Z").unwrap();
        assert_eq!(report.file_name.as_deref(), Some("rss2_farm.jpg"));
    }

    #[test]
    fn test_empty_file_name_is_not_recorded() {
        let mut session = UploadSession::new();
        session.submit("", URL.to_string());
        assert!(session.state().selected_file_name.is_none());
        assert!(session.is_processing());
    }
}
