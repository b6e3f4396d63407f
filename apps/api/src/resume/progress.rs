//! Extraction progress reporting.
//!
//! The pipeline publishes monotone stage updates into a `tokio::sync::watch`
//! channel; the progress endpoint only ever reads the latest value, so a slow
//! poller never blocks the pipeline and intermediate stages may be skipped.

use serde::Serialize;
use tokio::sync::watch;

/// Fixed stage ladder for a resume extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Read,
    ExtractText,
    Clean,
    Analyze,
    Structure,
    Finalize,
}

impl Stage {
    pub fn percent(self) -> u8 {
        match self {
            Stage::Read => 15,
            Stage::ExtractText => 40,
            Stage::Clean => 55,
            Stage::Analyze => 70,
            Stage::Structure => 88,
            Stage::Finalize => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Read => "Reading PDF...",
            Stage::ExtractText => "Extracting raw text...",
            Stage::Clean => "Cleaning & preparing content...",
            Stage::Analyze => "Analyzing with AI...",
            Stage::Structure => "Structuring portfolio sections...",
            Stage::Finalize => "Finalizing...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum RunState {
    Running,
    Complete,
    Failed { message: String },
}

/// One observable snapshot of a run: current stage plus terminal state.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    pub stage: Stage,
    pub percent: u8,
    pub label: &'static str,
    #[serde(flatten)]
    pub state: RunState,
}

impl ProgressUpdate {
    fn at(stage: Stage) -> Self {
        Self {
            stage,
            percent: stage.percent(),
            label: stage.label(),
            state: RunState::Running,
        }
    }
}

/// Pipeline-side sender half. The receiver half is stored on the session so
/// the progress endpoint can poll it.
pub struct ProgressReporter {
    tx: watch::Sender<ProgressUpdate>,
}

impl ProgressReporter {
    pub fn channel() -> (Self, watch::Receiver<ProgressUpdate>) {
        let (tx, rx) = watch::channel(ProgressUpdate::at(Stage::Read));
        (Self { tx }, rx)
    }

    pub fn stage(&self, stage: Stage) {
        // send only fails when every receiver is gone, which just means
        // nobody is watching anymore.
        let _ = self.tx.send(ProgressUpdate::at(stage));
    }

    pub fn complete(&self) {
        let _ = self.tx.send(ProgressUpdate {
            stage: Stage::Finalize,
            percent: Stage::Finalize.percent(),
            label: Stage::Finalize.label(),
            state: RunState::Complete,
        });
    }

    /// Marks the run failed, keeping the stage it failed at.
    pub fn fail(&self, message: &str) {
        let current = self.tx.borrow().stage;
        let _ = self.tx.send(ProgressUpdate {
            stage: current,
            percent: current.percent(),
            label: current.label(),
            state: RunState::Failed {
                message: message.to_string(),
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_percentages_are_monotone() {
        let stages = [
            Stage::Read,
            Stage::ExtractText,
            Stage::Clean,
            Stage::Analyze,
            Stage::Structure,
            Stage::Finalize,
        ];
        for pair in stages.windows(2) {
            assert!(pair[0].percent() < pair[1].percent());
        }
        assert_eq!(Stage::Finalize.percent(), 100);
    }

    #[test]
    fn test_receiver_sees_latest_update_only() {
        let (reporter, rx) = ProgressReporter::channel();
        reporter.stage(Stage::ExtractText);
        reporter.stage(Stage::Analyze);
        assert_eq!(rx.borrow().stage, Stage::Analyze);
        assert_eq!(rx.borrow().percent, 70);
    }

    #[test]
    fn test_fail_keeps_current_stage() {
        let (reporter, rx) = ProgressReporter::channel();
        reporter.stage(Stage::Structure);
        reporter.fail("model returned garbage");
        let update = rx.borrow().clone();
        assert_eq!(update.stage, Stage::Structure);
        assert!(matches!(update.state, RunState::Failed { .. }));
    }

    #[test]
    fn test_complete_is_full_bar() {
        let (reporter, rx) = ProgressReporter::channel();
        reporter.complete();
        let update = rx.borrow().clone();
        assert_eq!(update.percent, 100);
        assert_eq!(update.state, RunState::Complete);
    }

    #[test]
    fn test_serialized_shape() {
        let (reporter, rx) = ProgressReporter::channel();
        reporter.stage(Stage::Analyze);
        let json = serde_json::to_value(rx.borrow().clone()).unwrap();
        assert_eq!(json["stage"], "analyze");
        assert_eq!(json["percent"], 70);
        assert_eq!(json["label"], "Analyzing with AI...");
        assert_eq!(json["state"], "running");
    }
}
