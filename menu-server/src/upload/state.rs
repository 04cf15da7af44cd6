//! Upload state machine
//!
//! ```text
//! Idle -> PreviewLocal -> Compressing -> Uploading -> Done
//!              |               |             |
//!              +---------------+-------------+-----> Failed
//! ```

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadState {
    Idle,
    /// File received; the form may show it before anything is stored
    PreviewLocal,
    Compressing,
    Uploading,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid upload transition {from:?} -> {to:?}")]
pub struct InvalidTransition {
    pub from: UploadState,
    pub to: UploadState,
}

impl UploadState {
    /// Wire name, same as the serde form
    pub fn as_str(self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::PreviewLocal => "preview_local",
            UploadState::Compressing => "compressing",
            UploadState::Uploading => "uploading",
            UploadState::Done => "done",
            UploadState::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, UploadState::Done | UploadState::Failed)
    }

    /// Progress shown by the admin form, in percent
    pub fn progress(self) -> u8 {
        match self {
            UploadState::Idle | UploadState::Failed => 0,
            UploadState::PreviewLocal => 20,
            UploadState::Compressing => 40,
            UploadState::Uploading => 60,
            UploadState::Done => 100,
        }
    }

    pub fn can_transition_to(self, next: UploadState) -> bool {
        use UploadState::*;
        matches!(
            (self, next),
            (Idle, PreviewLocal)
                | (PreviewLocal, Compressing)
                | (Compressing, Uploading)
                | (Uploading, Done)
                | (PreviewLocal | Compressing | Uploading, Failed)
        )
    }

    pub fn transition(self, next: UploadState) -> Result<UploadState, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

/// Current state of one upload plus the image to restore on failure
#[derive(Debug, Clone)]
pub struct UploadTracker {
    state: UploadState,
    previous_url: Option<String>,
}

impl UploadTracker {
    pub fn new(previous_url: Option<String>) -> Self {
        Self {
            state: UploadState::Idle,
            previous_url,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn advance(&mut self, next: UploadState) -> Result<(), InvalidTransition> {
        self.state = self.state.transition(next)?;
        tracing::debug!(target: "storage", state = ?self.state, progress = self.state.progress(), "Upload state");
        Ok(())
    }

    /// Move to `Failed` and hand back the image that should be shown again
    pub fn fail(&mut self) -> Option<String> {
        if !self.state.is_terminal() && self.state != UploadState::Idle {
            self.state = UploadState::Failed;
        }
        self.previous_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut t = UploadTracker::new(None);
        for next in [
            UploadState::PreviewLocal,
            UploadState::Compressing,
            UploadState::Uploading,
            UploadState::Done,
        ] {
            t.advance(next).unwrap();
        }
        assert_eq!(t.state(), UploadState::Done);
        assert_eq!(t.state().progress(), 100);
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let err = UploadState::Idle.transition(UploadState::Uploading).unwrap_err();
        assert_eq!(err.from, UploadState::Idle);
        assert!(UploadState::PreviewLocal.transition(UploadState::Done).is_err());
    }

    #[test]
    fn terminal_states_are_final() {
        assert!(UploadState::Done.transition(UploadState::Failed).is_err());
        assert!(UploadState::Failed.transition(UploadState::Uploading).is_err());
        assert!(UploadState::Done.is_terminal());
    }

    #[test]
    fn failure_restores_previous_image() {
        let mut t = UploadTracker::new(Some("https://cdn/old.jpg".into()));
        t.advance(UploadState::PreviewLocal).unwrap();
        t.advance(UploadState::Compressing).unwrap();

        assert_eq!(t.fail().as_deref(), Some("https://cdn/old.jpg"));
        assert_eq!(t.state(), UploadState::Failed);
    }
}
