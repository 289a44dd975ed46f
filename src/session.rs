//! Upload session state machine.
//!
//! Tracks one upload from file selection to a displayed result:
//!
//! ```text
//! Idle -> Reading -> Processing -> Ready
//!            |           |
//!            +-> Error <-+
//! ```
//!
//! `clear` returns any state to `Idle`. The aggregation engine itself stays
//! stateless; the session only records what the engine returned.

use crate::aggregator::{aggregate_with, Aggregation, AggregatorConfig};
use crate::utils::error::{AnalyticsError, SessionError};
use log::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Reading,
    Processing,
    Ready(Aggregation),
    Error(String),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Reading => "reading",
            SessionState::Processing => "processing",
            SessionState::Ready(_) => "ready",
            SessionState::Error(_) => "in error",
        }
    }
}

#[derive(Debug, Default)]
pub struct UploadSession {
    state: SessionState,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The finished aggregation, if any
    pub fn result(&self) -> Option<&Aggregation> {
        match &self.state {
            SessionState::Ready(aggregation) => Some(aggregation),
            _ => None,
        }
    }

    /// Start reading input. Allowed from `Idle`, `Ready` and `Error`.
    pub fn begin_read(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Reading | SessionState::Processing => {
                Err(self.invalid("begin reading"))
            }
            _ => {
                self.transition(SessionState::Reading);
                Ok(())
            }
        }
    }

    /// Input text is available; move on to processing
    pub fn finish_read(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Reading {
            return Err(self.invalid("finish reading"));
        }
        self.transition(SessionState::Processing);
        Ok(())
    }

    /// Record the engine's outcome
    pub fn complete(
        &mut self,
        outcome: Result<Aggregation, AnalyticsError>,
    ) -> Result<(), SessionError> {
        if self.state != SessionState::Processing {
            return Err(self.invalid("complete"));
        }
        let next = match outcome {
            Ok(aggregation) => SessionState::Ready(aggregation),
            Err(e) => SessionState::Error(e.to_string()),
        };
        self.transition(next);
        Ok(())
    }

    /// Abort a read or processing step
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        match self.state {
            SessionState::Reading | SessionState::Processing => {
                self.transition(SessionState::Error(message.into()));
                Ok(())
            }
            _ => Err(self.invalid("fail")),
        }
    }

    /// Drop any result or error
    pub fn clear(&mut self) {
        self.transition(SessionState::Idle);
    }

    /// Drive `Reading -> Processing -> Ready/Error` for text already read
    pub fn process(&mut self, raw_text: &str, config: &AggregatorConfig) -> Result<(), SessionError> {
        self.finish_read()?;
        let outcome = aggregate_with(raw_text, config);
        self.complete(outcome)
    }

    fn transition(&mut self, next: SessionState) {
        debug!("Session {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut session = UploadSession::new();
        session.begin_read().unwrap();
        session
            .process("1,2025-01-01T10:00:00,[a:1],5", &AggregatorConfig::default())
            .unwrap();

        assert_eq!(session.state().name(), "ready");
        assert_eq!(session.result().unwrap().transactions_processed, 1);
    }

    #[test]
    fn test_empty_input_ends_in_error() {
        let mut session = UploadSession::new();
        session.begin_read().unwrap();
        session.process("   ", &AggregatorConfig::default()).unwrap();

        assert_eq!(
            session.state(),
            &SessionState::Error("No transactions found in input".to_string())
        );
        assert!(session.result().is_none());
    }

    #[test]
    fn test_read_failure() {
        let mut session = UploadSession::new();
        session.begin_read().unwrap();
        session.fail("Failed to read file").unwrap();
        assert_eq!(session.state().name(), "in error");

        // A new upload may start from an error
        session.begin_read().unwrap();
    }

    #[test]
    fn test_invalid_transitions() {
        let mut session = UploadSession::new();
        assert_eq!(
            session.finish_read(),
            Err(SessionError::InvalidTransition {
                action: "finish reading",
                state: "idle"
            })
        );
        assert!(session.fail("nope").is_err());

        session.begin_read().unwrap();
        assert!(session.begin_read().is_err());
        assert!(session.complete(Err(AnalyticsError::EmptyInput)).is_err());
    }

    #[test]
    fn test_clear_resets() {
        let mut session = UploadSession::new();
        session.begin_read().unwrap();
        session.fail("boom").unwrap();
        session.clear();
        assert_eq!(session.state(), &SessionState::Idle);
    }
}
