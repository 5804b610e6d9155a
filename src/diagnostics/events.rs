// SPDX-License-Identifier: MPL-2.0
//! Structured diagnostic event types.

use std::time::SystemTime;

/// Category for warning events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// Configuration could not be read or written.
    Config,
    /// Persisted state could not be read or written.
    State,
    Other,
}

/// Category for error events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// An expected presentation element was absent.
    MissingTarget,
    /// A gallery open/navigate request was outside the sequence bounds.
    InvalidIndex,
    /// The platform opener for an external tour could not be spawned.
    Launch,
    Other,
}

/// A recorded warning.
#[derive(Debug, Clone)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
    pub at: SystemTime,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
            at: SystemTime::now(),
        }
    }
}

/// A recorded error.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
    pub at: SystemTime,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            at: SystemTime::now(),
        }
    }
}

/// Any event the collector can record.
#[derive(Debug, Clone)]
pub enum DiagnosticEvent {
    Warning(WarningEvent),
    Error(ErrorEvent),
}

impl DiagnosticEvent {
    /// Returns the human-readable message of the underlying event.
    pub fn message(&self) -> &str {
        match self {
            DiagnosticEvent::Warning(event) => &event.message,
            DiagnosticEvent::Error(event) => &event.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_their_message() {
        let warning = DiagnosticEvent::Warning(WarningEvent::new(WarningType::Config, "w"));
        let error = DiagnosticEvent::Error(ErrorEvent::new(ErrorType::InvalidIndex, "e"));
        assert_eq!(warning.message(), "w");
        assert_eq!(error.message(), "e");
    }
}
