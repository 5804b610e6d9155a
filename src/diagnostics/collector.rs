// SPDX-License-Identifier: MPL-2.0
//! Event collection behind a shared, cloneable handle.

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, ErrorEvent, WarningEvent};
use std::sync::{Arc, Mutex};

/// Default number of events retained in memory.
const DEFAULT_CAPACITY: usize = 256;

/// Owns the event buffer and hands out [`DiagnosticsHandle`]s.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsCollector {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Returns a cloneable handle for recording events.
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// Returns a snapshot of the recorded events, oldest first.
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Cheap, cloneable recorder shared across components.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, event: WarningEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::Warning(event));
        }
    }

    pub fn log_error(&self, event: ErrorEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::Error(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn handle_records_into_shared_buffer() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(WarningType::Config, "bad toml"));
        handle.log_error(ErrorEvent::new(ErrorType::InvalidIndex, "index 7 of 3"));

        let events = collector.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "bad toml");
        assert_eq!(events[1].message(), "index 7 of 3");
    }

    #[test]
    fn cloned_handles_share_one_buffer() {
        let collector = DiagnosticsCollector::new(8);
        let first = collector.handle();
        let second = first.clone();

        first.log_error(ErrorEvent::new(ErrorType::MissingTarget, "one"));
        second.log_error(ErrorEvent::new(ErrorType::MissingTarget, "two"));

        assert_eq!(collector.snapshot().len(), 2);
    }

    #[test]
    fn buffer_is_bounded() {
        let collector = DiagnosticsCollector::new(2);
        let handle = collector.handle();
        for i in 0..5 {
            handle.log_error(ErrorEvent::new(ErrorType::Other, format!("event {i}")));
        }

        let events = collector.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "event 3");
        assert_eq!(events[1].message(), "event 4");
    }
}
