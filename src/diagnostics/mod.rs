// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording non-fatal incidents.
//!
//! Presentation glitches (a missing render target, an out-of-range gallery
//! index) abort the single operation and leave state unchanged; this module
//! is where they get recorded so they remain observable. Events live in a
//! memory-bounded circular buffer behind a cloneable handle.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, ErrorEvent, ErrorType, WarningEvent, WarningType};
