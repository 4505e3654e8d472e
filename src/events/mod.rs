//! Notifications from the engine to presentation layers.
//!
//! ## Key Types
//!
//! - `GameEvent`: one thing that happened, printable as a sentence
//! - `EventSink`: receiver trait
//! - `EventLog`, `TracingSink`, `WriterSink`, `NullSink`, `Tee`: receivers

pub mod event;
pub mod sink;

pub use event::{GameEvent, Query};
pub use sink::{EventLog, EventSink, NullSink, Tee, TracingSink, WriterSink};
