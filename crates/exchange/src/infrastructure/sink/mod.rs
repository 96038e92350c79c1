//! Notification sink adapters
//!
//! - `WriterSink`: any `io::Write` (stdout for the console runner)
//! - `RecordingSink`: in-memory log, used by tests and the demo summary

mod recording;
mod writer;

pub use recording::RecordingSink;
pub use writer::{ConsoleSink, SinkFormat, WriterSink};
