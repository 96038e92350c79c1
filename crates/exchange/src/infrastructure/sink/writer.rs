use parking_lot::Mutex;
use quotecast_core::Notification;
use quotecast_ports::{NotificationSink, SinkError, SinkResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Stdout, Write};

/// Line format used by `WriterSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkFormat {
    /// The subscriber's human-readable message
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Sink that writes one line per notification to an `io::Write`
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    format: SinkFormat,
}

/// Sink writing to the process's standard output
pub type ConsoleSink = WriterSink<Stdout>;

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, format: SinkFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn format(&self) -> SinkFormat {
        self.format
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn render(&self, notification: &Notification) -> SinkResult<String> {
        match self.format {
            SinkFormat::Text => Ok(notification.message()),
            SinkFormat::Json => serde_json::to_string(notification)
                .map_err(|e| SinkError::Serialization(e.to_string())),
        }
    }
}

impl WriterSink<Stdout> {
    pub fn stdout(format: SinkFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> NotificationSink for WriterSink<W> {
    fn deliver(&self, notification: &Notification) -> SinkResult<()> {
        let line = self.render(notification)?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        match self.format {
            SinkFormat::Text => "writer(text)",
            SinkFormat::Json => "writer(json)",
        }
    }
}
