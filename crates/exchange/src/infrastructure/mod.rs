pub mod config;
pub mod sink;

pub use config::{ConfigError, ExchangeConfig};
pub use sink::{ConsoleSink, RecordingSink, SinkFormat, WriterSink};
