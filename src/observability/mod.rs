//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OTLP file exporter → memberdesk-otlp.json
//!                ↘ fmt layer (warn+) → stderr
//! ```
//!
//! The span file rotates at 5 MB and keeps three numbered backups. The level
//! is taken from the `trace_level` plugin option (an `EnvFilter` directive,
//! default `info`).

mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
