//! Tracing initialization: fmt layer with full format (level, target, span, all fields),
//! written to stdout and optionally teed to a log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::error::{BbotError, Result};

/// Initializes the global tracing subscriber.
///
/// Reads the log level from `RUST_LOG` (e.g. info, debug, trace); defaults to
/// info when unset. Load `.env` (e.g. `dotenvy::dotenv()`) before calling this,
/// otherwise `RUST_LOG` from the file will not take effect. When
/// `log_file_path` is given, the same output is appended to that file.
pub fn init_tracing(log_file_path: Option<&str>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    let registry = Registry::default().with(env_filter);

    match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            use tracing_subscriber::fmt::writer::MakeWriterExt;
            let writer = io::stdout.and(file);
            registry
                .with(fmt_layer.with_writer(writer))
                .try_init()
                .map_err(|e| BbotError::Unknown(format!("Failed to set global subscriber: {}", e)))
        }
        None => registry
            .with(fmt_layer)
            .try_init()
            .map_err(|e| BbotError::Unknown(format!("Failed to set global subscriber: {}", e))),
    }
}
