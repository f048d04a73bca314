//! Logging setup: one fmt layer whose lines go to stdout and to an append-mode log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{format::FmtSpan, writer::MakeWriterExt, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Registry with `filter` and a fmt layer writing through `writer`. Ansi colors are off so the
/// file and console lines stay identical.
fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default().with(filter).with(fmt_layer)
}

/// Installs the global tracing subscriber, teeing output to stdout and `log_file`.
///
/// The level comes from `RUST_LOG` (default [`DEFAULT_FILTER`]), so `.env` must be loaded first.
/// Fails if a global subscriber is already set.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(log_file)?);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    subscriber(filter, io::stdout.and(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
