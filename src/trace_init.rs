//! Optional JSON-lines tracing for hosts embedding the C library.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "stt-trace.jsonl";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "stt_engine=debug,stt_core=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a subscriber writing to `log_dir/stt-trace.jsonl`. `RUST_LOG`
/// overrides the default filter. Only the first call has an effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // flushed by the worker until the host exits
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
