//! Logging setup.
//!
//! Two layers over one `tracing` registry:
//! - one-line JSON records in a daily rolling file (always)
//! - colored human-readable lines on stdout (debug builds only)
//!
//! `log` records are bridged into `tracing`, so code may use either facade.
//! Each JSON record carries timestamp (ISO 8601, millis, local offset), level,
//! target, pid, tid, file/line, message and any structured fields.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_PREFIX: &str = "habitrack.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static APP_VERSION: OnceLock<String> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: &Path) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir)?;

    let _ = LOG_DIR.set(log_dir.to_path_buf());
    let _ = APP_VERSION.set(env!("CARGO_PKG_VERSION").to_string());

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(JsonFormatter::new())
        .with_filter(file_filter());

    let stdout_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_ansi(true)
                .event_format(HumanReadableFormatter::new())
                .with_filter(stdout_filter()),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "habitrack::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
        "Logger initialized"
    );

    Ok(())
}

/// Default filter; `RUST_LOG` overrides it.
fn file_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "debug,habitrack=trace,sqlx=warn"
    } else {
        "info,sqlx=warn"
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn stdout_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("debug,habitrack=trace,sqlx=warn"))
        .unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Directory passed to [`init_logger`], once it ran.
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

// ============================================================
// Formatters
// ============================================================

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// One JSON object per line
struct JsonFormatter {
    pid: u32,
    version: String,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
            version: APP_VERSION
                .get()
                .cloned()
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        }
    }

    fn render(&self, event: &Event<'_>) -> serde_json::Value {
        let metadata = event.metadata();
        let thread = std::thread::current();

        let mut json = serde_json::json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().to_string(),
            "pid": self.pid,
            "tid": format!("{:?}", thread.id()),
            "thread_name": thread.name().unwrap_or("unnamed"),
            "target": metadata.target(),
            "version": self.version,
        });

        if let Some(file) = metadata.file() {
            json["file"] = serde_json::json!(file);
        }
        if let Some(line) = metadata.line() {
            json["line"] = serde_json::json!(line);
        }

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        if let Some(message) = visitor.fields.remove("message") {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        json
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&self.render(event)).unwrap_or_default()
        )
    }
}

/// `2025-12-09 10:32:15.123 [INFO] (target) pid=1 tid=ThreadId(7) key=value: message (file:line)`
struct HumanReadableFormatter {
    pid: u32,
}

impl HumanReadableFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

fn colored_level(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[31mERROR\x1b[0m",
        Level::WARN => "\x1b[33mWARN\x1b[0m",
        Level::INFO => "\x1b[32mINFO\x1b[0m",
        Level::DEBUG => "\x1b[36mDEBUG\x1b[0m",
        Level::TRACE => "\x1b[35mTRACE\x1b[0m",
    }
}

impl<S, N> FormatEvent<S, N> for HumanReadableFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let message = visitor
            .fields
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let fields: String = visitor
            .fields
            .iter()
            .map(|(key, value)| format!(" {}={}", key, value))
            .collect();

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        writeln!(
            writer,
            "{} [{}] ({}) pid={} tid={:?}{}: {}{}",
            timestamp,
            colored_level(metadata.level()),
            metadata.target(),
            self.pid,
            std::thread::current().id(),
            fields,
            message,
            location
        )
    }
}

/// Collects event fields as JSON values
struct JsonVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            fields: serde_json::Map::new(),
        }
    }
}

impl tracing::field::Visit for JsonVisitor {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        init_logger(dir.path()).unwrap();
        init_logger(dir.path()).unwrap();

        assert_eq!(get_log_dir().as_deref(), Some(dir.path()));
    }
}
