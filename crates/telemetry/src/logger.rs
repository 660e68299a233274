use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = std::time::SystemTime::now();
        let datetime: chrono::DateTime<chrono::Local> = now.into();
        write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
    }
}

/// Initialize the logger.
///
/// `level` comes from the configuration file and serves as the default
/// directive; the `RUST_LOG` environment variable overrides it.
///
/// # Example
///
/// ```no_run
/// telemetry::init("info");
/// tracing::info!("Server starting");
/// ```
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(CustomTimeFormat)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(false)
                .with_file(false),
        )
        .init();
}
