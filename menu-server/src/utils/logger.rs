//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Console output, pretty in development and JSON in production
//! - Optional daily rotating application log
//! - Separate daily security log (`target: "security"`: logins, denied access)

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logger with console output only
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter (`RUST_LOG` takes precedence when set)
/// * `json_format` - JSON output for production
/// * `log_dir` - Optional directory for rotating log files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// menu_server::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// menu_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console layer
    let console: BoxedLayer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter())
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(filter())
            .boxed()
    };
    layers.push(console);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join("app");
        let security_log_dir = log_dir.join("security");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&security_log_dir)?;

        // Application logs, everything except security events
        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "menu-server");
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(filter())
                .with_filter(filter_fn(|meta| meta.target() != "security"))
                .boxed(),
        );

        // Security logs
        let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(security_log))
                .with_filter(filter_fn(|meta| meta.target() == "security"))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}
