//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "employee-records.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` forces debug for this
/// crate. When a log directory is configured, output is also written to a
/// daily rolling file and the returned guard must be held until exit so the
/// file writer can flush.
pub fn init(config: &LoggingConfig, verbose: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let default_directive = if verbose {
        "employee_records=debug,info".to_string()
    } else {
        config.level.clone()
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr).compact();

    match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).try_init()?;
            Ok(None)
        }
    }
}
