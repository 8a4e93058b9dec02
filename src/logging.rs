use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "launcher.log";

/// Sends logs to stderr and to a daily file under `log_dir`. `RUST_LOG`
/// overrides the default `info` level. Keep the returned guard alive for the
/// process lifetime or buffered lines are lost.
pub fn init(log_dir: &Utf8Path) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir);

    match appender {
        Ok(appender) => {
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            if let Err(e) = builder
                .with_writer(std::io::stderr.and(file_writer))
                .try_init()
            {
                eprintln!("Failed to initialize logging: {e}");
                return None;
            }
            Some(guard)
        }
        Err(e) => {
            eprintln!("Cannot log to {log_dir}: {e}");
            let _ = builder.with_writer(std::io::stderr).try_init();
            None
        }
    }
}
