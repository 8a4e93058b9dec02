use soku_launcher_lib::core::update;
use soku_launcher_lib::logging;
use soku_launcher_lib::models::error::SError;
use soku_launcher_lib::models::paths::{self, LauncherPaths};
use std::process::ExitCode;

fn main() -> ExitCode {
    let app_dir = match paths::app_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    // Dropped last, after the runtime, so lines logged by the update check
    // during shutdown still reach the file.
    let _log_guard = logging::init(&LauncherPaths::new(&app_dir).logs);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(soku_launcher_lib::run(&app_dir));
    update::shutdown(runtime);

    match result {
        Ok(()) | Err(SError::AlreadyRunning) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
