//! Background fetch of the version-info feed.
//!
//! The check is started during startup and never awaited there. It may finish
//! before or after the main window appears; nothing on the startup path reads
//! its result. On exit the runtime gives a pending check [`SHUTDOWN_GRACE`]
//! and then leaves it behind.

use crate::core::registry::AppRegistry;
use crate::models::config::is_blank;
use crate::models::error::SError;
use crate::utils::thread::with_arc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const USER_AGENT: &str = "SokuLauncher";

/// How long exit waits for an unfinished update check.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

pub trait UpdateChecker: Send + Sync {
    fn fetch_version_info(&self, url: &str) -> Result<Value, SError>;
}

/// Downloads the feed over HTTP.
pub struct FeedChecker {
    timeout: Duration,
}

impl FeedChecker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for FeedChecker {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl UpdateChecker for FeedChecker {
    fn fetch_version_info(&self, url: &str) -> Result<Value, SError> {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(self.timeout)
            .build();
        let response = agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| SError::Network(e.to_string()))?;
        response
            .into_json::<Value>()
            .map_err(|e| SError::ParseError(format!("version info: {e}")))
    }
}

/// Starts the update check on a blocking worker if the config asks for it.
/// The caller may drop the handle; the result lands in `registry.version_info`.
pub fn spawn_update_check(
    registry: &AppRegistry,
    checker: Arc<dyn UpdateChecker>,
) -> Option<JoinHandle<()>> {
    let (enabled, url) = with_arc(&registry.config, |c| {
        (c.auto_check_for_updates, c.version_info_url.clone())
    });
    if !enabled || is_blank(&url) {
        debug!("Automatic update check disabled");
        return None;
    }

    let slot = registry.version_info.clone();
    Some(tokio::task::spawn_blocking(move || {
        match checker.fetch_version_info(&url) {
            Ok(info) => {
                info!("Fetched version info from {url}");
                *slot.lock() = Some(info);
            }
            Err(e) => warn!("Update check failed: {e}"),
        }
    }))
}

/// Stops `runtime`, waiting at most [`SHUTDOWN_GRACE`] for blocking tasks.
pub fn shutdown(runtime: Runtime) {
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}
