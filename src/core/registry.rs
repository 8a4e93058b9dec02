use crate::core::context::LauncherContext;
use crate::models::config::InstallConfig;
use crate::models::error::SError;
use crate::utils::json::Json;
use parking_lot::Mutex;
use std::sync::Arc;

/// Runtime state shared between the window layer and background tasks.
pub struct AppRegistry {
    pub context: Arc<LauncherContext>,
    pub config: Arc<Mutex<InstallConfig>>,
    /// Last version document fetched from the update feed, if any.
    pub version_info: Arc<Mutex<Option<serde_json::Value>>>,
}

impl AppRegistry {
    pub fn new(context: LauncherContext, config: InstallConfig) -> Self {
        Self {
            context: Arc::new(context),
            config: Arc::new(Mutex::new(config)),
            version_info: Arc::new(Mutex::new(None)),
        }
    }

    pub fn save_config(&self) -> Result<(), SError> {
        let config = self.config.lock();
        Json::write(&self.context.paths.config, &*config)
    }
}
