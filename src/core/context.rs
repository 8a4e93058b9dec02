use crate::core::capabilities::{Dialogs, IconSource, TextProvider};
use crate::models::error::SError;
use crate::models::paths::LauncherPaths;
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Everything the resolver needs from its surroundings, built once at startup
/// and passed down explicitly.
pub struct LauncherContext {
    pub app_dir: Utf8PathBuf,
    pub paths: LauncherPaths,
    /// Culture name of the user, e.g. `ja-JP`. Used when the config has no language yet.
    pub culture: String,
    pub text: Arc<dyn TextProvider>,
    pub dialogs: Arc<dyn Dialogs>,
    pub icons: Arc<dyn IconSource>,
}

impl LauncherContext {
    pub fn new(
        app_dir: &Utf8Path,
        culture: impl Into<String>,
        text: Arc<dyn TextProvider>,
        dialogs: Arc<dyn Dialogs>,
        icons: Arc<dyn IconSource>,
    ) -> Self {
        Self {
            app_dir: app_dir.to_path_buf(),
            paths: LauncherPaths::new(app_dir),
            culture: culture.into(),
            text,
            dialogs,
            icons,
        }
    }

    /// Logs `err` and shows it to the user. Never stops the caller.
    pub fn warn(&self, err: &SError) {
        warn!("{err}");
        self.dialogs
            .warn(&err.to_string(), &self.text.get_string("error-title"));
    }
}
