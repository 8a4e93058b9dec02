use crate::core::capabilities::Candidate;
use crate::core::context::LauncherContext;
use crate::core::locale::language_code;
use crate::core::presets::{default_mod_groups, VERSION_INFO_URL};
use crate::core::scanner::{self, DEFAULT_EXECUTABLE};
use crate::models::config::{is_blank, InstallConfig};
use crate::models::error::SError;
use crate::models::paths::{normalize, relative_to};
use crate::utils::json::Json;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_INSTALL_DIR: &str = ".";

/// Finds the game, keeps `SokuLauncher.json` in step with what was found, and
/// falls back to asking the user when nothing on disk works.
pub struct Resolver<'a> {
    ctx: &'a LauncherContext,
}

impl<'a> Resolver<'a> {
    pub fn new(ctx: &'a LauncherContext) -> Self {
        Self { ctx }
    }

    /// Produces the config for this session. Never fails: problems are shown
    /// as warnings and the best config available is returned, valid or not.
    #[instrument(skip(self), fields(app_dir = %self.ctx.app_dir))]
    pub fn resolve(&self) -> InstallConfig {
        let mut config = match self.load() {
            None => {
                info!("No config found, generating defaults");
                let mut config = self.generate_default_config();
                if is_blank(&config.install_dir) {
                    config.install_dir = DEFAULT_INSTALL_DIR.to_string();
                }
                if !is_blank(&config.install_file_name) {
                    self.save(&config);
                }
                config
            }
            Some(mut config) => {
                if let Err(e) = config.check_mod_groups() {
                    warn!("Config contains an invalid mod group: {e}");
                }
                if is_blank(&config.language) {
                    config.language = language_code(&self.ctx.culture).to_string();
                }
                self.ctx.text.change_language(&config.language);

                if !self.validate(&config.install_dir, &config.install_file_name) {
                    debug!(
                        "Stored install {}/{} is not valid, scanning",
                        config.install_dir, config.install_file_name
                    );
                    if let Some(dir) = self.scan_or_warn() {
                        let file_name = self.select_executable(dir.as_str());
                        config.install_dir = dir.into_string();
                        config.install_file_name = file_name.clone().unwrap_or_default();
                        if file_name.is_some() {
                            self.save(&config);
                        }
                    }
                }
                config
            }
        };

        if !self.validate(&config.install_dir, &config.install_file_name) {
            if is_blank(&config.install_file_name) {
                if self.prompt_for_executable(&mut config) {
                    self.save(&config);
                }
            } else {
                // A broken pair with a file name set is written back unchanged
                // and the user is not asked.
                self.save(&config);
            }
        }

        config
    }

    /// True when `dir` (relative to the launcher, or absolute) exists and
    /// holds a file called `file_name`.
    pub fn validate(&self, dir: &str, file_name: &str) -> bool {
        if is_blank(dir) || is_blank(file_name) {
            return false;
        }
        let full = normalize(&self.ctx.app_dir.join(dir));
        full.is_dir() && full.join(file_name).is_file()
    }

    /// See [`scanner::scan_for_install`].
    pub fn scan_for_install(&self) -> Result<Option<Utf8PathBuf>, SError> {
        scanner::scan_for_install(&self.ctx.app_dir)
    }

    /// Picks the game executable inside `dir`. A single match is returned
    /// directly; with several, the user chooses.
    pub fn select_executable(&self, dir: &str) -> Option<String> {
        let full = normalize(&self.ctx.app_dir.join(dir));
        let names = match scanner::find_executables(&full) {
            Ok(names) => names,
            Err(e) => {
                self.ctx.warn(&e);
                return None;
            }
        };

        match names.len() {
            0 => None,
            1 => names.into_iter().next(),
            _ => {
                let candidates: Vec<Candidate> = names
                    .iter()
                    .map(|name| Candidate {
                        name: name.clone(),
                        icon: self.ctx.icons.icon(&full.join(name)),
                    })
                    .collect();
                let preselected = names
                    .iter()
                    .position(|n| n == DEFAULT_EXECUTABLE)
                    .unwrap_or(0);

                let text = &self.ctx.text;
                self.ctx
                    .dialogs
                    .present(
                        &text.get_string("select-exe-title"),
                        &text.get_string("select-exe-desc"),
                        &candidates,
                        preselected,
                    )
                    .filter(|name| !is_blank(name))
            }
        }
    }

    /// A fresh config: system language, whatever the scan finds, and the
    /// built-in presets.
    pub fn generate_default_config(&self) -> InstallConfig {
        let language = language_code(&self.ctx.culture);
        self.ctx.text.change_language(language);

        let mut config = InstallConfig {
            language: language.to_string(),
            mod_groups: default_mod_groups(self.ctx.text.as_ref()),
            version_info_url: VERSION_INFO_URL.to_string(),
            ..Default::default()
        };

        if let Some(dir) = self.scan_or_warn() {
            config.install_file_name = self.select_executable(dir.as_str()).unwrap_or_default();
            config.install_dir = dir.into_string();
        }

        config
    }

    /// Reads the stored config. `None` if there is no file; a file that
    /// cannot be parsed is reported and read as an empty config.
    pub fn load(&self) -> Option<InstallConfig> {
        let path = &self.ctx.paths.config;
        if !path.exists() {
            return None;
        }
        match Json::read::<InstallConfig>(path) {
            Ok(config) => Some(config),
            Err(e) => {
                self.ctx.warn(&e);
                Some(InstallConfig::default())
            }
        }
    }

    /// Writes `config`. Returns false (after warning) if the write failed.
    pub fn save(&self, config: &InstallConfig) -> bool {
        match Json::write(&self.ctx.paths.config, config) {
            Ok(()) => {
                info!("Saved config to {}", self.ctx.paths.config);
                true
            }
            Err(e) => {
                self.ctx.warn(&e);
                false
            }
        }
    }

    fn scan_or_warn(&self) -> Option<Utf8PathBuf> {
        self.scan_for_install().unwrap_or_else(|e| {
            self.ctx.warn(&e);
            None
        })
    }

    /// Asks whether to locate the game by hand and, if so, stores the chosen
    /// file in `config`. Returns whether `config` changed.
    fn prompt_for_executable(&self, config: &mut InstallConfig) -> bool {
        let text = &self.ctx.text;
        let dialogs = &self.ctx.dialogs;

        if !dialogs.confirm(
            &text.get_string("game-file-not-found-message"),
            &text.get_string("game-file-not-found-title"),
        ) {
            return false;
        }

        let initial_dir = config.install_dir_full_path(&self.ctx.app_dir);
        let Some(picked) = dialogs.open_file(&initial_dir, &text.get_string("open-exe-filter"))
        else {
            return false;
        };
        let picked = normalize(&self.ctx.app_dir.join(picked));

        let (Some(dir), Some(file_name)) = (picked.parent(), picked.file_name()) else {
            warn!("Ignoring selection without a file name: {picked}");
            return false;
        };

        config.install_dir = install_dir_for(dir, &self.ctx.app_dir);
        config.install_file_name = file_name.to_string();
        true
    }
}

/// How a chosen directory is stored: relative to the launcher, unless that
/// would climb past the launcher's parent, in which case absolute.
pub fn install_dir_for(dir: &Utf8Path, app_dir: &Utf8Path) -> String {
    let relative = relative_to(dir, app_dir);
    if relative.as_str().starts_with("../../") {
        normalize(dir).into_string()
    } else {
        relative.into_string()
    }
}
