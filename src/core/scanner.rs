use crate::models::error::SError;
use crate::models::paths::{normalize, relative_to};
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use tracing::debug;

pub const EXECUTABLE_EXTENSION: &str = "exe";
pub const DEFAULT_EXECUTABLE: &str = "th123.exe";
const EXECUTABLE_PATTERN: &str = r"th123(?:[\s\w()\-]+)?\.exe";

pub fn executable_matcher() -> Result<Regex, SError> {
    Ok(Regex::new(EXECUTABLE_PATTERN)?)
}

/// Names of the game executables directly inside `dir`, sorted.
pub fn find_executables(dir: &Utf8Path) -> Result<Vec<String>, SError> {
    let matcher = executable_matcher()?;
    Ok(FileUtils::list_files(dir)?
        .into_iter()
        .filter(|p| p.extension() == Some(EXECUTABLE_EXTENSION))
        .filter_map(|p| p.file_name().map(str::to_owned))
        .filter(|name| matcher.is_match(name))
        .collect())
}

/// Directories searched for the game, in priority order: the launcher's own
/// directory, its parent, then each direct child of the launcher directory.
pub fn candidate_dirs(app_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
    let mut dirs = vec![app_dir.to_path_buf(), normalize(&app_dir.join(".."))];
    dirs.extend(FileUtils::list_dirs(app_dir)?);
    Ok(dirs)
}

/// Returns the first candidate directory holding a game executable, relative
/// to `app_dir`. `Ok(None)` means nothing matched.
pub fn scan_for_install(app_dir: &Utf8Path) -> Result<Option<Utf8PathBuf>, SError> {
    for dir in candidate_dirs(app_dir)? {
        let found = find_executables(&dir)?;
        if !found.is_empty() {
            debug!("Found {:?} in {}", found, dir);
            return Ok(Some(relative_to(&dir, app_dir)));
        }
    }
    Ok(None)
}
