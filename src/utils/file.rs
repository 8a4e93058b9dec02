use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Files directly inside `dir`, sorted by name. Does not descend.
    /// Entries whose names are not UTF-8 are left out.
    pub fn list_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
        Self::list_children(dir, |p| p.is_file())
    }

    /// Immediate subdirectories of `dir`, sorted by name.
    pub fn list_dirs(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
        Self::list_children(dir, |p| p.is_dir())
    }

    fn list_children(
        dir: &Utf8Path,
        keep: impl Fn(&Utf8Path) -> bool,
    ) -> Result<Vec<Utf8PathBuf>, SError> {
        let mut out = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(path) => path,
                Err(p) => {
                    debug!("Skipping non UTF-8 entry {}", p.display());
                    continue;
                }
            };
            if keep(&path) {
                out.push(path);
            }
        }
        Ok(out)
    }
}
