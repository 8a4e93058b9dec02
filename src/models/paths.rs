use crate::models::error::SError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(LauncherPaths {
    config: "SokuLauncher.json",
    logs: "logs",
});

/// Directory containing the running launcher executable.
pub fn app_dir() -> Result<Utf8PathBuf, SError> {
    let exe = dunce::canonicalize(std::env::current_exe()?)?;
    let dir = exe
        .parent()
        .ok_or_else(|| SError::IOError(format!("{} has no parent", exe.display())))?;
    Utf8PathBuf::from_path_buf(dir.to_path_buf())
        .map_err(|p| SError::NonUtf8Path(p.to_string_lossy().to_string()))
}

/// Where `%resources%` points: the platform cache dir, or the temp dir as a fallback.
pub fn resources_dir() -> Utf8PathBuf {
    let base = ProjectDirs::from("today", "latte", "SokuLauncher")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("SokuLauncher"));
    Utf8PathBuf::from_path_buf(base.join("Resources"))
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().to_string()))
}

/// Lexically resolves `.` and `..` components without touching the disk.
pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out: Vec<Utf8Component> = Vec::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match out.last() {
                Some(Utf8Component::Normal(_)) => {
                    out.pop();
                }
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return Utf8PathBuf::from(".");
    }
    out.iter().map(|c| c.as_str()).collect()
}

/// Expresses `target` relative to `base`, always with `/` separators.
/// Returns `.` when both are the same directory, and `target` unchanged when
/// the two do not share a root (different drives on Windows).
pub fn relative_to(target: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    let target = normalize(target);
    let base = normalize(base);

    let t: Vec<_> = target.components().collect();
    let b: Vec<_> = base.components().collect();

    let is_root = |c: Option<&Utf8Component>| {
        matches!(c, Some(Utf8Component::Prefix(_)) | Some(Utf8Component::RootDir))
    };
    if (is_root(t.first()) || is_root(b.first())) && t.first() != b.first() {
        return target;
    }

    let common = t.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();

    let parts: Vec<&str> = std::iter::repeat("..")
        .take(b.len() - common)
        .chain(t[common..].iter().map(|c| c.as_str()))
        .collect();

    if parts.is_empty() {
        Utf8PathBuf::from(".")
    } else {
        Utf8PathBuf::from(parts.join("/"))
    }
}
