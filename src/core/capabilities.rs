//! Interfaces the resolver uses to talk to whoever hosts it.
//!
//! The resolver never draws anything itself. A GUI front end implements these
//! with real dialogs, the console binary with terminal prompts, and the tests
//! with scripted stubs.

use camino::{Utf8Path, Utf8PathBuf};

/// Localized strings by key.
pub trait TextProvider: Send + Sync {
    fn get_string(&self, key: &str) -> String;

    /// Switches the active language. Takes one of the codes from
    /// [`crate::core::locale::language_code`].
    fn change_language(&self, code: &str);
}

/// One entry of a multiple-choice prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub name: String,
    /// Icon as a data URI, when one could be found.
    pub icon: Option<String>,
}

/// Modal prompts. Every call blocks until the user answers.
pub trait Dialogs: Send + Sync {
    /// Yes/no question. `true` means yes.
    fn confirm(&self, message: &str, title: &str) -> bool;

    /// Open-file prompt starting in `initial_dir`. `None` when cancelled.
    fn open_file(&self, initial_dir: &Utf8Path, filter: &str) -> Option<Utf8PathBuf>;

    /// Presents `candidates` with `preselected` highlighted and returns the
    /// name left selected when the prompt closes, or `None` if nothing was.
    fn present(
        &self,
        title: &str,
        description: &str,
        candidates: &[Candidate],
        preselected: usize,
    ) -> Option<String>;

    /// Non-fatal problem report.
    fn warn(&self, message: &str, title: &str);
}

pub trait IconSource: Send + Sync {
    fn icon(&self, path: &Utf8Path) -> Option<String>;
}
