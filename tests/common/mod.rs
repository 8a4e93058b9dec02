#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;
use soku_launcher_lib::core::capabilities::{Candidate, Dialogs, IconSource, TextProvider};
use soku_launcher_lib::core::context::LauncherContext;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Temp tree with the launcher living in `<tmp>/games/launcher`.
/// Returns the guard, the tree root and the launcher directory.
pub fn setup_test_env() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    let app_dir = root.join("games").join("launcher");
    fs::create_dir_all(&app_dir).unwrap();
    (tmp, root, app_dir)
}

/// Creates an empty file at `dir/name`, making `dir` if needed.
pub fn touch(dir: &Utf8Path, name: &str) -> Utf8PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, "MZ").unwrap();
    path
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Confirm,
    OpenFile(Utf8PathBuf),
    Present { names: Vec<String>, preselected: usize },
    Warn(String),
}

#[derive(Clone, Debug)]
pub enum PresentReply {
    Preselected,
    Pick(String),
    Nothing,
    /// Fails the test if the prompt is shown at all.
    Forbidden,
}

pub struct StubDialogs {
    pub confirm: bool,
    pub open_file: Option<Utf8PathBuf>,
    pub present: PresentReply,
    pub calls: Mutex<Vec<Call>>,
}

impl StubDialogs {
    /// Declines everything and refuses to show a choice list.
    pub fn declining() -> Self {
        Self {
            confirm: false,
            open_file: None,
            present: PresentReply::Forbidden,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn picking(path: Utf8PathBuf) -> Self {
        Self {
            confirm: true,
            open_file: Some(path),
            ..Self::declining()
        }
    }

    pub fn with_present(mut self, reply: PresentReply) -> Self {
        self.present = reply;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Warn(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl Dialogs for StubDialogs {
    fn confirm(&self, _message: &str, _title: &str) -> bool {
        self.calls.lock().push(Call::Confirm);
        self.confirm
    }

    fn open_file(&self, initial_dir: &Utf8Path, _filter: &str) -> Option<Utf8PathBuf> {
        self.calls
            .lock()
            .push(Call::OpenFile(initial_dir.to_path_buf()));
        self.open_file.clone()
    }

    fn present(
        &self,
        _title: &str,
        _description: &str,
        candidates: &[Candidate],
        preselected: usize,
    ) -> Option<String> {
        if let PresentReply::Forbidden = self.present {
            panic!("selection prompt must not be shown here");
        }
        self.calls.lock().push(Call::Present {
            names: candidates.iter().map(|c| c.name.clone()).collect(),
            preselected,
        });
        match &self.present {
            PresentReply::Preselected => Some(candidates[preselected].name.clone()),
            PresentReply::Pick(name) => Some(name.clone()),
            PresentReply::Nothing => None,
            PresentReply::Forbidden => unreachable!(),
        }
    }

    fn warn(&self, message: &str, _title: &str) {
        self.calls.lock().push(Call::Warn(message.to_string()));
    }
}

/// Echoes keys back and records language switches.
#[derive(Default)]
pub struct RecordingText {
    pub switches: Mutex<Vec<String>>,
}

impl TextProvider for RecordingText {
    fn get_string(&self, key: &str) -> String {
        key.to_string()
    }

    fn change_language(&self, code: &str) {
        self.switches.lock().push(code.to_string());
    }
}

pub struct NoIcons;

impl IconSource for NoIcons {
    fn icon(&self, _path: &Utf8Path) -> Option<String> {
        None
    }
}

pub fn context(
    app_dir: &Utf8Path,
    culture: &str,
    dialogs: Arc<StubDialogs>,
) -> (LauncherContext, Arc<RecordingText>) {
    let text = Arc::new(RecordingText::default());
    let ctx = LauncherContext::new(
        app_dir,
        culture,
        text.clone(),
        dialogs,
        Arc::new(NoIcons),
    );
    (ctx, text)
}
