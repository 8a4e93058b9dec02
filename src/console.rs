use crate::core::capabilities::{Candidate, Dialogs};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::{self, BufRead, Write};

/// Terminal stand-ins for the launcher's dialogs.
pub struct ConsoleDialogs;

impl ConsoleDialogs {
    fn ask(prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Dialogs for ConsoleDialogs {
    fn confirm(&self, message: &str, title: &str) -> bool {
        println!("== {title} ==");
        Self::ask(&format!("{message} [y/N] "))
            .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }

    fn open_file(&self, initial_dir: &Utf8Path, filter: &str) -> Option<Utf8PathBuf> {
        println!("{filter}");
        let answer = Self::ask(&format!("Path (relative to {initial_dir}, empty to cancel): "))?;
        if answer.is_empty() {
            return None;
        }
        Some(initial_dir.join(answer))
    }

    fn present(
        &self,
        title: &str,
        description: &str,
        candidates: &[Candidate],
        preselected: usize,
    ) -> Option<String> {
        println!("== {title} ==");
        println!("{description}");
        for (i, c) in candidates.iter().enumerate() {
            let mark = if i == preselected { '*' } else { ' ' };
            println!("{mark} {}) {}", i + 1, c.name);
        }

        let answer = Self::ask(&format!("Choice [{}]: ", preselected + 1))?;
        let index = if answer.is_empty() {
            preselected
        } else {
            answer.parse::<usize>().ok()?.checked_sub(1)?
        };
        candidates.get(index).map(|c| c.name.clone())
    }

    fn warn(&self, message: &str, title: &str) {
        eprintln!("[{title}] {message}");
    }
}
