use crossterm::tty::IsTty;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::definition;

const QUESTIONS_SUBDIR: &str = "questions";

#[derive(Clone, Debug)]
pub struct Settings {
    pub questions_dir: PathBuf,
    /// Styles answer feedback. On by default only when stdout is a terminal.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            questions_dir: default_questions_dir(),
            color: io::stdout().is_tty(),
        }
    }
}

fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Looks next to the executable, then in the working directory, each
/// directly and in a `questions` subdirectory.
fn default_questions_dir() -> PathBuf {
    let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let candidates = executable_dir()
        .into_iter()
        .chain(Some(working_dir.clone()))
        .flat_map(|dir| vec![dir.clone(), dir.join(QUESTIONS_SUBDIR)]);
    pick_questions_dir(candidates).unwrap_or(working_dir)
}

fn pick_questions_dir<I: IntoIterator<Item = PathBuf>>(candidates: I) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|dir| !definition::discover_topics(dir).is_empty())
}
