//! Test utilities for templab
//!
//! This crate provides shared testing utilities used across the templab workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[doc(hidden)]
pub use pretty_assertions;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps test files in one gitignored location that is easy to clean
/// up by hand.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the directories
/// cannot be created.
///
/// # Examples
///
/// ```rust
/// use templab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Convert every `\r\n` to `\n`
///
/// For comparing output rendered with the platform line separator.
pub fn lf(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Make whitespace visible: tabs as `→`, trailing spaces as `·`, and an
/// explicit `⏎` before each line break
///
/// Indentation bugs are easier to read in a diff this way.
pub fn visible_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let (line, cr) = match line.strip_suffix('\r') {
                Some(line) => (line, "␍"),
                None => (line, ""),
            };
            let content = line.trim_end_matches(' ');
            let trailing = line.len() - content.len();
            format!("{}{}{}", content.replace('\t', "→"), "·".repeat(trailing), cr)
        })
        .collect::<Vec<_>>()
        .join("⏎\n")
}

/// Assert two rendered texts are equal, diffing with visible whitespace
///
/// ```rust
/// use templab_testkit::assert_text_eq;
///
/// assert_text_eq!("a\n  b", "a\n  b");
/// ```
#[macro_export]
macro_rules! assert_text_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::pretty_assertions::assert_eq!(
            $crate::visible_whitespace(::std::convert::AsRef::<str>::as_ref(&$left)),
            $crate::visible_whitespace(::std::convert::AsRef::<str>::as_ref(&$right)),
        )
    };
}
