//! Path utilities
//!
//! Repo-root detection, lexical normalization, and '/'-separated display paths.

use std::path::{Component, Path, PathBuf};

/// File whose presence marks a directory as the repo root
pub const MARKER_FILE: &str = "README.md";

/// Number of directories checked when walking up for the marker
pub const MAX_ROOT_DEPTH: usize = 5;

/// How the repo root was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// Given on the command line
    Override,
    /// Found by walking up to a directory containing the marker file
    Marker,
    /// Nothing found, fell back to the working directory
    CurrentDir,
}

impl RootSource {
    pub fn describe(&self) -> &'static str {
        match self {
            RootSource::Override => "--root override",
            RootSource::Marker => "marker file",
            RootSource::CurrentDir => "current directory fallback",
        }
    }
}

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Display form of a document path: relative to root when possible, as-is otherwise
pub fn display_relative(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent.
///
/// No filesystem access; symlinks are not resolved. A `..` that would climb
/// above the root of an absolute path is dropped, one that climbs above the
/// start of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Walk up from `start` looking for [`MARKER_FILE`], checking at most
/// [`MAX_ROOT_DEPTH`] directories. Returns `fallback` if none has it.
pub fn find_repo_root(start: &Path, fallback: PathBuf) -> (PathBuf, RootSource) {
    let mut dir = Some(start);

    for _ in 0..MAX_ROOT_DEPTH {
        let Some(candidate) = dir else { break };
        if candidate.join(MARKER_FILE).exists() {
            return (candidate.to_path_buf(), RootSource::Marker);
        }
        dir = candidate.parent();
    }

    (fallback, RootSource::CurrentDir)
}

/// Detect the repo root starting from the running executable's directory
pub fn detect_repo_root() -> (PathBuf, RootSource) {
    let fallback = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match exe_dir {
        Some(dir) => find_repo_root(&dir, fallback),
        None => (fallback, RootSource::CurrentDir),
    }
}
