use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A directory visited during the scan, with its immediate children.
///
/// Files and subdirectories are kept separately so the renderers can emit a
/// directory's files before descending into its subdirectories. Both lists
/// are sorted lexicographically by name once the scan completes.
#[derive(Debug, Serialize, Deserialize)]
pub struct DirNode {
    /// The directory's basename.
    pub name: String,
    /// The full path to the directory, as walked from the root.
    pub path: PathBuf,
    /// Regular files directly inside this directory.
    pub files: Vec<FileNode>,
    /// Subdirectories directly inside this directory.
    pub dirs: Vec<DirNode>,
}

/// A regular file found during the scan.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileNode {
    /// The file's basename.
    pub name: String,
    /// The full path to the file, as walked from the root.
    pub path: PathBuf,
}

impl DirNode {
    pub(crate) fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Sorts files and subdirectories by name, recursively.
    pub(crate) fn sort(&mut self) {
        self.files.sort_by(|a, b| a.name.cmp(&b.name));
        self.dirs.sort_by(|a, b| a.name.cmp(&b.name));
        for dir in &mut self.dirs {
            dir.sort();
        }
    }
}
