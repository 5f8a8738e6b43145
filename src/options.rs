use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The directory basenames pruned from the walk by default.
pub fn default_ignored_dirs() -> HashSet<String> {
    ["__pycache__", ".git", ".vscode", "node_modules", "dist", "build"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The file extensions whose content is included by default.
///
/// Extensions carry their leading dot and are matched case-insensitively.
pub fn default_text_extensions() -> HashSet<String> {
    [
        ".py", ".js", ".ts", ".tsx", ".jsx", ".html", ".css", ".scss", ".json", ".xml", ".yaml",
        ".yml", ".md", ".txt", ".sql", ".java", ".c", ".cpp", ".h", ".cs", ".php", ".rb", ".go",
        ".rs", ".swift", ".kt", ".kts", ".dockerfile", ".env", ".sh", ".bat", ".ps1",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbolOptions {
    pub root: PathBuf,
    pub ignored_dirs: HashSet<String>,
    pub text_extensions: HashSet<String>,
}
impl Default for ArbolOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignored_dirs: default_ignored_dirs(),
            text_extensions: default_text_extensions(),
        }
    }
}
impl ArbolOptions {
    /// Whether a directory with this basename is pruned from the walk.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }
    /// Whether this file's extension makes its content eligible for the report.
    ///
    /// Files with no extension never match.
    pub fn is_text_file(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self
                .text_extensions
                .contains(&format!(".{}", ext.to_ascii_lowercase())),
            None => false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ArbolBuilder {
    options: ArbolOptions,
}
impl ArbolBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ArbolOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the ignored-directory set.
    pub fn ignored_dirs(mut self, dirs: HashSet<String>) -> Self {
        self.options.ignored_dirs = dirs;
        self
    }
    /// Adds one directory basename to the ignored set.
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.options.ignored_dirs.insert(name.into());
        self
    }
    /// Replaces the text-extension set.
    ///
    /// Extensions are expected in `.ext` form, lowercase.
    pub fn text_extensions(mut self, extensions: HashSet<String>) -> Self {
        self.options.text_extensions = extensions;
        self
    }
    /// Adds one extension to the text set, normalizing to `.ext` lowercase.
    pub fn text_extension(mut self, extension: impl Into<String>) -> Self {
        let ext = extension.into().to_ascii_lowercase();
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{ext}")
        };
        self.options.text_extensions.insert(ext);
        self
    }
    pub fn build(self) -> ArbolOptions {
        self.options
    }
}
