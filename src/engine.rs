use crate::content::write_contents;
use crate::error::ArbolError;
use crate::options::ArbolOptions;
use crate::tree::{build_dir_tree, write_tree};
use crate::types::DirNode;
use ignore::WalkBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// One entry yielded by the walk, in parent-before-children order.
pub(crate) struct WalkedEntry {
    pub(crate) path: PathBuf,
    pub(crate) is_dir: bool,
}

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ArbolOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        // Standard filters off: hidden files stay in, no gitignore handling.
        builder.standard_filters(false).follow_links(false);
        let ignored = options.ignored_dirs.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                // The root itself is never pruned, whatever its name.
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && ignored.contains(entry.file_name().to_string_lossy().as_ref()))
        });
        Self {
            inner: builder.build(),
        }
    }
    fn collect_entries(self) -> Result<Vec<WalkedEntry>, ArbolError> {
        self.inner
            .map(|result| match result {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                    Ok(WalkedEntry {
                        path: entry.into_path(),
                        is_dir,
                    })
                }
                Err(e) => Err(ArbolError::Walk(e.to_string())),
            })
            .collect()
    }
}

/// Returns the final path component, with trailing separators stripped.
pub(crate) fn base_name(path: &Path) -> String {
    path.components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Derives the report filename for a root directory: `arbol_y_codigo_<basename>.txt`.
pub fn output_file_name(root: &Path) -> String {
    format!("arbol_y_codigo_{}.txt", base_name(root))
}

/// Walks the root directory and materializes the pruned, sorted directory tree.
///
/// # Errors
///
/// Returns [`ArbolError::InvalidPath`] if the root is not an existing directory, and
/// [`ArbolError::Walk`] if the traversal itself fails (e.g. permission denied while
/// enumerating a directory).
pub fn scan(options: &ArbolOptions) -> Result<DirNode, ArbolError> {
    if !options.root.is_dir() {
        return Err(ArbolError::InvalidPath(
            options.root.display().to_string(),
        ));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let entries = Walker::new(options).collect_entries()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Walk yielded {} entries", entries.len());
    Ok(build_dir_tree(&options.root, entries))
}

/// Scans the root directory and writes the full report into `out`: the tree
/// listing section followed by the file-contents section.
pub fn arbol<W: Write>(options: &ArbolOptions, out: &mut W) -> Result<(), ArbolError> {
    let tree = scan(options)?;
    write_tree(&tree, out)?;
    write_contents(&tree, options, out)?;
    Ok(())
}
