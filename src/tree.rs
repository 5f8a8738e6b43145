//! Internal module for building the directory tree and rendering its listing.

use crate::engine::{WalkedEntry, base_name};
use crate::types::{DirNode, FileNode};
use std::io::{self, Write};
use std::path::Path;

/// Rule under each section header.
pub(crate) const SECTION_BAR: &str = "======================================";

/// Builds a [`DirNode`] tree from the flat walk entries.
///
/// The walk yields every parent directory before its children, so each entry's
/// parent node already exists when the entry is inserted. Entries that do not
/// resolve against the root (which should not happen with proper input) are
/// skipped.
pub(crate) fn build_dir_tree(root: &Path, entries: Vec<WalkedEntry>) -> DirNode {
    let mut tree = DirNode::new(base_name(root), root.to_path_buf());
    for entry in entries {
        if entry.path == tree.path {
            continue;
        }
        let Ok(relative) = entry.path.strip_prefix(root) else {
            continue;
        };
        let Some(parent) = node_for(&mut tree, relative.parent()) else {
            continue;
        };
        let name = base_name(&entry.path);
        if entry.is_dir {
            parent.dirs.push(DirNode::new(name, entry.path));
        } else {
            parent.files.push(FileNode {
                name,
                path: entry.path,
            });
        }
    }
    tree.sort();
    tree
}

/// Descends from the root node along the relative parent components.
fn node_for<'a>(tree: &'a mut DirNode, relative: Option<&Path>) -> Option<&'a mut DirNode> {
    let mut current = tree;
    if let Some(relative) = relative {
        for component in relative.components() {
            let name = component.as_os_str().to_string_lossy();
            current = current.dirs.iter_mut().find(|d| d.name == name)?;
        }
    }
    Some(current)
}

/// Writes the tree listing section: header, indented directory/file lines,
/// and the two blank lines that close the section.
///
/// Each nesting level indents by four spaces; a directory's files are listed
/// before its subdirectories.
pub fn write_tree<W: Write>(tree: &DirNode, out: &mut W) -> io::Result<()> {
    writeln!(out, "Árbol del directorio: {}", tree.path.display())?;
    writeln!(out, "{SECTION_BAR}")?;
    writeln!(out)?;
    write_node(tree, 0, out)?;
    writeln!(out)?;
    writeln!(out)
}

fn write_node<W: Write>(node: &DirNode, depth: usize, out: &mut W) -> io::Result<()> {
    let indent = "    ".repeat(depth);
    writeln!(out, "{indent}📂 {}/", node.name)?;
    for file in &node.files {
        writeln!(out, "{indent}    📄 {}", file.name)?;
    }
    for dir in &node.dirs {
        write_node(dir, depth + 1, out)?;
    }
    Ok(())
}
