//! Content aggregation: the per-file header blocks appended after the tree listing.

use crate::options::ArbolOptions;
use crate::tree::SECTION_BAR;
use crate::types::DirNode;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Writes the file-contents section: header, then one block per eligible file
/// in the same directory order as the tree listing.
///
/// A file that cannot be read (I/O failure or invalid UTF-8) gets an inline
/// error note in place of its content; the run continues with the next file.
/// Errors writing to `out` itself are fatal and propagate.
pub fn write_contents<W: Write>(
    tree: &DirNode,
    options: &ArbolOptions,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Contenido de los archivos")?;
    writeln!(out, "{SECTION_BAR}")?;
    writeln!(out)?;
    let rule = "-".repeat(80);
    write_dir(tree, options, &rule, out)
}

fn write_dir<W: Write>(
    node: &DirNode,
    options: &ArbolOptions,
    rule: &str,
    out: &mut W,
) -> io::Result<()> {
    for file in &node.files {
        if !options.is_text_file(&file.path) {
            continue;
        }
        writeln!(out, "{rule}")?;
        writeln!(out, "📄 Archivo: {}", file.path.display())?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        match read_text(&file.path) {
            Ok(text) => {
                out.write_all(text.as_bytes())?;
                out.write_all(b"\n\n")?;
            }
            Err(message) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Failed to read {}: {}", file.path.display(), message);
                writeln!(out, "*** No se pudo leer el archivo: {message} ***")?;
                writeln!(out)?;
            }
        }
    }
    for dir in &node.dirs {
        write_dir(dir, options, rule, out)?;
    }
    Ok(())
}

/// Reads a file as strict UTF-8; any failure is reported as a display message
/// for the inline error note.
fn read_text(path: &Path) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}
