//! Command-line interface for arbol.
//!
//! Takes a single folder path, scans it, and writes the report file
//! `arbol_y_codigo_<carpeta>.txt` into the current working directory.

use arbol::{ArbolBuilder, ArbolError, output_file_name, scan, write_contents, write_tree};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// arbol — vuelca el árbol de un directorio y el contenido de sus archivos de texto
#[derive(Parser)]
#[command(
    name = "arbol",
    version,
    about,
    long_about = None,
    after_help = "Puedes arrastrar una carpeta a la terminal después de escribir el nombre del programa."
)]
struct Cli {
    /// Carpeta a escanear
    folder: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if !cli.folder.is_dir() {
        eprintln!(
            "Error: La ruta '{}' no es un directorio válido.",
            cli.folder.display()
        );
        exit(1);
    }

    if let Err(e) = run(&cli.folder) {
        eprintln!("Ocurrió un error inesperado: {}", e);
        exit(1);
    }
}

fn run(folder: &Path) -> Result<(), ArbolError> {
    let options = ArbolBuilder::new(folder).build();
    let output_filename = output_file_name(folder);

    let file =
        File::create(&output_filename).map_err(|e| ArbolError::io(&output_filename, e))?;
    let mut out = BufWriter::new(file);

    println!("Generando árbol para: {}...", folder.display());
    let tree = scan(&options)?;
    write_tree(&tree, &mut out)?;

    println!("Añadiendo contenido de los archivos...");
    write_contents(&tree, &options, &mut out)?;
    out.flush()?;

    let banner = "-".repeat(50);
    println!("{banner}");
    println!("✅ ¡Éxito! El archivo '{}' ha sido creado.", output_filename);
    let cwd = std::env::current_dir()?;
    println!("   Se encuentra en: {}", cwd.display());
    println!("{banner}");
    Ok(())
}
