use arbol::{ArbolBuilder, ArbolError, arbol, output_file_name, scan};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn report_for(options: &arbol::ArbolOptions) -> String {
    let mut out = Vec::new();
    arbol(options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_output_file_name() {
    assert_eq!(
        output_file_name(Path::new("/tmp/proyecto")),
        "arbol_y_codigo_proyecto.txt"
    );
}

#[test]
fn test_output_file_name_strips_trailing_separator() {
    assert_eq!(
        output_file_name(Path::new("/tmp/proyecto/")),
        "arbol_y_codigo_proyecto.txt"
    );
}

#[test]
fn test_ignored_dirs_pruned() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.py"), "x = 1").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/ignored.js"), "no").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains("keep.py"));
    assert!(!report.contains("node_modules"));
    assert!(!report.contains("ignored.js"));
}

#[test]
fn test_file_named_like_ignored_dir_is_kept() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("build"), "not a directory").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains("📄 build"));
}

#[test]
fn test_binary_extension_listed_but_not_read() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x=1").unwrap();
    fs::write(dir.path().join("b.bin"), [0u8, 159, 146, 150]).unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains("x=1"));
    // In the tree listing only, never in a content block.
    assert_eq!(report.matches("b.bin").count(), 1);
}

#[test]
fn test_invalid_utf8_gets_error_note_and_run_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("b.py"), "despues = True").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains("*** No se pudo leer el archivo:"));
    assert!(report.contains("despues = True"));
}

#[test]
fn test_extension_matching_is_case_insensitive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("UPPER.PY"), "X = 2").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains("X = 2"));
}

#[test]
fn test_file_without_extension_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Makefile"), "all:").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert_eq!(report.matches("Makefile").count(), 1);
    assert!(!report.contains("all:"));
}

#[test]
fn test_hidden_files_are_listed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "target/").unwrap();
    let report = report_for(&ArbolBuilder::new(dir.path()).build());
    assert!(report.contains(".gitignore"));
}

#[test]
fn test_builder_overrides() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn a() {}").unwrap();
    fs::write(dir.path().join("b.py"), "b = 1").unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/out.rs"), "fn out() {}").unwrap();
    let options = ArbolBuilder::new(dir.path())
        .text_extensions(HashSet::from([".rs".to_string()]))
        .ignore_dir("target")
        .build();
    let report = report_for(&options);
    assert!(report.contains("fn a() {}"));
    assert!(!report.contains("b = 1"));
    assert!(!report.contains("fn out() {}"));
}

#[test]
fn test_builder_normalizes_added_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notas.TOML"), "clave = 1").unwrap();
    let options = ArbolBuilder::new(dir.path()).text_extension("toml").build();
    assert!(options.text_extensions.contains(".toml"));
    let report = report_for(&options);
    assert!(report.contains("clave = 1"));
}

#[test]
fn test_scan_rejects_missing_root() {
    let dir = tempdir().unwrap();
    let options = ArbolBuilder::new(dir.path().join("no_existe")).build();
    match scan(&options) {
        Err(ArbolError::InvalidPath(_)) => {}
        other => panic!("expected InvalidPath, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_scan_rejects_regular_file_root() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("solo.txt");
    fs::write(&file, "hola").unwrap();
    let options = ArbolBuilder::new(&file).build();
    assert!(matches!(scan(&options), Err(ArbolError::InvalidPath(_))));
}
