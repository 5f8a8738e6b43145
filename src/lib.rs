//! # Arbol
//!
//! `arbol` is a library for recursively walking a directory tree, building a tree representation,
//! and writing a single text report with a visual tree listing followed by the contents of all
//! recognized text files, each preceded by a path header.
//!
//! Directories named in the ignored-directory set are pruned from the walk entirely; only files
//! whose extension is in the text-extension set have their content included. Both sets default to
//! a fixed compiled-in configuration and can be overridden through [`ArbolOptions`].
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use arbol::{ArbolBuilder, arbol};
//!
//! let options = ArbolBuilder::new("./proyecto")
//!     .ignore_dir("target")
//!     .text_extension(".toml")
//!     .build();
//!
//! let mut report = Vec::new();
//! arbol(&options, &mut report).expect("Failed to scan directory");
//!
//! println!("{}", String::from_utf8_lossy(&report));
//! ```

mod content;
mod engine;
mod error;
mod options;
mod tree;
mod types;

pub use content::write_contents;
pub use engine::{arbol, output_file_name, scan};
pub use error::ArbolError;
pub use options::{ArbolBuilder, ArbolOptions, default_ignored_dirs, default_text_extensions};
pub use tree::write_tree;
pub use types::{DirNode, FileNode};
