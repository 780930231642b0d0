//! # picasa_ini
//!
//! A reader for the `.picasa.ini` files Picasa leaves in every photo folder.
//!
//! Each file records the folder's own metadata (`[Picasa]`), contact tables
//! (`[Contacts]`, `[Contacts2]`), albums (`[.album:<id>]`) and, per picture
//! (`[IMG_0001.JPG]`), stars, captions, face tags and the chain of edits
//! applied to it. This crate turns one such file into a typed [`Document`],
//! and a whole photo tree into a [`Catalog`].
//!
//! Diagnostics (missing pictures, unknown sections, undecodable values) are
//! reported through the [`log`] facade; install any logger to see them.
//!
//! ## Parsing one folder
//!
//! ```no_run
//! use picasa_ini::{parse, PicasaError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), PicasaError> {
//!     let document = parse(Path::new("photos/2019 Trip/.picasa.ini"))?;
//!     println!("{} ({})", document.name, document.date);
//!
//!     for (path, picture) in &document.pictures {
//!         if picture.star {
//!             println!("starred: {}", path.display());
//!         }
//!         for face in &picture.faces {
//!             let who = document
//!                 .contacts2
//!                 .get(&face.contact)
//!                 .map(String::as_str)
//!                 .unwrap_or("unknown");
//!             println!("  {} at {:?}", who, face.rectangle);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scanning a tree
//!
//! ```no_run
//! use picasa_ini::{Catalog, PicasaError, ScanOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), PicasaError> {
//!     let catalog = Catalog::scan(Path::new("photos"), &ScanOptions::default())?;
//!     for category in catalog.categories() {
//!         println!("{}", category);
//!     }
//!     for (id, album) in catalog.album_index() {
//!         println!("{}:{}", id, album);
//!     }
//!     for (path, error) in catalog.failures() {
//!         eprintln!("{}: {}", path.display(), error);
//!     }
//!     Ok(())
//! }
//! ```

// Public API
mod error;

pub use error::PicasaError;

pub mod batch;
pub mod catalog;
pub mod discovery;
pub mod options;
pub mod parse_fn;
pub mod parser;
pub mod section;
pub mod snapshot;
pub mod structs;

pub use catalog::Catalog;
pub use options::ScanOptions;
pub use parser::parse;
pub use section::{classify_section, SectionKind};
pub use structs::{Album, Document, FaceData, Filter, MediaFile, Rectangle};
