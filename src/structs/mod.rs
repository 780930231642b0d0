pub mod album;
pub mod document;
pub mod media_file;

pub use album::Album;
pub use document::Document;
pub use media_file::{FaceData, Filter, MediaFile, Rectangle};
