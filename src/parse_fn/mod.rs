//! Decoders for the small value encodings embedded in `.picasa.ini` files.

pub mod date;
pub mod faces;
pub mod filters;
pub mod rect64;

pub use date::{decode_day_serial, decode_iso_timestamp};
pub use faces::decode_faces;
pub use filters::decode_filter_chain;
pub use rect64::decode_rectangle;
