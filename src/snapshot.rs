//! JSON export of parsed documents, and re-import of such exports.

use crate::error::PicasaError;
use crate::structs::Document;

pub fn to_json(document: &Document) -> Result<String, PicasaError> {
    Ok(serde_json::to_string(document)?)
}

pub fn to_json_pretty(document: &Document) -> Result<String, PicasaError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Reads a document back from [`to_json`] output. Errors name the JSON path
/// of the offending field.
pub fn from_json(json: &str) -> Result<Document, PicasaError> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let document = serde_path_to_error::deserialize(deserializer)?;
    Ok(document)
}
