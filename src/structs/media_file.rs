use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Normalized edge coordinates, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A face tag: where the face is, and who it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceData {
    /// `None` when the `rect64(...)` token could not be decoded.
    pub rectangle: Option<Rectangle>,
    /// Key into the document's contact tables. Not checked against them.
    pub contact: String,
}

/// One applied edit from a picture's filter chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub command: String,
    pub parameters: Vec<String>,
}

/// Edit history recorded for one picture of the folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub file_name: String,

    /// Added if the image was starred in Picasa.
    pub star: bool,

    /// Only written for non-jpeg media; jpegs carry it as IPTC caption.
    pub caption: Option<String>,

    /// Only written for non-jpeg media; jpegs carry them as IPTC keywords.
    pub keywords: Vec<String>,

    pub faces: Vec<FaceData>,

    /// Kept verbatim, e.g. `rotate(1)`.
    pub rotate: Option<String>,

    /// Edit history, in the order the edits were applied.
    pub filters: Vec<Filter>,

    pub data: BTreeMap<String, String>,
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {:<2} {:<2} {:<2}.",
            self.file_name,
            self.faces.len(),
            self.filters.len(),
            self.data.len()
        )
    }
}
