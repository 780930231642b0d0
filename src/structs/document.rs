use crate::structs::{Album, MediaFile};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything one `.picasa.ini` file records about its folder.
///
/// Documents are produced by a single parse pass and are not mutated
/// afterwards. Two parses of an unchanged file compare equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The ini file this document was read from.
    pub source_file: PathBuf,

    /// The `name` key, or the folder's base name when the file has none.
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub folder: PathBuf,

    /// Decoded from the day-serial `date` key. Unix epoch when absent.
    pub date: NaiveDateTime,

    pub categories: Vec<String>,
    pub p2_categories: Vec<String>,

    /// Unrecognized `[Picasa]` keys. Repeated keys are joined with `", "`.
    pub extra_data: BTreeMap<String, String>,

    pub contacts: BTreeMap<String, String>,
    pub contacts2: BTreeMap<String, String>,

    /// `[encoding]` section. Repeated keys are joined with `", "`.
    pub encoding: BTreeMap<String, String>,

    pub albums: BTreeMap<String, Album>,

    /// Keyed by the absolute path of the picture.
    pub pictures: BTreeMap<PathBuf, MediaFile>,
}

impl Document {
    pub(crate) fn new(source_file: &Path, folder: PathBuf) -> Self {
        Self {
            source_file: source_file.to_path_buf(),
            folder,
            ..Default::default()
        }
    }

    /// Looks a picture up by its file name inside the folder.
    pub fn picture(&self, file_name: &str) -> Option<&MediaFile> {
        self.pictures.get(&self.folder.join(file_name))
    }

    /// Names the document after its folder. Only called when the file has no
    /// `name` key; an explicit empty `name=` stays empty.
    pub(crate) fn apply_default_name(&mut self) {
        self.name = self
            .folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
}
