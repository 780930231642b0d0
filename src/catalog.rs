//! Views over a set of parsed folders.

use crate::batch::{self, BatchOutcome};
use crate::discovery::find_ini_files;
use crate::error::PicasaError;
use crate::options::ScanOptions;
use crate::structs::{Album, Document};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// The documents of a photo tree, plus the files that could not be parsed.
#[derive(Debug, Default)]
pub struct Catalog {
    documents: Vec<Document>,
    failures: Vec<(PathBuf, PicasaError)>,
}

impl Catalog {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            failures: Vec::new(),
        }
    }

    /// Finds and parses every ini file below `root`.
    ///
    /// Fails only if `root` is not a directory; per-file failures are kept in
    /// [`Catalog::failures`].
    pub fn scan(root: &Path, options: &ScanOptions) -> Result<Self, PicasaError> {
        let files = find_ini_files(root, options)?;
        Ok(batch::parse_all(files, options.parallel).into())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn failures(&self) -> &[(PathBuf, PicasaError)] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every category and P2 category, each once, in order of first
    /// appearance. All `category` values come before all `P2category` values.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.documents
            .iter()
            .flat_map(|d| d.categories.iter())
            .chain(self.documents.iter().flat_map(|d| d.p2_categories.iter()))
            .map(String::as_str)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Albums of all documents by id. The first document declaring an id wins.
    pub fn album_index(&self) -> BTreeMap<&str, &Album> {
        let mut index = BTreeMap::new();
        for document in &self.documents {
            for (id, album) in &document.albums {
                index.entry(id.as_str()).or_insert(album);
            }
        }
        index
    }
}

impl From<BatchOutcome> for Catalog {
    fn from(outcome: BatchOutcome) -> Self {
        Self {
            documents: outcome.documents,
            failures: outcome.failures,
        }
    }
}
