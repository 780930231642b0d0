use crate::error::PicasaError;
use crate::parser;
use crate::structs::Document;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Result of parsing many ini files. A failing file never stops the others.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Sorted by source file.
    pub documents: Vec<Document>,
    pub failures: Vec<(PathBuf, PicasaError)>,
}

/// Parses every path, on the rayon pool when `parallel` is set.
pub fn parse_all<I, P>(paths: I, parallel: bool) -> BatchOutcome
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let paths: Vec<PathBuf> = paths
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();
    log::info!("Parsing {} ini files", paths.len());

    let results: Vec<(PathBuf, Result<Document, PicasaError>)> = if parallel {
        paths
            .into_par_iter()
            .map(|path| {
                let result = parser::parse(&path);
                (path, result)
            })
            .collect()
    } else {
        paths
            .into_iter()
            .map(|path| {
                let result = parser::parse(&path);
                (path, result)
            })
            .collect()
    };

    let mut outcome = BatchOutcome::default();
    for (path, result) in results {
        match result {
            Ok(document) => outcome.documents.push(document),
            Err(e) => {
                log::warn!("Failed to parse {:?}: {}", path, e);
                outcome.failures.push((path, e));
            }
        }
    }
    outcome
        .documents
        .sort_by(|a, b| a.source_file.cmp(&b.source_file));

    log::info!(
        "Parsed {} documents, {} failed",
        outcome.documents.len(),
        outcome.failures.len()
    );
    outcome
}
