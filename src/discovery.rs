use crate::error::PicasaError;
use crate::options::ScanOptions;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds every ini file below `root`, sorted by path.
///
/// Entries that cannot be read are logged and skipped.
pub fn find_ini_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, PicasaError> {
    if !root.is_dir() {
        return Err(PicasaError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    log::info!("Looking for ini files in {}", root.display());

    let mut walker = WalkDir::new(root).follow_links(options.follow_links);
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut found = Vec::new();
    for entry in walker.into_iter() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
            continue;
        }
        let is_ini = entry
            .file_name()
            .to_str()
            .is_some_and(|name| options.matches_file_name(name));
        if is_ini {
            log::debug!("Found {:?}", entry.path());
            found.push(entry.into_path());
        }
    }

    found.sort();
    log::info!("Found {} ini files", found.len());
    Ok(found)
}
