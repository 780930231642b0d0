//! Line-oriented reader for `.picasa.ini` files.
//!
//! A file is a run of sections. Every line that contains a bracketed token is
//! a header and switches the current [`Section`]; every other non-blank line is
//! a `key=value` pair applied to the document according to that section.
//!
//! ```text
//! [Picasa]
//! name=Summer 2019
//! date=43586.500000
//! [Contacts2]
//! 8e62398ebda8c1a5=Alice;;
//! [.album:e2bd6b9a3c5d]
//! name=Trip
//! date=2019-05-01T10:00:00+02:00
//! [IMG_0001.JPG]
//! star=yes
//! faces=rect64(3f845bcb59418507),8e62398ebda8c1a5
//! filters=enhance=1;crop64=1,30a730d2bf1ab897;
//! ```

use crate::error::PicasaError;
use crate::parse_fn::{
    decode_day_serial, decode_faces, decode_filter_chain, decode_iso_timestamp,
};
use crate::section::{classify_section, KnownSection, SectionKind};
use crate::structs::{Document, MediaFile};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const MERGE_SEPARATOR: &str = ", ";

/// The section the parser is in. Album and picture sections carry the key of
/// the entry their lines apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Picasa,
    Contacts,
    Contacts2,
    Encoding,
    Album(String),
    Picture(PathBuf),
    /// Lines are ignored until the next header.
    Skip,
}

impl From<SectionKind> for Section {
    fn from(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Known(KnownSection::Picasa) => Section::Picasa,
            SectionKind::Known(KnownSection::Contacts) => Section::Contacts,
            SectionKind::Known(KnownSection::Contacts2) => Section::Contacts2,
            SectionKind::Known(KnownSection::Encoding) => Section::Encoding,
            SectionKind::AlbumHeader(id) => Section::Album(id),
            SectionKind::PictureHeader(path) => Section::Picture(path),
            SectionKind::InvalidPath(_) | SectionKind::InvalidSection(_) => Section::Skip,
        }
    }
}

/// Parses the ini file at `path`.
///
/// If the folder holding the file does not exist, an empty document is
/// returned instead of an error. Malformed lines are logged and skipped; only
/// an unreadable file or a duplicate key in a strict section fails the parse.
pub fn parse(path: &Path) -> Result<Document, PicasaError> {
    let io_error = |source| PicasaError::Io {
        path: path.to_path_buf(),
        source,
    };
    let source_file = std::path::absolute(path).map_err(io_error)?;
    let folder = source_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    if !folder.is_dir() {
        log::warn!("Folder {} does not exist", folder.display());
        let mut document = Document::new(&source_file, folder);
        document.apply_default_name();
        return Ok(document);
    }

    let file = File::open(&source_file).map_err(io_error)?;
    parse_reader(BufReader::new(file), &source_file, &folder)
}

/// Parses ini content from any reader. Picture headers are resolved against
/// `folder`.
pub fn parse_reader<R: BufRead>(
    reader: R,
    source_file: &Path,
    folder: &Path,
) -> Result<Document, PicasaError> {
    let mut document = Document::new(source_file, folder.to_path_buf());
    let mut section = Section::Picasa;
    let mut name_seen = false;

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| PicasaError::Io {
            path: source_file.to_path_buf(),
            source,
        })?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim_end_matches('\r');
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line
        };

        name_seen |= section == Section::Picasa && is_name_line(line);
        section = process_line(section, line, &mut document)?;
    }

    if !name_seen {
        document.apply_default_name();
    }
    Ok(document)
}

/// Runs one line through the state machine and returns the state for the
/// next line.
fn process_line(
    section: Section,
    line: &str,
    document: &mut Document,
) -> Result<Section, PicasaError> {
    if let Some(header) = header_token(line) {
        let next = Section::from(classify_section(header, &document.folder));
        log::trace!("[{}] -> {:?}", header, next);
        return Ok(next);
    }
    if section == Section::Skip || line.trim().is_empty() {
        return Ok(section);
    }

    let (key, value) = split_key_value(line);
    match apply_line(&section, document, key, value) {
        Ok(()) => {}
        Err(err) if err.is_format_error() => log::warn!(
            "Ignoring '{}' in {}: {}",
            key,
            document.source_file.display(),
            err
        ),
        Err(err) => return Err(err),
    }
    Ok(section)
}

/// Returns the text between the first `[` and the last `]` of the line.
pub fn header_token(line: &str) -> Option<&str> {
    let start = line.find('[')?;
    let end = line.rfind(']')?;
    line.get(start + 1..end)
}

fn is_name_line(line: &str) -> bool {
    header_token(line).is_none() && split_key_value(line).0.eq_ignore_ascii_case("name")
}

/// Splits a data line on its first `=`. A line without one is all key.
pub fn split_key_value(line: &str) -> (&str, &str) {
    line.split_once('=').unwrap_or((line, ""))
}

/// Applies one key/value pair of the given section to the document.
///
/// Date decoding failures are returned as-is; the caller decides whether
/// they are fatal. A repeated key in a contacts table or in an album's extra
/// data is a [`PicasaError::DuplicateKey`].
pub fn apply_line(
    section: &Section,
    document: &mut Document,
    key: &str,
    value: &str,
) -> Result<(), PicasaError> {
    match section {
        Section::Picasa => apply_picasa(document, key, value)?,
        Section::Contacts => {
            if !insert_unique(&mut document.contacts, key, value) {
                return Err(duplicate_key(document, KnownSection::Contacts.name(), key));
            }
        }
        Section::Contacts2 => {
            if !insert_unique(&mut document.contacts2, key, value) {
                return Err(duplicate_key(document, KnownSection::Contacts2.name(), key));
            }
        }
        Section::Encoding => merge_value(&mut document.encoding, key, value),
        Section::Album(album_id) => apply_album(document, album_id, key, value)?,
        Section::Picture(path) => apply_picture(document, path, key, value),
        Section::Skip => {}
    }
    Ok(())
}

fn apply_picasa(document: &mut Document, key: &str, value: &str) -> Result<(), PicasaError> {
    match key.to_ascii_lowercase().as_str() {
        "name" => document.name = value.to_string(),
        "category" => document.categories.push(value.to_string()),
        "location" => document.location = Some(value.to_string()),
        "description" => document.description = Some(value.to_string()),
        "p2category" => document.p2_categories.push(value.to_string()),
        "date" => document.date = decode_day_serial(value)?,
        _ => merge_value(&mut document.extra_data, key, value),
    }
    Ok(())
}

fn apply_album(
    document: &mut Document,
    album_id: &str,
    key: &str,
    value: &str,
) -> Result<(), PicasaError> {
    let album = document.albums.entry(album_id.to_string()).or_default();

    // Albums repeat their own id as `token`.
    if key.eq_ignore_ascii_case("token") && value.to_lowercase() == album_id.to_lowercase() {
        return Ok(());
    }

    match key.to_ascii_lowercase().as_str() {
        "name" => album.name = value.to_string(),
        "date" => album.date = Some(decode_iso_timestamp(value)?),
        _ => {
            if !insert_unique(&mut album.extra_data, key, value) {
                let section = format!(".album:{album_id}");
                return Err(duplicate_key(document, &section, key));
            }
        }
    }
    Ok(())
}

fn apply_picture(document: &mut Document, path: &Path, key: &str, value: &str) {
    let picture = document
        .pictures
        .entry(path.to_path_buf())
        .or_insert_with(|| MediaFile {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            ..Default::default()
        });

    if key.starts_with("BKTag") || key == "backuphash" {
        return;
    }

    match key.to_ascii_lowercase().as_str() {
        "star" => picture.star = value == "yes",
        "caption" => picture.caption = Some(value.to_string()),
        "keywords" => {
            picture.keywords = value
                .split('.')
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect()
        }
        "faces" => picture.faces = decode_faces(value),
        "rotate" => picture.rotate = Some(value.to_string()),
        "filters" => picture.filters = decode_filter_chain(value),
        _ => match picture.data.entry(key.to_string()) {
            Entry::Occupied(_) => log::warn!(
                "Duplicate key '{}' for {} in {}, keeping the first value",
                key,
                path.display(),
                document.source_file.display()
            ),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
            }
        },
    }
}

/// Inserts the pair unless the key is taken. Returns whether it was inserted.
fn insert_unique(map: &mut BTreeMap<String, String>, key: &str, value: &str) -> bool {
    match map.entry(key.to_string()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value.to_string());
            true
        }
    }
}

fn merge_value(map: &mut BTreeMap<String, String>, key: &str, value: &str) {
    map.entry(key.to_string())
        .and_modify(|existing| {
            existing.push_str(MERGE_SEPARATOR);
            existing.push_str(value);
        })
        .or_insert_with(|| value.to_string());
}

fn duplicate_key(document: &Document, section: &str, key: &str) -> PicasaError {
    PicasaError::DuplicateKey {
        file: document.source_file.clone(),
        section: section.to_string(),
        key: key.to_string(),
    }
}
