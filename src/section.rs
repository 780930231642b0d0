use std::path::{Path, PathBuf};

/// The fixed section names of a `.picasa.ini` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownSection {
    Picasa,
    Contacts,
    Contacts2,
    Encoding,
}

impl KnownSection {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "PICASA" => Some(Self::Picasa),
            "CONTACTS" => Some(Self::Contacts),
            "CONTACTS2" => Some(Self::Contacts2),
            "ENCODING" => Some(Self::Encoding),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Picasa => "Picasa",
            Self::Contacts => "Contacts",
            Self::Contacts2 => "Contacts2",
            Self::Encoding => "encoding",
        }
    }
}

/// What a bracketed header line refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Known(KnownSection),
    /// `[.album:<id>]`. The id keeps its original case.
    AlbumHeader(String),
    /// A picture of the folder that exists on disk.
    PictureHeader(PathBuf),
    /// Looks like a file name, but the file is missing.
    InvalidPath(PathBuf),
    InvalidSection(String),
}

/// Classifies the text between the brackets of a header line.
///
/// Fixed names win over the album prefix, which wins over the file name
/// interpretation. Name matching ignores case. Picture headers are checked
/// against the filesystem, relative to `base_folder`.
pub fn classify_section(header: &str, base_folder: &Path) -> SectionKind {
    if let Some(known) = KnownSection::from_name(header) {
        return SectionKind::Known(known);
    }

    if starts_with_ignore_case(header, ".ALBUM") {
        let album_id = header
            .split_once(':')
            .map(|(_, id)| id)
            .unwrap_or_default();
        return SectionKind::AlbumHeader(album_id.to_string());
    }

    let picture_path = base_folder.join(header);
    if has_extension(&picture_path) {
        if picture_path.is_file() {
            SectionKind::PictureHeader(picture_path)
        } else {
            log::warn!("File {} does not exist", picture_path.display());
            SectionKind::InvalidPath(picture_path)
        }
    } else {
        log::warn!(
            "Invalid section [{}] in {}",
            header,
            base_folder.display()
        );
        SectionKind::InvalidSection(header.to_string())
    }
}

/// A file name has an extension when it contains a `.` that is not its last
/// character. Unlike [`Path::extension`], `.hidden` counts and `IMG.` does not.
fn has_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|dot| dot + 1 < name.len()))
        .unwrap_or(false)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
