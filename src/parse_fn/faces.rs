use crate::parse_fn::rect64::decode_rectangle;
use crate::structs::FaceData;

/// Decodes the `faces` key: `rect64(...),<contact id>` pairs joined by `;`.
///
/// Entries that do not contain exactly one comma are dropped. An entry whose
/// rectangle cannot be decoded is kept without a rectangle.
pub fn decode_faces(raw: &str) -> Vec<FaceData> {
    raw.split(';')
        .filter_map(|entry| {
            let (rect, contact) = entry.split_once(',')?;
            if contact.contains(',') {
                return None;
            }
            let rectangle = decode_rectangle(rect);
            if rectangle.is_none() {
                log::warn!("Undecodable face rectangle '{}'", rect);
            }
            Some(FaceData {
                rectangle,
                contact: contact.to_string(),
            })
        })
        .collect()
}
