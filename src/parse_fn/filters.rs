//! The `filters` key of a picture section.
//!
//! Picasa records every edit applied to a picture as one entry of a
//! `;`-separated chain, e.g.
//!
//! ```text
//! filters=crop64=1,30a730d2bf1ab897;enhance=1;tint=1,0.500000,ffffff;
//! ```
//!
//! Each entry is a command followed by positional tokens, separated by `=`
//! and `,`:
//!
//! | command | tokens after the command |
//! |---------|--------------------------|
//! | `crop64` | enable, packed crop rectangle (hex) |
//! | `tilt` | enable, angle, scale |
//! | `redeye` | enable |
//! | `enhance` | enable |
//! | `autolight` | enable |
//! | `autocolor` | enable |
//! | `retouch` | enable |
//! | `finetune2` | enable, fill light, highlights, shadows, neutral color, temperature |
//! | `unsharp2` | enable, amount |
//! | `sepia` | enable |
//! | `bw` | enable |
//! | `warm` | enable |
//! | `grain2` | enable |
//! | `tint` | enable, preserve, color |
//! | `sat` | enable, amount |
//! | `radblur` | enable, x, y, radius, amount |
//! | `glow2` | enable, intensity, radius |
//! | `ansel` | enable, color |
//! | `radsat` | enable, x, y, radius, amount |
//! | `dir_tint` | enable, x, y, color, angle |
//!
//! The last token of every entry is left out of [`Filter::parameters`].

use crate::structs::Filter;

/// Decodes a filter chain into the edits it records, in order.
///
/// An empty entry stops decoding: nothing after it is returned.
pub fn decode_filter_chain(raw: &str) -> Vec<Filter> {
    let mut filters = Vec::new();

    for entry in raw.split(';') {
        let tokens = tokenize(entry);
        let Some((command, rest)) = tokens.split_first() else {
            break;
        };

        let parameters = match rest.split_last() {
            Some((_last, kept)) => kept.iter().map(|t| t.to_string()).collect(),
            None => Vec::new(),
        };

        filters.push(Filter {
            command: command.to_string(),
            parameters,
        });
    }

    filters
}

fn tokenize(entry: &str) -> Vec<&str> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Vec::new();
    }
    entry.split(['=', ',']).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(filters: &[Filter]) -> Vec<&str> {
        filters.iter().map(|f| f.command.as_str()).collect()
    }

    #[test]
    fn test_two_entries() {
        let filters = decode_filter_chain("enhance=1;crop64=1,30a730d2bf1ab897");
        assert_eq!(commands(&filters), ["enhance", "crop64"]);

        // Only the enable flag survives; the trailing rectangle token is dropped.
        assert_eq!(filters[1].parameters, ["1"]);
        assert!(filters[0].parameters.is_empty());
    }

    #[test]
    fn test_last_token_is_excluded() {
        let filters = decode_filter_chain("finetune2=1,0.000000,0.000000,0.190000,00000000,0.000000;");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].command, "finetune2");
        assert_eq!(
            filters[0].parameters,
            ["1", "0.000000", "0.000000", "0.190000", "00000000"]
        );
    }

    #[test]
    fn test_trailing_separator_ends_chain() {
        let filters = decode_filter_chain("enhance=1;autolight=1;");
        assert_eq!(commands(&filters), ["enhance", "autolight"]);
    }

    #[test]
    fn test_empty_entry_halts_chain() {
        let filters = decode_filter_chain("sepia=1;;bw=1;warm=1");
        assert_eq!(commands(&filters), ["sepia"]);

        assert!(decode_filter_chain("").is_empty());
        assert!(decode_filter_chain(";enhance=1").is_empty());
    }

    #[test]
    fn test_comma_only_entry() {
        let filters = decode_filter_chain("tint,1,0.500000,ffffff");
        assert_eq!(filters[0].command, "tint");
        assert_eq!(filters[0].parameters, ["1", "0.500000"]);
    }

    #[test]
    fn test_bare_command() {
        let filters = decode_filter_chain("redeye");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].command, "redeye");
        assert!(filters[0].parameters.is_empty());
    }
}
