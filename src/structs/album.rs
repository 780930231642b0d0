use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An album declared by a `[.album:<id>]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub date: Option<DateTime<FixedOffset>>,
    /// Any album key other than `name`, `date` and the self-referencing `token`.
    pub extra_data: BTreeMap<String, String>,
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "'{}' ({})", self.name, date.format("%A, %B %-d, %Y")),
            None => write!(f, "'{}'", self.name),
        }
    }
}
