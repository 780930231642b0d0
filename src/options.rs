use serde::Deserialize;

/// How folder trees are searched and parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Ini file names to pick up, compared ignoring ASCII case.
    pub file_names: Vec<String>,
    pub follow_links: bool,
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
    /// Parse files on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            file_names: vec!["picasa.ini".to_string(), ".picasa.ini".to_string()],
            follow_links: false,
            max_depth: None,
            parallel: true,
        }
    }
}

impl ScanOptions {
    pub fn with_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub(crate) fn matches_file_name(&self, name: &str) -> bool {
        self.file_names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
