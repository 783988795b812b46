/// Recognized ROM filename suffixes.
///
/// Matching is a plain case-sensitive suffix check. There is no
/// dot-position validation, so a file literally named `.gb` qualifies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomFilter {
    extensions: Vec<String>,
}

impl Default for RomFilter {
    fn default() -> Self {
        Self {
            extensions: vec![".gb".to_string(), ".gbc".to_string()],
        }
    }
}

impl RomFilter {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `name` ends with one of the recognized suffixes.
    pub fn matches(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
