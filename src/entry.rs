use std::fs;
use std::path::PathBuf;

/// One directory child considered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    /// Build an entry from a child path produced by directory enumeration.
    ///
    /// Returns `None` for paths with no final component. A child whose
    /// metadata cannot be read is kept and treated as a non-directory.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);

        Some(Self { path, name, is_dir })
    }

    /// Display label handed to the renderer.
    pub fn label(&self) -> &str {
        &self.name
    }
}
