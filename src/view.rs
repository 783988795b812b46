// Per-view browsing context - one visited directory, immutable once opened
use crate::entry::Entry;
use crate::filter::RomFilter;
use crate::io::read_directory;
use crate::navigation::{self, NavigationDecision};
use std::path::{Path, PathBuf};

/// A browser scoped to a single directory.
///
/// The view captures the path and its filtered entry list at open time and
/// never mutates them; descending means opening a fresh view on the
/// decision's path. There is no shared current-path state anywhere.
pub struct BrowserView {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl BrowserView {
    /// Open a view on `path`.
    ///
    /// A location that is unreadable or does not exist yields a view with no
    /// entries; callers see the same thing as an empty directory.
    pub fn open(path: impl Into<PathBuf>, filter: &RomFilter) -> Self {
        let path = path.into();
        let entries = read_directory(&path, filter).unwrap_or_default();
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display labels for the renderer, in enumeration order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::label).collect()
    }

    /// Title line for this view, app name plus current location.
    pub fn title(&self) -> String {
        format!("rombrowse - {}", self.path.display())
    }

    /// Decide what the tap at `index` means.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for [`entries`](Self::entries).
    pub fn select(&self, index: usize) -> NavigationDecision {
        navigation::select(&self.path, &self.entries, index)
    }
}
