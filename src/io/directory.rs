use crate::entry::Entry;
use crate::filter::RomFilter;
use std::fs;
use std::io;
use std::path::Path;

/// Enumerate the immediate children of `path`, keeping subdirectories and
/// files whose names the filter recognizes.
///
/// Entries come back in filesystem enumeration order; no sorting, no
/// recursion, no symlink resolution beyond what the host filesystem does.
pub fn read_directory(path: &Path, filter: &RomFilter) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path)?;

    for child in read_dir.flatten() {
        if let Some(entry) = Entry::from_path(child.path()) {
            if entry.is_dir || filter.matches(&entry.name) {
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}
