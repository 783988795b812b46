// Navigation outcome - descend into a subdirectory or hand a file off
use crate::entry::Entry;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Re-scope the browser to this subdirectory.
    Descend(PathBuf),
    /// Hand this file path to an external launcher.
    Launch(PathBuf),
}

/// Resolve the selected entry against the directory that produced it.
///
/// The child path is `path` joined with the entry name through exactly one
/// separator, whether or not `path` already ends with one. Directory-ness is
/// probed fresh here rather than trusted from the listing-time flag, so a
/// child that changed kind (or vanished) between listing and selection is
/// decided on its current state.
///
/// # Panics
///
/// Panics if `index` is out of bounds. Callers must only pass indices
/// obtained from rendering this exact entry list.
pub fn select(path: &Path, entries: &[Entry], index: usize) -> NavigationDecision {
    let child = path.join(&entries[index].name);
    if child.is_dir() {
        NavigationDecision::Descend(child)
    } else {
        NavigationDecision::Launch(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RomFilter;
    use crate::io::read_directory;
    use std::fs;

    #[test]
    fn test_directory_entry_descends() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Roms")).unwrap();

        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        let decision = select(dir.path(), &entries, 0);
        assert_eq!(decision, NavigationDecision::Descend(dir.path().join("Roms")));
    }

    #[test]
    fn test_file_entry_launches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("game.gb"), b"rom").unwrap();

        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        let decision = select(dir.path(), &entries, 0);
        assert_eq!(decision, NavigationDecision::Launch(dir.path().join("game.gb")));
    }

    #[test]
    fn test_trailing_separator_joins_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Roms")).unwrap();

        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        let with_sep = PathBuf::from(format!("{}/", dir.path().display()));
        let expected = format!("{}/Roms", dir.path().display());

        match select(&with_sep, &entries, 0) {
            NavigationDecision::Descend(child) => {
                assert_eq!(child.display().to_string(), expected);
            }
            other => panic!("expected Descend, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_is_probed_at_selection_time() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Roms")).unwrap();

        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        assert!(entries[0].is_dir);

        // The directory is replaced by a file after listing; the stale
        // listing-time flag must not win.
        fs::remove_dir(dir.path().join("Roms")).unwrap();
        fs::write(dir.path().join("Roms"), b"impostor").unwrap();

        let decision = select(dir.path(), &entries, 0);
        assert_eq!(decision, NavigationDecision::Launch(dir.path().join("Roms")));
    }

    #[test]
    fn test_vanished_entry_launches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("game.gb"), b"rom").unwrap();

        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        fs::remove_file(dir.path().join("game.gb")).unwrap();

        // A gone child no longer stats as a directory, so it launches; what
        // the launcher does with a dead path is not this layer's concern.
        let decision = select(dir.path(), &entries, 0);
        assert_eq!(decision, NavigationDecision::Launch(dir.path().join("game.gb")));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_index_panics() {
        let dir = tempfile::tempdir().unwrap();
        let entries = read_directory(dir.path(), &RomFilter::default()).unwrap();
        select(dir.path(), &entries, 0);
    }
}
