//! Minimal ROM-file directory browser.
//!
//! Lists one directory at a time, keeping subdirectories and files with
//! recognized ROM extensions, and turns a tapped row into a
//! [`NavigationDecision`]: descend into the subdirectory or hand the file
//! path to an external [`Launcher`]. Rendering is the caller's job; this
//! crate only supplies display labels and interprets the selected index.
//!
//! The caller loop is: open a [`BrowserView`] on a path (the configured
//! root if none was supplied), render its labels, feed the tapped index to
//! [`BrowserView::select`], then either open a fresh view on the `Descend`
//! path or pass the `Launch` path to a launcher. Going back up is the host
//! navigation stack's business, not this crate's.

mod config;
mod entry;
mod filter;
mod io;
mod launcher;
mod navigation;
mod view;

pub use config::{Config, DEFAULT_ROOT};
pub use entry::Entry;
pub use filter::RomFilter;
pub use io::read_directory;
pub use launcher::{Launcher, SystemLauncher};
pub use navigation::{select, NavigationDecision};
pub use view::BrowserView;
