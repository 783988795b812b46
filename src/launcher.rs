use std::io;
use std::path::Path;

/// External consumer of a launched file.
///
/// The browser hands over a path and nothing else; whether the launch
/// succeeds is invisible to it beyond the immediate handoff error.
pub trait Launcher {
    fn launch(&self, path: &Path) -> io::Result<()>;
}

/// Opens the file with the platform's default handler.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}
