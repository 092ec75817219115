// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Path that stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// Convenience helpers for opening inputs with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Open `path` for line reading; `-` yields locked standard input.
    pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
        if path.as_os_str() == STDIN_MARKER {
            return Ok(Box::new(io::stdin().lock()));
        }
        Ok(Box::new(Self::open_buffered(path)?))
    }
}
