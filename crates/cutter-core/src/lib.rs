//! Split files into numbered, header-prefixed chunk files and join them back.

pub mod config;
pub mod cut;
pub mod error;
pub mod header;
pub mod join;
pub mod naming;

pub use cut::{ChunkInfo, CutReport, cut, cut_with_progress};
pub use error::{CutterError, ErrorKind, Result};
pub use header::{ChunkHeader, FORMAT_ID, FORMAT_VERSION, HEADER_SIZE, read_header};
pub use join::{JoinReport, Joiner, join};
pub use naming::ChunkSet;

use std::fs::File;
use std::io;
use std::path::Path;

/// Open `path` for reading, mapping a missing file to [`CutterError::FileNotFound`].
pub(crate) fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CutterError::FileNotFound(path.display().to_string()),
        _ => CutterError::Io(e),
    })
}
