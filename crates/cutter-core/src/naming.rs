use crate::error::{CutterError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension of the first chunk in every set (`<base>.p0`).
pub const FIRST_CHUNK_EXTENSION: &str = "p0";

/// A set of chunk files sharing one base name: `<dir>/<base>.p<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSet {
    dir: PathBuf,
    base: OsString,
}

impl ChunkSet {
    /// Chunks of `source` written into `folder`, named after the source file.
    pub fn for_source(source: &Path, folder: &Path) -> Result<Self> {
        let base = source
            .file_name()
            .ok_or_else(|| CutterError::FileNotFound(source.display().to_string()))?;
        Ok(Self {
            dir: folder.to_path_buf(),
            base: base.to_os_string(),
        })
    }

    /// The set that `first` (a `.p0` file) belongs to.
    pub fn from_first_chunk(first: &Path) -> Result<Self> {
        let not_zero = || CutterError::NotChunkZero(first.display().to_string());

        // `<base>.p0` splits into stem `<base>` and extension `p0`.
        if first.extension() != Some(OsStr::new(FIRST_CHUNK_EXTENSION)) {
            return Err(not_zero());
        }
        let base = first.file_stem().ok_or_else(not_zero)?;

        Ok(Self {
            dir: first.parent().map(Path::to_path_buf).unwrap_or_default(),
            base: base.to_os_string(),
        })
    }

    /// Name of the original file.
    pub fn base_name(&self) -> &OsStr {
        &self.base
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of chunk `index`: decimal, zero-based, not padded.
    pub fn chunk_path(&self, index: u32) -> PathBuf {
        let mut name = self.base.clone();
        name.push(format!(".p{index}"));
        self.dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_chunks_land_in_folder() {
        let set = ChunkSet::for_source(Path::new("/data/in/movie.mkv"), Path::new("/out")).unwrap();
        assert_eq!(set.base_name(), "movie.mkv");
        assert_eq!(set.chunk_path(0), PathBuf::from("/out/movie.mkv.p0"));
        assert_eq!(set.chunk_path(12), PathBuf::from("/out/movie.mkv.p12"));
    }

    #[test]
    fn source_without_file_name() {
        assert!(ChunkSet::for_source(Path::new("/"), Path::new("/out")).is_err());
    }

    #[test]
    fn first_chunk_strips_suffix() {
        let set = ChunkSet::from_first_chunk(Path::new("/out/data.txt.p0")).unwrap();
        assert_eq!(set.base_name(), "data.txt");
        assert_eq!(set.dir(), Path::new("/out"));
        assert_eq!(set.chunk_path(1), PathBuf::from("/out/data.txt.p1"));
    }

    #[test]
    fn first_chunk_relative_path() {
        let set = ChunkSet::from_first_chunk(Path::new("data.txt.p0")).unwrap();
        assert_eq!(set.chunk_path(3), PathBuf::from("data.txt.p3"));
    }

    #[cfg(unix)]
    #[test]
    fn first_chunk_with_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.txt.p0");
        let set = ChunkSet::from_first_chunk(&Path::new("/out").join(name)).unwrap();
        assert_eq!(set.base_name(), OsStr::from_bytes(b"caf\xe9.txt"));
        assert_eq!(
            set.chunk_path(2),
            Path::new("/out").join(OsStr::from_bytes(b"caf\xe9.txt.p2"))
        );
    }

    #[test]
    fn rejects_non_zero_chunk() {
        for path in ["/out/data.txt.p1", "/out/data.txt.p10", "/out/data.txt", "/out/data.p00x"] {
            assert!(matches!(
                ChunkSet::from_first_chunk(Path::new(path)),
                Err(CutterError::NotChunkZero(_))
            ));
        }
    }
}
