use crate::error::{CutterError, Result};
use crate::header::ChunkHeader;
use crate::naming::ChunkSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// One chunk file written by a cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfo {
    pub index: u32,
    pub path: PathBuf,
    /// Offset of the payload within the source file.
    pub offset: u64,
    /// Payload length, excluding the header.
    pub len: u64,
}

/// Outcome of a successful cut.
#[derive(Debug, Clone)]
pub struct CutReport {
    pub source: PathBuf,
    pub source_size: u64,
    pub chunk_size: u64,
    pub chunks: Vec<ChunkInfo>,
}

/// Split `source` into `chunks` chunk files inside `folder`.
pub fn cut(source: &Path, folder: &Path, chunks: u32) -> Result<CutReport> {
    cut_with_progress(source, folder, chunks, |_| {})
}

/// Like [`cut`], calling `on_chunk` after each chunk file is complete.
pub fn cut_with_progress<F>(
    source: &Path,
    folder: &Path,
    chunks: u32,
    mut on_chunk: F,
) -> Result<CutReport>
where
    F: FnMut(&ChunkInfo),
{
    if chunks < 2 {
        return Err(CutterError::InvalidChunkCount(chunks));
    }

    let set = ChunkSet::for_source(source, folder)?;
    let mut file = crate::open_existing(source)?;
    let source_size = file.metadata()?.len();
    let chunk_size = chunk_size(source_size, chunks)?;

    tracing::info!(
        "Cutting {} ({source_size} bytes) into {chunks} chunks of {chunk_size} bytes",
        source.display()
    );

    let mut written = Vec::new();
    let mut offset = 0u64;

    for index in 0..chunks {
        let path = set.chunk_path(index);
        let header = ChunkHeader::new(index, chunks);
        let len = write_chunk(&mut file, &path, &header, chunk_size)?;

        tracing::debug!("Wrote {} ({len} bytes at offset {offset})", path.display());

        let info = ChunkInfo {
            index,
            path,
            offset,
            len,
        };
        on_chunk(&info);
        written.push(info);
        offset += len;
    }

    Ok(CutReport {
        source: source.to_path_buf(),
        source_size,
        chunk_size,
        chunks: written,
    })
}

/// `ceil(file_size / chunks)`, rejecting a zero-byte chunk size.
fn chunk_size(file_size: u64, chunks: u32) -> Result<u64> {
    let size = file_size.div_ceil(u64::from(chunks));
    if size < 1 {
        return Err(CutterError::ChunkTooSmall { file_size, chunks });
    }
    Ok(size)
}

/// Write one chunk file: the header, then up to `max_len` bytes read from
/// the current position of `source`. Returns the payload length.
fn write_chunk(
    source: &mut File,
    path: &Path,
    header: &ChunkHeader,
    max_len: u64,
) -> Result<u64> {
    let mut chunk = File::create(path)?;
    chunk.write_all(&header.encode())?;
    let len = io::copy(&mut Read::by_ref(source).take(max_len), &mut chunk)?;
    chunk.flush()?;
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::HEADER_SIZE;
    use tempfile::TempDir;

    fn source_with(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn chunk_size_rounds_up() {
        assert_eq!(chunk_size(26, 2).unwrap(), 13);
        assert_eq!(chunk_size(25, 2).unwrap(), 13);
        assert_eq!(chunk_size(10, 3).unwrap(), 4);
        assert_eq!(chunk_size(1, 5).unwrap(), 1);
    }

    #[test]
    fn chunk_size_zero_is_rejected() {
        assert!(matches!(
            chunk_size(0, 2),
            Err(CutterError::ChunkTooSmall {
                file_size: 0,
                chunks: 2
            })
        ));
    }

    #[test]
    fn rejects_fewer_than_two_chunks() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "data.txt", b"abc");
        for n in [0, 1] {
            assert!(matches!(
                cut(&source, tmp.path(), n),
                Err(CutterError::InvalidChunkCount(got)) if got == n
            ));
        }
        assert!(!tmp.path().join("data.txt.p0").exists());
    }

    #[test]
    fn huge_count_into_missing_folder_returns_error() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "ten.bin", b"0123456789");
        let err = cut(&source, &tmp.path().join("absent"), u32::MAX).unwrap_err();
        assert!(matches!(err, CutterError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn empty_source_is_too_small() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "empty.bin", b"");
        assert!(matches!(
            cut(&source, tmp.path(), 2),
            Err(CutterError::ChunkTooSmall { .. })
        ));
    }

    #[test]
    fn missing_source_is_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            cut(&tmp.path().join("nope"), tmp.path(), 2),
            Err(CutterError::FileNotFound(_))
        ));
    }

    #[test]
    fn offsets_tile_the_source() {
        let tmp = TempDir::new().unwrap();
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        let source = source_with(&tmp, "blob.bin", &data);
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let report = cut(&source, &out, 7).unwrap();
        assert_eq!(report.source_size, 1000);
        assert_eq!(report.chunk_size, 143);
        assert_eq!(report.chunks.len(), 7);

        let mut expected_offset = 0;
        for info in &report.chunks {
            assert_eq!(info.offset, expected_offset);
            assert!(info.len <= report.chunk_size);
            let on_disk = std::fs::metadata(&info.path).unwrap().len();
            assert_eq!(on_disk, HEADER_SIZE as u64 + info.len);
            expected_offset += info.len;
        }
        assert_eq!(expected_offset, 1000);
        assert_eq!(report.chunks[6].len, 1000 - 6 * 143);
    }

    #[test]
    fn overestimated_count_leaves_empty_tail() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "five.bin", b"12345");
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        // ceil(5 / 4) = 2: payloads 2, 2, 1, 0
        let report = cut(&source, &out, 4).unwrap();
        let lens: Vec<u64> = report.chunks.iter().map(|c| c.len).collect();
        assert_eq!(lens, vec![2, 2, 1, 0]);
        let last = std::fs::read(out.join("five.bin.p3")).unwrap();
        assert_eq!(last, ChunkHeader::new(3, 4).encode());
    }

    #[test]
    fn truncates_existing_chunks() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "data.txt", b"abcd");
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();
        std::fs::write(out.join("data.txt.p0"), vec![0xFF; 4096]).unwrap();

        cut(&source, &out, 2).unwrap();
        let p0 = std::fs::read(out.join("data.txt.p0")).unwrap();
        assert_eq!(p0.len(), HEADER_SIZE + 2);
        assert_eq!(&p0[HEADER_SIZE..], b"ab");
    }

    #[test]
    fn progress_sees_every_chunk() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "data.txt", b"abcdefghij");
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let mut seen = Vec::new();
        cut_with_progress(&source, &out, 3, |info| seen.push(info.index)).unwrap();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn source_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let source = source_with(&tmp, "data.txt", b"keep me");
        let out = tmp.path().join("out");
        std::fs::create_dir(&out).unwrap();

        cut(&source, &out, 2).unwrap();
        assert_eq!(std::fs::read(&source).unwrap(), b"keep me");
    }
}
