use crate::error::Result;
use crate::header::{ChunkHeader, read_header_from};
use crate::naming::ChunkSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Default copy block size: 5 MiB.
pub const DEFAULT_BUFFER_SIZE: usize = 5 * 1024 * 1024;

/// Outcome of a successful join.
#[derive(Debug, Clone)]
pub struct JoinReport {
    pub dest: PathBuf,
    pub chunks_read: u32,
    pub bytes_written: u64,
}

/// Reassembles a chunk set, starting from its `.p0` file.
#[derive(Debug, Clone)]
pub struct Joiner {
    buffer_size: usize,
}

impl Joiner {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Join the set that `first` starts into `dest_folder`.
    pub fn join(&self, first: &Path, dest_folder: &Path) -> Result<JoinReport> {
        self.join_with_progress(first, dest_folder, |_, _| {})
    }

    /// Like [`Joiner::join`], calling `on_chunk` with each chunk's header and
    /// payload length once it has been copied.
    pub fn join_with_progress<F>(
        &self,
        first: &Path,
        dest_folder: &Path,
        mut on_chunk: F,
    ) -> Result<JoinReport>
    where
        F: FnMut(&ChunkHeader, u64),
    {
        let set = ChunkSet::from_first_chunk(first)?;
        // Fail on a missing chunk zero before the destination is created.
        drop(crate::open_existing(first)?);

        let dest = dest_folder.join(set.base_name());
        let mut dest_file = File::create(&dest)?;

        tracing::info!(
            "Joining {} from {} into {}",
            first.display(),
            set.dir().display(),
            dest.display()
        );

        let mut buf = vec![0u8; self.buffer_size];
        let mut index = 0u32;
        let mut bytes_written = 0u64;

        loop {
            let path = set.chunk_path(index);
            let (header, len) = copy_chunk(&path, &mut dest_file, &mut buf)?;
            tracing::debug!("Copied {} ({header}, {len} bytes)", path.display());

            on_chunk(&header, len);
            bytes_written += len;
            index += 1;

            if header.is_last() {
                break;
            }
        }

        dest_file.flush()?;

        Ok(JoinReport {
            dest,
            chunks_read: index,
            bytes_written,
        })
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

/// Join the set that `first` starts into `dest_folder` with the default
/// block size.
pub fn join(first: &Path, dest_folder: &Path) -> Result<JoinReport> {
    Joiner::default().join(first, dest_folder)
}

/// Decode the header of the chunk at `path` and append its payload to
/// `dest`. Returns the header and the number of payload bytes copied.
fn copy_chunk(path: &Path, dest: &mut File, buf: &mut [u8]) -> Result<(ChunkHeader, u64)> {
    let mut chunk = crate::open_existing(path)?;
    let header = read_header_from(&mut chunk)?;

    let mut copied = 0u64;
    loop {
        let n = match chunk.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        dest.write_all(&buf[..n])?;
        copied += n as u64;
    }

    Ok((header, copied))
}
