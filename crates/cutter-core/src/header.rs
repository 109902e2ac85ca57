use crate::error::{CutterError, Result};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Size of the header prefixed to every chunk file.
pub const HEADER_SIZE: usize = 16;

/// Format tag stored in the first six bytes of every chunk.
pub const FORMAT_ID: &[u8; 6] = b"CUTTER";

/// Current header format version.
pub const FORMAT_VERSION: u16 = 1;

/// Decoded chunk header.
///
/// Layout (little-endian):
/// `CUTTER` (6) | chunk (4) | chunks (4) | version (2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub chunk: u32,
    pub chunks: u32,
    pub version: u16,
}

impl ChunkHeader {
    pub fn new(chunk: u32, chunks: u32) -> Self {
        Self {
            chunk,
            chunks,
            version: FORMAT_VERSION,
        }
    }

    /// Encode into the fixed 16-byte layout.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..6].copy_from_slice(FORMAT_ID);
        buf[6..10].copy_from_slice(&self.chunk.to_le_bytes());
        buf[10..14].copy_from_slice(&self.chunks.to_le_bytes());
        buf[14..16].copy_from_slice(&self.version.to_le_bytes());
        buf
    }

    /// Decode a header from the start of `buf`.
    ///
    /// The version field is returned as stored; it is not validated.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(CutterError::InsufficientInput {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }
        if &buf[..6] != FORMAT_ID {
            return Err(CutterError::UnknownFileType);
        }

        let chunk = u32::from_le_bytes([buf[6], buf[7], buf[8], buf[9]]);
        let chunks = u32::from_le_bytes([buf[10], buf[11], buf[12], buf[13]]);
        let version = u16::from_le_bytes([buf[14], buf[15]]);

        Ok(Self {
            chunk,
            chunks,
            version,
        })
    }

    /// Whether this chunk ends the sequence.
    ///
    /// Out-of-range indices and `chunks == 0` count as terminal.
    pub fn is_last(&self) -> bool {
        self.chunk >= self.chunks.saturating_sub(1)
    }
}

impl fmt::Display for ChunkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chunk {}/{} (version {})",
            self.chunk, self.chunks, self.version
        )
    }
}

/// Read up to [`HEADER_SIZE`] bytes from `reader` and decode them.
pub fn read_header_from<R: Read>(reader: &mut R) -> Result<ChunkHeader> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    reader.take(HEADER_SIZE as u64).read_to_end(&mut buf)?;
    ChunkHeader::decode(&buf)
}

/// Open a chunk file and decode its header.
pub fn read_header(path: &Path) -> Result<ChunkHeader> {
    let mut file = crate::open_existing(path)?;
    read_header_from(&mut file)
}
