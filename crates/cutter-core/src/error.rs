use thiserror::Error;

#[derive(Debug, Error)]
pub enum CutterError {
    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No such file: {0}")]
    FileNotFound(String),

    // Arguments
    #[error("Number of chunks must be greater than 1, got {0}")]
    InvalidChunkCount(u32),

    #[error("Not chunk zero: {0} (open the file with extension .p0)")]
    NotChunkZero(String),

    // Format
    #[error("Unknown file type")]
    UnknownFileType,

    #[error("Insufficient input for chunk header: expected {expected} bytes, got {actual}")]
    InsufficientInput { expected: usize, actual: usize },

    #[error("Chunk size is less than 1 byte ({file_size} bytes into {chunks} chunks), try with less chunks")]
    ChunkTooSmall { file_size: u64, chunks: u32 },

    // Config
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found at {0}, run `cutter init` first")]
    ConfigNotFound(String),

    #[error("TOML deserialization error: {0}")]
    TomlDe(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

/// Broad failure category of a [`CutterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    CorruptFormat,
    Degenerate,
    Io,
    Config,
}

impl CutterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CutterError::InvalidChunkCount(_) | CutterError::NotChunkZero(_) => {
                ErrorKind::InvalidArgument
            }
            CutterError::FileNotFound(_) => ErrorKind::NotFound,
            CutterError::Io(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
                ) =>
            {
                ErrorKind::NotFound
            }
            CutterError::Io(_) => ErrorKind::Io,
            CutterError::UnknownFileType | CutterError::InsufficientInput { .. } => {
                ErrorKind::CorruptFormat
            }
            CutterError::ChunkTooSmall { .. } => ErrorKind::Degenerate,
            CutterError::Config(_)
            | CutterError::ConfigNotFound(_)
            | CutterError::TomlDe(_)
            | CutterError::TomlSer(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, CutterError>;
