//! Error types for image creation

use core::fmt;

/// Result type for image creation operations
pub type Result<T> = core::result::Result<T, Fat12Error>;

/// Errors that can occur while planning or writing an image
///
/// Every error aborts the whole run; the sink is left truncated and no
/// rollback is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fat12Error {
    /// Volume label exceeds 11 bytes
    LabelTooLong,

    /// A file name's UTF-16 encoding exceeds 255 code units
    FilenameTooLong,

    /// Total data sectors exceed the one-sector FAT addressing limit
    CapacityExceeded,

    /// A file's stream yielded more bytes than its declared size
    SizeMismatch,

    /// I/O failure on an input or output stream
    IoError,
}

impl fmt::Display for Fat12Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelTooLong => write!(f, "Volume label exceeds 11 bytes"),
            Self::FilenameTooLong => write!(f, "File name exceeds 255 UTF-16 code units"),
            Self::CapacityExceeded => write!(f, "Files exceed the one-sector FAT capacity"),
            Self::SizeMismatch => write!(f, "File stream is larger than its declared size"),
            Self::IoError => write!(f, "I/O failure on input or output stream"),
        }
    }
}
