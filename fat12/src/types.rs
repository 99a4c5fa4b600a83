//! Common types and constants for the FAT12 image layout

use crate::io::FileSource;

/// Sector size in bytes; clusters are one sector, so the two terms are
/// interchangeable throughout this crate
pub const SECTOR_SIZE: usize = 512;

/// Size of one directory record (short or long-name) in bytes
pub const DIR_ENTRY_SIZE: usize = 32;

/// Directory records held by one root-directory sector
pub const DIR_ENTRIES_PER_SECTOR: u16 = (SECTOR_SIZE / DIR_ENTRY_SIZE) as u16;

/// UTF-16 code units carried by one long-filename record
pub const LFN_UNITS_PER_ENTRY: usize = 13;

/// Maximum data sectors addressable by the single FAT sector
pub const MAX_DATA_SECTORS: u64 = 341;

/// Maximum UTF-16 code units in a long file name
pub const MAX_NAME_UTF16: usize = 255;

/// Maximum volume label length in bytes
pub const MAX_LABEL_LEN: usize = 11;

/// FAT entry 0: media marker for a hard disk volume
pub const FAT_MEDIA_MARKER: u16 = 0xFF8;

/// FAT end-of-chain marker
pub const FAT_END_OF_CHAIN: u16 = 0xFFF;

/// One payload file to embed into the image
///
/// The source must yield exactly `size` bytes; the encoder reads one
/// probe byte past that to detect oversized streams. Opening and closing
/// the underlying stream is the caller's responsibility.
pub struct InputFile<'a> {
    /// Long file name, arbitrary UTF-8 text
    pub name: &'a str,

    /// Declared content length in bytes
    pub size: u64,

    /// Sequential reader over the file content
    pub source: &'a mut dyn FileSource,
}
