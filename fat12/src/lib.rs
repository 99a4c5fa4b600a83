//! FAT12 Disk Image Builder
//!
//! A `no_std` single-pass encoder that packs a small set of payload files
//! into a complete FAT12 volume image: boot sector, one file-allocation
//! table, a long-filename-capable root directory, and the raw file data.
//!
//! # Overview
//!
//! The crate is meant for embedding a handful of files into a
//! bootable-looking container (firmware and installer payloads), not for
//! general filesystem manipulation. It never mounts, reads back, or
//! modifies an existing volume; the image is produced front to back in
//! one pass over a forward-only byte sink.
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Layout layer** - Plans sector, cluster, and directory-entry counts
//! 2. **Record layer** - Encodes the boot sector and 32-byte directory records
//! 3. **Table layer** - Packs 12-bit cluster chains two-per-three-bytes
//! 4. **Stream layer** - Sector-padded writing over a caller-supplied sink
//!
//! # Usage
//!
//! ```ignore
//! use fat12::{create_image, InputFile};
//!
//! let mut image = Vec::new();
//! let mut files = [InputFile { name: "kernel.bin", size: 4096, source: &mut reader }];
//! create_image(&mut files, Some("PAYLOAD"), &mut rng, &mut image)?;
//! ```
//!
//! # Capacity
//!
//! The volume carries exactly one 512-byte FAT sector, which caps the
//! data region at 341 sectors (about 170 KiB of file content). This is a
//! hard input-size ceiling of the format produced here, not a tunable.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod block_io;
pub mod boot_sector;
pub mod directory;
pub mod error;
pub mod fat;
pub mod image;
pub mod io;
pub mod layout;
pub mod shortname;
pub mod types;
pub mod writer;

pub use error::{Fat12Error, Result};
pub use types::{InputFile, SECTOR_SIZE};

// High-level API exports
pub use image::create_image;
pub use io::{FileSource, ImageSink};
pub use layout::VolumeLayout;
pub use shortname::ShortName;
