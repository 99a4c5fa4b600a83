//! Common test fixtures: in-memory sources, sinks and block devices

use fat12::io::{FileSource, ImageSink};
use fat12::{create_image, Fat12Error, InputFile};
use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Fixed-seed RNG so images are reproducible across runs
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x0dd5_eed5)
}

/// Build an image from `(name, content)` pairs with declared sizes
/// matching the content
pub fn build_image(
    specs: &[(&str, &[u8])],
    label: Option<&str>,
) -> fat12::Result<Vec<u8>> {
    let mut sources: Vec<&[u8]> = specs.iter().map(|&(_, content)| content).collect();
    let mut files: Vec<InputFile<'_>> = sources
        .iter_mut()
        .zip(specs)
        .map(|(source, &(name, content))| InputFile {
            name,
            size: content.len() as u64,
            source,
        })
        .collect();
    let mut image = Vec::new();
    create_image(&mut files, label, &mut test_rng(), &mut image)?;
    Ok(image)
}

/// Source that hands out its content a few bytes at a time
#[allow(dead_code)]
pub struct TrickleSource<'a>(pub &'a [u8]);

impl FileSource for TrickleSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> fat12::Result<usize> {
        let n = self.0.len().min(buf.len()).min(3);
        buf[..n].copy_from_slice(&self.0[..n]);
        self.0 = &self.0[n..];
        Ok(n)
    }
}

/// Sink that fails once a byte budget is exceeded
#[allow(dead_code)]
pub struct FailingSink {
    pub written: usize,
    pub fail_after: usize,
}

impl ImageSink for FailingSink {
    fn write_all(&mut self, buf: &[u8]) -> fat12::Result<()> {
        self.written += buf.len();
        if self.written > self.fail_after {
            Err(Fat12Error::IoError)
        } else {
            Ok(())
        }
    }
}

/// In-memory block device for testing the block-IO sink
#[allow(dead_code)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
}

#[allow(dead_code)]
impl MemoryBlockDevice {
    /// Create a zeroed device with the given number of 512-byte blocks
    pub fn new(blocks: usize) -> Self {
        Self {
            data: vec![0; blocks * 512],
            block_size: 512,
        }
    }

    /// Create a zeroed device with a non-512 block size
    pub fn with_block_size(blocks: usize, block_size: usize) -> Self {
        Self {
            data: vec![0; blocks * block_size],
            block_size,
        }
    }
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write beyond end of device",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
