//! Block-device sink adapter
//!
//! Bridges the forward-only byte stream onto an LBA-addressed device:
//! bytes are gathered into whole 512-byte blocks and written at strictly
//! increasing addresses, so laying an image onto a partition needs no
//! intermediate buffer and never seeks backwards.

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};

use crate::error::{Fat12Error, Result};
use crate::io::ImageSink;
use crate::types::SECTOR_SIZE;

/// [`ImageSink`] writing sequential 512-byte blocks to a block device
pub struct BlockIoSink<B: BlockIo> {
    device: B,
    start_lba: u64,
    next_lba: u64,
    block: [u8; SECTOR_SIZE],
    filled: usize,
}

impl<B: BlockIo> BlockIoSink<B> {
    /// Wrap a device, writing from block 0
    pub fn new(device: B) -> Result<Self> {
        Self::starting_at(device, 0)
    }

    /// Wrap a device, writing from the given block address (e.g. a
    /// partition start)
    pub fn starting_at(device: B, start_lba: u64) -> Result<Self> {
        if device.block_size() != BlockSize::BS_512 {
            return Err(Fat12Error::IoError);
        }
        Ok(Self {
            device,
            start_lba,
            next_lba: start_lba,
            block: [0; SECTOR_SIZE],
            filled: 0,
        })
    }

    /// Whole blocks written to the device so far
    pub fn blocks_written(&self) -> u64 {
        self.next_lba - self.start_lba
    }

    /// Flush a zero-padded final partial block if one is pending, flush
    /// the device, and hand it back
    ///
    /// Images are always whole sectors, so the partial-block path only
    /// triggers for callers streaming other data through this sink.
    pub fn finish(mut self) -> Result<B> {
        if self.filled > 0 {
            self.block[self.filled..].fill(0);
            let block = self.block;
            self.write_block(&block)?;
            self.filled = 0;
        }
        self.device.flush().map_err(|_| Fat12Error::IoError)?;
        Ok(self.device)
    }

    fn write_block(&mut self, block: &[u8]) -> Result<()> {
        self.device
            .write_blocks(Lba(self.next_lba), block)
            .map_err(|_| Fat12Error::IoError)?;
        self.next_lba += 1;
        Ok(())
    }
}

impl<B: BlockIo> ImageSink for BlockIoSink<B> {
    fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
        // top up a partially gathered block first
        if self.filled > 0 {
            let take = buf.len().min(SECTOR_SIZE - self.filled);
            self.block[self.filled..self.filled + take].copy_from_slice(&buf[..take]);
            self.filled += take;
            buf = &buf[take..];
            if self.filled == SECTOR_SIZE {
                let block = self.block;
                self.write_block(&block)?;
                self.filled = 0;
            }
        }

        // whole blocks straight from the caller's buffer
        while buf.len() >= SECTOR_SIZE {
            let (block, rest) = buf.split_at(SECTOR_SIZE);
            self.write_block(block)?;
            buf = rest;
        }

        if !buf.is_empty() {
            self.block[..buf.len()].copy_from_slice(buf);
            self.filled = buf.len();
        }
        Ok(())
    }
}
