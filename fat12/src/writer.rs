//! Sector-padded writing over an image sink

use crate::error::Result;
use crate::io::ImageSink;
use crate::types::SECTOR_SIZE;

const ZERO_SECTOR: [u8; SECTOR_SIZE] = [0; SECTOR_SIZE];

/// Wraps an [`ImageSink`] and tracks the write position modulo the
/// sector size, so each image region can be padded out to a sector
/// boundary independently.
pub struct SectorWriter<'a, S: ImageSink + ?Sized> {
    sink: &'a mut S,
    filled: usize,
}

impl<'a, S: ImageSink + ?Sized> SectorWriter<'a, S> {
    /// Wrap a sink starting at a sector boundary
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, filled: 0 }
    }

    /// Bytes written since the last sector boundary
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Pass bytes through to the sink
    pub fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.sink.write_all(buf)?;
        self.filled = (self.filled + buf.len()) % SECTOR_SIZE;
        Ok(())
    }

    /// Write zero bytes up to the next sector boundary; no-op when
    /// already aligned
    pub fn pad(&mut self) -> Result<()> {
        if self.filled == 0 {
            return Ok(());
        }
        let remaining = SECTOR_SIZE - self.filled;
        self.sink.write_all(&ZERO_SECTOR[..remaining])?;
        self.filled = 0;
        Ok(())
    }

    /// Write `count` zero bytes
    pub fn write_zeros(&mut self, count: usize) -> Result<()> {
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(SECTOR_SIZE);
            self.write_all(&ZERO_SECTOR[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }
}
