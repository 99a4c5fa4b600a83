//! Stream seams for image input and output
//!
//! The encoder never seeks and never re-reads, so both seams are narrow:
//! a bounded sequential reader per input file and a forward-only byte
//! sink for the image. Implement these directly for in-memory buffers,
//! or use the `std`-feature wrappers around `std::io` types.

use crate::error::Result;

#[cfg(feature = "std")]
use crate::error::Fat12Error;

/// Sequential reader attached to one input file
pub trait FileSource {
    /// Read up to `buf.len()` bytes into `buf`, returning the number of
    /// bytes read. `Ok(0)` signals end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Forward-only byte sink receiving the image
pub trait ImageSink {
    /// Write the whole buffer, failing on any short write
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;
}

impl FileSource for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.len().min(buf.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

impl ImageSink for alloc::vec::Vec<u8> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Bridge from any `std::io::Read` to [`FileSource`]
#[cfg(feature = "std")]
pub struct StdReader<R>(pub R);

#[cfg(feature = "std")]
impl<R: std::io::Read> FileSource for StdReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.0.read(buf).map_err(|_| Fat12Error::IoError)
    }
}

/// Bridge from any `std::io::Write` to [`ImageSink`]
#[cfg(feature = "std")]
pub struct StdWriter<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> ImageSink for StdWriter<W> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.0.write_all(buf).map_err(|_| Fat12Error::IoError)
    }
}
