//! Single-pass image assembly
//!
//! The image is written front to back in four regions, each padded to a
//! sector boundary: boot sector, FAT, root directory, file data. Nothing
//! is revisited once written; any failure aborts the run and leaves the
//! sink truncated.

use rand_core::RngCore;

use crate::boot_sector::BootSector;
use crate::directory::write_file_entries;
use crate::error::{Fat12Error, Result};
use crate::fat::Fat12Packer;
use crate::io::ImageSink;
use crate::layout::VolumeLayout;
use crate::types::{
    DIR_ENTRY_SIZE, FAT_END_OF_CHAIN, FAT_MEDIA_MARKER, InputFile, SECTOR_SIZE,
};
use crate::writer::SectorWriter;

/// Build a complete FAT12 image from the given files and stream it to
/// the sink
///
/// The file list is validated up front; no byte reaches the sink unless
/// the layout is accepted. Each file's stream is consumed exactly once:
/// `size` bytes are copied and one probe byte is read past the end to
/// catch oversized streams. The random source only supplies the 4-byte
/// volume ID, so a seeded generator makes the output reproducible.
pub fn create_image<S, R>(
    files: &mut [InputFile<'_>],
    label: Option<&str>,
    rng: &mut R,
    sink: &mut S,
) -> Result<()>
where
    S: ImageSink + ?Sized,
    R: RngCore + ?Sized,
{
    let layout = VolumeLayout::plan(files.iter().map(|f| (f.name, f.size)), label)?;
    let mut writer = SectorWriter::new(sink);

    // Boot sector
    let mut volume_id = [0u8; 4];
    rng.fill_bytes(&mut volume_id);
    let header = BootSector::for_volume(&layout, volume_id, label);
    writer.write_all(&header.encode())?;
    writer.pad()?;

    write_fat(&mut writer, &layout)?;

    // Root directory: every file's records, then zeroed spare entries
    let mut cluster = layout.first_data_cluster();
    let mut used = 0u16;
    for (file, &sectors) in files.iter().zip(&layout.file_sectors) {
        used += write_file_entries(&mut writer, file.name, cluster, file.size as u32)?;
        cluster += sectors;
    }
    debug_assert_eq!(used, layout.dir_entries);
    writer.write_zeros((layout.root_dir_entries - used) as usize * DIR_ENTRY_SIZE)?;
    writer.pad()?;

    // File data, each file padded to its own sector boundary
    for file in files.iter_mut() {
        copy_file_data(&mut writer, file)?;
        writer.pad()?;
    }

    Ok(())
}

/// Emit the FAT entry sequence: the media marker, one end-of-chain slot
/// per root-directory sector, then each file's cluster chain
fn write_fat<S: ImageSink + ?Sized>(
    writer: &mut SectorWriter<'_, S>,
    layout: &VolumeLayout,
) -> Result<()> {
    let mut packer = Fat12Packer::new();
    push_entry(writer, &mut packer, FAT_MEDIA_MARKER)?;
    for _ in 0..layout.root_dir_sectors() {
        push_entry(writer, &mut packer, FAT_END_OF_CHAIN)?;
    }
    let mut cluster = layout.first_data_cluster();
    for &sectors in &layout.file_sectors {
        // each cluster points at the next one; the last gets the marker
        for step in 1..sectors {
            push_entry(writer, &mut packer, cluster + step)?;
        }
        push_entry(writer, &mut packer, FAT_END_OF_CHAIN)?;
        cluster += sectors;
    }
    if let Some(triple) = packer.finish() {
        writer.write_all(&triple)?;
    }
    writer.pad()
}

fn push_entry<S: ImageSink + ?Sized>(
    writer: &mut SectorWriter<'_, S>,
    packer: &mut Fat12Packer,
    value: u16,
) -> Result<()> {
    if let Some(triple) = packer.push(value) {
        writer.write_all(&triple)?;
    }
    Ok(())
}

/// Copy exactly `size` bytes of one file, then probe one byte past the
/// end: more data than declared fails the run
fn copy_file_data<S: ImageSink + ?Sized>(
    writer: &mut SectorWriter<'_, S>,
    file: &mut InputFile<'_>,
) -> Result<()> {
    let mut buf = [0u8; SECTOR_SIZE];
    let mut remaining = file.size;
    while remaining > 0 {
        let want = remaining.min(SECTOR_SIZE as u64) as usize;
        let got = file.source.read(&mut buf[..want])?;
        if got == 0 {
            // stream ended short of the declared size
            return Err(Fat12Error::IoError);
        }
        writer.write_all(&buf[..got])?;
        remaining -= got as u64;
    }

    let mut probe = [0u8; 1];
    if file.source.read(&mut probe)? != 0 {
        return Err(Fat12Error::SizeMismatch);
    }
    Ok(())
}
