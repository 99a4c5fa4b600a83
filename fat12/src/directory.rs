//! Root-directory record encoding
//!
//! Each file contributes a chain of 32-byte long-filename records
//! followed by one short record. Long-name records carry the UTF-16
//! name, terminator-ended and `0xFFFF`-padded, 13 units apiece, split
//! across three field groups; the short record carries the derived
//! 11-byte name, the first cluster and the file size.

use alloc::vec::Vec;

use crate::error::Result;
use crate::io::ImageSink;
use crate::shortname::ShortName;
use crate::types::{DIR_ENTRY_SIZE, LFN_UNITS_PER_ENTRY};
use crate::writer::SectorWriter;

/// Archive attribute carried by every short record
pub const ATTR_ARCHIVE: u8 = 0x20;

/// Attribute marking a record as part of a long-name chain
pub const ATTR_LONG_NAME: u8 = 0x0F;

/// Flag on the sequence number of the last logical long-name record
pub const LAST_LFN_ENTRY: u8 = 0x40;

/// 1980-01-01 in FAT date encoding, used for all timestamps
pub const EPOCH_DATE: u16 = 0x0021;

/// Encode one long-name record: sequence number, 13 name units, the
/// short-name checksum and a zero first-cluster field
pub fn encode_lfn_entry(sequence: u8, checksum: u8, units: &[u16]) -> [u8; DIR_ENTRY_SIZE] {
    debug_assert_eq!(units.len(), LFN_UNITS_PER_ENTRY);
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[0] = sequence;
    for (i, unit) in units[0..5].iter().enumerate() {
        entry[1 + 2 * i..3 + 2 * i].copy_from_slice(&unit.to_le_bytes());
    }
    entry[11] = ATTR_LONG_NAME;
    // byte 12: record type, byte 13 follows
    entry[13] = checksum;
    for (i, unit) in units[5..11].iter().enumerate() {
        entry[14 + 2 * i..16 + 2 * i].copy_from_slice(&unit.to_le_bytes());
    }
    // bytes 26..28: first cluster, always zero for long-name records
    for (i, unit) in units[11..13].iter().enumerate() {
        entry[28 + 2 * i..30 + 2 * i].copy_from_slice(&unit.to_le_bytes());
    }
    entry
}

/// Encode the short record closing a file's directory chain
pub fn encode_short_entry(
    name: &ShortName,
    first_cluster: u16,
    size: u32,
) -> [u8; DIR_ENTRY_SIZE] {
    let mut entry = [0u8; DIR_ENTRY_SIZE];
    entry[0..11].copy_from_slice(name.as_bytes());
    entry[11] = ATTR_ARCHIVE;
    // bytes 12..16: NT flags, creation time, all zero
    entry[16..18].copy_from_slice(&EPOCH_DATE.to_le_bytes());
    entry[18..20].copy_from_slice(&EPOCH_DATE.to_le_bytes());
    // bytes 20..22: high cluster word, zero on FAT12
    // bytes 22..24: modification time, zero
    entry[24..26].copy_from_slice(&EPOCH_DATE.to_le_bytes());
    entry[26..28].copy_from_slice(&first_cluster.to_le_bytes());
    entry[28..32].copy_from_slice(&size.to_le_bytes());
    entry
}

/// UTF-16 name units, terminator-ended and padded with `0xFFFF` to a
/// whole number of long-name records
pub fn name_units(name: &str) -> Vec<u16> {
    let mut units: Vec<u16> = name.encode_utf16().collect();
    units.push(0);
    while units.len() % LFN_UNITS_PER_ENTRY != 0 {
        units.push(0xFFFF);
    }
    units
}

/// Write one file's long-name chain and short record; returns the
/// number of 32-byte records emitted
pub fn write_file_entries<S: ImageSink + ?Sized>(
    writer: &mut SectorWriter<'_, S>,
    name: &str,
    first_cluster: u16,
    size: u32,
) -> Result<u16> {
    let short = ShortName::derive(name);
    let checksum = short.checksum();
    let units = name_units(name);
    let chunk_count = units.len() / LFN_UNITS_PER_ENTRY;

    for (i, chunk) in units.chunks(LFN_UNITS_PER_ENTRY).enumerate() {
        let mut sequence = (chunk_count - i) as u8;
        if i == 0 {
            sequence |= LAST_LFN_ENTRY;
        }
        writer.write_all(&encode_lfn_entry(sequence, checksum, chunk))?;
    }
    writer.write_all(&encode_short_entry(&short, first_cluster, size))?;
    Ok(chunk_count as u16 + 1)
}
