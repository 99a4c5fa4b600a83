//! Sector and directory-entry planning
//!
//! Everything the other encoders need is derived up front from the file
//! list: per-file sector counts, the root-directory size, and the total
//! image size. The layout is computed once and never changes while the
//! image is written.

use alloc::vec::Vec;

use crate::error::{Fat12Error, Result};
use crate::types::{
    DIR_ENTRIES_PER_SECTOR, LFN_UNITS_PER_ENTRY, MAX_DATA_SECTORS, MAX_LABEL_LEN, MAX_NAME_UTF16,
    SECTOR_SIZE,
};

/// Planned geometry for one image, immutable once computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeLayout {
    /// Data sectors occupied by each file, in input order
    pub file_sectors: Vec<u16>,
    /// Sum of all file sectors
    pub data_sectors: u16,
    /// Directory entries actually used by the files (long-name records
    /// plus one short record per file)
    pub dir_entries: u16,
    /// Root-directory capacity: `dir_entries` rounded up to a multiple
    /// of 16, at least one sector's worth
    pub root_dir_entries: u16,
    /// Total image sectors: boot + FAT + root directory + data
    pub total_sectors: u16,
}

impl VolumeLayout {
    /// Plan the volume for an ordered list of `(name, declared size)`
    /// pairs, validating the label, the name lengths and the data
    /// capacity before anything is written
    pub fn plan<'a, I>(files: I, label: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        if label.is_some_and(|l| l.len() > MAX_LABEL_LEN) {
            return Err(Fat12Error::LabelTooLong);
        }

        let mut file_sectors = Vec::new();
        let mut data_sectors: u64 = 0;
        let mut dir_entries: u16 = 0;
        for (name, size) in files {
            let name_units = name.encode_utf16().count();
            if name_units > MAX_NAME_UTF16 {
                return Err(Fat12Error::FilenameTooLong);
            }
            // the name is terminator-ended, 13 units per long-name
            // record, plus the short record
            let lfn_entries =
                (name_units as u16 + 1).div_ceil(LFN_UNITS_PER_ENTRY as u16);
            dir_entries += lfn_entries + 1;

            let sectors = size.div_ceil(SECTOR_SIZE as u64);
            file_sectors.push(sectors);
            data_sectors += sectors;
        }
        if data_sectors > MAX_DATA_SECTORS {
            return Err(Fat12Error::CapacityExceeded);
        }

        let root_dir_entries =
            dir_entries.div_ceil(DIR_ENTRIES_PER_SECTOR).max(1) * DIR_ENTRIES_PER_SECTOR;
        let root_dir_sectors = root_dir_entries / DIR_ENTRIES_PER_SECTOR;
        let total_sectors = 1 + 1 + root_dir_sectors + data_sectors as u16;

        Ok(Self {
            file_sectors: file_sectors.into_iter().map(|s| s as u16).collect(),
            data_sectors: data_sectors as u16,
            dir_entries,
            root_dir_entries,
            total_sectors,
        })
    }

    /// Sectors occupied by the root directory
    pub fn root_dir_sectors(&self) -> u16 {
        self.root_dir_entries / DIR_ENTRIES_PER_SECTOR
    }

    /// Cluster number of the first data sector
    ///
    /// Cluster numbering on this volume counts the FAT's reserved slot
    /// and one slot per root-directory sector before the data region.
    pub fn first_data_cluster(&self) -> u16 {
        1 + self.root_dir_sectors()
    }
}
