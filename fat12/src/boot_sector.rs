//! Boot-sector (BIOS Parameter Block) encoding
//!
//! The volume geometry is fixed: 512-byte sectors, one sector per
//! cluster, one reserved sector, a single one-sector FAT. Only the
//! root-directory entry count, the total sector count, the volume ID
//! and the label vary per image.

use crate::layout::VolumeLayout;
use crate::types::{MAX_LABEL_LEN, SECTOR_SIZE};

/// Fixed-width boot-sector record (BPB + extended BPB)
#[derive(Debug, Clone)]
pub struct BootSector {
    /// Jump stub (`jmp $-2`, `nop`)
    pub jump: [u8; 3],
    /// OEM name, space-padded
    pub oem_name: [u8; 8],
    /// Bytes per sector (512)
    pub bytes_per_sector: u16,
    /// Sectors per cluster (1)
    pub sectors_per_cluster: u8,
    /// Reserved sectors including this one (1)
    pub reserved_sectors: u16,
    /// Number of FAT copies (1)
    pub fat_count: u8,
    /// Root directory entry count, multiple of 16
    pub root_dir_entries: u16,
    /// Total image sectors
    pub total_sectors: u16,
    /// Media descriptor (0xF8, hard disk)
    pub media_descriptor: u8,
    /// Sectors per FAT (1)
    pub sectors_per_fat: u16,
    /// BIOS drive number (0x80, first fixed disk)
    pub drive_number: u8,
    /// Extended boot signature (0x29, marks the fields below as present)
    pub extended_boot_signature: u8,
    /// Random volume serial number
    pub volume_id: [u8; 4],
    /// Volume label, space-padded
    pub volume_label: [u8; 11],
    /// Filesystem type tag ("FAT12   ")
    pub fs_type: [u8; 8],
}

impl BootSector {
    /// Constant template: the minimal three-sector volume (boot, FAT,
    /// empty root directory) with no label
    pub fn template() -> Self {
        Self {
            jump: [0xEB, 0xFE, 0x90],
            oem_name: *b"FAT12IMG",
            bytes_per_sector: SECTOR_SIZE as u16,
            sectors_per_cluster: 1,
            reserved_sectors: 1,
            fat_count: 1,
            root_dir_entries: 16,
            total_sectors: 3,
            media_descriptor: 0xF8,
            sectors_per_fat: 1,
            drive_number: 0x80,
            extended_boot_signature: 0x29,
            volume_id: [0; 4],
            volume_label: *b"NO NAME    ",
            fs_type: *b"FAT12   ",
        }
    }

    /// Specialize the template with planned counts, a volume ID and an
    /// optional label (validated by the planner, space-padded here)
    pub fn for_volume(layout: &VolumeLayout, volume_id: [u8; 4], label: Option<&str>) -> Self {
        let mut header = Self::template();
        header.root_dir_entries = layout.root_dir_entries;
        header.total_sectors = layout.total_sectors;
        header.volume_id = volume_id;
        if let Some(label) = label {
            header.volume_label = pad_label(label);
        }
        header
    }

    /// Render the record into one full sector, little-endian fields at
    /// their standard BPB offsets, zero padding, and the `55 AA`
    /// signature at offset 510
    pub fn encode(&self) -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];
        sector[0..3].copy_from_slice(&self.jump);
        sector[3..11].copy_from_slice(&self.oem_name);
        sector[11..13].copy_from_slice(&self.bytes_per_sector.to_le_bytes());
        sector[13] = self.sectors_per_cluster;
        sector[14..16].copy_from_slice(&self.reserved_sectors.to_le_bytes());
        sector[16] = self.fat_count;
        sector[17..19].copy_from_slice(&self.root_dir_entries.to_le_bytes());
        sector[19..21].copy_from_slice(&self.total_sectors.to_le_bytes());
        sector[21] = self.media_descriptor;
        sector[22..24].copy_from_slice(&self.sectors_per_fat.to_le_bytes());
        // bytes 24..36: geometry and 32-bit counts, unused on this volume
        sector[36] = self.drive_number;
        // byte 37 reserved
        sector[38] = self.extended_boot_signature;
        sector[39..43].copy_from_slice(&self.volume_id);
        sector[43..54].copy_from_slice(&self.volume_label);
        sector[54..62].copy_from_slice(&self.fs_type);
        sector[510] = 0x55;
        sector[511] = 0xAA;
        sector
    }
}

fn pad_label(label: &str) -> [u8; MAX_LABEL_LEN] {
    let mut field = [b' '; MAX_LABEL_LEN];
    let bytes = label.as_bytes();
    let len = bytes.len().min(MAX_LABEL_LEN);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}
