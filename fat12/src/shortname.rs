//! Pseudo-8.3 short-name derivation
//!
//! Every file gets a deterministic 11-byte short-name field derived by
//! hashing its long name and rendering the hash in a 32-symbol alphabet
//! of uppercase letters and the digits 0-5. The field is opaque to
//! humans but collision-resistant enough for the small file sets this
//! crate targets; the long name remains authoritative via the LFN chain.

/// Symbols used to render hash bits, five bits per symbol
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derived 11-byte short-name field for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortName([u8; 11]);

impl ShortName {
    /// Derive the short name from an arbitrary long name
    pub fn derive(long_name: &str) -> Self {
        let hash = fnv1a_64(long_name.as_bytes());
        let mut field = [0u8; 11];
        for (i, slot) in field.iter_mut().enumerate() {
            // MSB-first 5-bit groups over the big-endian hash bytes
            let symbol = (hash >> (59 - 5 * i)) & 0x1F;
            *slot = ALPHABET[symbol as usize];
        }
        Self(field)
    }

    /// The raw 11-byte directory name field
    pub fn as_bytes(&self) -> &[u8; 11] {
        &self.0
    }

    /// Checksum linking long-name records to this short name
    ///
    /// Rotate-right-and-add over the 11 name bytes; the algorithm must
    /// match what VFAT readers recompute, or the long-name chain is
    /// ignored.
    pub fn checksum(&self) -> u8 {
        let mut sum: u8 = 0;
        for &byte in &self.0 {
            sum = ((sum & 1) << 7)
                .wrapping_add(sum >> 1)
                .wrapping_add(byte);
        }
        sum
    }
}

/// 64-bit FNV-1a over the UTF-8 name bytes
fn fnv1a_64(data: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
