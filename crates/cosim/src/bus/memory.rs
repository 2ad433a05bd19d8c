//! Flat memory image mirroring the DUT's DRAM window.
//!
//! The image is seeded exactly once, at driver construction, by copying the
//! reference model's DRAM device. From then on only DUT-initiated writes
//! touch it; the reference model updates its own copy independently, and the
//! equivalence checks are what keep the two views honest.

use crate::common::constants::WORD_BYTES;

use super::device::Device;

/// Byte-addressable backing store for the DRAM window.
///
/// All word accesses are little-endian, matching the byte order of the
/// target's DDR model. Accesses whose 4-byte span leaves the window read as
/// 0; written bytes falling outside it are dropped.
pub struct MemImage {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for MemImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl MemImage {
    /// Creates a zero-filled image of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Creates an image of `size` bytes seeded from a device's backing
    /// memory.
    ///
    /// If the device maps fewer than `size` bytes the remainder is
    /// zero-filled, so the image always spans the whole configured window.
    pub fn from_device(dev: &dyn Device, size: usize) -> Self {
        let mut bytes = dev.map(0, size).to_vec();
        bytes.resize(size, 0);
        Self { bytes }
    }

    /// Size of the window in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the window is zero-sized.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `addr` falls inside the window.
    pub fn contains(&self, addr: u32) -> bool {
        (addr as usize) < self.bytes.len()
    }

    /// Reads the byte at `addr` (0 outside the window).
    pub fn read_byte(&self, addr: u32) -> u8 {
        self.bytes.get(addr as usize).copied().unwrap_or(0)
    }

    /// Reads the 4 bytes at `addr`, little-endian.
    pub fn read_word(&self, addr: u32) -> u32 {
        let base = addr as usize;
        self.bytes
            .get(base..base + WORD_BYTES)
            .map_or(0, |span| span.try_into().map_or(0, u32::from_le_bytes))
    }

    /// Writes byte `i` of `data` to `addr + i` for every `i` whose strobe
    /// bit is set.
    pub fn write_word(&mut self, addr: u32, data: u32, strobe: u8) {
        let base = addr as usize;
        for (i, byte) in data.to_le_bytes().iter().enumerate() {
            if (strobe >> i) & 1 != 0 {
                if let Some(slot) = self.bytes.get_mut(base + i) {
                    *slot = *byte;
                }
            }
        }
    }
}
