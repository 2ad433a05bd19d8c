//! # Memory Image Tests
//!
//! Seeding from a device, little-endian word packing, and strobed writes at
//! and beyond the window edge.

use lockstep_core::bus::MemImage;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::mocks::devices::{RamDevice, pattern_byte};

#[test]
fn test_new_image_is_zero_filled() {
    let image = MemImage::new(64);
    assert_eq!(image.len(), 64);
    assert!(!image.is_empty());
    for addr in 0..64 {
        assert_eq!(image.read_byte(addr), 0);
    }
}

#[test]
fn test_from_device_copies_backing_bytes() {
    let ram = RamDevice::patterned("ddr", 0, 64);
    let image = MemImage::from_device(&ram, 64);
    assert_eq!(image.len(), 64);
    for addr in 0..64u32 {
        assert_eq!(image.read_byte(addr), pattern_byte(addr as usize));
    }
}

#[test]
fn test_from_device_pads_short_devices() {
    let ram = RamDevice::patterned("ddr", 0, 16);
    let image = MemImage::from_device(&ram, 64);
    assert_eq!(image.len(), 64);
    assert_eq!(image.read_byte(15), pattern_byte(15));
    for addr in 16..64 {
        assert_eq!(image.read_byte(addr), 0);
    }
}

#[test]
fn test_from_device_truncates_long_devices() {
    let ram = RamDevice::patterned("ddr", 0, 128);
    let image = MemImage::from_device(&ram, 32);
    assert_eq!(image.len(), 32);
    assert_eq!(image.read_byte(31), pattern_byte(31));
    assert_eq!(image.read_byte(32), 0);
}

#[test]
fn test_contains_window_edges() {
    let image = MemImage::new(16);
    assert!(image.contains(0));
    assert!(image.contains(15));
    assert!(!image.contains(16));
    assert!(!image.contains(u32::MAX));
}

#[test]
fn test_read_word_is_little_endian() {
    let mut image = MemImage::new(16);
    image.write_word(4, 0x4433_2211, 0xF);
    assert_eq!(image.read_byte(4), 0x11);
    assert_eq!(image.read_byte(5), 0x22);
    assert_eq!(image.read_byte(6), 0x33);
    assert_eq!(image.read_byte(7), 0x44);
    assert_eq!(image.read_word(4), 0x4433_2211);
}

#[test]
fn test_read_word_straddling_edge_is_zero() {
    let mut image = MemImage::new(16);
    image.write_word(12, 0xAABB_CCDD, 0xF);
    assert_eq!(image.read_word(12), 0xAABB_CCDD);
    // Spans 13..17 and 16..20 both leave the window.
    assert_eq!(image.read_word(13), 0);
    assert_eq!(image.read_word(16), 0);
}

#[rstest]
#[case(0b0000, 0xFFFF_FFFF)]
#[case(0b0001, 0xFFFF_FF11)]
#[case(0b0010, 0xFFFF_22FF)]
#[case(0b0100, 0xFF33_FFFF)]
#[case(0b1000, 0x44FF_FFFF)]
#[case(0b0101, 0xFF33_FF11)]
#[case(0b1010, 0x44FF_22FF)]
#[case(0b1100, 0x4433_FFFF)]
#[case(0b1111, 0x4433_2211)]
fn test_write_word_strobe_masks(#[case] strobe: u8, #[case] expected: u32) {
    let mut image = MemImage::new(16);
    image.write_word(0, 0xFFFF_FFFF, 0xF);
    image.write_word(0, 0x4433_2211, strobe);
    assert_eq!(image.read_word(0), expected);
}

#[test]
fn test_write_word_straddling_edge_drops_outside_bytes() {
    let mut image = MemImage::new(16);
    image.write_word(14, 0x4433_2211, 0xF);
    assert_eq!(image.read_byte(14), 0x11);
    assert_eq!(image.read_byte(15), 0x22);
    // Bytes destined for 16 and 17 never land anywhere.
    assert_eq!(image.len(), 16);
}

#[test]
fn test_write_word_fully_outside_is_dropped() {
    let mut image = MemImage::new(16);
    image.write_word(64, 0xAABB_CCDD, 0xF);
    for addr in 0..16 {
        assert_eq!(image.read_byte(addr), 0);
    }
}

proptest! {
    /// A full-strobe write anywhere inside the window reads back unchanged.
    #[test]
    fn prop_full_strobe_write_reads_back(addr in 0u32..60, word in any::<u32>()) {
        let mut image = MemImage::new(64);
        image.write_word(addr, word, 0xF);
        prop_assert_eq!(image.read_word(addr), word);
    }

    /// A strobed write changes exactly the selected bytes and nothing else.
    #[test]
    fn prop_strobe_touches_only_selected_bytes(
        addr in 0u32..60,
        word in any::<u32>(),
        strobe in 0u8..16,
    ) {
        let ram = RamDevice::patterned("ddr", 0, 64);
        let mut image = MemImage::from_device(&ram, 64);
        image.write_word(addr, word, strobe);

        let data = word.to_le_bytes();
        for index in 0..64u32 {
            let lane = index.wrapping_sub(addr) as usize;
            let expected = if lane < 4 && (strobe >> lane) & 1 != 0 {
                data[lane]
            } else {
                pattern_byte(index as usize)
            };
            prop_assert_eq!(image.read_byte(index), expected);
        }
    }
}
