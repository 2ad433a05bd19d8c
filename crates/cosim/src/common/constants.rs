//! Global co-simulation constants.
//!
//! This module defines the fixed contracts of the driver. It includes:
//! 1. **Architectural Constants:** Register-file and bus-word geometry.
//! 2. **Instruction Constants:** Field masks and shifts for MIPS32 commit-word decoding.
//! 3. **Run-Control Constants:** Reset length, stall ceiling, and the trap address.

/// Number of general-purpose registers compared on every checked commit.
pub const GPR_COUNT: usize = 32;

/// Width of one commit/IO bus transfer in bytes (the buses are 32-bit).
pub const WORD_BYTES: usize = 4;

/// Number of clock cycles reset is held at the start of a run.
///
/// This is a fixed count, not auto-detected: reproducing a failing run
/// requires the identical warm-up sequence.
pub const RESET_CYCLES: u32 = 10;

/// Number of consecutive commit-free cycles after which the run is declared
/// stalled. A hard ceiling, never configurable per run.
pub const STALL_THRESHOLD: u64 = 1000;

/// Physical address of the GPIO trap register.
///
/// A DUT write to this address ends the run; the written data word becomes
/// the exit code.
pub const GPIO_TRAP_ADDR: u32 = 0x1000_0000;

/// Registry name of the reference model's DRAM device, whose contents seed
/// the memory image.
pub const DRAM_DEVICE_NAME: &str = "ddr";

/// Bit position shift for the primary opcode field of a MIPS32 instruction.
pub const OPCODE_SHIFT: u32 = 26;

/// Primary opcode of the COP0 instruction group (`mfc0`, `eret`, ...).
pub const OPCODE_COP0: u32 = 0b01_0000;

/// Primary opcode of the SPECIAL instruction group (`syscall`, ...).
pub const OPCODE_SPECIAL: u32 = 0b00_0000;

/// Bit position shift for the `rs` register field.
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the `rt` register field.
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the `rd` register field.
pub const RD_SHIFT: u32 = 11;

/// Mask for a 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the `funct` field of SPECIAL-group instructions.
pub const FUNCT_MASK: u32 = 0x3F;

/// `funct` value of the `syscall` instruction.
pub const FUNCT_SYSCALL: u32 = 0b00_1100;

/// Mask for the COP0 `sel` field (low three bits).
pub const SEL_MASK: u32 = 0x7;

/// `rd` index of the CP0 Count register.
pub const CP0_COUNT: u32 = 9;

/// Full encoding of the `eret` instruction.
pub const ERET_ENCODING: u32 = 0x4200_0018;
