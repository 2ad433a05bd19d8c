//! MIPS32 commit-word decoding.
//!
//! The driver never interprets instruction semantics. It decodes a committed
//! word only far enough to recognize the three encodings lock-stepping has to
//! treat specially:
//! 1. **`mfc0 rt, $9`:** reads the CP0 Count register, a timing side channel
//!    whose DUT-side value must be pushed into the reference model first.
//! 2. **`syscall`:** exempt from register comparison.
//! 3. **`eret`:** exempt from register comparison.

use crate::common::constants::{
    CP0_COUNT, ERET_ENCODING, FUNCT_MASK, FUNCT_SYSCALL, OPCODE_COP0, OPCODE_SHIFT,
    OPCODE_SPECIAL, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT, SEL_MASK,
};

/// A committed 32-bit MIPS32 instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instr(pub u32);

impl Instr {
    /// Primary opcode field (bits 31..26).
    fn opcode(self) -> u32 {
        self.0 >> OPCODE_SHIFT
    }

    /// `rs` field (bits 25..21). For COP0 this selects the coprocessor
    /// sub-operation (0 = move-from).
    fn rs_field(self) -> u32 {
        (self.0 >> RS_SHIFT) & REG_MASK
    }

    /// `rd` field (bits 15..11). For COP0 moves this names the CP0 register.
    fn rd_field(self) -> u32 {
        (self.0 >> RD_SHIFT) & REG_MASK
    }

    /// `rt` field (bits 20..16) as a GPR index.
    pub fn rt(self) -> usize {
        ((self.0 >> RT_SHIFT) & REG_MASK) as usize
    }

    /// Whether this word is `mfc0 rt, $9` (sel 0): a read of the CP0 Count
    /// register.
    pub fn is_mfc0_count(self) -> bool {
        self.opcode() == OPCODE_COP0
            && self.rs_field() == 0
            && self.rd_field() == CP0_COUNT
            && self.0 & SEL_MASK == 0
    }

    /// Whether this word is `syscall`.
    pub fn is_syscall(self) -> bool {
        self.opcode() == OPCODE_SPECIAL && self.0 & FUNCT_MASK == FUNCT_SYSCALL
    }

    /// Whether this word is `eret`.
    pub fn is_eret(self) -> bool {
        self.0 == ERET_ENCODING
    }

    /// Whether the equivalence check must be skipped for this commit.
    ///
    /// `syscall` and `eret` may legitimately change control flow and
    /// privilege state in ways the two models report differently at commit
    /// granularity; both models still advance by one instruction.
    pub fn skips_check(self) -> bool {
        self.is_syscall() || self.is_eret()
    }
}
