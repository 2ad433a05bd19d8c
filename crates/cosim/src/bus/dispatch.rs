//! Memory and IO request dispatch.
//!
//! Services at most one DUT bus request per clock cycle:
//! 1. **DRAM window:** Addresses below the window size hit the memory image
//!    (reads return 4 stored bytes, writes honor the per-byte strobe).
//! 2. **Device reads:** Addresses above the window are peeked from the
//!    device registry.
//! 3. **GPIO trap:** A write to the trap address ends the run and carries
//!    the exit code in the data word.
//!
//! Out-of-window writes anywhere else are accepted and dropped: the device
//! bus exposes no write path, and the hardware models this driver targets
//! never write devices directly.

use tracing::{info, trace};

use crate::common::constants::{GPIO_TRAP_ADDR, WORD_BYTES};
use crate::model::dut::{MemFunc, MemRequest};
use crate::sim::state::RunState;

use super::device::DeviceRegistry;
use super::memory::MemImage;

/// Routes DUT bus requests to the memory image, the device registry, or the
/// GPIO trap.
#[derive(Debug)]
pub struct IoDispatcher {
    /// Backing store for the DRAM window.
    pub mem: MemImage,
}

impl IoDispatcher {
    /// Creates a dispatcher over an already-seeded memory image.
    pub fn new(mem: MemImage) -> Self {
        Self { mem }
    }

    /// Services one bus request.
    ///
    /// # Arguments
    ///
    /// * `req` - The DUT's request bus for this cycle.
    /// * `devices` - Registry answering reads outside the DRAM window.
    /// * `state` - Run state, finished by a GPIO-trap write.
    ///
    /// # Returns
    ///
    /// The response word to place in the DUT's response slot, or `None` when
    /// the request was invalid or a write.
    pub fn dispatch(
        &mut self,
        req: &MemRequest,
        devices: &DeviceRegistry,
        state: &mut RunState,
    ) -> Option<u32> {
        if !req.valid {
            return None;
        }
        match req.func {
            MemFunc::Read => {
                let word = if self.mem.contains(req.addr) {
                    self.mem.read_word(req.addr)
                } else {
                    devices.peek(req.addr, WORD_BYTES)
                };
                trace!(
                    addr = format_args!("{:#010x}", req.addr),
                    word = format_args!("{word:#010x}"),
                    "bus read"
                );
                Some(word)
            }
            MemFunc::Write => {
                if self.mem.contains(req.addr) {
                    self.mem.write_word(req.addr, req.data, req.strobe);
                    trace!(
                        addr = format_args!("{:#010x}", req.addr),
                        data = format_args!("{:#010x}", req.data),
                        strobe = format_args!("{:#06b}", req.strobe),
                        "bus write"
                    );
                } else if req.addr == GPIO_TRAP_ADDR {
                    state.finish(req.data as i32);
                    info!(code = state.exit_code, "gpio trap written, run finished");
                }
                None
            }
        }
    }
}
