//! The co-simulation driver: clock loop, commit sync, and fatal policy.
//!
//! This module owns the whole run. It provides:
//! 1. **Construction:** Seeding, memory-image initialization from the
//!    reference model's DRAM device, and the fixed reset sequence.
//! 2. **Clock Stepping:** One cycle = clock low + eval, clock high + eval,
//!    then one serviced bus request.
//! 3. **Cycle Epilogue:** Liveness accounting, commit synchronization, and
//!    the equivalence check.
//! 4. **Fatal Policy:** Divergences dump the reference state, print the
//!    report and seed, flush the DUT through the shutdown hook, and abort
//!    the process; stalls abort without the flush.

use std::process;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, trace};

use crate::bus::device::DeviceRegistry;
use crate::bus::dispatch::IoDispatcher;
use crate::bus::memory::MemImage;
use crate::common::constants::{DRAM_DEVICE_NAME, RESET_CYCLES};
use crate::common::error::CosimError;
use crate::config::Config;
use crate::isa::Instr;
use crate::model::dut::Dut;
use crate::model::reference::RefModel;

use super::check::check_commit;
use super::state::RunState;

/// Derives a fresh seed from wall-clock time mixed with process identity.
fn derive_seed() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    (secs as u32) ^ process::id()
}

/// Drives a DUT and a reference model in lock-step until the program under
/// test traps out, the cycle budget runs dry, or the models diverge.
pub struct CosimDriver<D: Dut, R: RefModel> {
    /// The hardware model, stepped two evaluation edges per cycle.
    pub dut: D,
    /// The golden reference, stepped one instruction per DUT commit.
    pub model: R,
    /// Run accounting (cycles, silence, finished, exit code, seed).
    pub state: RunState,
    /// Bus router owning the memory image.
    pub io: IoDispatcher,
    devices: Rc<DeviceRegistry>,
    trace_commits: bool,
}

impl<D: Dut, R: RefModel> std::fmt::Debug for CosimDriver<D, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosimDriver")
            .field("state", &self.state)
            .field("io", &self.io)
            .field("devices", &self.devices)
            .finish_non_exhaustive()
    }
}

impl<D: Dut, R: RefModel> CosimDriver<D, R> {
    /// Builds a driver around freshly constructed models and brings the DUT
    /// out of reset.
    ///
    /// The DUT arrives already constructed and is seeded here, after its own
    /// initialization has run; a replay with the same seed then starts from
    /// the same stream. Construction copies the reference model's DRAM
    /// device into the memory image, so both simulators start from identical
    /// memory, and holds reset for the fixed warm-up.
    ///
    /// # Arguments
    ///
    /// * `dut` - The hardware model, already constructed.
    /// * `model` - The reference simulator, built from the same startup
    ///   arguments as the process.
    /// * `devices` - The reference model's device registry; must contain a
    ///   device named `"ddr"`.
    /// * `config` - Run configuration.
    ///
    /// # Returns
    ///
    /// The ready-to-run driver, or [`CosimError::DeviceNotFound`] when the
    /// registry has no DRAM device to seed from.
    pub fn new(
        mut dut: D,
        model: R,
        devices: Rc<DeviceRegistry>,
        config: &Config,
    ) -> Result<Self, CosimError> {
        let seed = config.general.seed.unwrap_or_else(derive_seed);
        dut.seed_rng(seed);

        let dram = devices
            .find(DRAM_DEVICE_NAME)
            .ok_or_else(|| CosimError::DeviceNotFound {
                name: DRAM_DEVICE_NAME.to_owned(),
            })?;
        let mem = MemImage::from_device(dram, config.system.dram_size);
        debug!(bytes = mem.len(), "memory image seeded from '{DRAM_DEVICE_NAME}'");

        let mut driver = Self {
            dut,
            model,
            state: RunState::new(seed),
            io: IoDispatcher::new(mem),
            devices,
            trace_commits: config.general.trace_commits,
        };
        driver.reset();
        println!("[cosim] seed {seed}");
        Ok(driver)
    }

    /// Holds reset for the fixed warm-up length.
    ///
    /// Each iteration asserts reset, steps one full cycle, and de-asserts,
    /// exactly as many times as the run-reproducibility contract fixes.
    /// Warm-up cycles do not advance the run's cycle counter.
    fn reset(&mut self) {
        for _ in 0..RESET_CYCLES {
            self.dut.set_reset(true);
            self.step_cycle();
            self.dut.set_reset(false);
        }
        debug!("reset released after {RESET_CYCLES} cycles");
    }

    /// Steps one clock cycle: two evaluation edges, then one serviced bus
    /// request.
    pub fn step_cycle(&mut self) {
        self.dut.set_clock(false);
        self.dut.eval();
        self.dut.set_clock(true);
        self.dut.eval();

        let req = self.dut.mem_request();
        if let Some(word) = self.io.dispatch(&req, &self.devices, &mut self.state) {
            self.dut.set_mem_response(word);
        }
    }

    /// Runs the per-cycle bookkeeping after the clock edges: liveness
    /// accounting, then the commit path when the DUT retires an instruction.
    ///
    /// On a commit: clear the silent counter, push the DUT's committed `rt`
    /// value into the reference count register for an `mfc0` from Count,
    /// step the reference exactly one instruction, and compare architectural
    /// state unless the instruction is exempt (`syscall`/`eret`).
    pub fn cycle_epilogue(&mut self) -> Result<(), CosimError> {
        self.state.tick()?;

        if !self.dut.commit_valid() {
            return Ok(());
        }
        self.state.record_commit();

        let instr = Instr(self.dut.commit_instr());
        if self.trace_commits {
            trace!(
                cycle = self.state.cycles,
                pc = format_args!("{:#010x}", self.dut.commit_pc()),
                word = format_args!("{:#010x}", instr.0),
                "commit"
            );
        }

        if instr.is_mfc0_count() {
            self.model.set_count(self.dut.commit_gpr(instr.rt()));
        }
        self.model.exec_one();

        if instr.skips_check() {
            return Ok(());
        }
        check_commit(self.state.cycles, &self.dut, &self.model)
    }

    /// Advances the co-simulation by up to `n` cycles or until finished.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of clock cycles to run.
    ///
    /// # Returns
    ///
    /// The recorded exit code once the run finished; `-1` when the budget
    /// was exhausted first; `0` is reserved for an early exit that is
    /// neither (unreachable today, since the loop only leaves early through
    /// `finished`). Callers propagate a non-negative value as the process
    /// exit status.
    ///
    /// A divergence or stall does not return at all: the run prints its
    /// report and the process aborts.
    pub fn execute(&mut self, mut n: u64) -> i32 {
        while !self.state.finished && n > 0 {
            self.step_cycle();
            if let Err(err) = self.cycle_epilogue() {
                self.fail(&err);
            }
            n -= 1;
        }

        if self.state.finished {
            return self.state.exit_code;
        }
        if n == 0 { -1 } else { 0 }
    }

    /// Idempotent shutdown hook.
    ///
    /// The first call marks the run finished and steps one more clock cycle
    /// so in-flight DUT effects (stores, trace writes) drain before any
    /// diagnostic dump; later calls are no-ops and nothing about
    /// `finished`/`exit_code` changes again.
    pub fn abort_prologue(&mut self) {
        if self.state.finished {
            return;
        }
        self.state.finished = true;
        self.step_cycle();
    }

    /// Reports a fatal error and terminates the process.
    ///
    /// Divergences dump the reference model first and flush the DUT through
    /// [`Self::abort_prologue`]; a stall aborts as-is, since there is no
    /// consistent post-commit state worth flushing.
    fn fail(&mut self, err: &CosimError) -> ! {
        if err.is_divergence() {
            self.model.dump();
        }
        eprintln!("[cosim] {err}");
        eprintln!("[cosim] seed {}", self.state.seed);
        if err.is_divergence() {
            self.abort_prologue();
        }
        process::abort();
    }
}
