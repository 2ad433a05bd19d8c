use std::rc::Rc;

use lockstep_core::{Config, CosimDriver, DeviceRegistry};

use crate::common::mocks::devices::RamDevice;
use crate::common::mocks::dut::ScriptedDut;
use crate::common::mocks::reference::{ArchState, TapeRef};

/// DRAM window used by harness-built drivers; small enough that tests can
/// reason about its edges.
pub const TEST_DRAM_SIZE: usize = 4096;

/// Fixed seed so every harness run is reproducible.
pub const TEST_SEED: u32 = 0x5EED;

/// Base address of the out-of-window test peripheral.
pub const TEST_DEVICE_BASE: u32 = 0x2000_0000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.system.dram_size = TEST_DRAM_SIZE;
    config.general.seed = Some(TEST_SEED);
    config
}

/// A registry with a patterned `"ddr"` device and one small out-of-window
/// peripheral at [`TEST_DEVICE_BASE`].
pub fn test_registry() -> Rc<DeviceRegistry> {
    let mut registry = DeviceRegistry::new();
    registry.register(Box::new(RamDevice::patterned("ddr", 0, TEST_DRAM_SIZE)));
    registry.register(Box::new(RamDevice::new(
        "uart",
        TEST_DEVICE_BASE,
        vec![0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88],
    )));
    Rc::new(registry)
}

pub struct TestContext {
    pub driver: CosimDriver<ScriptedDut, TapeRef>,
    pub devices: Rc<DeviceRegistry>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_models(ScriptedDut::new(), TapeRef::idle())
    }

    pub fn with_dut(dut: ScriptedDut) -> Self {
        Self::with_models(dut, TapeRef::idle())
    }

    pub fn with_models(dut: ScriptedDut, reference: TapeRef) -> Self {
        init_tracing();
        let devices = test_registry();
        let driver = CosimDriver::new(dut, reference, Rc::clone(&devices), &test_config()).unwrap();
        Self { driver, devices }
    }

    /// Steps `n` full cycles, asserting none of them turns fatal.
    pub fn run_ok(&mut self, n: u64) {
        for _ in 0..n {
            self.driver.step_cycle();
            self.driver.cycle_epilogue().unwrap();
        }
    }
}

/// Builds a lock-step pair: the DUT commits each snapshot in order while the
/// reference tape replays the identical snapshots.
pub fn matched_run(commits: &[ArchState]) -> TestContext {
    let mut dut = ScriptedDut::new();
    for commit in commits {
        dut.push_commit(commit.pc, commit.instr, commit.gprs);
    }
    TestContext::with_models(dut, TapeRef::with_tape(commits.to_vec()))
}
