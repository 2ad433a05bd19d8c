//! Named peripheral devices and their registry.
//!
//! This module defines the driver's view of the reference model's device
//! subsystem. It provides:
//! 1. **Identification:** `name` and `address_range` for lookup and routing.
//! 2. **Seeding:** A borrow of a device's backing memory, used once at
//!    startup to copy the DRAM contents into the memory image.
//! 3. **Peeking:** Side-effect-free reads for DUT requests outside the DRAM
//!    window.
//!
//! The registry is owned by the harness and shared with the driver through
//! an `Rc`; the whole run is single-threaded, so implementors carry no
//! `Send + Sync` bounds and the driver never writes through this interface.

/// Trait for a named peripheral exposed by the reference model.
pub trait Device {
    /// Returns a short name for this device (e.g. `"ddr"`, `"uart"`).
    fn name(&self) -> &str;
    /// Returns `(base_address, size_in_bytes)` of this device's region.
    fn address_range(&self) -> (u32, u32);
    /// Borrows `len` bytes of backing memory starting at the device-relative
    /// `offset`.
    fn map(&self, offset: usize, len: usize) -> &[u8];
    /// Reads up to 4 bytes at the absolute address `addr` without side
    /// effects, packed little-endian into the low bits of the result.
    fn peek(&self, addr: u32, len: usize) -> u32;
}

/// Registry of peripheral devices, looked up by name or routed by address.
#[derive(Default)]
pub struct DeviceRegistry {
    /// Registered devices, kept sorted by base address.
    devices: Vec<Box<dyn Device>>,
}

impl std::fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("devices", &self.devices.len())
            .finish()
    }
}

impl DeviceRegistry {
    /// Creates an empty registry; add devices with [`Self::register`].
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Registers a device; devices are sorted by base address for routing.
    pub fn register(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
    }

    /// Finds a device by name.
    pub fn find(&self, name: &str) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|d| d.name() == name)
            .map(AsRef::as_ref)
    }

    /// Reads `len` bytes at the absolute address `addr` from whichever
    /// device claims it.
    ///
    /// Unclaimed addresses read as 0: the DUT is allowed to probe holes in
    /// the map, and answering them is not this core's job to police.
    pub fn peek(&self, addr: u32, len: usize) -> u32 {
        for dev in &self.devices {
            let (base, size) = dev.address_range();
            if addr >= base && u64::from(addr) < u64::from(base) + u64::from(size) {
                return dev.peek(addr, len);
            }
        }
        0
    }
}
