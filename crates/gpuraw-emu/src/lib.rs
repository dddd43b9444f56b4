//! gpuraw-emu - In-memory driver emulator
//!
//! Emulates the vendor driver for development and testing without real
//! hardware. Devices are fake; payload contents are deterministic patterns
//! derived from the device handle, so multi-device output is tellable apart.
//! The emulator enforces the version-tag contract the way the real driver
//! does: a payload whose tag differs from the revision it implements is
//! rejected with the incompatible-version status.

use gpuraw_core::driver::{DeviceHandle, EntryPoint, RawDriver};
use gpuraw_core::error::Result;
use gpuraw_core::ops;
use gpuraw_core::Status;

/// Configuration for the emulated driver.
#[derive(Debug, Clone)]
pub struct EmuConfig {
    /// Number of devices to enumerate
    pub devices: usize,
    /// Devices (by enumeration index) whose calls fail, and with what status
    pub fail: Vec<(usize, Status)>,
}

impl Default for EmuConfig {
    fn default() -> Self {
        Self {
            devices: 2,
            fail: Vec::new(),
        }
    }
}

/// Emulated driver backend.
pub struct EmuDriver {
    config: EmuConfig,
    calls: Vec<(EntryPoint, usize)>,
}

// Handles are offset so a raw index is never mistaken for a handle
const HANDLE_BASE: u64 = 0x1000;

impl EmuDriver {
    /// Create an emulator with the given configuration.
    pub fn new(config: EmuConfig) -> Self {
        Self {
            config,
            calls: Vec::new(),
        }
    }

    /// Create an emulator with the default configuration (two devices).
    pub fn new_default() -> Self {
        Self::new(EmuConfig::default())
    }

    /// Calls made so far, as `(entry point, device index)` pairs.
    pub fn calls(&self) -> &[(EntryPoint, usize)] {
        &self.calls
    }

    fn device_index(device: DeviceHandle) -> usize {
        (device.raw() - HANDLE_BASE) as usize
    }
}

impl RawDriver for EmuDriver {
    fn device_count(&mut self) -> Result<usize> {
        Ok(self.config.devices)
    }

    fn device_by_index(&mut self, index: usize) -> Result<DeviceHandle> {
        Ok(DeviceHandle::from_raw(HANDLE_BASE + index as u64))
    }

    fn call(&mut self, entry: EntryPoint, device: DeviceHandle, payload: &mut [u8]) -> Status {
        let index = Self::device_index(device);
        self.calls.push((entry, index));

        if index >= self.config.devices {
            return Status::DeviceNotFound;
        }
        if let Some(&(_, status)) = self.config.fail.iter().find(|(i, _)| *i == index) {
            log::debug!("emu: injected failure for gpu{}", index);
            return status;
        }

        // Same version check the real driver performs
        let Some(op) = ops::descriptor_for(entry) else {
            return Status::NotSupported;
        };
        if payload.len() != op.payload_size {
            return Status::InvalidArgument;
        }
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&payload[..4]);
        if u32::from_le_bytes(tag) != op.version_tag {
            return Status::IncompatibleVersion;
        }

        if !op.mutating {
            // Deterministic per-device body; the version tag is echoed back
            let seed = index as u8;
            for (offset, byte) in payload[4..].iter_mut().enumerate() {
                *byte = seed.wrapping_add(offset as u8).wrapping_mul(31);
            }
        }

        Status::Ok
    }
}
