//! Driver and device-directory abstractions
//!
//! The vendor driver is modeled as a small trait: enumerate devices, resolve
//! an index to an opaque handle, and call a named entry point with a binary
//! payload. Backends implement [`RawDriver`]; everything above it (registry,
//! buffer lifecycle, fan-out) is backend-agnostic.

use crate::error::{Error, Result};
use crate::status::Status;

/// Opaque handle identifying one device to the driver.
///
/// The numeric value has no meaning outside the backend that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(u64);

impl DeviceHandle {
    /// Wrap a backend-issued raw handle value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle value, for backend use and diagnostics.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Closed set of driver entry points the registry can dispatch to.
///
/// Each variant names one fixed-ABI vendor entry point taking a device handle
/// and a version-tagged binary payload. The set is closed on purpose: adding
/// an operation means adding a variant here and a descriptor to the matching
/// table in [`crate::ops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    // Clock family
    /// Read current/base/boost clock frequencies for all clock domains
    ClockGetAllFrequencies,
    /// Read the clock boost table
    ClockGetBoostTable,
    /// Write the clock boost table
    ClockSetBoostTable,
    /// Read the clock boost lock state
    ClockGetBoostLock,
    /// Write the clock boost lock state
    ClockSetBoostLock,
    /// Read the voltage/frequency curve
    ClockGetVfCurve,

    // Power family
    /// Read power policy limits (min/default/max)
    PowerGetPoliciesInfo,
    /// Read the currently applied power policy
    PowerGetPoliciesStatus,
    /// Apply a power policy
    PowerSetPoliciesControl,
    /// Read instantaneous voltage rail status
    PowerGetVoltageStatus,
    /// Read the voltage boost percentage
    PowerGetVoltageBoost,
    /// Write the voltage boost percentage
    PowerSetVoltageBoost,

    // Thermal family
    /// Read thermal policy limits
    ThermalGetPoliciesInfo,
    /// Read the currently applied thermal policy
    ThermalGetPoliciesStatus,
    /// Apply a thermal policy
    ThermalSetPoliciesControl,
    /// Read thermal sensor readings
    ThermalGetSensors,
    /// Read cooler (fan) settings
    ThermalGetCoolerSettings,
    /// Write cooler (fan) levels
    ThermalSetCoolerLevels,
}

impl EntryPoint {
    /// ABI-level entry point name, used for diagnostics only.
    pub fn name(self) -> &'static str {
        match self {
            Self::ClockGetAllFrequencies => "GPU_GetAllClockFrequencies",
            Self::ClockGetBoostTable => "GPU_GetClockBoostTable",
            Self::ClockSetBoostTable => "GPU_SetClockBoostTable",
            Self::ClockGetBoostLock => "GPU_GetClockBoostLock",
            Self::ClockSetBoostLock => "GPU_SetClockBoostLock",
            Self::ClockGetVfCurve => "GPU_GetVfCurve",
            Self::PowerGetPoliciesInfo => "GPU_GetPowerPoliciesInfo",
            Self::PowerGetPoliciesStatus => "GPU_GetPowerPoliciesStatus",
            Self::PowerSetPoliciesControl => "GPU_SetPowerPoliciesControl",
            Self::PowerGetVoltageStatus => "GPU_GetVoltageStatus",
            Self::PowerGetVoltageBoost => "GPU_GetVoltageBoostPercent",
            Self::PowerSetVoltageBoost => "GPU_SetVoltageBoostPercent",
            Self::ThermalGetPoliciesInfo => "GPU_GetThermalPoliciesInfo",
            Self::ThermalGetPoliciesStatus => "GPU_GetThermalPoliciesStatus",
            Self::ThermalSetPoliciesControl => "GPU_SetThermalPoliciesControl",
            Self::ThermalGetSensors => "GPU_GetThermalSensors",
            Self::ThermalGetCoolerSettings => "GPU_GetCoolerSettings",
            Self::ThermalSetCoolerLevels => "GPU_SetCoolerLevels",
        }
    }
}

/// Driver backend interface: device directory plus raw entry point calls.
pub trait RawDriver {
    /// Number of devices the driver currently enumerates.
    fn device_count(&mut self) -> Result<usize>;

    /// Resolve an enumeration index to a device handle.
    ///
    /// Indices are dense and zero-based; `index < device_count()` must hold.
    fn device_by_index(&mut self, index: usize) -> Result<DeviceHandle>;

    /// Call one entry point against one device.
    ///
    /// The payload length is fixed by the operation descriptor; the driver
    /// may read and write any part of it. The call is synchronous and is
    /// expected to return promptly.
    fn call(&mut self, entry: EntryPoint, device: DeviceHandle, payload: &mut [u8]) -> Status;
}

/// Devices selected for one command: `(enumeration index, handle)` pairs in
/// enumeration order.
pub type DeviceSelection = Vec<(usize, DeviceHandle)>;

/// Resolve the device selection for a command.
///
/// With an explicit index, selects exactly that device (bounds-checked).
/// Without one, selects every enumerated device; an empty enumeration is a
/// hard failure, not an empty selection.
pub fn select_devices(driver: &mut dyn RawDriver, index: Option<usize>) -> Result<DeviceSelection> {
    let count = driver.device_count()?;
    if count == 0 {
        return Err(Error::NoDevices);
    }

    match index {
        Some(index) => {
            if index >= count {
                return Err(Error::IndexOutOfRange { index, count });
            }
            let handle = driver.device_by_index(index)?;
            Ok(vec![(index, handle)])
        }
        None => {
            let mut selection = Vec::with_capacity(count);
            for index in 0..count {
                selection.push((index, driver.device_by_index(index)?));
            }
            Ok(selection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDriver {
        count: usize,
    }

    impl RawDriver for FakeDriver {
        fn device_count(&mut self) -> Result<usize> {
            Ok(self.count)
        }

        fn device_by_index(&mut self, index: usize) -> Result<DeviceHandle> {
            Ok(DeviceHandle::from_raw(0x100 + index as u64))
        }

        fn call(&mut self, _: EntryPoint, _: DeviceHandle, _: &mut [u8]) -> Status {
            Status::Ok
        }
    }

    #[test]
    fn test_select_all_devices() {
        let mut driver = FakeDriver { count: 3 };
        let selection = select_devices(&mut driver, None).unwrap();
        assert_eq!(selection.len(), 3);
        assert_eq!(selection[0].0, 0);
        assert_eq!(selection[2].0, 2);
        assert_eq!(selection[1].1, DeviceHandle::from_raw(0x101));
    }

    #[test]
    fn test_select_single_device() {
        let mut driver = FakeDriver { count: 2 };
        let selection = select_devices(&mut driver, Some(1)).unwrap();
        assert_eq!(selection, vec![(1, DeviceHandle::from_raw(0x101))]);
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut driver = FakeDriver { count: 2 };
        match select_devices(&mut driver, Some(2)) {
            Err(Error::IndexOutOfRange { index: 2, count: 2 }) => {}
            other => panic!("expected IndexOutOfRange, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn test_select_all_with_no_devices_fails() {
        let mut driver = FakeDriver { count: 0 };
        assert!(matches!(
            select_devices(&mut driver, None),
            Err(Error::NoDevices)
        ));
    }
}
