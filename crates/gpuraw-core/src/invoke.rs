//! Invoker: one driver call against one device
//!
//! Deliberately thin. Driver calls are synchronous and prompt; there is no
//! retry and no timeout. A non-success status fails this device only.

use crate::driver::{DeviceHandle, RawDriver};
use crate::error::{Error, Result};
use crate::registry::OperationDescriptor;

/// Call the operation's entry point with a prepared payload.
pub fn invoke(
    driver: &mut dyn RawDriver,
    op: &OperationDescriptor,
    device: DeviceHandle,
    payload: &mut [u8],
) -> Result<()> {
    debug_assert_eq!(payload.len(), op.payload_size);

    log::debug!(
        "calling {} on handle {:#x} ({} byte payload)",
        op.entry.name(),
        device.raw(),
        payload.len()
    );

    let status = driver.call(op.entry, device, payload);
    if status.is_ok() {
        Ok(())
    } else {
        Err(Error::Driver { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::EntryPoint;
    use crate::registry::version_tag;
    use crate::status::Status;

    struct OneStatusDriver(Status);

    impl RawDriver for OneStatusDriver {
        fn device_count(&mut self) -> Result<usize> {
            Ok(1)
        }

        fn device_by_index(&mut self, _: usize) -> Result<DeviceHandle> {
            Ok(DeviceHandle::from_raw(1))
        }

        fn call(&mut self, _: EntryPoint, _: DeviceHandle, _: &mut [u8]) -> Status {
            self.0
        }
    }

    fn test_op() -> OperationDescriptor {
        OperationDescriptor {
            name: "probe",
            description: "test operation",
            payload_size: 16,
            version_tag: version_tag(16, 1),
            mutating: false,
            entry: EntryPoint::ClockGetBoostLock,
            prepare: None,
        }
    }

    #[test]
    fn test_success_status_maps_to_ok() {
        let mut driver = OneStatusDriver(Status::Ok);
        let op = test_op();
        let mut payload = vec![0u8; 16];
        assert!(invoke(&mut driver, &op, DeviceHandle::from_raw(1), &mut payload).is_ok());
    }

    #[test]
    fn test_failure_status_carries_code() {
        let mut driver = OneStatusDriver(Status::NotSupported);
        let op = test_op();
        let mut payload = vec![0u8; 16];
        match invoke(&mut driver, &op, DeviceHandle::from_raw(1), &mut payload) {
            Err(Error::Driver { status }) => assert_eq!(status.code(), -104),
            other => panic!("expected driver error, got {:?}", other),
        }
    }
}
