//! Driver status codes
//!
//! Every driver entry point returns a [`Status`]. The numeric values mirror
//! the vendor ABI and are stable; they are reported to the user verbatim
//! alongside the human-readable message.

use core::fmt;

/// Result of a single driver entry point call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Call completed successfully
    Ok,
    /// Generic driver failure
    Error,
    /// An argument (handle, pointer, selector) was rejected
    InvalidArgument,
    /// The payload's version tag does not match a layout the driver knows
    IncompatibleVersion,
    /// The entry point is not supported on this device or driver
    NotSupported,
    /// The device handle no longer refers to a present device
    DeviceNotFound,
}

impl Status {
    /// Raw numeric status code as returned by the driver ABI.
    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Error => -1,
            Self::InvalidArgument => -5,
            Self::IncompatibleVersion => -9,
            Self::NotSupported => -104,
            Self::DeviceNotFound => -6,
        }
    }

    /// Returns true for [`Status::Ok`].
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "driver error"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::IncompatibleVersion => write!(f, "incompatible payload version"),
            Self::NotSupported => write!(f, "operation not supported"),
            Self::DeviceNotFound => write!(f, "device not found"),
        }
    }
}
