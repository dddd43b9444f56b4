//! Error types for gpuraw-core

use std::io;
use std::path::PathBuf;

use crate::status::Status;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Host-side error type.
///
/// Driver status codes are not errors at this level; they become
/// [`Error::Driver`] only when a caller decides a non-success status ends the
/// current device's pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operation name did not match any registry entry
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Enumeration succeeded but returned zero devices
    #[error("no devices found")]
    NoDevices,

    /// Explicit --index was outside the enumerated range
    #[error("device index {index} out of range ({count} device(s) found)")]
    IndexOutOfRange {
        /// Requested enumeration index
        index: usize,
        /// Number of devices the directory reported
        count: usize,
    },

    /// A mutating operation was run without an input payload
    #[error("operation '{0}' modifies device state and requires --in")]
    InputRequired(String),

    /// Input file length differs from the operation's payload size
    #[error("{path}: file is {actual} bytes, operation expects exactly {expected}")]
    PayloadSizeMismatch {
        /// Offending input file
        path: PathBuf,
        /// Payload size declared by the operation descriptor
        expected: usize,
        /// Actual file length
        actual: u64,
    },

    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Input file path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Driver entry point returned a non-success status
    #[error("{status} (status {code})", code = .status.code())]
    Driver {
        /// Status the entry point returned
        status: Status,
    },
}
