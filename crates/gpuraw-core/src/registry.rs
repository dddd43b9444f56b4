//! Operation registry data model
//!
//! Operations are described by static, read-only tables declared in
//! [`crate::ops`]. Lookup is an exact, case-sensitive linear scan; tables
//! hold tens of entries, so nothing fancier is warranted.

use crate::driver::EntryPoint;

/// Values parsed from the command line that prepare hooks may consume.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareArgs {
    /// `--domain N`: operation-specific domain selector (e.g. a clock domain)
    pub domain: Option<u32>,
    /// `--class N`: operation-specific class selector (e.g. a policy class)
    pub class: Option<u32>,
}

/// Patches operation-specific fields of a payload before invocation.
///
/// A hook only ever touches offsets belonging to its own operation's layout;
/// it runs after the version tag has been stamped.
pub type PrepareFn = fn(&mut [u8], &PrepareArgs);

/// Describes one invocable named operation.
pub struct OperationDescriptor {
    /// Unique key, matched exactly against the command line
    pub name: &'static str,
    /// Human-readable summary for the operation directory
    pub description: &'static str,
    /// Exact byte length of this operation's payload
    pub payload_size: usize,
    /// Value stamped into payload bytes 0..4 (little-endian) before every call
    pub version_tag: u32,
    /// Whether the operation changes device state
    pub mutating: bool,
    /// Driver entry point this operation dispatches to
    pub entry: EntryPoint,
    /// Optional pre-invocation payload patch
    pub prepare: Option<PrepareFn>,
}

/// Encode a version tag the way the driver ABI does: payload size in the low
/// 16 bits, structure revision in the high 16.
pub const fn version_tag(payload_size: usize, revision: u32) -> u32 {
    (payload_size as u32) | (revision << 16)
}

/// Look up an operation by exact name.
pub fn find<'a>(table: &'a [OperationDescriptor], name: &str) -> Option<&'a OperationDescriptor> {
    table.iter().find(|op| op.name == name)
}
