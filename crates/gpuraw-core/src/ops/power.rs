//! Power family operation table

use crate::driver::EntryPoint;
use crate::registry::{version_tag, OperationDescriptor};

/// Raw power operations, in directory order.
pub static OPS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "policies-info",
        description: "Read power policy limits (min/default/max)",
        payload_size: 0x4C,
        version_tag: version_tag(0x4C, 1),
        mutating: false,
        entry: EntryPoint::PowerGetPoliciesInfo,
        prepare: None,
    },
    OperationDescriptor {
        name: "policies-status",
        description: "Read the currently applied power policy",
        payload_size: 0x30,
        version_tag: version_tag(0x30, 1),
        mutating: false,
        entry: EntryPoint::PowerGetPoliciesStatus,
        prepare: None,
    },
    OperationDescriptor {
        name: "set-policies-control",
        description: "Apply a power policy (requires --in)",
        payload_size: 0x30,
        version_tag: version_tag(0x30, 1),
        mutating: true,
        entry: EntryPoint::PowerSetPoliciesControl,
        prepare: None,
    },
    OperationDescriptor {
        name: "voltage-status",
        description: "Read instantaneous voltage rail status",
        payload_size: 0x38,
        version_tag: version_tag(0x38, 1),
        mutating: false,
        entry: EntryPoint::PowerGetVoltageStatus,
        prepare: None,
    },
    OperationDescriptor {
        name: "voltage-boost",
        description: "Read the voltage boost percentage",
        payload_size: 0x10,
        version_tag: version_tag(0x10, 1),
        mutating: false,
        entry: EntryPoint::PowerGetVoltageBoost,
        prepare: None,
    },
    OperationDescriptor {
        name: "set-voltage-boost",
        description: "Write the voltage boost percentage (requires --in)",
        payload_size: 0x10,
        version_tag: version_tag(0x10, 1),
        mutating: true,
        entry: EntryPoint::PowerSetVoltageBoost,
        prepare: None,
    },
];
