//! Thermal family operation table

use crate::driver::EntryPoint;
use crate::registry::{version_tag, OperationDescriptor, PrepareArgs};

/// Thermal policy class selector lives right after the version tag.
fn select_policy_class(payload: &mut [u8], args: &PrepareArgs) {
    if let Some(class) = args.class {
        payload[4..8].copy_from_slice(&class.to_le_bytes());
    }
}

/// Sensor mask lives right after the version tag.
fn select_sensor_mask(payload: &mut [u8], args: &PrepareArgs) {
    if let Some(domain) = args.domain {
        payload[4..8].copy_from_slice(&domain.to_le_bytes());
    }
}

/// Cooler index selector lives right after the version tag.
fn select_cooler_index(payload: &mut [u8], args: &PrepareArgs) {
    if let Some(domain) = args.domain {
        payload[4..8].copy_from_slice(&domain.to_le_bytes());
    }
}

/// Raw thermal operations, in directory order.
pub static OPS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "policies-info",
        description: "Read thermal policy limits (--class: policy class selector)",
        payload_size: 0x64,
        version_tag: version_tag(0x64, 2),
        mutating: false,
        entry: EntryPoint::ThermalGetPoliciesInfo,
        prepare: Some(select_policy_class),
    },
    OperationDescriptor {
        name: "policies-status",
        description: "Read the currently applied thermal policy (--class: policy class selector)",
        payload_size: 0x40,
        version_tag: version_tag(0x40, 2),
        mutating: false,
        entry: EntryPoint::ThermalGetPoliciesStatus,
        prepare: Some(select_policy_class),
    },
    OperationDescriptor {
        name: "set-policies-control",
        description: "Apply a thermal policy (requires --in)",
        payload_size: 0x40,
        version_tag: version_tag(0x40, 2),
        mutating: true,
        entry: EntryPoint::ThermalSetPoliciesControl,
        prepare: None,
    },
    OperationDescriptor {
        name: "sensors",
        description: "Read thermal sensor readings (--domain: sensor mask)",
        payload_size: 0x2C8,
        version_tag: version_tag(0x2C8, 2),
        mutating: false,
        entry: EntryPoint::ThermalGetSensors,
        prepare: Some(select_sensor_mask),
    },
    OperationDescriptor {
        name: "cooler-settings",
        description: "Read cooler settings (--domain: cooler index)",
        payload_size: 0x228,
        version_tag: version_tag(0x228, 4),
        mutating: false,
        entry: EntryPoint::ThermalGetCoolerSettings,
        prepare: Some(select_cooler_index),
    },
    OperationDescriptor {
        name: "set-cooler-levels",
        description: "Write cooler levels (requires --in)",
        payload_size: 0x198,
        version_tag: version_tag(0x198, 1),
        mutating: true,
        entry: EntryPoint::ThermalSetCoolerLevels,
        prepare: None,
    },
];
