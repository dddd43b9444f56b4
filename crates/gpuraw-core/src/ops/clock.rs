//! Clock family operation table

use crate::driver::EntryPoint;
use crate::registry::{version_tag, OperationDescriptor, PrepareArgs};

/// Clock type selector (current/base/boost) lives right after the version
/// tag. Defaults to zero (current) when --domain is not given.
fn select_clock_type(payload: &mut [u8], args: &PrepareArgs) {
    if let Some(domain) = args.domain {
        payload[4..8].copy_from_slice(&domain.to_le_bytes());
    }
}

/// Raw clock operations, in directory order.
pub static OPS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "frequencies",
        description: "Read clock frequencies for all domains (--domain: 0=current 1=base 2=boost)",
        payload_size: 0x288,
        version_tag: version_tag(0x288, 3),
        mutating: false,
        entry: EntryPoint::ClockGetAllFrequencies,
        prepare: Some(select_clock_type),
    },
    OperationDescriptor {
        name: "boost-table",
        description: "Read the clock boost table",
        payload_size: 0x39C,
        version_tag: version_tag(0x39C, 1),
        mutating: false,
        entry: EntryPoint::ClockGetBoostTable,
        prepare: None,
    },
    OperationDescriptor {
        name: "set-boost-table",
        description: "Write a clock boost table (requires --in)",
        payload_size: 0x39C,
        version_tag: version_tag(0x39C, 1),
        mutating: true,
        entry: EntryPoint::ClockSetBoostTable,
        prepare: None,
    },
    OperationDescriptor {
        name: "boost-lock",
        description: "Read the clock boost lock state",
        payload_size: 0x58,
        version_tag: version_tag(0x58, 2),
        mutating: false,
        entry: EntryPoint::ClockGetBoostLock,
        prepare: None,
    },
    OperationDescriptor {
        name: "set-boost-lock",
        description: "Write the clock boost lock state (requires --in)",
        payload_size: 0x58,
        version_tag: version_tag(0x58, 2),
        mutating: true,
        entry: EntryPoint::ClockSetBoostLock,
        prepare: None,
    },
    OperationDescriptor {
        name: "vf-curve",
        description: "Read the voltage/frequency curve",
        payload_size: 0x1C28,
        version_tag: version_tag(0x1C28, 1),
        mutating: false,
        entry: EntryPoint::ClockGetVfCurve,
        prepare: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_type_hook_patches_offset_4() {
        let mut payload = vec![0u8; 0x288];
        select_clock_type(
            &mut payload,
            &PrepareArgs {
                domain: Some(2),
                class: None,
            },
        );
        assert_eq!(&payload[4..8], &2u32.to_le_bytes());
        // Everything else untouched
        assert!(payload[8..].iter().all(|&b| b == 0));
        assert_eq!(&payload[..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_clock_type_hook_noop_without_domain() {
        let mut payload = vec![0xAAu8; 0x288];
        select_clock_type(&mut payload, &PrepareArgs::default());
        assert!(payload.iter().all(|&b| b == 0xAA));
    }
}
