//! Per-domain operation tables
//!
//! One module per command family; each declares a static table of
//! [`OperationDescriptor`]s in the order the operation directory lists them.
//! Payload sizes and structure revisions follow the vendor ABI; the field
//! layouts behind them stay opaque except for the offsets the prepare hooks
//! patch.

pub mod clock;
pub mod power;
pub mod thermal;

use crate::driver::EntryPoint;
use crate::registry::OperationDescriptor;

/// Command family: one raw-operation table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Clock frequency and boost operations
    Clock,
    /// Power policy and voltage operations
    Power,
    /// Thermal policy, sensor and cooler operations
    Thermal,
}

impl Family {
    /// The family's operation table, in declaration order.
    pub fn table(self) -> &'static [OperationDescriptor] {
        match self {
            Self::Clock => clock::OPS,
            Self::Power => power::OPS,
            Self::Thermal => thermal::OPS,
        }
    }

    /// Family name as it appears on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Power => "power",
            Self::Thermal => "thermal",
        }
    }
}

/// Find the descriptor dispatching to a given entry point, across all
/// families. Backends use this to learn the expected payload size and
/// version tag for a call.
pub fn descriptor_for(entry: EntryPoint) -> Option<&'static OperationDescriptor> {
    [Family::Clock, Family::Power, Family::Thermal]
        .into_iter()
        .flat_map(|family| family.table().iter())
        .find(|op| op.entry == entry)
}
