//! List commands implementation

use crate::drivers;
use gpuraw_core::ops::Family;

/// Print the operation directory for one family
pub fn list_operations(family: Family) {
    println!("Raw {} operations:", family.name());
    println!();
    println!(
        "{:<22} {:>8} {:>12}  {}",
        "Name", "Size", "Version", "Description"
    );
    println!("{}", "-".repeat(78));

    for op in family.table() {
        println!(
            "{:<22} {:>8} {:>12}  {}",
            op.name,
            format!("{} B", op.payload_size),
            format!("0x{:08X}", op.version_tag),
            op.description
        );
    }
}

/// List all available driver backends
pub fn list_drivers() {
    println!("Available driver backends:");
    println!();
    for d in drivers::available_drivers() {
        println!("  {:8} - {}", d.name, d.description);
    }
}
