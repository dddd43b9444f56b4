//! Raw operation dispatch
//!
//! The generic engine behind the clock/power/thermal families: resolve the
//! named operation, resolve the device selection, then run the
//! prepare/invoke/route pipeline once per device. The batch is best-effort:
//! a failure on one device is reported with its index and the loop moves on.
//! Only global preconditions (unknown operation, missing required input, no
//! devices) abort the command.

use std::io;

use crate::cli::RawArgs;
use gpuraw_core::buffer::prepare_payload;
use gpuraw_core::driver::{select_devices, DeviceHandle, RawDriver};
use gpuraw_core::invoke::invoke;
use gpuraw_core::ops::Family;
use gpuraw_core::output::{hex_dump, payload_version, per_device_path, write_payload};
use gpuraw_core::registry::{find, OperationDescriptor, PrepareArgs};
use gpuraw_core::Error;

/// Run one raw operation (or "list") for a family
pub fn run(
    driver: &mut dyn RawDriver,
    family: Family,
    args: &RawArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.operation == "list" {
        super::list::list_operations(family);
        return Ok(());
    }

    let op = find(family.table(), &args.operation)
        .ok_or_else(|| unknown_operation_error(family, &args.operation))?;

    if op.mutating && args.input.is_none() {
        return Err(Error::InputRequired(op.name.to_string()).into());
    }

    let selection = select_devices(driver, args.index)?;
    let multi = selection.len() > 1;
    let prepare_args = PrepareArgs {
        domain: args.domain,
        class: args.class,
    };

    log::info!(
        "Running '{}' on {} device(s)",
        op.name,
        selection.len()
    );

    // Best-effort batch: a failed device never stops the rest
    for (index, handle) in selection {
        if let Err(e) = run_one(driver, op, index, handle, args, &prepare_args, multi) {
            eprintln!("gpu{}: {}: {}", index, op.name, e);
        }
    }

    Ok(())
}

/// Prepare, invoke and route output for a single device
#[allow(clippy::too_many_arguments)]
fn run_one(
    driver: &mut dyn RawDriver,
    op: &OperationDescriptor,
    index: usize,
    handle: DeviceHandle,
    args: &RawArgs,
    prepare_args: &PrepareArgs,
    multi: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut payload = prepare_payload(op, args.input.as_deref(), prepare_args)?;

    invoke(driver, op, handle, &mut payload)?;

    route_output(op, index, &payload, args, multi)
}

/// Render a completed payload: summary line, optional file, optional dump
fn route_output(
    op: &OperationDescriptor,
    index: usize,
    payload: &[u8],
    args: &RawArgs,
    multi: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "gpu{}: {}: {} bytes, version 0x{:08X}",
        index,
        op.name,
        payload.len(),
        payload_version(payload)
    );

    if let Some(base) = &args.output {
        let path = per_device_path(base, index, multi);
        write_payload(&path, payload)?;
        println!(
            "gpu{}: wrote {} bytes to {}",
            index,
            payload.len(),
            path.display()
        );
    }

    // Get-style results dump to the console unless they went to a file;
    // --raw forces the dump either way
    if args.raw || (!op.mutating && args.output.is_none()) {
        let stdout = io::stdout();
        hex_dump(&mut stdout.lock(), payload)?;
    }

    Ok(())
}

/// The core error plus the operation directory, so a typo shows what would
/// have matched
fn unknown_operation_error(family: Family, name: &str) -> Box<dyn std::error::Error> {
    let mut msg = format!(
        "{} for {}\n\nAvailable operations:\n",
        Error::UnknownOperation(name.to_string()),
        family.name()
    );
    for op in family.table() {
        msg.push_str(&format!("  {:<22} - {}\n", op.name, op.description));
    }
    msg.into()
}
