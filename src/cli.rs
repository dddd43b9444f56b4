//! CLI argument parsing

use crate::drivers;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
pub fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Generate dynamic help text for the driver argument
fn driver_help() -> String {
    format!(
        "Driver backend to use [available: {}]",
        drivers::driver_names_short()
    )
}

#[derive(Parser)]
#[command(name = "gpuraw")]
#[command(author, version, about = "GPU raw-API control tool", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Driver backend, optionally with parameters (e.g. "emu:devices=4")
    #[arg(long, global = true, default_value = "emu", help = driver_help())]
    pub driver: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every raw-operation family
#[derive(clap::Args, Debug, Clone)]
pub struct RawArgs {
    /// Operation name, or "list" to print the operation directory
    pub operation: String,

    /// Target a single device by enumeration index (default: all devices)
    #[arg(long)]
    pub index: Option<usize>,

    /// Force a hex dump of the resulting payload
    #[arg(long)]
    pub raw: bool,

    /// Seed the payload from a binary file (length must match the operation)
    #[arg(long = "in")]
    pub input: Option<PathBuf>,

    /// Write the resulting payload to a file (suffixed per device for batches)
    #[arg(long = "out")]
    pub output: Option<PathBuf>,

    /// Operation-specific domain selector (hex or decimal)
    #[arg(long, value_parser = parse_hex_u32)]
    pub domain: Option<u32>,

    /// Operation-specific class selector (hex or decimal)
    #[arg(long, value_parser = parse_hex_u32)]
    pub class: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Raw clock operations
    Clock(RawArgs),

    /// Raw power operations
    Power(RawArgs),

    /// Raw thermal operations
    Thermal(RawArgs),

    /// List available driver backends
    ListDrivers,
}
