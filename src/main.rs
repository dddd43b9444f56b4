//! gpuraw - Raw-API control surface for GPU device-management drivers
//!
//! Every subcommand resolves a named operation from a per-family registry
//! table, builds a version-stamped binary payload, and invokes the driver
//! entry point against one or all enumerated devices.
//!
//! # Architecture
//!
//! - `gpuraw-core` - registry tables, payload buffer lifecycle, invoker and
//!   output router; driver backends are abstracted behind `RawDriver`
//! - `gpuraw-emu` - in-memory driver emulator backend
//! - this binary - argument parsing, backend selection and the per-device
//!   fan-out loop

mod cli;
mod commands;
mod drivers;

use clap::Parser;
use cli::{Cli, Commands};
use gpuraw_core::ops::Family;

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let result = match cli.command {
        Commands::Clock(args) => drivers::with_driver(&cli.driver, |driver| {
            commands::raw::run(driver, Family::Clock, &args)
        }),
        Commands::Power(args) => drivers::with_driver(&cli.driver, |driver| {
            commands::raw::run(driver, Family::Power, &args)
        }),
        Commands::Thermal(args) => drivers::with_driver(&cli.driver, |driver| {
            commands::raw::run(driver, Family::Thermal, &args)
        }),
        Commands::ListDrivers => {
            commands::list::list_drivers();
            Ok(())
        }
    };

    // Per-device failures were already reported inside the fan-out loop;
    // an Err here is a global precondition failure
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
