//! Driver backend registration and dispatch
//!
//! Centralized registry for driver backends, with feature-gated inclusion
//! and dynamic help text generation. The backend string on the command line
//! is the backend name optionally followed by parameters:
//! "emu" or "emu:devices=4".

use gpuraw_core::driver::RawDriver;

/// Information about a driver backend
pub struct DriverInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
}

/// Get information about all backends enabled at compile time
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_drivers() -> Vec<DriverInfo> {
    let mut drivers = Vec::new();

    #[cfg(feature = "emu")]
    drivers.push(DriverInfo {
        name: "emu",
        description: "In-memory driver emulator for testing (devices=<n>)",
    });

    drivers
}

/// Generate help text listing all available backends
pub fn driver_help() -> String {
    let drivers = available_drivers();

    if drivers.is_empty() {
        return "No driver backends available (recompile with backend features enabled)"
            .to_string();
    }

    let mut help = String::from("Available drivers:\n");
    for d in &drivers {
        help.push_str(&format!("  {:8} - {}\n", d.name, d.description));
    }
    help
}

/// Generate a short list of backend names for CLI help
pub fn driver_names_short() -> String {
    let names: Vec<&str> = available_drivers().iter().map(|d| d.name).collect();
    names.join(", ")
}

/// Parse a driver string into name and options
///
/// Format: "name" or "name:option1=value1,option2=value2"
pub fn parse_driver_string(s: &str) -> (&str, Vec<(&str, &str)>) {
    if let Some((name, opts)) = s.split_once(':') {
        let options: Vec<_> = opts
            .split(',')
            .filter_map(|opt| opt.split_once('='))
            .collect();
        (name, options)
    } else {
        (s, Vec::new())
    }
}

/// Execute a function with the specified driver backend
#[allow(unused_variables)]
pub fn with_driver<F>(driver: &str, f: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut dyn RawDriver) -> Result<(), Box<dyn std::error::Error>>,
{
    let (name, options) = parse_driver_string(driver);

    match name {
        #[cfg(feature = "emu")]
        "emu" => {
            let mut config = gpuraw_emu::EmuConfig::default();
            for (key, value) in &options {
                match *key {
                    "devices" => {
                        config.devices = value
                            .parse()
                            .map_err(|e| format!("Invalid devices count: {}", e))?;
                    }
                    other => {
                        return Err(format!("Unknown emu parameter: {}", other).into());
                    }
                }
            }
            log::info!("Opening emulated driver ({} device(s))...", config.devices);
            let mut driver = gpuraw_emu::EmuDriver::new(config);
            f(&mut driver)
        }

        _ => Err(unknown_driver_error(name)),
    }
}

fn unknown_driver_error(name: &str) -> Box<dyn std::error::Error> {
    let mut msg = format!("Unknown driver: {}\n\n", name);
    msg.push_str(&driver_help());
    msg.push_str("\nUse 'gpuraw list-drivers' for more details");
    msg.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_driver_string() {
        assert_eq!(parse_driver_string("emu"), ("emu", vec![]));
        assert_eq!(
            parse_driver_string("emu:devices=4"),
            ("emu", vec![("devices", "4")])
        );
        assert_eq!(
            parse_driver_string("emu:devices=4,x=y"),
            ("emu", vec![("devices", "4"), ("x", "y")])
        );
    }

    #[test]
    fn test_unknown_driver_rejected() {
        let err = with_driver("nope", |_| Ok(())).unwrap_err();
        assert!(err.to_string().contains("Unknown driver: nope"));
    }

    #[cfg(feature = "emu")]
    #[test]
    fn test_emu_device_count_parameter() {
        with_driver("emu:devices=3", |driver| {
            assert_eq!(driver.device_count().unwrap(), 3);
            Ok(())
        })
        .unwrap();
    }
}
