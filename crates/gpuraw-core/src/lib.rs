//! gpuraw-core - Core library for raw GPU driver operation dispatch
//!
//! This crate provides the generic machinery behind the `gpuraw` CLI: a
//! name-indexed registry of driver operations, the payload buffer lifecycle
//! (allocation, file seeding, version stamping, prepare hooks), the invoker
//! that calls a driver entry point against one device, and the output router
//! that renders completed payloads to the console or to per-device files.
//!
//! The vendor driver itself is abstracted behind the [`driver::RawDriver`]
//! trait; backends (real or emulated) live in separate crates.
//!
//! # Example
//!
//! ```ignore
//! use gpuraw_core::ops::Family;
//! use gpuraw_core::registry;
//!
//! let table = Family::Clock.table();
//! if let Some(op) = registry::find(table, "frequencies") {
//!     println!("{}: {} byte payload", op.name, op.payload_size);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod buffer;
pub mod driver;
pub mod error;
pub mod invoke;
pub mod ops;
pub mod output;
pub mod registry;
pub mod status;

pub use error::{Error, Result};
pub use status::Status;
