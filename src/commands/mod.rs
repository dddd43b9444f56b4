//! CLI command implementations
//!
//! `raw` holds the generic fan-out dispatcher shared by every operation
//! family; `list` holds the directory printers.

pub mod list;
pub mod raw;
