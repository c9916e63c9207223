//! Common data types for the SMB2 message crates.
//!
//! - [`flags`]: 32-bit flag sets and their packing into wire masks.
//! - [`binrw_util`]: binrw helpers, such as [`SizedWideString`][binrw_util::SizedWideString].

pub mod binrw_util;
pub mod flags;

pub use flags::*;
