//! File System Control Codes ([MS-FSCC](https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-fscc/)) types.

pub mod access_masks;
pub mod file_attributes;

pub use access_masks::*;
pub use file_attributes::*;
