//! binrw helpers shared by message definitions.

pub mod sized_wide_string;

pub use sized_wide_string::*;

pub mod prelude {
    pub use super::sized_wide_string::*;
}
