//! Test utilities for binrw-related code.

/// Writes a value (little endian) into a fresh buffer and asserts the written bytes.
///
/// An optional `args` tuple is forwarded to `write_le_args`, for types that import
/// write arguments.
#[macro_export]
macro_rules! binrw_write_and_assert_eq {
    (
        $value:expr,
        [$($bytes:expr),* $(,)?]
    ) => {
        {
            use ::binrw::{prelude::*, io::Cursor};
            let mut writer = Cursor::new(Vec::new());
            $value.write_le(&mut writer).unwrap();
            let expected: Vec<u8> = vec![$($bytes),*];
            assert_eq!(writer.into_inner(), expected);
        }
    };
    (
        $value:expr,
        args: $args:expr,
        [$($bytes:expr),* $(,)?]
    ) => {
        {
            use ::binrw::{prelude::*, io::Cursor};
            let mut writer = Cursor::new(Vec::new());
            $value.write_le_args(&mut writer, $args).unwrap();
            let expected: Vec<u8> = vec![$($bytes),*];
            assert_eq!(writer.into_inner(), expected);
        }
    };
}

pub use binrw_write_and_assert_eq;
