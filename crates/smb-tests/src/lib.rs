//! Test utilities shared by the smb* crates.
//!
//! Nothing here is meant to be used outside of `#[cfg(test)]` code.

pub mod binrw;

#[doc(hidden)]
pub use hex;

/// Decodes a hex string literal into a `Vec<u8>`.
///
/// Whitespace is ignored, so long dumps may be split across lines.
/// Panics on malformed input, which fails the calling test.
#[macro_export]
macro_rules! hex_to_u8_array {
    ($hex:expr) => {{
        let cleaned: String = $hex.chars().filter(|c| !c.is_whitespace()).collect();
        $crate::hex::decode(cleaned).expect("invalid hex string in test")
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_hex_to_u8_array_ignores_whitespace() {
        let bytes = hex_to_u8_array! { "fe53 4d42\n4000" };
        assert_eq!(bytes, vec![0xfe, 0x53, 0x4d, 0x42, 0x40, 0x00]);
    }
}
