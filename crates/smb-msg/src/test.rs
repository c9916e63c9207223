//! This module is only used when testing the library.
//! Any `pub use` here is also imported in the [super] module.
//! It may only be used inside tests.

use super::*;

/// Encodes `content` as a full message, and returns only the body (the bytes after the header).
pub(crate) fn encode_content(content: RequestContent) -> Vec<u8> {
    let msg = PlainRequest::new(content);
    let bytes_of_msg = msg.to_bytes().unwrap();
    // We only want to return the content of the message, not the header. So cut the HEADER_SIZE bytes:
    bytes_of_msg[Header::STRUCT_SIZE..].to_vec()
}

/// Internal macro to test writing of request content structs.
/// It writes the content with a SMB2 header, but compares only the content part
/// to the provided expected hex value.
macro_rules! test_request {
    // No test name
    (
        $struct_name:ident {
            $($field_name:ident : $field_value:expr),* $(,)?
        } => $hex:expr
    ) => {
        test_request! {
            $struct_name: $struct_name {
                $($field_name : $field_value),*
            } => $hex
        }
    };
    // With test name
    (
        $test_name:ident: $struct_name:ident {
            $($field_name:ident : $field_value:expr),* $(,)?
        } => $hex:expr
    ) => {
        pastey::paste! {
            #[test]
            fn [<test_content_ $test_name:snake _write>]() {
                let request = [<$struct_name Request>] {
                    $(
                        $field_name: $field_value,
                    )*
                };
                let body = $crate::test::encode_content(request.into());
                let expected_bytes = ::smb_tests::hex_to_u8_array! { $hex };
                assert_eq!(body, expected_bytes);
            }
        }
    };
}

pub(crate) use test_request;
