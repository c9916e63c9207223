//! SMB2 messages.
//!
//! This crate encodes the SMB2 CREATE request ([MS-SMB2] 2.2.13), together with
//! the 64-byte SMB2 header that precedes it on the wire.
//!
//! ```
//! use smb_msg::*;
//!
//! let params = CreateRequestParams {
//!     share_access: ShareAccessFlags::new().with_read(true).with_write(true),
//!     create_disposition: Some(CreateDisposition::Open),
//!     file_name: Some("docs\\readme.txt".into()),
//!     ..Default::default()
//! };
//! let bytes = PlainRequest::from(params).to_bytes()?;
//! assert_eq!(bytes.len(), Header::STRUCT_SIZE + 56 + 30);
//! # Ok::<(), SmbMsgError>(())
//! ```

mod create;
mod dialect;
mod error;
mod header;
mod message;

pub use create::*;
pub use dialect::*;
pub use error::*;
pub use header::*;
pub use message::*;

pub use smb_dtyp::{Flags32, pack};
pub use smb_fscc::{DirAccessMask, FileAccessMask, FileAttributes};

pub type Result<T> = std::result::Result<T, SmbMsgError>;

#[cfg(test)]
mod test;
#[cfg(test)]
use test::*;
