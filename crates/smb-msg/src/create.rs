//! Create (files) request.

use binrw::io::{Seek, Write};
use binrw::prelude::*;
use modular_bitfield::prelude::*;
use smb_dtyp::binrw_util::prelude::*;
use smb_fscc::*;

use crate::{Dialect, SmbMsgError};

/// 2.2.13: SMB2 CREATE Request
///
/// Opens or creates a file, directory, pipe or printer on the tree the request is sent to.
/// The request is always sent with no oplock, at identification impersonation level,
/// and without create contexts.
///
/// Write with [`CreateRequest::encode`], passing the size of the header that precedes
/// the body in the message, which the name offset is relative to.
#[binrw::binwrite]
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[bw(import(header_size: u16))]
pub struct CreateRequest {
    #[bw(calc = Self::STRUCTURE_SIZE)]
    _structure_size: u16,
    #[bw(calc = 0)] // reserved
    _security_flags: u8,
    #[bw(calc = OplockLevel::None)]
    _requested_oplock_level: OplockLevel,
    #[bw(calc = ImpersonationLevel::Identification)]
    _impersonation_level: ImpersonationLevel,
    #[bw(calc = 0)]
    _smb_create_flags: u64,
    #[bw(calc = 0)]
    _reserved: u64,
    pub desired_access: DirAccessMask,
    pub file_attributes: FileAttributes,
    pub share_access: ShareAccessFlags,
    #[bw(map = |d: &Option<CreateDisposition>| d.map_or(0u32, u32::from))]
    pub create_disposition: Option<CreateDisposition>,
    pub create_options: CreateOptions,
    #[bw(try_calc = u16::try_from(u32::from(header_size) + u32::from(Self::FIXED_BODY_SIZE)))]
    _name_offset: u16,
    #[bw(try_calc = u16::try_from(name.as_ref().map_or(0, |n| n.size())))]
    _name_length: u16,
    // No create contexts are sent.
    #[bw(calc = 0)]
    _create_contexts_offset: u32,
    #[bw(calc = 0)]
    _create_contexts_length: u32,

    /// The path to open, relative to the share root. `None` opens the share root itself.
    pub name: Option<SizedWideString>,
}

impl CreateRequest {
    pub const STRUCTURE_SIZE: u16 = 57;
    /// Size of the body up to the name buffer.
    pub const FIXED_BODY_SIZE: u16 = 56;

    /// Offset of the name buffer from the start of the header.
    ///
    /// This points past the fixed body even when there is no name.
    pub fn name_offset(header_size: u16) -> crate::Result<u16> {
        header_size
            .checked_add(Self::FIXED_BODY_SIZE)
            .ok_or(SmbMsgError::NameOffsetOverflow(header_size))
    }

    /// Length of the encoded name, in bytes.
    pub fn name_length(&self) -> crate::Result<u16> {
        let size = self.name.as_ref().map_or(0, |n| n.size());
        u16::try_from(size).map_err(|_| SmbMsgError::NameTooLong(size as usize))
    }

    /// Writes the request body into `writer`, little endian.
    ///
    /// `header_size` is the size of the header written before the body.
    /// All checks happen before the first byte is written, so on error the writer is untouched.
    pub fn encode<W: Write + Seek>(&self, writer: &mut W, header_size: u16) -> crate::Result<()> {
        let name_offset = Self::name_offset(header_size)?;
        let name_length = self.name_length()?;
        log::trace!(
            "Encoding create request: name offset {name_offset}, name length {name_length}"
        );
        self.write_le_args(writer, (header_size,))?;
        Ok(())
    }
}

#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[brw(repr(u8))]
pub enum OplockLevel {
    #[default]
    None = 0,
    II = 1,
    Exclusive = 8,
    Batch = 9,
    Lease = 0xff,
}

#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[brw(repr(u32))]
pub enum ImpersonationLevel {
    Anonymous = 0x0,
    Identification = 0x1,
    Impersonation = 0x2,
    Delegate = 0x3,
}

/// What to do if the file already exists, or does not.
#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[brw(repr(u32))]
pub enum CreateDisposition {
    /// Replace the file if it exists, create it otherwise.
    Supersede = 0x0,
    /// Open the file if it exists, fail otherwise.
    Open = 0x1,
    /// Fail if the file exists, create it otherwise.
    Create = 0x2,
    /// Open the file if it exists, create it otherwise.
    OpenIf = 0x3,
    /// Overwrite the file if it exists, fail otherwise.
    Overwrite = 0x4,
    /// Overwrite the file if it exists, create it otherwise.
    OverwriteIf = 0x5,
}

impl From<CreateDisposition> for u32 {
    fn from(value: CreateDisposition) -> Self {
        value as u32
    }
}

#[bitfield]
#[derive(BinWrite, BinRead, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[bw(map = |&x| Self::into_bytes(x))]
#[br(map = Self::from_bytes)]
pub struct CreateOptions {
    pub directory_file: bool,
    pub write_through: bool,
    pub sequential_only: bool,
    pub no_intermediate_buffering: bool,

    pub synchronous_io_alert: bool,
    pub synchronous_io_nonalert: bool,
    pub non_directory_file: bool,
    #[skip]
    __: bool,

    pub complete_if_oplocked: bool,
    pub no_ea_knowledge: bool,
    pub open_remote_instance: bool,
    pub random_access: bool,

    pub delete_on_close: bool,
    pub open_by_file_id: bool,
    pub open_for_backup_intent: bool,
    pub no_compression: bool,

    pub open_requiring_oplock: bool,
    pub disallow_exclusive: bool,
    #[skip]
    __: B2,

    pub reserve_opfilter: bool,
    pub open_reparse_point: bool,
    pub open_no_recall: bool,
    pub open_for_free_space_query: bool,

    #[skip]
    __: B8,
}

// share_access 4 byte flags:
#[bitfield]
#[derive(BinWrite, BinRead, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[bw(map = |&x| Self::into_bytes(x))]
#[br(map = Self::from_bytes)]
pub struct ShareAccessFlags {
    pub read: bool,
    pub write: bool,
    pub delete: bool,
    #[skip]
    __: B29,
}

smb_dtyp::flags32!(CreateOptions, ShareAccessFlags);

/// Everything needed to build a create request message.
///
/// Flag sets left at their defaults are empty, and pack to zero.
/// Build the message with [`PlainRequest::from`][crate::PlainRequest].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequestParams {
    /// Only affects the header; the body is the same for all dialects.
    pub dialect: Dialect,
    pub session_id: u64,
    pub tree_id: u32,
    pub desired_access: DirAccessMask,
    pub file_attributes: FileAttributes,
    pub share_access: ShareAccessFlags,
    /// `None` is written as 0.
    pub create_disposition: Option<CreateDisposition>,
    pub create_options: CreateOptions,
    /// `None` or an empty name opens the root of the share.
    pub file_name: Option<String>,
}

impl CreateRequestParams {
    /// Opens an existing file or directory, sharing it for read and write.
    pub fn open_existing(file_name: impl Into<String>, desired_access: DirAccessMask) -> Self {
        Self {
            desired_access,
            share_access: ShareAccessFlags::new().with_read(true).with_write(true),
            create_disposition: Some(CreateDisposition::Open),
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }

    /// Creates a new file, failing if it already exists.
    pub fn create_new(
        file_name: impl Into<String>,
        desired_access: DirAccessMask,
        file_attributes: FileAttributes,
    ) -> Self {
        Self {
            desired_access,
            file_attributes,
            create_disposition: Some(CreateDisposition::Create),
            create_options: CreateOptions::new().with_non_directory_file(true),
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }
}

impl From<&CreateRequestParams> for CreateRequest {
    fn from(params: &CreateRequestParams) -> Self {
        Self {
            desired_access: params.desired_access,
            file_attributes: params.file_attributes,
            share_access: params.share_access,
            create_disposition: params.create_disposition,
            create_options: params.create_options,
            name: params
                .file_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(SizedWideString::from),
        }
    }
}
