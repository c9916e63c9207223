//! SMB2 packet header ([MS-SMB2] 2.2.1.2, synchronous form).

use std::fmt::Display;

use binrw::prelude::*;
use modular_bitfield::prelude::*;

#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[brw(repr(u16))]
pub enum Command {
    Negotiate = 0x00,
    SessionSetup = 0x01,
    Logoff = 0x02,
    TreeConnect = 0x03,
    TreeDisconnect = 0x04,
    Create = 0x05,
    Close = 0x06,
    Flush = 0x07,
    Read = 0x08,
    Write = 0x09,
    Lock = 0x0A,
    Ioctl = 0x0B,
    Cancel = 0x0C,
    Echo = 0x0D,
    QueryDirectory = 0x0E,
    ChangeNotify = 0x0F,
    QueryInfo = 0x10,
    SetInfo = 0x11,
    OplockBreak = 0x12,
    ServerToClientNotification = 0x13,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({:#x})", self, *self as u16)
    }
}

/// The SMB2 header that precedes every message body.
///
/// Only the synchronous layout is supported: the 8 bytes after `message_id`
/// are a reserved zero `u32` followed by the tree ID.
#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Clone)]
#[brw(magic(b"\xfeSMB"), little)]
pub struct Header {
    #[bw(calc = Self::STRUCT_SIZE as u16)]
    #[br(assert(_structure_size == Self::STRUCT_SIZE as u16))]
    _structure_size: u16,
    pub credit_charge: u16,
    /// Channel sequence and reserved, for requests; NT status, for responses.
    pub status: u32,
    pub command: Command,
    pub credit_request: u16,
    pub flags: HeaderFlags,
    pub next_command: u32,
    pub message_id: u64,
    #[bw(calc = 0)]
    #[br(assert(_reserved == 0))]
    _reserved: u32,
    pub tree_id: u32,
    pub session_id: u64,
    pub signature: u128,
}

impl Header {
    /// Encoded size of the header, in bytes, including the protocol ID.
    pub const STRUCT_SIZE: usize = 64;

    /// A fresh request header for `command`, asking for a single credit.
    pub fn new(command: Command) -> Self {
        Self {
            credit_charge: 1,
            status: 0,
            command,
            credit_request: 1,
            flags: HeaderFlags::new(),
            next_command: 0,
            message_id: 0,
            tree_id: 0,
            session_id: 0,
            signature: 0,
        }
    }
}

#[bitfield]
#[derive(BinWrite, BinRead, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[bw(map = |&x| Self::into_bytes(x))]
#[br(map = Self::from_bytes)]
pub struct HeaderFlags {
    pub server_to_redir: bool,
    pub async_command: bool,
    pub related_operations: bool,
    pub signed: bool,
    pub priority_mask: B3,
    #[skip]
    __: B21,
    pub dfs_operation: bool,
    pub replay_operation: bool,
    #[skip]
    __: B2,
}

smb_dtyp::flags32!(HeaderFlags);

#[cfg(test)]
mod tests {
    use super::*;
    use binrw::io::Cursor;
    use smb_dtyp::Flags32;

    #[test]
    fn test_header_write() {
        let mut header = Header::new(Command::Create);
        header.tree_id = 1;
        header.session_id = 0x0000_4000_0000_0005;

        let mut cursor = Cursor::new(Vec::new());
        header.write(&mut cursor).unwrap();
        let written = cursor.into_inner();
        assert_eq!(written.len(), Header::STRUCT_SIZE);
        assert_eq!(
            written,
            smb_tests::hex_to_u8_array! {
                "fe534d4240000100000000000500010000000000000000000000000000000000
                 0000000001000000050000000040000000000000000000000000000000000000"
            }
        );
    }

    #[test]
    fn test_header_read_back() {
        let mut header = Header::new(Command::Create);
        header.message_id = 42;
        header.flags = HeaderFlags::new().with_dfs_operation(true);

        let mut cursor = Cursor::new(Vec::new());
        header.write(&mut cursor).unwrap();
        cursor.set_position(0);
        assert_eq!(Header::read(&mut cursor).unwrap(), header);
    }

    #[test]
    fn test_header_flags_bits() {
        assert_eq!(HeaderFlags::new().with_signed(true).bits(), 0x8);
        assert_eq!(HeaderFlags::new().with_priority_mask(7).bits(), 0x70);
        assert_eq!(HeaderFlags::new().with_dfs_operation(true).bits(), 0x1000_0000);
        assert_eq!(
            HeaderFlags::new().with_replay_operation(true).bits(),
            0x2000_0000
        );
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Create.to_string(), "Create (0x5)");
    }
}
