//! Access masks definitions.

use binrw::prelude::*;
use modular_bitfield::prelude::*;

/// File, pipe and printer access rights ([MS-SMB2] 2.2.13.1.1).
///
/// The high 16 bits are the standard and generic rights of [MS-DTYP] 2.4.3.
#[bitfield]
#[derive(BinWrite, BinRead, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[bw(map = |&x| Self::into_bytes(x))]
#[br(map = Self::from_bytes)]
pub struct FileAccessMask {
    pub file_read_data: bool,
    pub file_write_data: bool,
    pub file_append_data: bool,
    pub file_read_ea: bool,

    pub file_write_ea: bool,
    pub file_execute: bool,
    pub file_delete_child: bool,
    pub file_read_attributes: bool,

    pub file_write_attributes: bool,
    #[skip]
    __: B7,

    pub delete: bool,
    pub read_control: bool,
    pub write_dac: bool,
    pub write_owner: bool,

    pub synchronize: bool,
    #[skip]
    __: B3,

    pub access_system_security: bool,
    pub maximum_allowed: bool,
    #[skip]
    __: B2,

    pub generic_all: bool,
    pub generic_execute: bool,
    pub generic_write: bool,
    pub generic_read: bool,
}

/// Directory access rights ([MS-SMB2] 2.2.13.1.2).
#[bitfield]
#[derive(BinWrite, BinRead, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[bw(map = |&x| Self::into_bytes(x))]
#[br(map = Self::from_bytes)]
pub struct DirAccessMask {
    pub list_directory: bool,
    pub add_file: bool,
    pub add_subdirectory: bool,
    pub read_ea: bool,

    pub write_ea: bool,
    pub traverse: bool,
    pub delete_child: bool,
    pub read_attributes: bool,

    pub write_attributes: bool,
    #[skip]
    __: B7,

    pub delete: bool,
    pub read_control: bool,
    pub write_dac: bool,
    pub write_owner: bool,

    pub synchronize: bool,
    #[skip]
    __: B3,

    pub access_system_security: bool,
    pub maximum_allowed: bool,
    #[skip]
    __: B2,

    pub generic_all: bool,
    pub generic_execute: bool,
    pub generic_write: bool,
    pub generic_read: bool,
}

smb_dtyp::flags32!(FileAccessMask, DirAccessMask);

impl From<FileAccessMask> for DirAccessMask {
    fn from(mask: FileAccessMask) -> Self {
        // The bits are the same, just the names are different.
        Self::from_bytes(mask.into_bytes())
    }
}

impl From<DirAccessMask> for FileAccessMask {
    fn from(val: DirAccessMask) -> Self {
        // The bits are the same, just the names are different.
        FileAccessMask::from_bytes(val.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smb_dtyp::Flags32;

    #[test]
    fn test_dir_mask_bits() {
        assert_eq!(DirAccessMask::new().with_list_directory(true).bits(), 0x1);
        assert_eq!(DirAccessMask::new().with_traverse(true).bits(), 0x20);
        assert_eq!(DirAccessMask::new().with_write_attributes(true).bits(), 0x100);
    }

    #[test]
    fn test_file_dir_conversion_keeps_bits() {
        let file = FileAccessMask::new()
            .with_file_read_data(true)
            .with_file_read_attributes(true)
            .with_synchronize(true);
        assert_eq!(file.bits(), 0x0010_0081);

        let dir: DirAccessMask = file.into();
        assert!(dir.list_directory());
        assert!(dir.read_attributes());
        assert!(dir.synchronize());
        assert_eq!(FileAccessMask::from(dir), file);
    }

    #[test]
    fn test_standard_and_generic_rights_bits() {
        assert_eq!(DirAccessMask::new().with_delete(true).bits(), 0x0001_0000);
        assert_eq!(DirAccessMask::new().with_synchronize(true).bits(), 0x0010_0000);
        assert_eq!(
            DirAccessMask::new().with_access_system_security(true).bits(),
            0x0100_0000
        );
        assert_eq!(DirAccessMask::new().with_maximum_allowed(true).bits(), 0x0200_0000);
        assert_eq!(DirAccessMask::new().with_generic_all(true).bits(), 0x1000_0000);
        assert_eq!(FileAccessMask::new().with_generic_read(true).bits(), 0x8000_0000);
    }

    #[test]
    fn test_file_access_mask_write() {
        smb_tests::binrw_write_and_assert_eq!(
            FileAccessMask::new()
                .with_file_write_data(true)
                .with_read_control(true)
                .with_generic_write(true),
            [0x02, 0x00, 0x02, 0x40]
        );
    }

    #[test]
    fn test_generic_rights_pack() {
        let mask: DirAccessMask = [
            DirAccessMask::new().with_generic_read(true),
            DirAccessMask::new().with_generic_write(true),
        ]
        .into_iter()
        .collect();
        assert_eq!(u32::from(mask), 0xC000_0000);
    }
}
