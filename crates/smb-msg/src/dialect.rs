//! SMB2 dialect revisions.

use std::fmt::Display;

/// An SMB2 dialect revision.
///
/// Dialects are ordered by revision, so `Dialect::Smb0202 < Dialect::Smb0311`.
#[binrw::binrw]
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash, Default)]
#[brw(repr(u16))]
pub enum Dialect {
    Smb0202 = 0x0202,
    Smb021 = 0x0210,
    Smb030 = 0x0300,
    Smb0302 = 0x0302,
    #[default]
    Smb0311 = 0x0311,
}

impl Dialect {
    pub const MIN: Dialect = Dialect::Smb0202;
    pub const MAX: Dialect = Dialect::Smb0311;
    pub const ALL: [Dialect; 5] = [
        Dialect::Smb0202,
        Dialect::Smb021,
        Dialect::Smb030,
        Dialect::Smb0302,
        Dialect::Smb0311,
    ];

    /// Whether the header's CreditCharge field is in use for this dialect.
    ///
    /// SMB 2.0.2 treats the field as reserved, and it must be zero.
    #[inline]
    pub fn supports_credit_charge(&self) -> bool {
        *self > Dialect::Smb0202
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let revision = *self as u16;
        write!(f, "SMB {}.{}", revision >> 8, (revision >> 4) & 0xf)?;
        if revision & 0xf != 0 {
            write!(f, ".{}", revision & 0xf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_order() {
        assert!(Dialect::MIN < Dialect::MAX);
        assert!(Dialect::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Dialect::default(), Dialect::MAX);
    }

    #[test]
    fn test_credit_charge_support() {
        assert!(!Dialect::Smb0202.supports_credit_charge());
        assert!(Dialect::Smb021.supports_credit_charge());
        assert!(Dialect::Smb0311.supports_credit_charge());
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::Smb0202.to_string(), "SMB 2.0.2");
        assert_eq!(Dialect::Smb021.to_string(), "SMB 2.1");
        assert_eq!(Dialect::Smb030.to_string(), "SMB 3.0");
        assert_eq!(Dialect::Smb0311.to_string(), "SMB 3.1.1");
    }

    #[test]
    fn test_dialect_write() {
        smb_tests::binrw_write_and_assert_eq!(Dialect::Smb0302, [0x02, 0x03]);
    }
}
