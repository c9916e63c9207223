//! 32-bit flag sets.
//!
//! Flag sets are declared as [`modular_bitfield`] structs, one `bool` per named flag.
//! On the wire, a set is the bitwise OR of its members' values, which is exactly
//! the little-endian interpretation of the bitfield's bytes.

/// A set of named flags that packs into a 32-bit mask.
///
/// Implement using [`flags32!`][crate::flags32].
pub trait Flags32: Copy + Default {
    /// The packed mask of this set.
    fn bits(self) -> u32;

    /// Builds a set from a packed mask. Bits with no name are kept as-is.
    fn from_bits(bits: u32) -> Self;

    fn is_empty(self) -> bool {
        self.bits() == 0
    }
}

/// Packs a collection of flag sets into a single mask, by OR-ing their bits.
///
/// An empty collection packs to 0.
pub fn pack<F: Flags32>(flags: impl IntoIterator<Item = F>) -> u32 {
    flags.into_iter().fold(0, |mask, flag| mask | flag.bits())
}

/// Implements [`Flags32`] and the set operators for 32-bit bitfield structs.
///
/// The struct must be a `#[bitfield]` of exactly 32 bits.
#[macro_export]
macro_rules! flags32 {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::Flags32 for $name {
                fn bits(self) -> u32 {
                    u32::from_le_bytes(self.into_bytes())
                }

                fn from_bits(bits: u32) -> Self {
                    Self::from_bytes(bits.to_le_bytes())
                }
            }

            impl From<$name> for u32 {
                fn from(value: $name) -> u32 {
                    $crate::Flags32::bits(value)
                }
            }

            impl ::core::ops::BitOr for $name {
                type Output = Self;

                fn bitor(self, rhs: Self) -> Self {
                    $crate::Flags32::from_bits(
                        $crate::Flags32::bits(self) | $crate::Flags32::bits(rhs),
                    )
                }
            }

            impl ::core::ops::BitOrAssign for $name {
                fn bitor_assign(&mut self, rhs: Self) {
                    *self = *self | rhs;
                }
            }

            impl FromIterator<$name> for $name {
                fn from_iter<I: IntoIterator<Item = $name>>(iter: I) -> Self {
                    $crate::Flags32::from_bits($crate::pack(iter))
                }
            }
        )+
    };
}
