use binrw::io::{Seek, Write};
use binrw::{Endian, prelude::*};
use core::fmt::{self, Write as _};

/// A wide (UTF-16) string whose length is carried by a separate size field,
/// rather than by a null terminator as in [`binrw::NullWideString`].
///
/// This is the text encoding of every name and path in SMB2 messages:
/// UTF-16, two bytes per code unit, in the stream's endianness (little endian on the wire).
#[derive(Clone, Eq, PartialEq, Default)]
pub struct SizedWideString {
    data: Vec<u16>,
}

impl SizedWideString {
    const CHAR_WIDTH: u64 = std::mem::size_of::<u16>() as u64;

    /// Size of the encoded string, in bytes.
    ///
    /// Characters outside the BMP take two code units, so this is not
    /// twice the number of `char`s.
    pub fn size(&self) -> u64 {
        self.data.len() as u64 * Self::CHAR_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl BinWrite for SizedWideString {
    type Args<'a> = ();

    fn write_options<W: Write + Seek>(
        &self,
        writer: &mut W,
        endian: Endian,
        args: Self::Args<'_>,
    ) -> BinResult<()> {
        self.data.write_options(writer, endian, args)
    }
}

impl From<&str> for SizedWideString {
    fn from(s: &str) -> Self {
        Self {
            data: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for SizedWideString {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl PartialEq<&str> for SizedWideString {
    fn eq(&self, other: &&str) -> bool {
        other.encode_utf16().eq(self.data.iter().copied())
    }
}

impl fmt::Debug for SizedWideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SizedWideString(\"")?;
        display_utf16(&self.data, f, char::escape_debug)?;
        write!(f, "\")")
    }
}

#[inline]
fn display_utf16<Transformer: Fn(char) -> O, O: Iterator<Item = char>>(
    input: &[u16],
    f: &mut fmt::Formatter<'_>,
    t: Transformer,
) -> fmt::Result {
    char::decode_utf16(input.iter().copied())
        .flat_map(|r| t(r.unwrap_or(char::REPLACEMENT_CHARACTER)))
        .try_for_each(|c| f.write_char(c))
}
