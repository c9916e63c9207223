use thiserror::Error;

/// Errors while composing or encoding SMB2 messages.
#[derive(Error, Debug)]
pub enum SmbMsgError {
    #[error("File name is too long to be encoded: {0} bytes (maximum is 65535)")]
    NameTooLong(usize),
    #[error("Header size {0} pushes the name offset past the 16-bit offset field")]
    NameOffsetOverflow(u16),
    #[error("Binrw Error: {0}")]
    BinRWError(#[from] binrw::Error),
}
