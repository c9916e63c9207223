//! Whole (header + body) request messages.

use binrw::io::{Cursor, Seek, Write};
use binrw::prelude::*;

use crate::{Command, CreateRequest, CreateRequestParams, Header};

macro_rules! make_request_content {
    ($($cmd:ident),+ $(,)?) => {
        pastey::paste! {

/// The body of a request message, by command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContent {
    $(
        $cmd([<$cmd Request>]),
    )+
}

impl RequestContent {
    /// The command this content is sent with.
    pub fn associated_cmd(&self) -> Command {
        match self {
            $(
                Self::$cmd(_) => Command::$cmd,
            )+
        }
    }

    $(
        pub fn [<as_ $cmd:lower>](&self) -> Option<&[<$cmd Request>]> {
            match self {
                Self::$cmd(req) => Some(req),
                #[allow(unreachable_patterns)]
                _ => None,
            }
        }
    )+
}

$(
    impl From<[<$cmd Request>]> for RequestContent {
        fn from(req: [<$cmd Request>]) -> Self {
            Self::$cmd(req)
        }
    }
)+
        }
    };
}

make_request_content!(Create);

/// A plain (unsigned, unencrypted, uncompressed) request message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainRequest {
    pub header: Header,
    pub content: RequestContent,
}

impl PlainRequest {
    pub fn new(content: RequestContent) -> Self {
        Self {
            header: Header::new(content.associated_cmd()),
            content,
        }
    }

    /// Writes the header and then the body into `writer`.
    pub fn encode<W: Write + Seek>(&self, writer: &mut W) -> crate::Result<()> {
        log::trace!(
            "Encoding {} message, id {}",
            self.header.command,
            self.header.message_id
        );
        self.header.write(writer)?;
        let header_size = Header::STRUCT_SIZE as u16;
        match &self.content {
            RequestContent::Create(req) => req.encode(writer, header_size),
        }
    }

    /// Encodes the message into a new buffer.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.encode(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}

impl From<CreateRequestParams> for PlainRequest {
    fn from(params: CreateRequestParams) -> Self {
        let mut msg = PlainRequest::new(CreateRequest::from(&params).into());
        msg.header.session_id = params.session_id;
        msg.header.tree_id = params.tree_id;
        if !params.dialect.supports_credit_charge() {
            msg.header.credit_charge = 0;
        }
        log::debug!(
            "Built create request for {:?} on tree {:#x}, session {:#x} ({})",
            params.file_name.as_deref().unwrap_or(""),
            params.tree_id,
            params.session_id,
            params.dialect
        );
        msg
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_params_into_message() {
        let msg = PlainRequest::from(CreateRequestParams {
            session_id: 9,
            tree_id: 7,
            file_name: Some("a".into()),
            ..Default::default()
        });
        assert_eq!(msg.header.command, Command::Create);
        assert_eq!(msg.header.session_id, 9);
        assert_eq!(msg.header.tree_id, 7);
        assert_eq!(msg.header.credit_charge, 1);
        assert_eq!(msg.content.as_create().unwrap().name.as_ref().unwrap(), &"a");
    }

    #[test]
    fn test_smb202_has_no_credit_charge() {
        let bytes = PlainRequest::from(CreateRequestParams {
            dialect: Dialect::Smb0202,
            session_id: 9,
            tree_id: 7,
            ..Default::default()
        })
        .to_bytes()
        .unwrap();
        assert_eq!(
            &bytes[..Header::STRUCT_SIZE],
            smb_tests::hex_to_u8_array! {
                "fe534d4240000000000000000500010000000000000000000000000000000000
                 0000000007000000090000000000000000000000000000000000000000000000"
            }
            .as_slice()
        );
    }

    #[test]
    fn test_message_layout() {
        let bytes = PlainRequest::from(CreateRequestParams {
            file_name: Some("a".into()),
            ..Default::default()
        })
        .to_bytes()
        .unwrap();
        assert_eq!(bytes.len(), 64 + 56 + 2);
        // Name offset is from the start of the header, and points right at the name.
        let name_offset = u16::from_le_bytes([bytes[64 + 44], bytes[64 + 45]]) as usize;
        assert_eq!(name_offset, 120);
        assert_eq!(&bytes[name_offset..], &[0x61, 0x00]);
    }

    #[test]
    fn test_to_bytes_is_idempotent() {
        let msg = PlainRequest::from(CreateRequestParams::open_existing(
            "x\\y",
            DirAccessMask::new().with_read_attributes(true),
        ));
        assert_eq!(msg.to_bytes().unwrap(), msg.to_bytes().unwrap());
    }
}
