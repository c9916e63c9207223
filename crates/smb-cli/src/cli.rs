use crate::create::CreateCmd;
use clap::{Parser, Subcommand, ValueEnum};
use smb_msg::{
    CreateDisposition, CreateOptions, CreateRequestParams, Dialect, DirAccessMask, FileAttributes,
    ShareAccessFlags,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dialect the request is built for. Only affects the header.
    #[arg(long, value_enum, default_value_t = CliDialect::Smb311)]
    pub dialect: CliDialect,

    /// Session ID to put in the header (decimal, or hex with a `0x` prefix).
    #[arg(long, default_value = "0", value_parser = parse_number::<u64>)]
    pub session_id: u64,
    /// Tree ID to put in the header (decimal, or hex with a `0x` prefix).
    #[arg(long, default_value = "0", value_parser = parse_number::<u32>)]
    pub tree_id: u32,
    /// Message ID to put in the header (decimal, or hex with a `0x` prefix).
    #[arg(long, default_value = "0", value_parser = parse_number::<u64>)]
    pub message_id: u64,

    /// How to print the encoded message.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliDialect {
    Smb202,
    Smb21,
    Smb30,
    Smb302,
    Smb311,
}

impl From<CliDialect> for Dialect {
    fn from(value: CliDialect) -> Self {
        match value {
            CliDialect::Smb202 => Dialect::Smb0202,
            CliDialect::Smb21 => Dialect::Smb021,
            CliDialect::Smb30 => Dialect::Smb030,
            CliDialect::Smb302 => Dialect::Smb0302,
            CliDialect::Smb311 => Dialect::Smb0311,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lowercase hex, on a single line.
    Hex,
    /// The message bytes, as-is.
    Raw,
}

impl Cli {
    pub fn make_create_params(&self, cmd: &CreateCmd) -> CreateRequestParams {
        CreateRequestParams {
            dialect: self.dialect.into(),
            session_id: self.session_id,
            tree_id: self.tree_id,
            desired_access: cmd.access.iter().copied().map(DirAccessMask::from).collect(),
            file_attributes: cmd.attributes.iter().copied().map(FileAttributes::from).collect(),
            share_access: cmd.share.iter().copied().map(ShareAccessFlags::from).collect(),
            create_disposition: cmd.disposition.map(CreateDisposition::from),
            create_options: cmd.options.iter().copied().map(CreateOptions::from).collect(),
            file_name: cmd.name.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Builds a create (open) request.
    Create(CreateCmd),
}

fn parse_number<T: TryFrom<u64>>(s: &str) -> Result<T, String> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    }
    .map_err(|e| format!("invalid number {s:?}: {e}"))?;
    T::try_from(value).map_err(|_| format!("{value} is out of range"))
}
