use crate::cli::{Cli, OutputFormat};
use clap::{Parser, ValueEnum};
use smb_msg::{
    CreateDisposition, CreateOptions, DirAccessMask, FileAttributes, PlainRequest,
    ShareAccessFlags,
};
use std::error::Error;
use std::io::Write;

/// Declares a CLI value enum, where each value sets a single flag in `$flags`.
macro_rules! cli_flags {
    ($cli:ident => $flags:ty { $($variant:ident => $setter:ident),+ $(,)? }) => {
        #[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $cli {
            $($variant,)+
        }

        impl From<$cli> for $flags {
            fn from(value: $cli) -> Self {
                match value {
                    $($cli::$variant => <$flags>::new().$setter(true),)+
                }
            }
        }
    };
}

cli_flags!(CliAccess => DirAccessMask {
    ListDirectory => with_list_directory,
    AddFile => with_add_file,
    AddSubdirectory => with_add_subdirectory,
    ReadEa => with_read_ea,
    WriteEa => with_write_ea,
    Traverse => with_traverse,
    DeleteChild => with_delete_child,
    ReadAttributes => with_read_attributes,
    WriteAttributes => with_write_attributes,
    Delete => with_delete,
    ReadControl => with_read_control,
    WriteDac => with_write_dac,
    WriteOwner => with_write_owner,
    Synchronize => with_synchronize,
    AccessSystemSecurity => with_access_system_security,
    MaximumAllowed => with_maximum_allowed,
    GenericAll => with_generic_all,
    GenericExecute => with_generic_execute,
    GenericWrite => with_generic_write,
    GenericRead => with_generic_read,
});

cli_flags!(CliAttribute => FileAttributes {
    Readonly => with_readonly,
    Hidden => with_hidden,
    System => with_system,
    Directory => with_directory,
    Archive => with_archive,
    Normal => with_normal,
    Temporary => with_temporary,
    SparseFile => with_sparse_file,
    ReparsePoint => with_reparse_point,
    Compressed => with_compressed,
    Offline => with_offline,
    NotContentIndexed => with_not_content_indexed,
    Encrypted => with_encrypted,
    IntegrityStream => with_integrity_stream,
    NoScrubData => with_no_scrub_data,
    RecallOnOpen => with_recall_on_open,
    Pinned => with_pinned,
    Unpinned => with_unpinned,
    RecallOnDataAccess => with_recall_on_data_access,
});

cli_flags!(CliShare => ShareAccessFlags {
    Read => with_read,
    Write => with_write,
    Delete => with_delete,
});

cli_flags!(CliCreateOption => CreateOptions {
    DirectoryFile => with_directory_file,
    WriteThrough => with_write_through,
    SequentialOnly => with_sequential_only,
    NoIntermediateBuffering => with_no_intermediate_buffering,
    SynchronousIoAlert => with_synchronous_io_alert,
    SynchronousIoNonalert => with_synchronous_io_nonalert,
    NonDirectoryFile => with_non_directory_file,
    CompleteIfOplocked => with_complete_if_oplocked,
    NoEaKnowledge => with_no_ea_knowledge,
    OpenRemoteInstance => with_open_remote_instance,
    RandomAccess => with_random_access,
    DeleteOnClose => with_delete_on_close,
    OpenByFileId => with_open_by_file_id,
    OpenForBackupIntent => with_open_for_backup_intent,
    NoCompression => with_no_compression,
    OpenRequiringOplock => with_open_requiring_oplock,
    DisallowExclusive => with_disallow_exclusive,
    ReserveOpfilter => with_reserve_opfilter,
    OpenReparsePoint => with_open_reparse_point,
    OpenNoRecall => with_open_no_recall,
    OpenForFreeSpaceQuery => with_open_for_free_space_query,
});

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliDisposition {
    Supersede,
    Open,
    Create,
    OpenIf,
    Overwrite,
    OverwriteIf,
}

impl From<CliDisposition> for CreateDisposition {
    fn from(value: CliDisposition) -> Self {
        match value {
            CliDisposition::Supersede => CreateDisposition::Supersede,
            CliDisposition::Open => CreateDisposition::Open,
            CliDisposition::Create => CreateDisposition::Create,
            CliDisposition::OpenIf => CreateDisposition::OpenIf,
            CliDisposition::Overwrite => CreateDisposition::Overwrite,
            CliDisposition::OverwriteIf => CreateDisposition::OverwriteIf,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CreateCmd {
    /// Path to open, relative to the share. Omit to open the share root.
    pub name: Option<String>,

    /// Desired access rights, comma separated.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub access: Vec<CliAccess>,

    /// File attributes, comma separated. Only used when a file is created.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub attributes: Vec<CliAttribute>,

    /// Access to share with other opens, comma separated.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub share: Vec<CliShare>,

    /// What to do if the file exists, or does not. Written as 0 when omitted.
    #[arg(long, value_enum)]
    pub disposition: Option<CliDisposition>,

    /// Create options, comma separated.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub options: Vec<CliCreateOption>,
}

pub fn create(cmd: &CreateCmd, cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut msg = PlainRequest::from(cli.make_create_params(cmd));
    msg.header.message_id = cli.message_id;

    let bytes = msg.to_bytes()?;
    log::info!("Encoded create request: {} bytes", bytes.len());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&render(&bytes, cli.format))?;
    stdout.flush()?;
    Ok(())
}

fn render(bytes: &[u8], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Raw => bytes.to_vec(),
        OutputFormat::Hex => {
            let mut line = hex::encode(bytes);
            line.push('\n');
            line.into_bytes()
        }
    }
}
