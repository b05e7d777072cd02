use ntcgeom::engine::error::NtcError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] NtcError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Parameters directory: {0}")]
    Data(String),

    #[error("Cannot read or write '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("No dinucleotide step starts at {0}")]
    NoStep(String),
}
