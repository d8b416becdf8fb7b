use std::path::PathBuf;

use nbt::{NbtAccessError, NbtEncodeError, NbtParseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("malformed save data: {0}")]
    MalformedData(#[from] NbtParseError),
    #[error("unexpected save structure: {0}")]
    Structure(#[from] NbtAccessError),
    #[error("can't write save data: {0}")]
    Encode(#[from] NbtEncodeError),
    #[error("unknown slot {0}")]
    UnknownSlot(u8),
    #[error("can't create a new level file at {}, select an existing one instead", .0.display())]
    CannotCreateLevel(PathBuf),
    #[error("no file to reload, the inventory has never been opened or saved")]
    NoPath,
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| EditorError::Io { path, source }
    }
}
