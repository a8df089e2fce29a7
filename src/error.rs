use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the translation engine and its input wrappers.
#[derive(Debug, Error)]
pub enum VmError {
    #[error("error opening {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading page {page} from backing store")]
    BackingStore {
        page: u8,
        #[source]
        source: io::Error,
    },

    #[error("physical memory exhausted: all {capacity} frames are allocated")]
    OutOfFrames { capacity: usize },

    #[error("line {line}: invalid logical address {text:?}: {reason}")]
    InvalidAddress {
        line: usize,
        text: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl VmError {
    /// Whether the run must stop, as opposed to skipping the current address.
    pub fn is_fatal(&self) -> bool {
        match self {
            VmError::FileOpen { .. } | VmError::OutOfFrames { .. } | VmError::Io(_) => true,
            VmError::BackingStore { .. } | VmError::InvalidAddress { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, VmError>;
