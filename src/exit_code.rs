//! Exit codes following Unix sysexits.h conventions.

use std::{io, process};

use clap::error::ErrorKind as ClapErrorKind;

use crate::error::Error as ClipChunksError;

/// Exit codes following Unix sysexits.h convention
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ExitCode {
    /// Successful termination
    Success = 0,
    /// General failure
    Failure = 1,
    /// Command line usage error
    Usage = 64,
    /// Data format error
    Data = 65,
    /// Cannot open input
    NoInput = 66,
    /// Service unavailable
    Unavailable = 69,
    /// Cannot create output
    CannotCreate = 73,
    /// I/O error
    Io = 74,
    /// Permission denied
    NoPermission = 77,
}

impl ExitCode {
    /// Picks the exit code for an error that reached the process boundary.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::from(err)
    }
}

impl From<&io::Error> for ExitCode {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NoInput,
            io::ErrorKind::PermissionDenied => Self::NoPermission,
            io::ErrorKind::AlreadyExists => Self::CannotCreate,
            io::ErrorKind::InvalidData => Self::Data,
            _ => Self::Io,
        }
    }
}

impl From<&clap::Error> for ExitCode {
    fn from(err: &clap::Error) -> Self {
        match err.kind() {
            // Successful `--help` or `--version` display
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => Self::Success,
            _ => Self::Usage,
        }
    }
}

impl From<&ClipChunksError> for ExitCode {
    fn from(err: &ClipChunksError) -> Self {
        match err {
            ClipChunksError::Config(_) | ClipChunksError::Unescape(_) => Self::Usage,
            ClipChunksError::Utf8 { .. } | ClipChunksError::JsonSerialization(_) => Self::Data,
            ClipChunksError::Clipboard(_) => Self::Unavailable,
            ClipChunksError::Io { source, .. } => Self::from(source),
        }
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<io::Error>()
            .map(Self::from)
            .or_else(|| err.downcast_ref::<clap::Error>().map(Self::from))
            .or_else(|| err.downcast_ref::<ClipChunksError>().map(Self::from))
            .unwrap_or(Self::Failure)
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
