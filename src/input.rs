//! Buffered source for file, stdin or in-memory input.

use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Read, Stdin},
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Buffered source that chunks are read from.
#[derive(Debug)]
pub enum Input {
    /// Standard input reader.
    Stdin(BufReader<Stdin>),
    /// File reader.
    File(PathBuf, BufReader<File>),
    /// In-memory bytes.
    Bytes(Cursor<Box<[u8]>>),
}

impl Input {
    /// Creates an input for standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::Stdin(BufReader::new(io::stdin()))
    }

    /// Creates an input from byte data.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self::Bytes(Cursor::new(bytes.as_ref().into()))
    }

    /// Opens a file path, or stdin when the path is `"-"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::try_from(path.as_ref())
    }

    /// Returns the file name of the input, `"-"` for stdin or `"<bytes>"`.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            Self::Stdin(_) => "-".to_string(),
            Self::File(path, _) => path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            ),
            Self::Bytes(_) => "<bytes>".to_string(),
        }
    }

    fn buf_read(&mut self) -> &mut dyn BufRead {
        match self {
            Self::Stdin(reader) => reader,
            Self::File(_, reader) => reader,
            Self::Bytes(cursor) => cursor,
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.buf_read().read(buf)
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.buf_read().fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.buf_read().consume(amt);
    }
}

impl Display for Input {
    /// Shows the file path, `-` for stdin or `<bytes>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path, _) => write!(f, "{}", path.display()),
            Self::Stdin(_) => write!(f, "-"),
            Self::Bytes(_) => write!(f, "<bytes>"),
        }
    }
}

impl TryFrom<&Path> for Input {
    type Error = Error;

    /// Creates an input from a file path or stdin.
    ///
    /// Use `"-"` for stdin input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` with specific messages for:
    /// - File not found
    /// - Permission denied
    /// - Other I/O errors
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.as_os_str() == "-" {
            Ok(Self::stdin())
        } else {
            let file = open_file_with_error_context(path)?;
            Ok(Self::File(path.to_path_buf(), BufReader::new(file)))
        }
    }
}

impl TryFrom<&str> for Input {
    type Error = Error;

    /// Creates an input from a string path. The path "-" is interpreted as stdin.
    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::try_from(Path::new(path))
    }
}

/// Opens a file, naming the failure in the error message.
fn open_file_with_error_context(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| {
        let message = match source.kind() {
            io::ErrorKind::NotFound => "no such file",
            io::ErrorKind::PermissionDenied => "permission denied",
            io::ErrorKind::IsADirectory => "is a directory",
            _ => "failed to open file",
        };

        Error::io(path.display().to_string(), message, source)
    })
}
