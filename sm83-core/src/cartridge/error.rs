use std::convert::From;
use std::io::Error as ioError;

/// An error that may occur when loading a new Cartridge file.
#[derive(thiserror::Error, Debug)]
pub enum CartridgeError {
    /// File error happened while reading the ROM file.
    #[error("File error: {0}")]
    FileError(ioError),
    /// The ROM file does not contain any data.
    #[error("The rom file is empty")]
    EmptyRom,
}

impl From<ioError> for CartridgeError {
    fn from(from: ioError) -> Self {
        Self::FileError(from)
    }
}
