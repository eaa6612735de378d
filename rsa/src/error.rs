use std::io;
use thiserror::Error;

/// Ошибки преобразования текста в блоки
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("non-ASCII byte 0x{byte:02x} at position {position}")]
    NonAscii { position: usize, byte: u8 },
}

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("encoding error: {0}")]
    Codec(#[from] CodecError),

    #[error("modulus bit length must be a positive multiple of 16, got {0}")]
    InvalidBitLength(usize),

    #[error("Miller-Rabin needs at least one round")]
    InvalidRounds,

    #[error("block {index} does not fit below the modulus")]
    BlockTooLarge { index: usize },
}

pub type Result<T> = std::result::Result<T, RsaError>;
