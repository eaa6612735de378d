pub mod codec;
pub mod config;
pub mod error;
pub mod number_theory;
pub mod pipeline;
pub mod primality;
pub mod random;
pub mod rsa;

pub use codec::{BLOCK_SIZE, Block, BlockCodec, Message, REPLACEMENT, TrailingSpaces};
pub use config::{BIT_LENGTH, MILLER_RABIN_ROUNDS, RsaConfig};
pub use error::{CodecError, RsaError};
pub use pipeline::{Report, run, run_with_keypair};
pub use rsa::{EncryptedMessage, ExponentKind, RsaCipher, RsaKeyGenerator, RsaKeyPair};
