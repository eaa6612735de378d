pub mod cipher;
pub mod exponent;
pub mod keygen;
pub mod prime;

pub use cipher::{EncryptedMessage, RsaCipher, decrypt, encrypt};
pub use exponent::{ExponentKind, ExponentStrategy, FullWidthRandom, SmallFixed};
pub use keygen::{RsaKeyGenerator, RsaKeyPair};
pub use prime::generate_prime;
