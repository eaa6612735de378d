use crate::codec::{BlockCodec, Message, TrailingSpaces};
use crate::config::RsaConfig;
use crate::error::Result;
use crate::rsa::{RsaCipher, RsaKeyGenerator, RsaKeyPair};
use num_bigint::BigUint;
use rand::RngCore;
use std::fmt;

/// Результат одного прогона шифрование → расшифровка
#[derive(Clone, Debug)]
pub struct Report {
    /// `(e, n)`
    pub public_key: (BigUint, BigUint),
    /// `(d, n)`
    pub private_key: (BigUint, BigUint),
    pub ciphertext: Vec<BigUint>,
    pub decrypted: String,
    pub matches: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (e, n) = &self.public_key;
        let (d, _) = &self.private_key;
        writeln!(f, "Public key (e, n): ({}, {})", e, n)?;
        writeln!(f, "Private key (d, n): ({}, {})", d, n)?;
        writeln!(f)?;
        writeln!(f, "Decrypted message:")?;
        writeln!(f, "{}", self.decrypted)?;
        writeln!(f)?;
        writeln!(f, "Check:")?;
        if self.matches {
            write!(f, "OK - the message matches.")
        } else {
            write!(f, "ERROR - the message does not match.")
        }
    }
}

/// Кодирует `text`, генерирует пару ключей, шифрует, расшифровывает и сравнивает.
pub fn run(text: &[u8], config: &RsaConfig, rng: &mut dyn RngCore) -> Result<Report> {
    let codec = BlockCodec::new(config.trailing);
    let message = codec.split_to_blocks(text)?;
    log::info!("split {} bytes into {} blocks", text.len(), message.blocks.len());

    let generator = RsaKeyGenerator::new(config.bit_length, config.rounds, config.exponent)?;
    let cipher = RsaCipher::new(generator.generate_keypair(rng));
    round_trip(text, &codec, &message, &cipher)
}

/// То же, но с готовой парой ключей.
pub fn run_with_keypair(text: &[u8], trailing: TrailingSpaces, keypair: RsaKeyPair) -> Result<Report> {
    let codec = BlockCodec::new(trailing);
    let message = codec.split_to_blocks(text)?;
    round_trip(text, &codec, &message, &RsaCipher::new(keypair))
}

fn round_trip(text: &[u8], codec: &BlockCodec, message: &Message, cipher: &RsaCipher) -> Result<Report> {
    let encrypted = cipher.encrypt_message(codec, message)?;
    log::debug!("encrypted {} blocks", encrypted.blocks.len());

    // неверный ключ не ошибка: испорченный текст просто не совпадёт
    let decrypted = cipher.decrypt_message(codec, &encrypted);
    let matches = decrypted.as_bytes() == text;
    if !matches {
        log::warn!("round trip changed the message");
    }

    let keypair = cipher.keypair();
    Ok(Report {
        public_key: (keypair.e.clone(), keypair.n.clone()),
        private_key: (keypair.d.clone(), keypair.n.clone()),
        ciphertext: encrypted.blocks,
        decrypted,
        matches,
    })
}
