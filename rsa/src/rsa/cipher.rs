use crate::codec::{BlockCodec, Message};
use crate::error::{Result, RsaError};
use crate::rsa::keygen::RsaKeyPair;
use num_bigint::BigUint;

/// `m^e mod n`
pub fn encrypt(m: &BigUint, e: &BigUint, n: &BigUint) -> BigUint {
    m.modpow(e, n)
}

/// `c^d mod n`
pub fn decrypt(c: &BigUint, d: &BigUint, n: &BigUint) -> BigUint {
    c.modpow(d, n)
}

/// Шифртекст вместе с длиной исходного текста — всё, что нужно для
/// расшифровки и восстановления сообщения.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedMessage {
    pub blocks: Vec<BigUint>,
    pub plaintext_len: usize,
}

/// Поблочное применение одной пары ключей. Без сцепления и без случайности:
/// одинаковые блоки дают одинаковый шифртекст.
pub struct RsaCipher {
    keypair: RsaKeyPair,
}

impl RsaCipher {
    pub fn new(keypair: RsaKeyPair) -> Self {
        Self { keypair }
    }

    pub fn keypair(&self) -> &RsaKeyPair {
        &self.keypair
    }

    /// Падает на первом блоке, который не меньше `n`: его расшифровка
    /// не вернёт исходное число.
    pub fn encrypt_blocks(&self, blocks: &[BigUint]) -> Result<Vec<BigUint>> {
        let (e, n) = self.keypair.public_key();
        blocks
            .iter()
            .enumerate()
            .map(|(index, m)| {
                if m >= n {
                    return Err(RsaError::BlockTooLarge { index });
                }
                Ok(encrypt(m, e, n))
            })
            .collect()
    }

    pub fn decrypt_blocks(&self, blocks: &[BigUint]) -> Vec<BigUint> {
        let (d, n) = self.keypair.private_key();
        blocks.iter().map(|c| decrypt(c, d, n)).collect()
    }

    /// Блоки сообщения → числа → шифртекст.
    pub fn encrypt_message(&self, codec: &BlockCodec, message: &Message) -> Result<EncryptedMessage> {
        let blocks = self.encrypt_blocks(&codec.blocks_to_integers(message))?;
        Ok(EncryptedMessage {
            blocks,
            plaintext_len: message.plaintext_len,
        })
    }

    /// Расшифровка и декодирование. Неверный ключ даёт испорченный текст,
    /// а не ошибку.
    pub fn decrypt_message(&self, codec: &BlockCodec, encrypted: &EncryptedMessage) -> String {
        let recovered = self.decrypt_blocks(&encrypted.blocks);
        codec.restore(&recovered, encrypted.plaintext_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TrailingSpaces;

    fn mersenne_127() -> BigUint {
        (BigUint::from(1u8) << 127u32) - 1u8
    }

    #[test]
    fn equal_primes_garble_the_message() {
        // n = p^2, а (p - 1)^2 — не функция Эйлера для n
        let p = mersenne_127();
        let keypair = RsaKeyPair::from_primes(p.clone(), p, BigUint::from(65_537u32));
        let cipher = RsaCipher::new(keypair);
        let codec = BlockCodec::default();

        let message = codec.split_to_blocks(b"HELLO WORLD").unwrap();
        let encrypted = cipher.encrypt_message(&codec, &message).unwrap();
        let decrypted = cipher.decrypt_message(&codec, &encrypted);

        assert_ne!(decrypted, "HELLO WORLD");
        assert!(decrypted.is_ascii());
        assert!(decrypted.contains(crate::codec::REPLACEMENT));
    }

    #[test]
    fn message_round_trip_keeps_length() {
        let p = mersenne_127();
        // 2^61 - 1, тоже простое Мерсенна
        let q = (BigUint::from(1u8) << 61u32) - 1u8;
        let keypair = RsaKeyPair::from_primes(p, q, BigUint::from(65_537u32));
        let cipher = RsaCipher::new(keypair);
        let codec = BlockCodec::new(TrailingSpaces::Exact);

        let message = codec.split_to_blocks(b"trailing   ").unwrap();
        let encrypted = cipher.encrypt_message(&codec, &message).unwrap();
        assert_eq!(encrypted.plaintext_len, 11);
        assert_eq!(encrypted.blocks.len(), 2);
        assert_eq!(cipher.decrypt_message(&codec, &encrypted), "trailing   ");
    }
}
