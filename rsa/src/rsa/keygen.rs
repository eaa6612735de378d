use crate::error::{Result, RsaError};
use crate::number_theory::mod_inverse;
use crate::primality::{MillerRabinTest, PrimalityTest};
use crate::rsa::exponent::{ExponentKind, ExponentStrategy};
use crate::rsa::prime::generate_prime;
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

/// Структура открытого и закрытого ключа RSA: `(e, n)` — открытый, `(d, n)` — закрытый
#[derive(Clone, Debug)]
pub struct RsaKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    pub fn public_key(&self) -> (&BigUint, &BigUint) {
        (&self.e, &self.n)
    }

    pub fn private_key(&self) -> (&BigUint, &BigUint) {
        (&self.d, &self.n)
    }

    /// Пара ключей из заданных простых и открытой экспоненты.
    /// Требует `gcd(e, (p - 1)(q - 1)) == 1`; совпадение `p` и `q` не проверяется.
    #[doc(hidden)]
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> Self {
        let one = BigUint::one();
        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);
        let d = mod_inverse(&e, &phi);
        Self { n, e, d, p, q }
    }

    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }

    /// φ(n) = (p - 1)(q - 1) для простых, из которых построена пара
    #[doc(hidden)]
    pub fn totient(&self) -> BigUint {
        let one = BigUint::one();
        (&self.p - &one) * (&self.q - &one)
    }
}

/// Сервис генерации ключей RSA заданной длины модуля
pub struct RsaKeyGenerator {
    bit_length: usize,
    rounds: u32,
    test: Box<dyn PrimalityTest>,
    exponent: Box<dyn ExponentStrategy>,
}

impl RsaKeyGenerator {
    /// Создание нового генератора. `bit_length` — длина модуля, каждому
    /// простому достаётся половина, и она должна быть целым числом байт.
    pub fn new(bit_length: usize, rounds: u32, exponent: ExponentKind) -> Result<Self> {
        if bit_length == 0 || bit_length % 16 != 0 {
            return Err(RsaError::InvalidBitLength(bit_length));
        }
        if rounds == 0 {
            return Err(RsaError::InvalidRounds);
        }
        Ok(Self {
            bit_length,
            rounds,
            test: Box::new(MillerRabinTest),
            exponent: exponent.strategy(),
        })
    }

    /// Замена стратегии выбора открытой экспоненты
    pub fn with_exponent_strategy(mut self, strategy: Box<dyn ExponentStrategy>) -> Self {
        self.exponent = strategy;
        self
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Генерация пары ключей RSA. `p` и `q` генерируются независимо; если
    /// стратегия не нашла экспоненту для φ(n), пробуем заново с новыми простыми.
    pub fn generate_keypair(&self, rng: &mut dyn RngCore) -> RsaKeyPair {
        let one = BigUint::one();
        let half_bits = self.bit_length / 2;

        log::info!("generating {}-bit RSA key pair", self.bit_length);

        loop {
            let p = generate_prime(half_bits, self.test.as_ref(), self.rounds, rng);
            let q = generate_prime(half_bits, self.test.as_ref(), self.rounds, rng);
            // не отбрасываем: при n = p^2 (p - 1)^2 — неверная функция Эйлера
            if p == q {
                log::warn!("p and q coincide, decryption with this key pair will fail");
            }

            let n = &p * &q;
            let phi = (&p - &one) * (&q - &one);

            let Some(e) = self.exponent.choose(&phi, rng) else {
                log::debug!("no exponent for this totient, drawing new primes");
                continue;
            };
            let d = mod_inverse(&e, &phi);

            log::info!("key pair ready, modulus has {} bits", n.bits());
            return RsaKeyPair { n, e, d, p, q };
        }
    }
}
