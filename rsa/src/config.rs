use crate::codec::TrailingSpaces;
use crate::rsa::ExponentKind;

/// Длина модуля по умолчанию; каждому простому — половина
pub const BIT_LENGTH: usize = 768;

/// Раундов на кандидата, вероятность ошибки не больше 4^-20
pub const MILLER_RABIN_ROUNDS: u32 = 20;

/// Параметры одного прогона шифрования и расшифровки
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    pub bit_length: usize,
    pub rounds: u32,
    pub exponent: ExponentKind,
    pub trailing: TrailingSpaces,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            bit_length: BIT_LENGTH,
            rounds: MILLER_RABIN_ROUNDS,
            exponent: ExponentKind::FullWidthRandom,
            trailing: TrailingSpaces::Strip,
        }
    }
}
