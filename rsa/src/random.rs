//! Случайные числа из переданного источника байт.
//!
//! Генератор здесь никому не принадлежит: вызывающий передаёт
//! `&mut dyn RngCore` — бинарник `OsRng`, тесты `StdRng` с зерном.

use num_bigint::BigUint;
use rand::RngCore;

/// `len` случайных байт как беззнаковое big-endian число
pub fn random_biguint(len: usize, rng: &mut dyn RngCore) -> BigUint {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

/// Случайное нечётное число ровно из `bits` бит.
///
/// Берутся целые байты, биты выше `bits` обнуляются, затем выставляются
/// старший и младший биты. Для кратного 8 это «старший бит старшего байта
/// и младший бит младшего».
///
/// # Panics
///
/// При `bits == 0`.
pub fn random_odd_full_width(bits: u64, rng: &mut dyn RngCore) -> BigUint {
    assert!(bits > 0, "cannot draw a zero-width integer");

    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);

    let excess = (len as u64 * 8 - bits) as u32;
    bytes[0] &= 0xFF >> excess;
    bytes[0] |= 0x80 >> excess;
    bytes[len - 1] |= 1;

    BigUint::from_bytes_be(&bytes)
}
