use crate::primality::PrimalityTest;
use crate::random::random_odd_full_width;
use num_bigint::BigUint;
use rand::RngCore;

/// Случайное вероятно простое ровно из `bits` бит.
///
/// У каждого кандидата выставлены старший и младший биты, так что проверяются
/// только нечётные числа полной длины. Ограничения на число попыток нет:
/// около 2^384 простым оказывается примерно каждый 133-й нечётный кандидат.
///
/// # Panics
///
/// При `bits == 0`: числа нулевой длины не бывает. `RsaKeyGenerator::new`
/// не пропускает такую длину.
pub fn generate_prime(
    bits: usize,
    test: &dyn PrimalityTest,
    rounds: u32,
    rng: &mut dyn RngCore,
) -> BigUint {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = random_odd_full_width(bits as u64, rng);
        if test.is_probable_prime(&candidate, rounds, rng) {
            log::debug!("found {}-bit probable prime after {} candidates", bits, attempts);
            return candidate;
        }
    }
}
