pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;
use rand::RngCore;

/// Интерфейс для вероятностного теста простоты.
///
/// `true` — «вероятно простое» с оценкой ошибки, зависящей от теста и числа
/// раундов; `false` всегда доказывает, что число составное.
pub trait PrimalityTest {
    fn is_probable_prime(&self, n: &BigUint, rounds: u32, rng: &mut dyn RngCore) -> bool;
}
