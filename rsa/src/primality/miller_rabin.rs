use crate::number_theory::split_powers_of_two;
use crate::primality::PrimalityTest;
use crate::random::random_biguint;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::RngCore;

/// Структура, реализующая тест Миллера–Рабина
#[derive(Clone, Copy, Debug, Default)]
pub struct MillerRabinTest;

impl MillerRabinTest {
    /// Свидетель из `[2, n - 2]`: случайные числа длины `n` в байтах, пока не попадём в диапазон
    fn draw_witness(n: &BigUint, rng: &mut dyn RngCore) -> BigUint {
        let two = BigUint::from(2u8);
        let upper = n - &two;
        let width = n.to_bytes_be().len();
        loop {
            let a = random_biguint(width, rng);
            if a >= two && a <= upper {
                return a;
            }
        }
    }

    /// Один раунд: `false` — `a` доказывает, что `n` составное
    fn passes_round(n: &BigUint, n_minus_one: &BigUint, d: &BigUint, s: u64, a: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let mut x = a.modpow(d, n);

        if x == one || x == *n_minus_one {
            return true;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);

            if x == *n_minus_one {
                return true;
            }
            // 1 в квадрате остаётся 1, до n - 1 уже не дойти
            if x == one {
                return false;
            }
        }

        false
    }
}

impl PrimalityTest for MillerRabinTest {
    fn is_probable_prime(&self, n: &BigUint, rounds: u32, rng: &mut dyn RngCore) -> bool {
        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        if *n < two {
            return false;
        }
        if *n == two || *n == three {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let n_minus_one = n - BigUint::one();
        let (s, d) = split_powers_of_two(&n_minus_one);

        for _ in 0..rounds {
            let a = Self::draw_witness(n, rng);
            if !Self::passes_round(n, &n_minus_one, &d, s, &a) {
                return false;
            }
        }
        true
    }
}
