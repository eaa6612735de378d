use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Обратный к `a` по модулю `m`, итеративный расширенный алгоритм Евклида.
///
/// Требует `gcd(a, m) == 1`; иначе это ошибка вызывающего, и дело кончится
/// делением на ноль. При `m == 1` возвращает 0.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut m = m0.clone();
    let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());

    while a > BigInt::one() {
        let q = &a / &m;

        let t = m.clone();
        m = &a % &m;
        a = t;

        let t = x0.clone();
        x0 = &x1 - &q * &x0;
        x1 = t;
    }

    if x1.is_negative() {
        x1 += &m0;
    }
    x1.into_parts().1
}

/// Представляет `n` как `2^s * d` с нечётным `d`, возвращает `(s, d)`.
/// Для нуля такого представления нет — `(0, 0)`.
pub fn split_powers_of_two(n: &BigUint) -> (u64, BigUint) {
    match n.trailing_zeros() {
        Some(s) => (s, n >> s),
        None => (0, BigUint::zero()),
    }
}
