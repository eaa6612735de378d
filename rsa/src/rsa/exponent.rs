//! Выбор открытой экспоненты.
//!
//! Генератор ключей только просит у стратегии экспоненту, взаимно простую
//! с φ(n); замена стратегии не затрагивает остальную генерацию.

use crate::random::random_odd_full_width;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::RngCore;

pub trait ExponentStrategy {
    /// Экспонента `e`: `1 < e < phi` и `gcd(e, phi) == 1`, либо `None`, если
    /// у стратегии нет такого значения для `phi`.
    fn choose(&self, phi: &BigUint, rng: &mut dyn RngCore) -> Option<BigUint>;
}

/// Случайная нечётная экспонента той же битовой длины, что и φ(n)
#[derive(Clone, Copy, Debug, Default)]
pub struct FullWidthRandom;

impl ExponentStrategy for FullWidthRandom {
    fn choose(&self, phi: &BigUint, rng: &mut dyn RngCore) -> Option<BigUint> {
        let one = BigUint::one();
        // каждый кандидат не меньше `floor`; при phi > floor + 1 подходит
        // phi - 1 или phi - 2
        let floor = BigUint::one() << phi.bits().saturating_sub(1);
        if phi.bits() < 2 || *phi <= floor + 1u8 {
            return None;
        }

        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let e = random_odd_full_width(phi.bits(), rng);
            if e > one && e < *phi && e.gcd(phi).is_one() {
                log::debug!("picked full-width exponent after {} draws", attempts);
                return Some(e);
            }
        }
    }
}

/// Фиксированная экспонента, по умолчанию 65537
#[derive(Clone, Debug)]
pub struct SmallFixed {
    e: BigUint,
}

impl SmallFixed {
    pub fn new(e: u32) -> Self {
        Self { e: BigUint::from(e) }
    }
}

impl Default for SmallFixed {
    fn default() -> Self {
        Self::new(65_537)
    }
}

impl ExponentStrategy for SmallFixed {
    fn choose(&self, phi: &BigUint, _rng: &mut dyn RngCore) -> Option<BigUint> {
        if self.e > BigUint::one() && self.e < *phi && self.e.gcd(phi).is_one() {
            Some(self.e.clone())
        } else {
            None
        }
    }
}

/// Выбор стратегии в конфигурации
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExponentKind {
    #[default]
    FullWidthRandom,
    SmallFixed,
}

impl ExponentKind {
    pub fn strategy(self) -> Box<dyn ExponentStrategy> {
        match self {
            ExponentKind::FullWidthRandom => Box::new(FullWidthRandom),
            ExponentKind::SmallFixed => Box::new(SmallFixed::default()),
        }
    }
}
