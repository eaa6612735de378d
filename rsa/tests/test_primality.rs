use num_bigint::BigUint;
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use textbook_rsa::primality::{MillerRabinTest, PrimalityTest};

const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

#[test]
fn test_miller_rabin_on_small_primes() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    for rounds in [1u32, 5, 20] {
        for &p in &SMALL_PRIMES {
            let n = BigUint::from(p);
            assert!(test.is_probable_prime(&n, rounds, &mut rng), "MR failed on prime {p} with {rounds} rounds");
        }
    }
}

#[test]
fn test_miller_rabin_on_small_composites() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(0xB0B);
    for n in 4u32..=100 {
        if SMALL_PRIMES.contains(&n) {
            continue;
        }
        let big = BigUint::from(n);
        assert!(!test.is_probable_prime(&big, 20, &mut rng), "MR accepted composite {n}");
    }
}

#[test]
fn test_miller_rabin_below_two() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(1);
    for v in [0u32, 1] {
        assert!(!test.is_probable_prime(&BigUint::from(v), 20, &mut rng), "MR passed n = {v}");
    }
}

#[test]
fn test_miller_rabin_rejects_carmichael() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(561);
    let carmichaels = [561u32, 1105, 1729, 2465, 2821, 6601, 8911];
    for &n in &carmichaels {
        let big = BigUint::from(n);
        assert!(!test.is_probable_prime(&big, 20, &mut rng), "MR accepted Carmichael number {n}");
    }
}

#[test]
fn test_miller_rabin_large_cases() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(2);
    let prime = BigUint::parse_bytes(b"32416190071", 10).unwrap();
    let mersenne = BigUint::parse_bytes(b"170141183460469231731687303715884105727", 10).unwrap();

    assert!(test.is_probable_prime(&prime, 20, &mut rng), "MR failed on large prime");
    assert!(test.is_probable_prime(&mersenne, 20, &mut rng), "MR failed on 2^127 - 1");
    assert!(!test.is_probable_prime(&(&prime * 11u32), 20, &mut rng), "MR failed on large composite");
    assert!(!test.is_probable_prime(&(&prime * &mersenne), 20, &mut rng), "MR failed on semiprime");
}

#[test]
fn test_miller_rabin_without_rounds_gathers_no_evidence() {
    let test = MillerRabinTest;
    let mut rng = StdRng::seed_from_u64(3);
    assert!(test.is_probable_prime(&BigUint::from(91u32), 0, &mut rng));
    // the cheap screens still apply
    assert!(!test.is_probable_prime(&BigUint::from(90u32), 0, &mut rng));
}

quickcheck! {
    fn prop_miller_rabin_rejects_odd_composites(a: u8, b: u8) -> bool {
        if a < 3 || b < 3 { return true; }
        let n = (a as u32) * (b as u32);
        if n % 2 == 0 { return true; }
        let mut rng = StdRng::seed_from_u64(n as u64);
        !MillerRabinTest.is_probable_prime(&BigUint::from(n), 20, &mut rng)
    }
}
