use num_bigint::{BigUint, RandBigInt};
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use textbook_rsa::rsa::{decrypt, encrypt};
use textbook_rsa::{ExponentKind, RsaCipher, RsaError, RsaKeyGenerator};

fn cipher(bits: usize, seed: u64) -> RsaCipher {
    let generator = RsaKeyGenerator::new(bits, 20, ExponentKind::FullWidthRandom).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    RsaCipher::new(generator.generate_keypair(&mut rng))
}

#[test]
fn test_textbook_vector() {
    // p = 61, q = 53
    let n = BigUint::from(3233u32);
    let e = BigUint::from(17u32);
    let d = BigUint::from(2753u32);
    let m = BigUint::from(65u32);

    let c = encrypt(&m, &e, &n);
    assert_eq!(c, BigUint::from(2790u32));
    assert_eq!(decrypt(&c, &d, &n), m);
}

#[test]
fn test_encrypt_decrypt_random_blocks() {
    let cipher = cipher(128, 10);
    let n = cipher.keypair().n.clone();
    let mut rng = StdRng::seed_from_u64(11);

    let blocks: Vec<BigUint> = (0..10)
        .map(|_| rng.gen_biguint_range(&BigUint::from(0u32), &n))
        .collect();
    let ciphertext = cipher.encrypt_blocks(&blocks).unwrap();
    assert_eq!(cipher.decrypt_blocks(&ciphertext), blocks);
}

#[test]
fn test_encrypt_decrypt_near_n() {
    let cipher = cipher(128, 12);
    let m = &cipher.keypair().n - 1u32;
    let ciphertext = cipher.encrypt_blocks(std::slice::from_ref(&m)).unwrap();
    assert_eq!(cipher.decrypt_blocks(&ciphertext), vec![m]);
}

#[test]
fn test_block_not_below_modulus_is_rejected() {
    let cipher = cipher(128, 13);
    let n = cipher.keypair().n.clone();
    let blocks = vec![BigUint::from(5u32), n.clone(), &n + 1u32];
    let result = cipher.encrypt_blocks(&blocks);
    assert!(matches!(result, Err(RsaError::BlockTooLarge { index: 1 })));
}

#[test]
fn test_encrypt_deterministic() {
    let cipher = cipher(128, 14);
    let m = BigUint::from(123u32);
    let ciphertext = cipher.encrypt_blocks(&[m.clone(), m]).unwrap();
    assert_eq!(
        ciphertext[0], ciphertext[1],
        "textbook RSA without padding must be deterministic"
    );
}

quickcheck! {
    fn prop_encrypt_decrypt_roundtrip(x: u64) -> bool {
        let cipher = cipher(96, x);
        let m = BigUint::from(x);
        let (e, n) = cipher.keypair().public_key();
        let (d, _) = cipher.keypair().private_key();
        decrypt(&encrypt(&m, e, n), d, n) == m
    }
}
