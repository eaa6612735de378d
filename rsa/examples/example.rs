use rand::rngs::OsRng;
use textbook_rsa::{BlockCodec, ExponentKind, RsaCipher, RsaKeyGenerator, TrailingSpaces};

fn main() -> Result<(), textbook_rsa::RsaError> {
    // 1) пара ключей с маленькой открытой экспонентой, а не полной длины, как по умолчанию
    let generator = RsaKeyGenerator::new(512, 20, ExponentKind::SmallFixed)?;
    let cipher = RsaCipher::new(generator.generate_keypair(&mut OsRng));

    let (e, n) = cipher.keypair().public_key();
    let (d, _) = cipher.keypair().private_key();
    println!("Generated key:\n  n = {n}\n  e = {e}\n  d = {d}");

    // 2) текст -> блоки, пробелы в конце сохраняем
    let codec = BlockCodec::new(TrailingSpaces::Exact);
    let text = b"Textbook RSA, block by block.   ";
    let message = codec.split_to_blocks(text)?;

    // 3) шифруем и расшифровываем каждый блок
    let encrypted = cipher.encrypt_message(&codec, &message)?;
    for (m, c) in codec.blocks_to_integers(&message).iter().zip(&encrypted.blocks) {
        println!("  {m} -> {c}");
    }

    let decrypted = cipher.decrypt_message(&codec, &encrypted);
    assert_eq!(decrypted.as_bytes(), text);
    println!("Round trip OK: {decrypted:?}");
    Ok(())
}
