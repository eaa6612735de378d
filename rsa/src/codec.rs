//! Блочное кодирование ASCII-текста фиксированной длины.
//!
//! Блок читается как little-endian число (то же самое, что развернуть байты
//! и прочитать big-endian), первый символ — младший байт.

use crate::error::CodecError;
use num_bigint::BigUint;

pub const BLOCK_SIZE: usize = 10;

/// Подстановка для байтов вне ASCII при декодировании.
pub const REPLACEMENT: char = '?';

pub type Block = [u8; BLOCK_SIZE];

/// Что делать с пробелами в конце блока при декодировании.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingSpaces {
    /// Срезать все пробелы в конце каждого блока. Уходит дополнение,
    /// но вместе с ним и пробелы самого текста.
    #[default]
    Strip,
    /// Блоки не трогать, склеенный текст обрезать до исходной длины.
    Exact,
}

/// Открытый текст, разбитый на блоки с дополнением, в исходном порядке.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub blocks: Vec<Block>,
    /// Длина текста до дополнения
    pub plaintext_len: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BlockCodec {
    trailing: TrailingSpaces,
}

impl BlockCodec {
    pub fn new(trailing: TrailingSpaces) -> Self {
        Self { trailing }
    }

    pub fn trailing(&self) -> TrailingSpaces {
        self.trailing
    }

    /// Режет `text` на куски по `BLOCK_SIZE`, последний дополняется пробелами.
    /// Байты вне ASCII — ошибка.
    pub fn split_to_blocks(&self, text: &[u8]) -> Result<Message, CodecError> {
        check_ascii(text)?;

        let blocks = text
            .chunks(BLOCK_SIZE)
            .map(|chunk| {
                let mut block = [b' '; BLOCK_SIZE];
                block[..chunk.len()].copy_from_slice(chunk);
                block
            })
            .collect();

        Ok(Message {
            blocks,
            plaintext_len: text.len(),
        })
    }

    pub fn blocks_to_integers(&self, message: &Message) -> Vec<BigUint> {
        message
            .blocks
            .iter()
            .map(|block| BigUint::from_bytes_le(block))
            .collect()
    }

    /// Обратное к `blocks_to_integers`. От слишком широких чисел остаются
    /// младшие `BLOCK_SIZE` байт, байты вне ASCII заменяются на `?`:
    /// расшифровка неверным ключом даёт мусор, а не ошибку.
    pub fn integers_to_blocks(&self, values: &[BigUint]) -> Vec<String> {
        values
            .iter()
            .map(|value| {
                let text: String = integer_to_block(value)
                    .iter()
                    .map(|&b| if b.is_ascii() { char::from(b) } else { REPLACEMENT })
                    .collect();
                match self.trailing {
                    TrailingSpaces::Strip => text.trim_end_matches(' ').to_string(),
                    TrailingSpaces::Exact => text,
                }
            })
            .collect()
    }

    pub fn join(&self, blocks: &[String]) -> String {
        blocks.concat()
    }

    /// Декодирование и склейка расшифрованных блоков; `plaintext_len` нужен
    /// только в режиме `Exact`, где он отрезает дополнение.
    pub fn restore(&self, values: &[BigUint], plaintext_len: usize) -> String {
        let blocks = self.integers_to_blocks(values);
        let mut text = self.join(&blocks);
        if self.trailing == TrailingSpaces::Exact {
            // все символы однобайтовые
            text.truncate(plaintext_len);
        }
        text
    }
}

fn integer_to_block(value: &BigUint) -> Block {
    let be = value.to_bytes_be();
    let kept = &be[be.len().saturating_sub(BLOCK_SIZE)..];

    let mut block = [0u8; BLOCK_SIZE];
    block[BLOCK_SIZE - kept.len()..].copy_from_slice(kept);
    block.reverse();
    block
}

fn check_ascii(bytes: &[u8]) -> Result<(), CodecError> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(i) => Err(CodecError::NonAscii {
            position: i,
            byte: bytes[i],
        }),
        None => Ok(()),
    }
}
