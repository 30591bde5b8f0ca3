/**
 * Mnemonic Generator
 *
 * Draws random entropy sized by the requested word count and encodes it
 * with the BIP-39 English wordlist.
 */
use bip39::{Language, Mnemonic};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Word count used when the caller has no preference
pub const DEFAULT_WORD_COUNT: usize = 15;

/// Supported word counts and the entropy (in bits) requested for each
pub const WORD_COUNT_ENTROPY_BITS: [(usize, u32); 6] = [
    (9, 96),
    (12, 128),
    (15, 164),
    (18, 196),
    (21, 224),
    (24, 256),
];

const BITS_PER_WORD: usize = 11;

/// Look up the entropy bits for a word count
pub fn entropy_bits(word_count: usize) -> Result<u32> {
    WORD_COUNT_ENTROPY_BITS
        .iter()
        .find(|(count, _)| *count == word_count)
        .map(|(_, bits)| *bits)
        .ok_or(Error::UnsupportedWordCount(word_count))
}

/// Generate a random mnemonic of `word_count` words
///
/// Entropy is `bits / 8` bytes, so 164 and 196 bits round down to the
/// 160- and 192-bit BIP-39 sizes for 15 and 18 words.
pub fn mnemonic_sentence(word_count: usize) -> Result<Vec<String>> {
    let bits = entropy_bits(word_count)?;

    let mut entropy = vec![0u8; (bits / 8) as usize];
    rand::thread_rng().fill_bytes(&mut entropy);

    mnemonic_from_entropy(&entropy)
}

/// Encode raw entropy as English mnemonic words
///
/// Accepts 12 to 32 bytes in steps of 4 (9 to 24 words).
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<Vec<String>> {
    let len = entropy.len();
    if !(12..=32).contains(&len) || len % 4 != 0 {
        return Err(Error::InvalidEntropyLength(len));
    }

    // bip39 refuses anything under 128 bits
    if len < 16 {
        return Ok(encode_words(entropy));
    }

    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|_| Error::InvalidEntropyLength(len))?;
    Ok(mnemonic.words().map(str::to_string).collect())
}

/// BIP-39 encoding against the English wordlist, for lengths `bip39` rejects
fn encode_words(entropy: &[u8]) -> Vec<String> {
    // One checksum bit per 32 bits of entropy
    let checksum_bits = entropy.len() / 4;
    let hash = Sha256::digest(entropy);

    let mut bits: Vec<bool> = Vec::with_capacity(entropy.len() * 8 + checksum_bits);
    for byte in entropy {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    for i in 0..checksum_bits {
        bits.push((hash[i / 8] >> (7 - i % 8)) & 1 == 1);
    }

    let word_list = Language::English.word_list();
    bits.chunks(BITS_PER_WORD)
        .map(|chunk| chunk.iter().fold(0usize, |acc, &b| (acc << 1) | b as usize))
        .map(|index| word_list[index].to_string())
        .collect()
}
