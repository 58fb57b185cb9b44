// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Problem 59: XOR decryption
//!
//! The bundled cipher was produced by XOR-ing an English text with a cycled
//! three-letter lower-case key. Recover the key, decrypt the text, and sum
//! the ASCII values of the plaintext.
//!
//! English text is dominated by spaces, so in each of the three residue
//! classes the most frequent cipher byte decrypts to a space.

use crate::data::read_byte_list;
use crate::problem::{Answer, Problem, SolveContext, SolveError};
use rustc_hash::FxHashMap;

const KEY_LENGTH: usize = 3;

/// Recovers the key byte of one residue class by frequency analysis.
fn key_byte(class: &[u8], file: &str) -> Result<u8, SolveError> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for &byte in class {
        *counts.entry(byte).or_default() += 1;
    }
    let most_common = counts
        .into_iter()
        .max_by_key(|&(byte, count)| (count, std::cmp::Reverse(byte)))
        .map(|(byte, _)| byte)
        .ok_or_else(|| SolveError::malformed(file, "cipher shorter than the key"))?;
    Ok(most_common ^ b' ')
}

fn recover_key(cipher: &[u8], file: &str) -> Result<[u8; KEY_LENGTH], SolveError> {
    let mut key = [0u8; KEY_LENGTH];
    for (offset, slot) in key.iter_mut().enumerate() {
        let class: Vec<u8> = cipher.iter().skip(offset).step_by(KEY_LENGTH).copied().collect();
        *slot = key_byte(&class, file)?;
    }
    Ok(key)
}

fn decrypted_ascii_sum(cipher: &[u8], key: &[u8; KEY_LENGTH]) -> u64 {
    cipher
        .iter()
        .enumerate()
        .map(|(i, &byte)| u64::from(byte ^ key[i % KEY_LENGTH]))
        .sum()
}

/// Breaks the repeating-key XOR cipher and sums the plaintext bytes.
pub struct XorDecryption;

impl Problem for XorDecryption {
    fn id(&self) -> u32 {
        59
    }

    fn title(&self) -> &'static str {
        "XOR decryption"
    }

    fn solve(&self, ctx: &SolveContext) -> Result<Answer, SolveError> {
        let path = ctx.data_file("p059_cipher.txt");
        let file = path.display().to_string();
        let cipher = read_byte_list(&path)?;
        let key = recover_key(&cipher, &file)?;
        Ok(decrypted_ascii_sum(&cipher, &key) as Answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt(plain: &str, key: &[u8; 3]) -> Vec<u8> {
        plain
            .bytes()
            .enumerate()
            .map(|(i, b)| b ^ key[i % 3])
            .collect()
    }

    #[test]
    fn test_xor_round_trip() {
        // 65 XOR 42 = 107, then 107 XOR 42 = 65.
        assert_eq!(65u8 ^ 42, 107);
        assert_eq!(107u8 ^ 42, 65);
    }

    #[test]
    fn test_key_recovery_from_spacy_text() {
        let plain = "or big new i to way be fox sky i day the i to red red to cat to way red i sky";
        let cipher = encrypt(plain, b"key");
        let key = recover_key(&cipher, "test").unwrap();
        assert_eq!(&key, b"key");
        let sum: u64 = plain.bytes().map(u64::from).sum();
        assert_eq!(decrypted_ascii_sum(&cipher, &key), sum);
    }

    #[test]
    fn test_empty_cipher_is_malformed() {
        assert!(recover_key(&[], "test").is_err());
    }

    #[test]
    fn test_answer_against_bundled_data() {
        let ctx = SolveContext::discover().expect("workspace data dir");
        assert_eq!(XorDecryption.solve(&ctx).unwrap(), 62_354);
    }
}
