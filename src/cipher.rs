//! Caesar cipher

use crate::domain::CipherMode;

const ALPHABET_LEN: i64 = 26;

/// Rotate every ASCII letter in `text` by `shift` places within its case.
///
/// Decoding rotates the other way, so `Decode` undoes `Encode` for the same
/// shift. Any shift is accepted and reduced modulo 26. Characters outside
/// `A-Z` / `a-z` are copied through untouched.
pub fn caesar_cipher(text: &str, shift: i64, mode: CipherMode) -> String {
    let forward = shift.rem_euclid(ALPHABET_LEN);
    let shift = match mode {
        CipherMode::Encode => forward,
        CipherMode::Decode => (ALPHABET_LEN - forward) % ALPHABET_LEN,
    } as u8;

    text.chars().map(|ch| rotate(ch, shift)).collect()
}

fn rotate(ch: char, shift: u8) -> char {
    let base = if ch.is_ascii_uppercase() {
        b'A'
    } else if ch.is_ascii_lowercase() {
        b'a'
    } else {
        return ch;
    };
    char::from((ch as u8 - base + shift) % 26 + base)
}
