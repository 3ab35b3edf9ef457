// src/alphabet.rs
//! The base62 alphabet and symbol lookup

/// Radix of every short ID.
pub const BASE: u32 = 62;

/// Encoding alphabet: digits, then uppercase, then lowercase ASCII letters.
///
/// Must match bit-for-bit with any other implementation for short IDs to interoperate.
pub const ALPHABET: &[u8; BASE as usize] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The symbol for digit zero, and the whole encoding of the integer zero.
pub const ZERO: char = ALPHABET[0] as char;

/// Marks bytes in [`LOOKUP`] that are not part of the alphabet.
const INVALID: u8 = u8::MAX;

/// LUT from an ASCII byte to its alphabet index.
#[allow(clippy::indexing_slicing, reason = "const fn will fail early")]
const LOOKUP: [u8; 128] = {
    let mut lookup = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i] as usize;
        assert!(c < 128, "ALPHABET must be ASCII");
        assert!(lookup[c] == INVALID, "ALPHABET must not contain duplicate symbols");
        lookup[c] = i as u8;
        i += 1;
    }
    lookup
};

/// Look up the digit value of a symbol, `None` if the symbol is not in the alphabet.
///
/// Case-sensitive: `'a'` is 36 while `'A'` is 10.
pub fn index_of(c: char) -> Option<u8> {
    LOOKUP
        .get(c as usize)
        .copied()
        .filter(|&index| index != INVALID)
}

/// The symbol for a digit value, `None` if `digit >= 62`.
pub fn symbol(digit: u8) -> Option<char> {
    ALPHABET.get(usize::from(digit)).copied().map(char::from)
}

/// Whether `c` is one of the 62 alphabet symbols.
pub fn contains(c: char) -> bool {
    index_of(c).is_some()
}
