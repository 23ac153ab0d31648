//! Suffix alphabet and its reverse lookup table.
//!
//! The alphabet is Crockford-style base32 in lowercase, without `i`, `l`,
//! `o` and `u`. Both tables are plain `const` data and can be read from any
//! thread without synchronization.

/// The 32 symbols of the suffix alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Lookup value for bytes that are not part of [`ALPHABET`].
pub const INVALID: u8 = 0xFF;

/// Reverse table: input byte -> 5-bit value, or [`INVALID`].
pub const LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the 5-bit value of `byte`, or [`INVALID`].
#[inline]
pub const fn value_of(byte: u8) -> u8 {
    LOOKUP[byte as usize]
}

/// Returns the alphabet symbol for the low 5 bits of `bits`.
#[inline]
pub const fn symbol(bits: u64) -> u8 {
    ALPHABET[(bits & 0x1F) as usize]
}
