//! Validation of identifier text and prefixes.
//!
//! [`parse_input`] is the single parsing routine; every parse method on
//! [`TypeId`](crate::TypeId) is a thin adapter over it. The order of the
//! checks is fixed and the first failing check decides the error:
//!
//! 1. absent or empty input
//! 2. separator (last `_`) at index 0
//! 3. suffix: length, leftmost character, alphabet
//! 4. prefix: length, character class, leading or trailing `_`
//!
//! A prefix is `[a-z_]{0,63}` that neither starts nor ends with `_`. Since
//! the prefix may itself contain `_`, the separator is always the last one.

use uuid::Uuid;

use crate::alphabet::{self, INVALID};
use crate::codec::{self, MAX_LEADING_VALUE, SUFFIX_LEN};
use crate::TypeIdError;

/// Separator between prefix and suffix.
pub const SEPARATOR: char = '_';

/// Maximum prefix length in characters.
pub const PREFIX_MAX_LEN: usize = 63;

/// Parses identifier text into its prefix and value.
///
/// `None` stands for input that is missing altogether, e.g. an absent
/// config value or a JSON `null`.
pub fn parse_input(input: Option<&str>) -> Result<(&str, Uuid), TypeIdError> {
    let result = parse_text(input);
    if let Err(err) = &result {
        tracing::trace!(kind = err.kind(), input = ?input, "rejected typeid");
    }
    result
}

fn parse_text(input: Option<&str>) -> Result<(&str, Uuid), TypeIdError> {
    let input = input.ok_or(TypeIdError::NullOrEmptyInput { absent: true })?;

    if input.is_empty() {
        return Err(TypeIdError::NullOrEmptyInput { absent: false });
    }

    let (prefix, suffix) = split(input)?;

    let suffix = validate_suffix(suffix)?;
    validate_prefix_with_separator(prefix)?;

    let (msb, lsb) = codec::decode_unchecked(suffix);
    Ok((prefix, Uuid::from_u64_pair(msb, lsb)))
}

/// Splits at the last separator. Without a separator the prefix is empty.
fn split(input: &str) -> Result<(&str, &str), TypeIdError> {
    match input.rfind(SEPARATOR) {
        None => Ok(("", input)),
        Some(0) => Err(TypeIdError::EmptyPrefixWithSeparator),
        Some(idx) => Ok((&input[..idx], &input[idx + 1..])),
    }
}

/// Checks the suffix in parse order: length, leftmost character, alphabet.
fn validate_suffix(suffix: &str) -> Result<&[u8; SUFFIX_LEN], TypeIdError> {
    if !codec::has_suffix_len(suffix) {
        return Err(TypeIdError::SuffixLengthInvalid);
    }

    // an unknown first byte maps to INVALID and is reported here as well
    if alphabet::value_of(suffix.as_bytes()[0]) > MAX_LEADING_VALUE {
        return Err(TypeIdError::SuffixLeadingBitsOverflow);
    }

    let bytes: &[u8; SUFFIX_LEN] = suffix
        .as_bytes()
        .try_into()
        .map_err(|_| TypeIdError::SuffixCharacterInvalid)?;

    if bytes.iter().any(|&b| alphabet::value_of(b) == INVALID) {
        return Err(TypeIdError::SuffixCharacterInvalid);
    }

    Ok(bytes)
}

/// Validates the prefix split off the input; empty means there was no separator.
fn validate_prefix_with_separator(prefix: &str) -> Result<(), TypeIdError> {
    if prefix.is_empty() {
        return Ok(());
    }
    check_prefix(prefix)
}

/// Validates a standalone prefix, as passed to `TypeId::new`.
///
/// The empty prefix is valid.
pub fn validate_prefix(prefix: &str) -> Result<(), TypeIdError> {
    let result = check_prefix(prefix);
    if let Err(err) = &result {
        tracing::trace!(kind = err.kind(), prefix, "rejected prefix");
    }
    result
}

fn check_prefix(prefix: &str) -> Result<(), TypeIdError> {
    if exceeds_prefix_len(prefix) {
        return Err(TypeIdError::PrefixLengthInvalid);
    }

    let prefix = prefix.as_bytes();
    if !prefix.iter().all(|&b| is_prefix_byte(b)) {
        return Err(TypeIdError::PrefixCharacterInvalid);
    }

    if prefix.first() == Some(&b'_') || prefix.last() == Some(&b'_') {
        return Err(TypeIdError::PrefixBoundarySeparator);
    }

    Ok(())
}

/// Whether `prefix` has more than [`PREFIX_MAX_LEN`] characters.
fn exceeds_prefix_len(prefix: &str) -> bool {
    match prefix.len() {
        n if n <= PREFIX_MAX_LEN => false,
        n if n > PREFIX_MAX_LEN * 4 => true,
        _ => prefix.chars().count() > PREFIX_MAX_LEN,
    }
}

const fn is_prefix_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'_'
}

/// Compile-time form of [`validate_prefix`], returning only whether the
/// prefix is canonical.
pub const fn is_canonical_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.len() > PREFIX_MAX_LEN {
        return false;
    }
    if bytes.is_empty() {
        return true;
    }
    if bytes[0] == b'_' || bytes[bytes.len() - 1] == b'_' {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !is_prefix_byte(bytes[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if `input` is a valid identifier.
pub fn is_valid(input: &str) -> bool {
    parse_text(Some(input)).is_ok()
}
