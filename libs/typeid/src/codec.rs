//! Base32 codec for the 26-character suffix.
//!
//! A 128-bit value is split into its two 64-bit halves. The 26 characters
//! carry 130 bits, so the two leading bits of the first character must be
//! zero; this is what makes the encoding canonical.
//!
//! ```text
//! char  0..=12   msb >> 61, 56, .., 1
//! char  13       (msb & 1) << 4 | lsb >> 60
//! char 14..=25   lsb >> 55, 50, .., 0
//! ```

use uuid::Uuid;

use crate::alphabet::{self, INVALID};
use crate::TypeIdError;

/// Length of an encoded suffix.
pub const SUFFIX_LEN: usize = 26;

/// Largest 5-bit value allowed as the first suffix character.
pub(crate) const MAX_LEADING_VALUE: u8 = 7;

/// Whether `s` is exactly [`SUFFIX_LEN`] characters long.
///
/// A character is at most 4 bytes, so anything outside `26..=104` bytes is
/// decided without walking the string.
pub(crate) fn has_suffix_len(s: &str) -> bool {
    match s.len() {
        SUFFIX_LEN => true,
        n if n < SUFFIX_LEN || n > SUFFIX_LEN * 4 => false,
        _ => s.chars().count() == SUFFIX_LEN,
    }
}

/// Encodes a 128-bit value given as two halves into its 26 ASCII bytes.
pub fn encode_bytes(msb: u64, lsb: u64) -> [u8; SUFFIX_LEN] {
    let mut out = [0u8; SUFFIX_LEN];

    for (i, slot) in out[..13].iter_mut().enumerate() {
        *slot = alphabet::symbol(msb >> (61 - 5 * i));
    }

    out[13] = alphabet::symbol(((msb & 0x1) << 4) | (lsb >> 60));

    for (i, slot) in out[14..].iter_mut().enumerate() {
        *slot = alphabet::symbol(lsb >> (55 - 5 * i));
    }

    out
}

/// Encodes a 128-bit value given as two halves into a 26-character string.
pub fn encode(msb: u64, lsb: u64) -> String {
    encode_bytes(msb, lsb).iter().map(|&b| b as char).collect()
}

/// Encodes a UUID into its 26-character suffix.
pub fn encode_uuid(uuid: Uuid) -> String {
    let (msb, lsb) = uuid.as_u64_pair();
    encode(msb, lsb)
}

/// Decodes a 26-character suffix into the two halves of a 128-bit value.
///
/// Checks run in this order: length in characters, alphabet, leftmost
/// character.
pub fn decode(s: &str) -> Result<(u64, u64), TypeIdError> {
    if !has_suffix_len(s) {
        return Err(TypeIdError::SuffixLengthInvalid);
    }

    // 26 characters but more bytes: something outside ASCII
    let bytes: &[u8; SUFFIX_LEN] = s
        .as_bytes()
        .try_into()
        .map_err(|_| TypeIdError::SuffixCharacterInvalid)?;

    if bytes.iter().any(|&b| alphabet::value_of(b) == INVALID) {
        return Err(TypeIdError::SuffixCharacterInvalid);
    }

    if alphabet::value_of(bytes[0]) > MAX_LEADING_VALUE {
        return Err(TypeIdError::SuffixLeadingBitsOverflow);
    }

    Ok(decode_unchecked(bytes))
}

/// Decodes a 26-character suffix into a UUID.
pub fn decode_uuid(s: &str) -> Result<Uuid, TypeIdError> {
    let (msb, lsb) = decode(s)?;
    Ok(Uuid::from_u64_pair(msb, lsb))
}

/// Inverts [`encode_bytes`]. Every byte must already be known to be in the
/// alphabet and the first one must be at most 7.
pub(crate) fn decode_unchecked(bytes: &[u8; SUFFIX_LEN]) -> (u64, u64) {
    let mut msb = 0u64;
    let mut lsb = 0u64;

    for (i, &b) in bytes[..13].iter().enumerate() {
        msb |= u64::from(alphabet::value_of(b)) << (61 - 5 * i);
    }

    let overlap = u64::from(alphabet::value_of(bytes[13]));
    msb |= overlap >> 4;
    lsb |= (overlap & 0xF) << 60;

    for (i, &b) in bytes[14..].iter().enumerate() {
        lsb |= u64::from(alphabet::value_of(b)) << (55 - 5 * i);
    }

    (msb, lsb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SOME_UUID: &str = "01890a5d-ac96-774b-bcce-b302099a8057";
    const SOME_SUFFIX: &str = "01h455vb4pex5vsknk084sn02q";

    #[test]
    fn test_encode_known_value() {
        let uuid = Uuid::parse_str(SOME_UUID).unwrap();
        assert_eq!(encode_uuid(uuid), SOME_SUFFIX);
    }

    #[test]
    fn test_decode_known_value() {
        let uuid = decode_uuid(SOME_SUFFIX).unwrap();
        assert_eq!(uuid.to_string(), SOME_UUID);
    }

    #[test]
    fn test_encode_extremes() {
        assert_eq!(encode(0, 0), "00000000000000000000000000");
        assert_eq!(encode(u64::MAX, u64::MAX), "7zzzzzzzzzzzzzzzzzzzzzzzzz");
        assert_eq!(encode(0, 1), "00000000000000000000000001");
        assert_eq!(encode(0, 32), "00000000000000000000000010");
    }

    #[test]
    fn test_overlap_character() {
        // only the lowest msb bit set lands in char 13
        assert_eq!(encode(1, 0), "0000000000000g000000000000");
        assert_eq!(decode("0000000000000g000000000000"), Ok((1, 0)));
        // only the highest lsb bit set
        assert_eq!(encode(0, 1 << 63), "00000000000008000000000000");
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(decode(""), Err(TypeIdError::SuffixLengthInvalid));
        assert_eq!(
            decode("01h455vb4pex5vsknk084sn02"),
            Err(TypeIdError::SuffixLengthInvalid)
        );
        assert_eq!(
            decode("01h455vb4pex5vsknk084sn02qq"),
            Err(TypeIdError::SuffixLengthInvalid)
        );
    }

    #[test]
    fn test_decode_counts_characters() {
        // 25 characters, 26 bytes
        assert_eq!(
            decode("01h455\u{f6}4pex5vsknk084sn02q"),
            Err(TypeIdError::SuffixLengthInvalid)
        );
        // 26 characters, 27 bytes
        assert_eq!(
            decode("01h455\u{f6}b4pex5vsknk084sn02q"),
            Err(TypeIdError::SuffixCharacterInvalid)
        );
        assert_eq!(
            decode(&"\u{1f600}".repeat(SUFFIX_LEN)),
            Err(TypeIdError::SuffixCharacterInvalid)
        );
        assert_eq!(
            decode(&"\u{1f600}".repeat(SUFFIX_LEN + 1)),
            Err(TypeIdError::SuffixLengthInvalid)
        );
    }

    #[test]
    fn test_decode_checks_alphabet_before_leftmost() {
        // both problems present: the alphabet error wins in the codec
        assert_eq!(
            decode("81h455vb4pex5vsknk084sn02u"),
            Err(TypeIdError::SuffixCharacterInvalid)
        );
        assert_eq!(
            decode("01h455Vb4pex5vsknk084sn02q"),
            Err(TypeIdError::SuffixCharacterInvalid)
        );
    }

    #[test]
    fn test_decode_rejects_leftmost_overflow() {
        for first in ['8', '9', 'a', 'z'] {
            let s = format!("{first}1h455vb4pex5vsknk084sn02q");
            assert_eq!(decode(&s), Err(TypeIdError::SuffixLeadingBitsOverflow));
        }
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(msb in any::<u64>(), lsb in any::<u64>()) {
            let encoded = encode(msb, lsb);
            prop_assert_eq!(encoded.len(), SUFFIX_LEN);
            prop_assert_eq!(decode(&encoded), Ok((msb, lsb)));
        }

        #[test]
        fn prop_encode_inverts_decode(s in "[0-7][0-9a-hjkmnp-tv-z]{25}") {
            let (msb, lsb) = decode(&s).unwrap();
            prop_assert_eq!(encode(msb, lsb), s);
        }

        #[test]
        fn prop_encoding_preserves_order(a in any::<u128>(), b in any::<u128>()) {
            let ea = encode_uuid(Uuid::from_u128(a));
            let eb = encode_uuid(Uuid::from_u128(b));
            prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        }
    }
}
