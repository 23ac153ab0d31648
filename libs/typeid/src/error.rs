//! Error types for identifier parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or constructing a [`TypeId`](crate::TypeId).
///
/// Every variant renders a fixed message; the wording is stable and can be
/// matched by callers that only see the text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeIdError {
    /// The input is absent or the empty string.
    #[error("{}", null_or_empty_message(.absent))]
    NullOrEmptyInput {
        /// `true` when there was no input at all.
        absent: bool,
    },

    /// The input starts with the separator, i.e. an empty prefix followed by `_`.
    #[error("empty prefix must not contain separator")]
    EmptyPrefixWithSeparator,

    /// The suffix is not exactly 26 characters long.
    #[error("illegal length, must be 26")]
    SuffixLengthInvalid,

    /// The first suffix character would overflow 128 bits.
    #[error("illegal leftmost suffix character, must be one of [0-7]")]
    SuffixLeadingBitsOverflow,

    /// The suffix contains a character outside the base32 alphabet.
    #[error("illegal character in suffix, must be one of [0123456789abcdefghjkmnpqrstvwxyz]")]
    SuffixCharacterInvalid,

    /// The prefix is longer than 63 characters.
    #[error("illegal length, must not exceed 63")]
    PrefixLengthInvalid,

    /// The prefix contains something other than lowercase ASCII letters and `_`.
    #[error("illegal character in prefix, must be one of [a-z_]")]
    PrefixCharacterInvalid,

    /// The prefix starts or ends with `_`.
    #[error("prefix must not start or end with separator")]
    PrefixBoundarySeparator,
}

fn null_or_empty_message(absent: &bool) -> &'static str {
    if *absent {
        "must not be null or empty"
    } else {
        "must not be empty"
    }
}

impl TypeIdError {
    /// Returns the literal message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            TypeIdError::NullOrEmptyInput { absent } => null_or_empty_message(absent),
            TypeIdError::EmptyPrefixWithSeparator => "empty prefix must not contain separator",
            TypeIdError::SuffixLengthInvalid => "illegal length, must be 26",
            TypeIdError::SuffixLeadingBitsOverflow => {
                "illegal leftmost suffix character, must be one of [0-7]"
            }
            TypeIdError::SuffixCharacterInvalid => {
                "illegal character in suffix, must be one of [0123456789abcdefghjkmnpqrstvwxyz]"
            }
            TypeIdError::PrefixLengthInvalid => "illegal length, must not exceed 63",
            TypeIdError::PrefixCharacterInvalid => {
                "illegal character in prefix, must be one of [a-z_]"
            }
            TypeIdError::PrefixBoundarySeparator => "prefix must not start or end with separator",
        }
    }

    /// Returns true if this error is about the prefix.
    ///
    /// These are the only errors construction (`new`, `generate`) can return.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            TypeIdError::PrefixLengthInvalid
                | TypeIdError::PrefixCharacterInvalid
                | TypeIdError::PrefixBoundarySeparator
        )
    }

    /// Returns true if this error is about the 26-character suffix.
    pub fn is_suffix_error(&self) -> bool {
        matches!(
            self,
            TypeIdError::SuffixLengthInvalid
                | TypeIdError::SuffixLeadingBitsOverflow
                | TypeIdError::SuffixCharacterInvalid
        )
    }

    /// Short, stable name of the error kind, used for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeIdError::NullOrEmptyInput { .. } => "null_or_empty_input",
            TypeIdError::EmptyPrefixWithSeparator => "empty_prefix_with_separator",
            TypeIdError::SuffixLengthInvalid => "suffix_length_invalid",
            TypeIdError::SuffixLeadingBitsOverflow => "suffix_leading_bits_overflow",
            TypeIdError::SuffixCharacterInvalid => "suffix_character_invalid",
            TypeIdError::PrefixLengthInvalid => "prefix_length_invalid",
            TypeIdError::PrefixCharacterInvalid => "prefix_character_invalid",
            TypeIdError::PrefixBoundarySeparator => "prefix_boundary_separator",
        }
    }
}

/// Errors for identifier types with a fixed prefix (see [`define_typeid!`](crate::define_typeid)).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypedIdError {
    /// The text is not a valid identifier at all.
    #[error(transparent)]
    Invalid(#[from] TypeIdError),

    /// The identifier is valid but carries another prefix.
    #[error("prefix mismatch: expected '{expected}', got '{actual}'")]
    PrefixMismatch {
        expected: &'static str,
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TypeIdError; 9] = [
        TypeIdError::NullOrEmptyInput { absent: true },
        TypeIdError::NullOrEmptyInput { absent: false },
        TypeIdError::EmptyPrefixWithSeparator,
        TypeIdError::SuffixLengthInvalid,
        TypeIdError::SuffixLeadingBitsOverflow,
        TypeIdError::SuffixCharacterInvalid,
        TypeIdError::PrefixLengthInvalid,
        TypeIdError::PrefixCharacterInvalid,
        TypeIdError::PrefixBoundarySeparator,
    ];

    #[test]
    fn test_display_matches_message() {
        for err in ALL {
            assert_eq!(err.to_string(), err.message());
        }
    }

    #[test]
    fn test_null_and_empty_messages_differ() {
        assert_eq!(
            TypeIdError::NullOrEmptyInput { absent: true }.message(),
            "must not be null or empty"
        );
        assert_eq!(
            TypeIdError::NullOrEmptyInput { absent: false }.message(),
            "must not be empty"
        );
    }

    #[test]
    fn test_classification() {
        let prefix = ALL.iter().filter(|e| e.is_prefix_error()).count();
        let suffix = ALL.iter().filter(|e| e.is_suffix_error()).count();
        assert_eq!(prefix, 3);
        assert_eq!(suffix, 3);
        assert!(ALL.iter().all(|e| !(e.is_prefix_error() && e.is_suffix_error())));
    }

    #[test]
    fn test_typed_error_is_transparent() {
        let err = TypedIdError::from(TypeIdError::SuffixLengthInvalid);
        assert_eq!(err.to_string(), "illegal length, must be 26");
    }
}
