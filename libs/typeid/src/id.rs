//! The [`TypeId`] value type.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::codec::{self, SUFFIX_LEN};
use crate::source::{UuidSource, UuidV7Source};
use crate::validate::{self, SEPARATOR};
use crate::TypeIdError;

/// An identifier made of an optional lowercase prefix and a UUID.
///
/// The text form is `prefix_suffix`, or just `suffix` when the prefix is
/// empty, where the suffix is the 26-character base32 encoding of the UUID.
/// Values are immutable; the prefix is always valid.
///
/// Ordering compares the prefix first and then the UUID. For identifiers
/// with the same prefix this matches the order of their text form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId {
    prefix: String,
    uuid: Uuid,
}

impl TypeId {
    /// Creates an identifier from a prefix and a UUID of any version.
    pub fn new(prefix: impl Into<String>, uuid: Uuid) -> Result<Self, TypeIdError> {
        let prefix = prefix.into();
        validate::validate_prefix(&prefix)?;
        Ok(Self { prefix, uuid })
    }

    /// Creates an identifier without prefix.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            prefix: String::new(),
            uuid,
        }
    }

    /// Used by `define_typeid!`, whose prefix is checked at compile time.
    #[doc(hidden)]
    #[must_use]
    pub fn from_static_prefix(prefix: &'static str, uuid: Uuid) -> Self {
        debug_assert!(validate::is_canonical_prefix(prefix));
        Self {
            prefix: prefix.to_owned(),
            uuid,
        }
    }

    /// Generates a new identifier with a fresh UUIDv7.
    pub fn generate(prefix: impl Into<String>) -> Result<Self, TypeIdError> {
        Self::generate_with(&UuidV7Source, prefix)
    }

    /// Generates a new identifier without prefix.
    #[must_use]
    pub fn generate_unprefixed() -> Self {
        Self::from_uuid(UuidV7Source.next_uuid())
    }

    /// Generates a new identifier, taking the UUID from `source`.
    pub fn generate_with<S>(source: &S, prefix: impl Into<String>) -> Result<Self, TypeIdError>
    where
        S: UuidSource + ?Sized,
    {
        let prefix = prefix.into();
        validate::validate_prefix(&prefix)?;
        let id = Self {
            prefix,
            uuid: source.next_uuid(),
        };
        tracing::trace!(typeid = %id, "generated typeid");
        Ok(id)
    }

    /// Parses the text form.
    ///
    /// This is the fallible shape to use with `?`; [`parse_to_option`],
    /// [`parse_to_result`] and [`parse_with`] share the same checks and
    /// messages.
    ///
    /// [`parse_to_option`]: Self::parse_to_option
    /// [`parse_to_result`]: Self::parse_to_result
    /// [`parse_with`]: Self::parse_with
    pub fn parse(text: &str) -> Result<Self, TypeIdError> {
        let (prefix, uuid) = validate::parse_input(Some(text))?;
        Ok(Self {
            prefix: prefix.to_owned(),
            uuid,
        })
    }

    /// Parses the text form, discarding the error.
    #[must_use]
    pub fn parse_to_option(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parses the text form, keeping only the error message.
    pub fn parse_to_result(text: &str) -> Result<Self, &'static str> {
        Self::parse(text).map_err(|err| err.message())
    }

    /// Parses the text form and hands the outcome to one of two handlers.
    ///
    /// ```
    /// use typeid::TypeId;
    ///
    /// let shown = TypeId::parse_with("?_01h455vb4pex5vsknk084sn02q", |id| id.to_string(), str::to_owned);
    /// assert_eq!(shown, "illegal character in prefix, must be one of [a-z_]");
    /// ```
    pub fn parse_with<T>(
        text: &str,
        on_ok: impl FnOnce(Self) -> T,
        on_err: impl FnOnce(&'static str) -> T,
    ) -> T {
        match Self::parse(text) {
            Ok(id) => on_ok(id),
            Err(err) => on_err(err.message()),
        }
    }

    /// Returns the prefix; empty when there is none.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true unless the prefix is empty.
    #[must_use]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Returns the UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the 26-character suffix alone.
    #[must_use]
    pub fn suffix(&self) -> String {
        codec::encode_uuid(self.uuid)
    }

    /// Returns the embedded timestamp in Unix milliseconds for time-based
    /// UUID versions (1, 6, 7).
    ///
    /// `None` for other versions and for v1/v6 timestamps before 1970.
    #[must_use]
    pub fn timestamp_ms(&self) -> Option<u64> {
        let (msb, _) = self.uuid.as_u64_pair();

        let ticks = match self.uuid.get_version_num() {
            7 => return Some(msb >> 16),
            1 => ((msb & 0x0FFF) << 48) | (((msb >> 16) & 0xFFFF) << 32) | (msb >> 32),
            6 => ((msb >> 16) << 12) | (msb & 0x0FFF),
            _ => return None,
        };

        ticks
            .checked_sub(GREGORIAN_TO_UNIX_TICKS)
            .map(|since_epoch| since_epoch / TICKS_PER_MS)
    }

    /// Splits into prefix and UUID.
    #[must_use]
    pub fn into_parts(self) -> (String, Uuid) {
        (self.prefix, self.uuid)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (msb, lsb) = self.uuid.as_u64_pair();
        let suffix = codec::encode_bytes(msb, lsb);
        let suffix = std::str::from_utf8(&suffix).map_err(|_| fmt::Error)?;

        if self.prefix.is_empty() {
            f.write_str(suffix)
        } else {
            write!(f, "{}{}{}", self.prefix, SEPARATOR, suffix)
        }
    }
}

impl FromStr for TypeId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TypeId {
    type Error = TypeIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Uuid> for TypeId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<TypeId> for Uuid {
    fn from(id: TypeId) -> Self {
        id.uuid
    }
}

impl AsRef<Uuid> for TypeId {
    fn as_ref(&self) -> &Uuid {
        &self.uuid
    }
}

impl serde::Serialize for TypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Upper bound on the text length of any identifier.
pub const MAX_TEXT_LEN: usize = validate::PREFIX_MAX_LEN + 1 + SUFFIX_LEN;

/// 100ns ticks between 1582-10-15 (v1/v6 epoch) and 1970-01-01.
const GREGORIAN_TO_UNIX_TICKS: u64 = 0x01B2_1DD2_1381_4000;

const TICKS_PER_MS: u64 = 10_000;
