//! Macros for defining identifier types with a fixed prefix.

/// Defines a typed identifier with a fixed prefix.
///
/// This generates a `Copy` newtype around a UUID with:
/// - a `PREFIX` constant, checked against the prefix grammar at compile time
/// - `new()` to generate a fresh UUIDv7-based ID
/// - `parse()` that rejects valid identifiers carrying another prefix
/// - `Display`, `FromStr`, `Serialize` and `Deserialize`
/// - conversions to and from [`TypeId`](crate::TypeId)
///
/// # Example
///
/// ```
/// typeid::define_typeid!(UserId, "user");
///
/// let id = UserId::new();
/// assert!(id.to_string().starts_with("user_"));
///
/// let parsed: UserId = "user_01h455vb4pex5vsknk084sn02q".parse().unwrap();
/// assert!("team_01h455vb4pex5vsknk084sn02q".parse::<UserId>().is_err());
/// # let _ = parsed;
/// ```
#[macro_export]
macro_rules! define_typeid {
    ($name:ident, $prefix:literal) => {
        /// A typed identifier with a fixed prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::__private::Uuid);

        const _: () = assert!(
            $crate::validate::is_canonical_prefix($prefix),
            "invalid typeid prefix"
        );

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID with a fresh UUIDv7.
            #[must_use]
            pub fn new() -> Self {
                use $crate::UuidSource as _;
                Self($crate::UuidV7Source.next_uuid())
            }

            /// Creates a new ID, taking the UUID from `source`.
            #[must_use]
            pub fn new_with<S>(source: &S) -> Self
            where
                S: $crate::UuidSource + ?Sized,
            {
                Self(source.next_uuid())
            }

            /// Creates an ID from a raw UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::__private::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::__private::Uuid {
                self.0
            }

            /// Parses an ID from its text form, which must carry `PREFIX`.
            pub fn parse(s: &str) -> Result<Self, $crate::TypedIdError> {
                let (prefix, uuid) = $crate::validate::parse_input(Some(s))?;

                if prefix != Self::PREFIX {
                    return Err($crate::TypedIdError::PrefixMismatch {
                        expected: Self::PREFIX,
                        actual: prefix.to_string(),
                    });
                }

                Ok(Self(uuid))
            }

            /// Converts into an untyped identifier.
            #[must_use]
            pub fn to_typeid(&self) -> $crate::TypeId {
                $crate::TypeId::from(*self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{}{}{}",
                    Self::PREFIX,
                    $crate::validate::SEPARATOR,
                    $crate::codec::encode_uuid(self.0)
                )
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TypedIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::TypeId {
            fn from(id: $name) -> Self {
                $crate::TypeId::from_static_prefix($name::PREFIX, id.0)
            }
        }

        impl TryFrom<$crate::TypeId> for $name {
            type Error = $crate::TypedIdError;

            fn try_from(id: $crate::TypeId) -> Result<Self, Self::Error> {
                if id.prefix() != $name::PREFIX {
                    return Err($crate::TypedIdError::PrefixMismatch {
                        expected: $name::PREFIX,
                        actual: id.prefix().to_string(),
                    });
                }
                Ok(Self(id.uuid()))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::__private::Uuid> for $name {
            fn as_ref(&self) -> &$crate::__private::Uuid {
                &self.0
            }
        }
    };
}
