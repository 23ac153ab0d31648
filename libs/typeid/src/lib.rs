//! # typeid
//!
//! Typed, sortable identifiers: a lowercase prefix plus a 128-bit UUID.
//!
//! ## Format
//!
//! `[prefix_]suffix`, where
//!
//! - the prefix is `[a-z_]{0,63}` and neither starts nor ends with `_`
//! - the suffix is the UUID in 26 characters of lowercase base32
//!   (`0123456789abcdefghjkmnpqrstvwxyz`), first character `0`-`7`
//! - an empty prefix is written without the separator
//!
//! Examples:
//! - `user_01h455vb4pex5vsknk084sn02q`
//! - `api_key_01h455vb4pex5vsknk084sn02q`
//! - `01h455vb4pex5vsknk084sn02q`
//!
//! Every 128-bit value has exactly one encoding and every valid text decodes
//! to exactly one value, so `parse(id.to_string()) == id` always holds.
//! Generated IDs use UUIDv7 and sort by creation time.
//!
//! ```
//! use typeid::TypeId;
//!
//! let id = TypeId::generate("user")?;
//! let parsed: TypeId = id.to_string().parse()?;
//! assert_eq!(id, parsed);
//! # Ok::<(), typeid::TypeIdError>(())
//! ```

pub mod alphabet;
pub mod codec;
mod error;
mod id;
mod macros;
pub mod source;
pub mod validate;

pub use error::{TypeIdError, TypedIdError};
pub use id::{TypeId, MAX_TEXT_LEN};
pub use source::{UuidSource, UuidV7Source};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid::Uuid;
}
