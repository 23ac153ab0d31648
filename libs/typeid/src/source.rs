//! Sources of 128-bit values for newly generated identifiers.

use uuid::Uuid;

/// Supplies fresh values for [`TypeId::generate_with`](crate::TypeId::generate_with).
///
/// Implementations must be callable from many threads at once. Values are
/// expected to follow UUIDv7 layout (48-bit millisecond timestamp, version
/// and variant bits, random rest) so that generated identifiers sort by
/// creation time.
pub trait UuidSource: Send + Sync {
    /// Returns the next value.
    fn next_uuid(&self) -> Uuid;
}

/// The default source, backed by the `uuid` crate's UUIDv7 generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Source;

impl UuidSource for UuidV7Source {
    fn next_uuid(&self) -> Uuid {
        Uuid::now_v7()
    }
}

impl<S: UuidSource + ?Sized> UuidSource for &S {
    fn next_uuid(&self) -> Uuid {
        (**self).next_uuid()
    }
}

impl<S: UuidSource + ?Sized> UuidSource for std::sync::Arc<S> {
    fn next_uuid(&self) -> Uuid {
        (**self).next_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v7_source_version() {
        let uuid = UuidV7Source.next_uuid();
        assert_eq!(uuid.get_version_num(), 7);
    }

    #[test]
    fn test_v7_source_sortable() {
        let first = UuidV7Source.next_uuid();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = UuidV7Source.next_uuid();
        assert!(first < second);
    }

    #[test]
    fn test_source_through_arc() {
        let source: std::sync::Arc<dyn UuidSource> = std::sync::Arc::new(UuidV7Source);
        assert_eq!(source.next_uuid().get_version_num(), 7);
    }
}
