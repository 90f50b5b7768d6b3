//! Outcome of reading a value back from Web Storage.

use crate::core::error::StorageError;

/// Result of a storage read.
///
/// Reads never fail hard: a missing key, an unreadable storage area and a
/// value that does not parse are distinct outcomes the caller can inspect,
/// and all of them collapse to a default with [`StoredValue::or_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue<T> {
    /// Key present and parsed.
    Present(T),
    /// Key not set.
    Absent,
    /// Key set but the value could not be parsed.
    Corrupt(String),
    /// Storage area could not be read at all.
    Unreadable(StorageError),
}

impl<T> StoredValue<T> {
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// The stored value, or `T::default()` for every other outcome.
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.present().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_collapses_failures() {
        assert_eq!(StoredValue::Present(3).or_default(), 3);
        assert_eq!(StoredValue::<u32>::Absent.or_default(), 0);
        assert_eq!(StoredValue::<u32>::Corrupt("bad".into()).or_default(), 0);
        assert_eq!(
            StoredValue::<u32>::Unreadable(StorageError::Unavailable).or_default(),
            0
        );
    }
}
