use derive_more::derive::{Constructor, Deref, IntoIterator};
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An insertion ordered FXT table
///
/// Read access goes straight through to the underlying map.
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FxtTable(IndexMap<String, String>);

impl FxtTable {
    /// Set a key to a value, keeping the key's position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Remove a key, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.0.shift_remove(key).is_some()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FxtTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
