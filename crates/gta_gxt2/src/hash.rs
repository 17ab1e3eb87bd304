//! Jenkins one-at-a-time hashing used to key GXT2 entries.

use crate::error::{Error, Result};

/// Hash a label the way the game does.
///
/// The label is lowercased first so `"LCPD_BUMF_B3"` and `"lcpd_bumf_b3"` address the same entry.
///
/// ```
/// assert_eq!(gta_gxt2::joaat("a"), 0xCA2E9442);
/// assert_eq!(gta_gxt2::joaat("A"), 0xCA2E9442);
/// ```
pub fn joaat(key: &str) -> u32 {
    let mut hash = key
        .to_lowercase()
        .encode_utf16()
        .fold(0u32, |hash, unit| {
            let hash = hash.wrapping_add(u32::from(unit));
            let hash = hash.wrapping_add(hash << 10);
            hash ^ (hash >> 6)
        });

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

/// Anything that can be resolved to an entry hash.
///
/// Strings are hashed with [`joaat`], integers are used as the hash directly and have to fit in a `u32`.
pub trait IntoHash {
    /// Resolve to the 32 bit hash, failing with [`Error::HashOutOfRange`] for numbers that don't fit.
    fn into_hash(self) -> Result<u32>;
}

impl IntoHash for u32 {
    fn into_hash(self) -> Result<u32> {
        Ok(self)
    }
}

impl IntoHash for &str {
    fn into_hash(self) -> Result<u32> {
        Ok(joaat(self))
    }
}

impl IntoHash for &String {
    fn into_hash(self) -> Result<u32> {
        Ok(joaat(self))
    }
}

impl IntoHash for String {
    fn into_hash(self) -> Result<u32> {
        Ok(joaat(&self))
    }
}

macro_rules! impl_into_hash {
    ($($ty:ty),*) => {
        $(
            impl IntoHash for $ty {
                fn into_hash(self) -> Result<u32> {
                    u32::try_from(self).map_err(|_| Error::HashOutOfRange(self.to_string()))
                }
            }
        )*
    };
}

impl_into_hash!(u8, u16, u64, u128, usize, i8, i16, i32, i64, i128, isize);
