//! Types for reading GXT2 tables
//!

use binrw::BinRead;
use byteorder::{ByteOrder, LittleEndian};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
    io::{Cursor, Read},
    ops::Range,
};
use tracing::trace;

use crate::{
    error::{Error, FormatError, Result},
    hash::IntoHash,
    iter::{Entries, Keys, Values},
    types::{Gxt2Header, Gxt2Trailer, Slot, EMPTY_TABLE, SLOT_SIZE},
};

/// A GXT2 string table
///
/// The table owns a single buffer laid out exactly as the file on disk. Queries read straight from it and every
/// mutation builds a complete replacement before swapping it in, so the bytes returned by [`Gxt2Table::as_bytes`]
/// are always a valid table.
///
/// ```no_run
/// fn list_entries(path: &str) -> gta_gxt2::error::Result<()> {
///     let gxt2 = gta_gxt2::Gxt2Table::read(std::fs::File::open(path)?)?;
///
///     for entry in gxt2.entries() {
///         let (hash, value) = entry?;
///         println!("{:08X}: {}", hash, value);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Gxt2Table {
    pub(crate) buffer: Vec<u8>,
}

impl Debug for Gxt2Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Gxt2Table(entries: {}, bytes: {})", self.len(), self.buffer.len())
    }
}

impl Default for Gxt2Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Gxt2Table {
    /// Create a table without any entries.
    pub fn new() -> Gxt2Table {
        Gxt2Table {
            buffer: EMPTY_TABLE.to_vec(),
        }
    }

    /// Take ownership of `buffer` after checking it is a valid table.
    pub fn from_bytes(buffer: Vec<u8>) -> Result<Gxt2Table> {
        validate(&buffer)?;
        Ok(Gxt2Table { buffer })
    }

    /// Read a whole GXT2 table from `reader`.
    pub fn read<R: Read>(mut reader: R) -> Result<Gxt2Table> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_bytes(buffer)
    }

    /// Number of entries contained in this table.
    pub fn len(&self) -> usize {
        LittleEndian::read_u32(&self.buffer[4..8]) as usize
    }

    /// Whether this table contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The table as it would be written to disk
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Unwrap and return the table bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Whether an entry with this exact hash exists
    pub fn contains_hash(&self, hash: u32) -> bool {
        self.find(hash).is_ok()
    }

    /// Check if a key exists, hashing it first if it's a label.
    pub fn has(&self, key: impl IntoHash) -> Result<bool> {
        Ok(self.contains_hash(key.into_hash()?))
    }

    /// Get the description stored for a key.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn get(&self, key: impl IntoHash) -> Result<Option<Cow<'_, str>>> {
        Ok(self.get_bytes(key)?.map(String::from_utf8_lossy))
    }

    /// Get the raw bytes stored for a key, without the null terminator.
    pub fn get_bytes(&self, key: impl IntoHash) -> Result<Option<&[u8]>> {
        match self.find(key.into_hash()?) {
            Ok(index) => self.string_at(index).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Get the hash of the entry at `index`.
    ///
    /// Negative indices count back from the end, `-1` being the last entry.
    pub fn key_at(&self, index: isize) -> Option<u32> {
        self.resolve_index(index)
            .map(|slot| Slot::decode(&self.buffer, slot).hash)
    }

    /// Get the description of the entry at `index`.
    ///
    /// Negative indices count back from the end, `-1` being the last entry.
    pub fn at(&self, index: isize) -> Result<Option<Cow<'_, str>>> {
        self.resolve_index(index)
            .map(|slot| self.string_at(slot).map(String::from_utf8_lossy))
            .transpose()
    }

    /// Up to `amount.abs()` descriptions from the start of the table.
    pub fn first(&self, amount: isize) -> Result<Vec<Cow<'_, str>>> {
        self.values().take(self.clamp(amount)).collect()
    }

    /// Up to `amount.abs()` hashes from the start of the table.
    pub fn first_keys(&self, amount: isize) -> Vec<u32> {
        self.keys().take(self.clamp(amount)).collect()
    }

    /// Up to `amount.abs()` descriptions from the end of the table, in table order.
    pub fn last(&self, amount: isize) -> Result<Vec<Cow<'_, str>>> {
        self.values()
            .skip(self.len() - self.clamp(amount))
            .collect()
    }

    /// Up to `amount.abs()` hashes from the end of the table, in table order.
    pub fn last_keys(&self, amount: isize) -> Vec<u32> {
        self.keys().skip(self.len() - self.clamp(amount)).collect()
    }

    /// Iterate hashes and descriptions in ascending hash order.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(self)
    }

    /// Iterate hashes in ascending order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self)
    }

    /// Iterate descriptions in ascending hash order.
    pub fn values(&self) -> Values<'_> {
        Values::new(self)
    }

    /// Call `f` with `(description, hash, table)` for every entry, in ascending hash order.
    pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(Cow<'_, str>, u32, &Gxt2Table),
    {
        for entry in self.entries() {
            let (hash, value) = entry?;
            f(value, hash, self);
        }
        Ok(())
    }

    /// Binary search the directory.
    ///
    /// Returns the slot holding `hash`, or the slot it would have to be inserted at. Slots are 1 based since the
    /// header takes up slot 0.
    pub(crate) fn find(&self, hash: u32) -> core::result::Result<usize, usize> {
        let (mut low, mut high) = (0, self.len());
        while low < high {
            let mid = low + (high - low) / 2;
            let current = Slot::decode(&self.buffer, mid + 1).hash;
            if current < hash {
                low = mid + 1;
            } else if current > hash {
                high = mid;
            } else {
                return Ok(mid + 1);
            }
        }
        Err(low + 1)
    }

    /// Position of the null terminator of the string starting at `start`
    pub(crate) fn terminator(&self, start: usize) -> Result<usize> {
        self.buffer[start..]
            .iter()
            .position(|&b| b == 0)
            .map(|p| start + p)
            .ok_or(Error::CorruptEntry { offset: start })
    }

    /// String bytes for the entry in slot `index`
    pub(crate) fn string_at(&self, index: usize) -> Result<&[u8]> {
        let start = Slot::decode(&self.buffer, index).offset as usize;
        let end = self.terminator(start)?;
        Ok(&self.buffer[start..end])
    }

    /// Bytes owned by the entry in slot `index`, terminator included
    ///
    /// The terminator has to come before the string of the next slot, or the trailer for the last one.
    pub(crate) fn span(&self, index: usize) -> Result<Range<usize>> {
        let start = Slot::decode(&self.buffer, index).offset as usize;
        let end = self.terminator(start)? + 1;
        if end > Slot::decode(&self.buffer, index + 1).offset as usize {
            return Err(Error::CorruptEntry { offset: start });
        }
        Ok(start..end)
    }

    fn resolve_index(&self, index: isize) -> Option<usize> {
        let len = self.len();
        let index = if index < 0 {
            len.checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        (index < len).then_some(index + 1)
    }

    fn clamp(&self, amount: isize) -> usize {
        amount.unsigned_abs().min(self.len())
    }
}

impl TryFrom<Vec<u8>> for Gxt2Table {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Gxt2Table::from_bytes(value)
    }
}

impl TryFrom<&[u8]> for Gxt2Table {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Gxt2Table::from_bytes(value.to_vec())
    }
}

impl AsRef<[u8]> for Gxt2Table {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl<'a> IntoIterator for &'a Gxt2Table {
    type Item = Result<(u32, Cow<'a, str>)>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

fn validate(buffer: &[u8]) -> core::result::Result<(), FormatError> {
    let mut cursor = Cursor::new(buffer);

    let header = Gxt2Header::read(&mut cursor).map_err(|e| match e {
        binrw::Error::BadMagic { .. } => FormatError::InvalidMagic,
        _ => FormatError::Truncated,
    })?;
    let count = header.count as usize;

    let trailer_at = count
        .checked_add(1)
        .and_then(|slots| slots.checked_mul(SLOT_SIZE))
        .ok_or(FormatError::Truncated)?;
    cursor.set_position(trailer_at as u64);

    let trailer = Gxt2Trailer::read(&mut cursor).map_err(|e| match e {
        binrw::Error::BadMagic { .. } => FormatError::InvalidTrailerMagic,
        _ => FormatError::Truncated,
    })?;

    if trailer.length as usize != buffer.len() {
        return Err(FormatError::TrailerLengthMismatch {
            expected: trailer.length,
            actual: buffer.len(),
        });
    }

    trace!(count, length = buffer.len(), "validating directory");

    let mut floor = trailer_at + SLOT_SIZE;
    let mut previous: Option<u32> = None;
    for index in 1..=count {
        let slot = Slot::decode(buffer, index);

        if previous.is_some_and(|hash| slot.hash <= hash) {
            return Err(FormatError::UnsortedDirectory { slot: index });
        }

        let offset = slot.offset as usize;
        if offset < floor || offset > buffer.len() {
            return Err(FormatError::OffsetOutOfBounds {
                slot: index,
                offset: slot.offset,
            });
        }

        previous = Some(slot.hash);
        floor = offset;
    }

    Ok(())
}
