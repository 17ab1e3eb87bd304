//! Editing GXT2 tables
//!
//! Every mutation follows the same shape: splice the unchanged parts of the current buffer together with the new
//! slot or string into a fresh buffer, patch the offsets of every slot behind the change point in a single pass,
//! then swap the new buffer in. A failure at any point leaves the table untouched.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::{debug, instrument};

use crate::{
    error::{Error, FormatError, Result},
    hash::IntoHash,
    read::Gxt2Table,
    types::{Slot, EMPTY_TABLE, MAGIC, SLOT_SIZE},
};

impl Gxt2Table {
    /// Build a table from `(key, description)` pairs.
    ///
    /// Later pairs win when two keys hash to the same value.
    pub fn from_entries<K, V, I>(entries: I) -> Result<Gxt2Table>
    where
        K: IntoHash,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut sorted = BTreeMap::new();
        for (key, value) in entries {
            let value = value.as_ref().as_bytes();
            if value.contains(&0) {
                return Err(Error::InteriorNul);
            }
            sorted.insert(key.into_hash()?, value.to_vec());
        }

        let directory = (sorted.len() + 2) * SLOT_SIZE;
        let heap = sorted.values().map(|v| v.len() + 1).sum::<usize>();
        let length = to_offset(directory + heap, directory + heap)?;

        let mut buffer = Vec::with_capacity(directory + heap);
        buffer.extend_from_slice(&MAGIC);
        buffer.write_u32::<LittleEndian>(to_offset(sorted.len(), length as usize)?)?;

        let mut offset = directory;
        for (hash, value) in &sorted {
            buffer.write_u32::<LittleEndian>(*hash)?;
            buffer.write_u32::<LittleEndian>(to_offset(offset, length as usize)?)?;
            offset += value.len() + 1;
        }

        buffer.extend_from_slice(&MAGIC);
        buffer.write_u32::<LittleEndian>(length)?;

        for value in sorted.values() {
            buffer.extend_from_slice(value);
            buffer.push(0);
        }

        Ok(Gxt2Table { buffer })
    }

    /// Set the description of a key, inserting a new entry if it doesn't exist yet.
    #[instrument(skip_all, err)]
    pub fn set(&mut self, key: impl IntoHash, description: impl AsRef<str>) -> Result<&mut Self> {
        let hash = key.into_hash()?;
        let description = description.as_ref().as_bytes();
        if description.contains(&0) {
            return Err(Error::InteriorNul);
        }

        self.buffer = match self.find(hash) {
            Ok(index) => self.replaced(index, description)?,
            Err(index) => self.inserted(index, hash, description)?,
        };

        Ok(self)
    }

    /// Remove an entry, returning whether it existed.
    #[instrument(skip_all, err)]
    pub fn delete(&mut self, key: impl IntoHash) -> Result<bool> {
        let hash = key.into_hash()?;
        let Ok(index) = self.find(hash) else {
            return Ok(false);
        };

        self.buffer = self.removed(index)?;
        debug!(hash, slot = index, "deleted entry");

        Ok(true)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.buffer = EMPTY_TABLE.to_vec();
    }

    /// Copy all entries of `tables` into this one, later tables winning on conflicts.
    ///
    /// Either every entry is merged or, on error, none are.
    pub fn concat<'a, I>(&mut self, tables: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Gxt2Table>,
    {
        let mut merged = self.clone();
        for table in tables {
            for entry in table.entries() {
                let (hash, value) = entry?;
                merged.set(hash, value)?;
            }
        }

        self.buffer = merged.buffer;
        Ok(self)
    }

    /// New buffer with the string of slot `index` swapped for `description`
    fn replaced(&self, index: usize, description: &[u8]) -> Result<Vec<u8>> {
        let count = self.len();
        let Range { start, end } = self.span(index)?;
        let end = end - 1;

        let mut buffer = Vec::with_capacity(self.buffer.len() - (end - start) + description.len());
        buffer.extend_from_slice(&self.buffer[..start]);
        buffer.extend_from_slice(description);
        buffer.extend_from_slice(&self.buffer[end..]);

        let delta = description.len() as i64 - (end - start) as i64;
        shift_offsets(&mut buffer, index + 1..count + 2, delta)?;

        debug!(slot = index, delta, "updated entry");
        Ok(buffer)
    }

    /// New buffer with a slot for `hash` at `index` and its string in front of the string that slot used to own
    fn inserted(&self, index: usize, hash: u32, description: &[u8]) -> Result<Vec<u8>> {
        let count = self.len();
        let slot_at = Slot::position(index);
        let heap_at = Slot::decode(&self.buffer, index).offset as usize;
        let added = description.len() + 1;
        let length = self.buffer.len() + SLOT_SIZE + added;

        let mut buffer = Vec::with_capacity(length);
        buffer.extend_from_slice(&self.buffer[..slot_at]);
        buffer.write_u32::<LittleEndian>(hash)?;
        buffer.write_u32::<LittleEndian>(to_offset(heap_at + SLOT_SIZE, length)?)?;
        buffer.extend_from_slice(&self.buffer[slot_at..heap_at]);
        buffer.extend_from_slice(description);
        buffer.push(0);
        buffer.extend_from_slice(&self.buffer[heap_at..]);

        LittleEndian::write_u32(&mut buffer[4..8], to_offset(count + 1, length)?);

        // the directory grew for everyone, the heap only for the slots behind the new one
        shift_offsets(&mut buffer, 1..index, SLOT_SIZE as i64)?;
        shift_offsets(&mut buffer, index + 1..count + 3, (SLOT_SIZE + added) as i64)?;

        debug!(hash, slot = index, "inserted entry");
        Ok(buffer)
    }

    /// New buffer without slot `index` and its string
    fn removed(&self, index: usize) -> Result<Vec<u8>> {
        let count = self.len();
        let slot_at = Slot::position(index);
        let Range { start, end } = self.span(index)?;
        let removed = end - start;

        let mut buffer = Vec::with_capacity(self.buffer.len() - SLOT_SIZE - removed);
        buffer.extend_from_slice(&self.buffer[..slot_at]);
        buffer.extend_from_slice(&self.buffer[slot_at + SLOT_SIZE..start]);
        buffer.extend_from_slice(&self.buffer[end..]);

        LittleEndian::write_u32(&mut buffer[4..8], (count - 1) as u32);

        shift_offsets(&mut buffer, 1..index, -(SLOT_SIZE as i64))?;
        shift_offsets(&mut buffer, index..count + 1, -((SLOT_SIZE + removed) as i64))?;

        Ok(buffer)
    }
}

fn to_offset(value: usize, length: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::TableTooLarge { length })
}

/// Add `delta` to the offset of every slot in `slots`
fn shift_offsets(buffer: &mut [u8], slots: Range<usize>, delta: i64) -> Result<()> {
    let length = buffer.len();
    for index in slots {
        let at = Slot::position(index) + 4;
        let current = LittleEndian::read_u32(&buffer[at..at + 4]);
        let offset = i64::from(current) + delta;
        if offset < 0 {
            return Err(FormatError::OffsetOutOfBounds {
                slot: index,
                offset: current,
            }
            .into());
        }
        let offset = u32::try_from(offset).map_err(|_| Error::TableTooLarge { length })?;
        LittleEndian::write_u32(&mut buffer[at..at + 4], offset);
    }
    Ok(())
}
