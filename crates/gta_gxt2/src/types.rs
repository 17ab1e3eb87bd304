//! Base types for structure of a GXT2 table.

use binrw::{BinRead, BinWrite};
use byteorder::{ByteOrder, LittleEndian};

/// Tag found at the start of every table and again in the trailer
pub const MAGIC: [u8; 4] = *b"2TXG";

/// Width of the header, each directory slot and the trailer
pub const SLOT_SIZE: usize = 8;

/// The smallest valid table: a header with no entries followed by the trailer
#[rustfmt::skip]
pub const EMPTY_TABLE: [u8; 16] = [
    b'2', b'T', b'X', b'G',
    0x00, 0x00, 0x00, 0x00,
    b'2', b'T', b'X', b'G',
    0x10, 0x00, 0x00, 0x00,
];

/// GXT2 header
///
/// Always starts with "2TXG" followed by the number of entries in the directory.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(magic = b"2TXG", little)]
pub struct Gxt2Header {
    /// The number of entries stored in the table
    pub count: u32,
}

/// GXT2 trailer
///
/// Occupies the slot after the last entry. It repeats the magic and records the total table length,
/// which doubles as the end of the last string in the heap.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(magic = b"2TXG", little)]
pub struct Gxt2Trailer {
    /// Length of the whole table in bytes
    pub length: u32,
}

/// A directory entry
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Slot {
    /// Hash of the entry label
    pub hash: u32,

    /// Absolute position of the entry string
    pub offset: u32,
}

impl Slot {
    /// Byte position of the slot at `index`. Index 0 is the header.
    pub const fn position(index: usize) -> usize {
        index * SLOT_SIZE
    }

    /// Decode the slot at `index` straight from a table buffer.
    ///
    /// Callers must make sure the slot lies within `buffer`.
    pub(crate) fn decode(buffer: &[u8], index: usize) -> Slot {
        let at = Self::position(index);
        Slot {
            hash: LittleEndian::read_u32(&buffer[at..at + 4]),
            offset: LittleEndian::read_u32(&buffer[at + 4..at + 8]),
        }
    }
}
