//! This library handles reading from and editing **GXT2** string tables used by *Grand Theft Auto V*.
//!
//! # GXT2 Format Documentation
//!
//! A GXT2 table maps 32 bit label hashes to null terminated strings. It is a header, a directory of fixed size
//! slots sorted by hash, a trailer slot and a heap of strings, all packed into one buffer. GXT2 files are
//! typically identified with the `.gxt2` extension.
//!
//! ## File Structure
//!
//! | Offset (bytes)      | Field                  | Description                                                |
//! |---------------------|------------------------|------------------------------------------------------------|
//! | 0x0000              | Magic number           | 4 bytes: "2TXG"                                            |
//! | 0x0004              | Entry Count            | 4 bytes: Number of entries (N) in the directory            |
//! | 0x0008              | Directory              | N * 8 bytes: Slots sorted ascending by hash                |
//! | 0x0008 + N * 8      | Trailer Magic          | 4 bytes: "2TXG"                                            |
//! | 0x000C + N * 8      | Table Length           | 4 bytes: Length of the whole table                         |
//! | 0x0010 + N * 8      | Heap                   | Null terminated strings in directory order                 |
//!
//! ### Directory
//!
//! Each slot in the directory has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Hash                   | 4 bytes: [`joaat`] hash of the entry label              |
//! | 0x0004         | Offset                 | 4 bytes: Absolute position of the string in the heap    |
//!
//! - **Hash**: Hashes are unique and strictly ascending, so lookups can binary search the directory.
//! - **Offset**: Offsets are non-decreasing and partition the heap exactly. The trailer's length field takes the
//!   place of the offset of a slot N + 1, marking the end of the last string.
//!
//! ### Heap
//!
//! The heap holds one UTF-8 string per slot followed by a single `0x00`, in the same order as the directory.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.gxt2`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Empty Table**: 16 bytes, the header with a count of 0 directly followed by the trailer
//!

pub mod error;
pub mod hash;
pub mod iter;
pub mod read;
#[cfg(feature = "serde")]
mod serde;
pub mod types;
pub mod write;

pub use hash::{joaat, IntoHash};
pub use read::Gxt2Table;
