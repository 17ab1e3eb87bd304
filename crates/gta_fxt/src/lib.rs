//! # FXT Format Documentation
//!
//! This crate provides utilities to read and write the **FXT** text format, a flat list of key/value pairs that
//! is scrambled at rest. FXT files are typically identified with the `.fxt` extension.
//!
//! ## File Structure
//!
//! Once unscrambled, a FXT file is a list of entries separated by a single `0x00`. Each entry has the form
//! `[KEY]Value`: the key runs from the first `[` to the first `]` after it, the value is everything up to the
//! next separator.
//!
//! ### Scrambling
//!
//! Two transforms are applied on top of the plain text, undone in this order when reading:
//!
//! - **Header**: for each byte offset `i` from 0 to 7, the little-endian `u32` starting at `i` has
//!   `[0x63, 0xC6, 0x8C, 0x18, 0x30, 0x60, 0xC0, 0x7F][i]` subtracted, the writes overlapping each other.
//! - **Body**: every byte has 1 subtracted.
//!
//! Both use wrapping arithmetic. Writing applies the exact inverse so that reading then writing a file returns
//! the original bytes.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.fxt`
//! - **Minimum Size**: 11 bytes, the last header word ends at byte 10
//!

pub mod error;
pub mod read;
pub mod types;

pub use types::FxtTable;
