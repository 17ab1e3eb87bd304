//! Reading and writing scrambled FXT data
//!

use indexmap::IndexMap;
use std::io::{Read, Write};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    types::FxtTable,
};

const HEADER_KEY: [u32; 8] = [0x63, 0xC6, 0x8C, 0x18, 0x30, 0x60, 0xC0, 0x7F];
const MIN_LENGTH: usize = HEADER_KEY.len() + 3;

fn header_word(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn unscramble(data: &mut [u8]) -> Result<()> {
    if data.len() < MIN_LENGTH {
        return Err(Error::TooShort(data.len()));
    }

    for (at, key) in HEADER_KEY.iter().enumerate() {
        let word = header_word(data, at).wrapping_sub(*key);
        data[at..at + 4].copy_from_slice(&word.to_le_bytes());
    }

    data.iter_mut().for_each(|b| *b = b.wrapping_sub(1));
    Ok(())
}

fn scramble(data: &mut [u8]) -> Result<()> {
    if data.len() < MIN_LENGTH {
        return Err(Error::TooShort(data.len()));
    }

    data.iter_mut().for_each(|b| *b = b.wrapping_add(1));

    for (at, key) in HEADER_KEY.iter().enumerate().rev() {
        let word = header_word(data, at).wrapping_add(*key);
        data[at..at + 4].copy_from_slice(&word.to_le_bytes());
    }

    Ok(())
}

fn text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let std::borrow::Cow::Owned(_) = text {
        warn!("replaced invalid utf-8 in {:?}", text);
    }
    text.into_owned()
}

/// Split plain FXT text into its `[key]value` entries
fn parse(data: &[u8]) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();

    for segment in data.split(|&b| b == 0) {
        let key = segment.iter().position(|&b| b == b'[').and_then(|open| {
            segment[open + 1..]
                .iter()
                .position(|&b| b == b']')
                .map(|close| (open + 1, open + 1 + close))
        });

        let (name, value) = match key {
            Some((start, end)) => (&segment[start..end], &segment[end + 1..]),
            None => (&segment[..0], segment),
        };

        entries.insert(text(name), text(value));
    }

    entries
}

impl FxtTable {
    /// Decode scrambled FXT data.
    pub fn decode(data: &[u8]) -> Result<FxtTable> {
        let mut plain = data.to_vec();
        unscramble(&mut plain)?;

        let entries = parse(&plain);
        debug!(entries = entries.len(), "decoded fxt");

        Ok(FxtTable::new(entries))
    }

    /// Read and decode a whole FXT file from `reader`.
    pub fn read<R: Read>(mut reader: R) -> Result<FxtTable> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::decode(&data)
    }

    /// Encode the table back into its scrambled form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                data.push(0);
            }
            data.push(b'[');
            data.extend_from_slice(key.as_bytes());
            data.push(b']');
            data.extend_from_slice(value.as_bytes());
        }

        scramble(&mut data)?;
        Ok(data)
    }

    /// Encode the table and write it to `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.encode()?)?;
        Ok(())
    }
}
