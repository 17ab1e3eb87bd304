#![allow(dead_code)]

use std::collections::BTreeMap;

use gta_gxt2::joaat;

pub const FIRST_HASH: u32 = 73625899;
pub const BUMPER_LABEL: &str = "LCPD_BUMF_B3";
pub const BUMPER: &str = "Painted Bumper w/ Protectors MkI";

/// Lay out a table from scratch, independent of the library.
pub fn layout(entries: &BTreeMap<u32, String>) -> Vec<u8> {
    let directory = (entries.len() + 2) * 8;
    let mut heap = Vec::new();
    let mut slots = Vec::new();

    for (hash, value) in entries {
        slots.extend_from_slice(&hash.to_le_bytes());
        slots.extend_from_slice(&((directory + heap.len()) as u32).to_le_bytes());
        heap.extend_from_slice(value.as_bytes());
        heap.push(0);
    }

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"2TXG");
    buffer.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    buffer.extend_from_slice(&slots);
    buffer.extend_from_slice(b"2TXG");
    buffer.extend_from_slice(&((directory + heap.len()) as u32).to_le_bytes());
    buffer.extend_from_slice(&heap);
    buffer
}

/// A 259 entry table of vehicle mod labels.
///
/// The bumper description is stored under both [`FIRST_HASH`], the lowest hash in the table, and the hash of
/// [`BUMPER_LABEL`].
pub fn global_entries() -> BTreeMap<u32, String> {
    let mut entries = BTreeMap::new();
    entries.insert(FIRST_HASH, BUMPER.to_string());
    entries.insert(joaat(BUMPER_LABEL), BUMPER.to_string());

    (0..)
        .map(|i| format!("LCPD_MOD_{:03}", i))
        .filter(|label| joaat(label) > FIRST_HASH)
        .take(257)
        .enumerate()
        .for_each(|(i, label)| {
            entries.insert(joaat(&label), format!("Mod Kit {} ({})", i, label));
        });

    entries
}

pub fn global() -> Vec<u8> {
    layout(&global_entries())
}
