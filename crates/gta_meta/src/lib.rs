//! # Vehicle Metadata Labels
//!
//! Vehicle descriptor files (`carcols.meta`, `carvariations.meta`, `vehicles.meta`) reference their display
//! strings by label. This crate scans those XML files for labels and keeps the ones whose hash is present in a
//! GXT2 table, giving back a readable name for each hashed entry.
//!
//! ## Scanned Elements
//!
//! | Root element                      | Label path                                    |
//! |-----------------------------------|-----------------------------------------------|
//! | `CVehicleModelInfoVarGlobal`      | `Kits/Item/visibleMods/Item/modShopLabel`     |
//! | `CVehicleModelInfo__InitDataList` | `InitDatas/Item/gameName`                     |
//!

use std::collections::BTreeMap;

use gta_gxt2::{joaat, Gxt2Table};
use quick_xml::{events::Event, Reader};
use tracing::{debug, trace};

pub mod error;

use error::Result;

/// Element paths, from the document root, whose text is a label
pub const LABEL_PATHS: [&[&str]; 2] = [
    &[
        "CVehicleModelInfoVarGlobal",
        "Kits",
        "Item",
        "visibleMods",
        "Item",
        "modShopLabel",
    ],
    &[
        "CVehicleModelInfo__InitDataList",
        "InitDatas",
        "Item",
        "gameName",
    ],
];

fn is_label(path: &[String]) -> bool {
    LABEL_PATHS.iter().any(|label| {
        label.len() == path.len() && label.iter().zip(path).all(|(a, b)| *a == b.as_str())
    })
}

/// Collect every label in `xml` whose hash is present in `table`.
///
/// Returns a map from hash to label. A label found more than once keeps a single entry.
pub fn labels_from_meta(table: &Gxt2Table, xml: &str) -> Result<BTreeMap<u32, String>> {
    let mut reader = Reader::from_str(xml);
    let mut found = BTreeMap::new();

    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                text.clear();
            }
            Event::Text(ref e) => {
                if is_label(&path) {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(_) => {
                if is_label(&path) {
                    let label = text.trim();
                    let hash = joaat(label);
                    if !label.is_empty() && table.contains_hash(hash) {
                        trace!(hash, label, "found label");
                        found.insert(hash, label.to_string());
                    }
                }
                path.pop();
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(labels = found.len(), "scanned metadata");
    Ok(found)
}

#[cfg(test)]
mod test {
    use crate::is_label;

    fn path(elements: &[&str]) -> Vec<String> {
        elements.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn label_paths() {
        assert!(is_label(&path(&[
            "CVehicleModelInfo__InitDataList",
            "InitDatas",
            "Item",
            "gameName"
        ])));
        assert!(!is_label(&path(&[
            "CVehicleModelInfo__InitDataList",
            "InitDatas",
            "Item"
        ])));
        assert!(!is_label(&path(&[
            "CVehicleModelInfoVarGlobal",
            "InitDatas",
            "Item",
            "gameName"
        ])));
        assert!(!is_label(&[]));
    }
}
