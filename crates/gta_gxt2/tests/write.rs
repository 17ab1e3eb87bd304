mod common;

use gta_gxt2::error::Result;
use gta_gxt2::types::EMPTY_TABLE;
use gta_gxt2::{joaat, Gxt2Table};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

use common::{BUMPER, BUMPER_LABEL, FIRST_HASH};

#[traced_test]
#[test]
fn entry_can_be_changed() -> Result<()> {
    let mut gxt2 = Gxt2Table::from_bytes(common::global())?;
    let entry = "Painted Bumper w/o Protectors";
    let previous_length = gxt2.as_bytes().len();

    gxt2.set(FIRST_HASH, entry)?;

    assert_eq!(gxt2.get(FIRST_HASH)?.as_deref(), Some(entry));
    assert_eq!(gxt2.len(), 259);
    assert_eq!(
        gxt2.as_bytes().len() as isize - previous_length as isize,
        entry.len() as isize - BUMPER.len() as isize
    );
    assert_eq!(gxt2.get(BUMPER_LABEL)?.as_deref(), Some(BUMPER));

    let mut entries = common::global_entries();
    entries.insert(FIRST_HASH, entry.to_string());
    assert_eq!(gxt2.as_bytes(), common::layout(&entries).as_slice());

    Ok(())
}

#[traced_test]
#[test]
fn entry_can_be_changed_by_label() -> Result<()> {
    let mut gxt2 = Gxt2Table::from_bytes(common::global())?;
    let entry = "Painted Bumper w/o Protectors";
    let previous_length = gxt2.as_bytes().len();

    gxt2.set(BUMPER_LABEL, entry)?;

    assert_eq!(gxt2.get(BUMPER_LABEL)?.as_deref(), Some(entry));
    assert_eq!(gxt2.len(), 259);
    assert_eq!(
        gxt2.as_bytes().len() as isize - previous_length as isize,
        entry.len() as isize - BUMPER.len() as isize
    );
    assert_eq!(gxt2.get(FIRST_HASH)?.as_deref(), Some(BUMPER));

    let mut entries = common::global_entries();
    entries.insert(joaat(BUMPER_LABEL), entry.to_string());
    assert_eq!(gxt2.as_bytes(), common::layout(&entries).as_slice());

    Ok(())
}

#[traced_test]
#[test]
fn insert_then_delete_restores_table() -> Result<()> {
    let original = common::global();
    let mut gxt2 = Gxt2Table::from_bytes(original.clone())?;

    for key in ["BRAND_NEW_LABEL", "AAA", "ZZZ_LAST"] {
        assert!(!gxt2.has(key)?);
        gxt2.set(key, "temporary")?;
        assert_eq!(gxt2.len(), 260);
        assert_eq!(gxt2.get(key)?.as_deref(), Some("temporary"));

        assert!(gxt2.delete(key)?);
        assert!(!gxt2.has(key)?);
        assert_eq!(gxt2.as_bytes(), original.as_slice());
    }

    for hash in [0u32, FIRST_HASH - 1, u32::MAX] {
        gxt2.set(hash, "edge")?;
        assert!(gxt2.delete(hash)?);
        assert_eq!(gxt2.as_bytes(), original.as_slice());
    }

    Ok(())
}

#[traced_test]
#[test]
fn delete_missing_is_a_miss() -> Result<()> {
    let original = common::global();
    let mut gxt2 = Gxt2Table::from_bytes(original.clone())?;

    assert!(!gxt2.delete("NOT_IN_THE_TABLE")?);
    assert_eq!(gxt2.as_bytes(), original.as_slice());

    assert!(gxt2.delete(BUMPER_LABEL)?);
    assert_eq!(gxt2.len(), 258);
    assert!(!gxt2.has(BUMPER_LABEL)?);
    assert!(gxt2.has(FIRST_HASH)?);

    Ok(())
}

#[traced_test]
#[test]
fn clear_is_always_minimal() -> Result<()> {
    let mut gxt2 = Gxt2Table::from_bytes(common::global())?;
    gxt2.clear();
    assert_eq!(gxt2.as_bytes(), &EMPTY_TABLE[..]);

    gxt2.set("a", "b")?;
    gxt2.clear();
    assert_eq!(gxt2.into_inner(), EMPTY_TABLE.to_vec());

    Ok(())
}

#[traced_test]
#[test]
fn concat_into_empty_copies_everything() -> Result<()> {
    let global = Gxt2Table::from_bytes(common::global())?;
    let mut gxt2 = Gxt2Table::new();

    gxt2.concat([&global])?;

    assert_eq!(gxt2, global);

    Ok(())
}
