mod common;

use std::collections::BTreeMap;

use gta_gxt2::Gxt2Table;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(u32, String),
    Delete(u32),
}

fn hash() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..16, (u32::MAX - 16)..=u32::MAX, any::<u32>()]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (hash(), "[a-zA-Z0-9 é/]{0,12}").prop_map(|(h, v)| Op::Set(h, v)),
        2 => hash().prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn mutations_keep_layout_canonical(ops in prop::collection::vec(op(), 1..64)) {
        let mut table = Gxt2Table::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(hash, value) => {
                    let before = table.len();
                    let existed = model.insert(hash, value.clone()).is_some();
                    table.set(hash, &value).unwrap();

                    let stored = table.get(hash).unwrap().map(|v| v.into_owned());
                    prop_assert_eq!(stored, Some(value));
                    prop_assert_eq!(table.len(), if existed { before } else { before + 1 });
                }
                Op::Delete(hash) => {
                    let before = table.len();
                    let existed = model.remove(&hash).is_some();

                    prop_assert_eq!(table.delete(hash).unwrap(), existed);
                    prop_assert!(!table.has(hash).unwrap());
                    prop_assert_eq!(table.len(), if existed { before - 1 } else { before });
                }
            }

            let expected = common::layout(&model);
            prop_assert_eq!(table.as_bytes(), expected.as_slice());
        }

        let keys = table.keys().collect::<Vec<_>>();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys, model.keys().copied().collect::<Vec<_>>());

        let reloaded = Gxt2Table::from_bytes(table.as_bytes().to_vec()).unwrap();
        prop_assert_eq!(reloaded, table);
    }

    #[test]
    fn load_round_trips(entries in prop::collection::btree_map(any::<u32>(), "[ -~]{0,24}", 0..48)) {
        let data = common::layout(&entries);
        let table = Gxt2Table::from_bytes(data.clone()).unwrap();

        prop_assert_eq!(table.as_bytes(), data.as_slice());
        prop_assert_eq!(table.len(), entries.len());
    }

    #[test]
    fn insert_then_delete_is_identity(
        entries in prop::collection::btree_map(any::<u32>(), "[a-z]{0,8}", 0..32),
        hash in any::<u32>(),
        value in "[a-z]{0,16}",
    ) {
        prop_assume!(!entries.contains_key(&hash));

        let data = common::layout(&entries);
        let mut table = Gxt2Table::from_bytes(data.clone()).unwrap();

        table.set(hash, &value).unwrap();
        prop_assert!(table.delete(hash).unwrap());
        prop_assert_eq!(table.as_bytes(), data.as_slice());
    }
}
