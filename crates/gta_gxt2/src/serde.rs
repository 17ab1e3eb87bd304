use std::fmt;

use serde::{
    de::{self, MapAccess, Visitor},
    ser::{self, SerializeMap},
    Deserialize, Serialize,
};

use crate::read::Gxt2Table;

impl Serialize for Gxt2Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self.entries() {
            let (hash, value) = entry.map_err(ser::Error::custom)?;
            map.serialize_entry(&hash, &value)?;
        }
        map.end()
    }
}

struct Gxt2TableVisitor {}

impl Gxt2TableVisitor {
    fn new() -> Self {
        Gxt2TableVisitor {}
    }
}

impl<'de> Visitor<'de> for Gxt2TableVisitor {
    type Value = Gxt2Table;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a hash/string map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((hash, value)) = access.next_entry::<u32, String>()? {
            entries.push((hash, value));
        }

        Gxt2Table::from_entries(entries).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Gxt2Table {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(Gxt2TableVisitor::new())
    }
}
