//! Iterators over the entries of a GXT2 table
//!
//! All iterators walk the directory in ascending hash order and borrow the table, so it can't be modified while
//! one is alive. Each call to [`Gxt2Table::entries`] and friends starts a fresh pass over the current buffer.

use std::{borrow::Cow, iter::FusedIterator, ops::Range};

use crate::{error::Result, read::Gxt2Table, types::Slot};

fn slots(table: &Gxt2Table) -> Range<usize> {
    1..table.len() + 1
}

/// Iterator over `(hash, description)` pairs
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    table: &'a Gxt2Table,
    slots: Range<usize>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(table: &'a Gxt2Table) -> Self {
        Entries {
            table,
            slots: slots(table),
        }
    }

    fn entry(&self, index: usize) -> Result<(u32, Cow<'a, str>)> {
        let hash = Slot::decode(&self.table.buffer, index).hash;
        let value = String::from_utf8_lossy(self.table.string_at(index)?);
        Ok((hash, value))
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<(u32, Cow<'a, str>)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|index| self.entry(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth(n).map(|index| self.entry(index))
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|index| self.entry(index))
    }
}

impl ExactSizeIterator for Entries<'_> {}
impl FusedIterator for Entries<'_> {}

/// Iterator over hashes
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    table: &'a Gxt2Table,
    slots: Range<usize>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(table: &'a Gxt2Table) -> Self {
        Keys {
            table,
            slots: slots(table),
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .next()
            .map(|index| Slot::decode(&self.table.buffer, index).hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots
            .nth(n)
            .map(|index| Slot::decode(&self.table.buffer, index).hash)
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots
            .next_back()
            .map(|index| Slot::decode(&self.table.buffer, index).hash)
    }
}

impl ExactSizeIterator for Keys<'_> {}
impl FusedIterator for Keys<'_> {}

/// Iterator over descriptions
#[derive(Debug, Clone)]
pub struct Values<'a> {
    table: &'a Gxt2Table,
    slots: Range<usize>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(table: &'a Gxt2Table) -> Self {
        Values {
            table,
            slots: slots(table),
        }
    }

    fn value(&self, index: usize) -> Result<Cow<'a, str>> {
        self.table
            .string_at(index)
            .map(String::from_utf8_lossy)
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = Result<Cow<'a, str>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|index| self.value(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth(n).map(|index| self.value(index))
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|index| self.value(index))
    }
}

impl ExactSizeIterator for Values<'_> {}
impl FusedIterator for Values<'_> {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::error::Result;
    use crate::read::Gxt2Table;

    fn table() -> Result<Gxt2Table> {
        Gxt2Table::from_entries([("c", "three"), ("a", "one"), ("b", "two")])
    }

    #[test]
    fn keys_ascend() -> Result<()> {
        let table = table()?;
        let keys = table.keys().collect::<Vec<_>>();

        assert_eq!(keys.len(), 3);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.keys().rev().collect::<Vec<_>>(), {
            let mut reversed = keys.clone();
            reversed.reverse();
            reversed
        });

        Ok(())
    }

    #[test]
    fn entries_match_keys_and_values() -> Result<()> {
        let table = table()?;
        let entries = table.entries().collect::<Result<Vec<_>>>()?;
        let values = table.values().collect::<Result<Vec<_>>>()?;

        assert_eq!(table.entries().len(), 3);
        assert_eq!(
            entries.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            table.keys().collect::<Vec<_>>()
        );
        assert_eq!(
            entries.into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
            values
        );

        Ok(())
    }

    #[test]
    fn iteration_restarts() -> Result<()> {
        let table = table()?;
        let mut first = table.keys();
        first.next();

        assert_eq!(first.len(), 2);
        assert_eq!(table.keys().len(), 3);
        assert_eq!((&table).into_iter().count(), 3);

        Ok(())
    }

    #[test]
    fn empty_table_yields_nothing() {
        let table = Gxt2Table::new();
        assert!(table.entries().next().is_none());
        assert!(table.values().next().is_none());
        assert!(table.keys().next_back().is_none());
    }
}
