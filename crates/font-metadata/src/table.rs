//! The ordered family → metadata table.

use std::{fmt, result};

use indexmap::{IndexMap, map::Entry};
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::{
    error::{Error, Result},
    types::{FontFamilyEntry, RawEntry},
};

/// Font metadata table in declaration order.
///
/// Family names are unique. Iteration always follows the order in which the
/// families were declared, which is the order generated output must keep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontTable {
    families: IndexMap<String, FontFamilyEntry>,
}

impl FontTable {
    /// Parse a table from JSON text.
    ///
    /// A family key that appears twice is rejected rather than overwritten.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: OrderedEntries = serde_json::from_str(text)?;
        Self::from_raw(entries.0)
    }

    /// Parse a table from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let entries: OrderedEntries = serde_json::from_slice(data)?;
        Self::from_raw(entries.0)
    }

    /// Build a table from entries, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = FontFamilyEntry>) -> Result<Self> {
        let mut families = IndexMap::new();
        for entry in entries {
            match families.entry(entry.family.clone()) {
                Entry::Occupied(occupied) => {
                    return Err(Error::DuplicateFamily(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(entry);
                }
            }
        }
        Ok(Self { families })
    }

    fn from_raw(raw: Vec<(String, RawEntry)>) -> Result<Self> {
        Self::from_entries(raw.into_iter().map(|(family, entry)| entry.into_entry(family)))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn get(&self, family: &str) -> Option<&FontFamilyEntry> {
        self.families.get(family)
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FontFamilyEntry> {
        self.families.values()
    }

    /// Family names in table order.
    pub fn family_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Narrow the table to the named families.
    ///
    /// The result keeps table order, not the order of `names`. Every name must
    /// exist in the table.
    pub fn select<I, S>(&self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wanted = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !self.contains(name) {
                return Err(Error::UnknownFamily(name.to_owned()));
            }
            wanted.push(name.to_owned());
        }
        Ok(self.filter(|entry| wanted.contains(&entry.family)))
    }

    /// Keep only entries matching `predicate`, in table order.
    pub fn filter(&self, mut predicate: impl FnMut(&FontFamilyEntry) -> bool) -> Self {
        let families = self
            .families
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect();
        Self { families }
    }
}

impl<'a> IntoIterator for &'a FontTable {
    type Item = &'a FontFamilyEntry;
    type IntoIter = indexmap::map::Values<'a, String, FontFamilyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.values()
    }
}

/// Map entries exactly as they appear in the document, duplicates included.
struct OrderedEntries(Vec<(String, RawEntry)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of font family names to metadata")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((family, entry)) = map.next_entry::<String, RawEntry>()? {
                    entries.push((family, entry));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Weight;

    const TABLE: &str = r#"{
        "Zilla Slab": { "weights": ["300", "400"], "styles": ["normal", "italic"], "subsets": ["latin", "latin-ext"], "axes": [] },
        "ABeeZee": { "weights": ["400"], "styles": ["normal"], "subsets": ["latin"], "axes": [] },
        "Roboto Flex": {
            "weights": ["variable"],
            "styles": ["normal"],
            "subsets": ["cyrillic", "latin"],
            "axes": [
                { "tag": "opsz", "min": 8, "max": 144, "default": 14 },
                { "tag": "wght", "min": 100, "max": 1000, "default": 400 }
            ]
        }
    }"#;

    #[test]
    fn test_parse_keeps_declared_order() {
        let table = FontTable::from_json(TABLE).unwrap();
        assert_eq!(
            table.family_names().collect::<Vec<_>>(),
            ["Zilla Slab", "ABeeZee", "Roboto Flex"]
        );
    }

    #[test]
    fn test_parse_entry_fields() {
        let table = FontTable::from_json(TABLE).unwrap();
        let flex = table.get("Roboto Flex").unwrap();
        assert_eq!(flex.weights, [Weight::Variable]);
        assert_eq!(flex.subsets, ["cyrillic", "latin"]);
        assert_eq!(flex.axes.len(), 2);
        assert_eq!(flex.axes[0].tag, "opsz");
        assert_eq!(flex.axes[1].default.to_string(), "400");
    }

    #[test]
    fn test_parse_rejects_duplicate_family() {
        let json = r#"{
            "Foo": { "weights": ["400"] },
            "Foo": { "weights": ["700"] }
        }"#;
        match FontTable::from_json(json) {
            Err(Error::DuplicateFamily(name)) => assert_eq!(name, "Foo"),
            other => panic!("expected duplicate family error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(FontTable::from_json("[]"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_requires_weights() {
        assert!(FontTable::from_json(r#"{ "Foo": { "styles": [] } }"#).is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = FontTable::from_json("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_select_keeps_table_order() {
        let table = FontTable::from_json(TABLE).unwrap();
        let selected = table.select(["Roboto Flex", "Zilla Slab"]).unwrap();
        assert_eq!(selected.family_names().collect::<Vec<_>>(), ["Zilla Slab", "Roboto Flex"]);
    }

    #[test]
    fn test_select_unknown_family() {
        let table = FontTable::from_json(TABLE).unwrap();
        match table.select(["Comic Sans"]) {
            Err(Error::UnknownFamily(name)) => assert_eq!(name, "Comic Sans"),
            other => panic!("expected unknown family error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_entries_duplicate() {
        let result = FontTable::from_entries([
            FontFamilyEntry::new("Foo", ["400"]),
            FontFamilyEntry::new("Foo", ["700"]),
        ]);
        assert!(matches!(result, Err(Error::DuplicateFamily(_))));
    }
}
