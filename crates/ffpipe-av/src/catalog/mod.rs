//! Capability catalogs decoded from the fixed-column reports.
//!
//! Each of the `-codecs`, `-formats`, and `-pix_fmts` reports is a table of
//! one record per line: a flag cell of single-character columns followed by a
//! name field at a fixed offset. One decoder per report kind lives in its own
//! submodule; the column offsets are named constants documented against
//! captured tool output.

mod codec;
mod format;
mod pixel;

pub use codec::{parse_codec_table, Codec, CodecKind};
pub use format::{parse_format_table, Format};
pub use pixel::{parse_pixel_format_table, PixelFormat};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered, name-keyed collection of report records.
///
/// Keys keep the position of their first appearance. Inserting a duplicate
/// name replaces the value in place; the source reports occasionally repeat
/// a name and the last occurrence wins.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T> Catalog<T> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Insert a record under `name`, overwriting any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&at| &self.entries[at].1)
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record names in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, record)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Catalog<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for Catalog<T> {}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, T)>,
        fn(&'a (String, T)) -> (&'a str, &'a T),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let entry_pair: fn(&'a (String, T)) -> (&'a str, &'a T) =
            |entry| (entry.0.as_str(), &entry.1);
        self.entries.iter().map(entry_pair)
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Catalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for CatalogVisitor<T> {
            type Value = Catalog<T>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a name-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, value)) = access.next_entry::<String, T>()? {
                    catalog.insert(name, value);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor(std::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_appearance_order() {
        let mut catalog = Catalog::new();
        catalog.insert("h264", 1);
        catalog.insert("aac", 2);
        catalog.insert("srt", 3);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["h264", "aac", "srt"]);
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert("h264", 1);
        catalog.insert("aac", 2);
        catalog.insert("h264", 3);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("h264"), Some(&3));
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["h264", "aac"]);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut catalog = Catalog::new();
        catalog.insert("b", 1);
        catalog.insert("a", 2);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn deserializes_from_map() {
        let catalog: Catalog<u32> = serde_json::from_str(r#"{"x":7,"y":8}"#).unwrap();
        assert_eq!(catalog.get("x"), Some(&7));
        assert_eq!(catalog.get("y"), Some(&8));
        assert_eq!(catalog.len(), 2);
    }
}
