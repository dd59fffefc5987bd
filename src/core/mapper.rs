/// Positional character mapper
///
/// Walks two character sequences in lockstep and records, for every source
/// character, the target character found at the same position. The earliest
/// position wins; later positions that disagree are collected as conflicts.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use log::debug;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Source character to target character table.
///
/// Keys are unique. Entries keep the order in which they were first seen,
/// and `sorted()` gives them in code point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMapping {
    entries: Vec<(char, char)>,
    index: HashMap<char, usize>,
}

impl CharacterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `source -> target` unless `source` is already mapped.
    ///
    /// Returns the existing target when the key was already present.
    pub fn insert_first(&mut self, source: char, target: char) -> Option<char> {
        if let Some(&pos) = self.index.get(&source) {
            return Some(self.entries[pos].1);
        }
        self.index.insert(source, self.entries.len());
        self.entries.push((source, target));
        None
    }

    pub fn get(&self, source: char) -> Option<char> {
        self.index.get(&source).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, source: char) -> bool {
        self.index.contains_key(&source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries ordered by source code point
    pub fn sorted(&self) -> Vec<(char, char)> {
        let mut entries = self.entries.clone();
        entries.sort_unstable_by_key(|&(source, _)| source);
        entries
    }
}

impl FromIterator<(char, char)> for CharacterMapping {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        let mut mapping = CharacterMapping::new();
        for (source, target) in iter {
            mapping.insert_first(source, target);
        }
        mapping
    }
}

impl Serialize for CharacterMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (source, target) in &self.entries {
            map.serialize_entry(source, target)?;
        }
        map.end()
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = CharacterMapping;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object of single-character keys and values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = CharacterMapping::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            let source = single_char(&key).ok_or_else(|| {
                de::Error::custom(format!("key {:?} is not a single character", key))
            })?;
            let target = single_char(&value).ok_or_else(|| {
                de::Error::custom(format!("value {:?} is not a single character", value))
            })?;
            if mapping.insert_first(source, target).is_some() {
                return Err(de::Error::custom(format!("duplicate key {:?}", key)));
            }
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for CharacterMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Conflicting targets per source character.
///
/// A record is created on the first conflict and seeded with the target that
/// was mapped first, so every set holds at least two characters.
pub type ConflictRecords = BTreeMap<char, BTreeSet<char>>;

/// Everything produced by one pass over the two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    pub mapping: CharacterMapping,
    pub conflicts: ConflictRecords,
    pub source_len: usize,
    pub target_len: usize,
}

impl MappingReport {
    /// `(source_len, target_len)` when the texts differ in length
    pub fn length_mismatch(&self) -> Option<(usize, usize)> {
        (self.source_len != self.target_len).then_some((self.source_len, self.target_len))
    }

    /// Number of aligned positions that were compared
    pub fn aligned_len(&self) -> usize {
        self.source_len.min(self.target_len)
    }
}

/// Build the mapping from `source` to `target`.
///
/// Only indices below the shorter length are considered. Positions where
/// either side is `'\n'` are skipped.
pub fn build_mapping(source: &[char], target: &[char]) -> MappingReport {
    let mut mapping = CharacterMapping::new();
    let mut conflicts = ConflictRecords::new();

    for (&a, &b) in source.iter().zip(target.iter()) {
        if a == '\n' || b == '\n' {
            continue;
        }
        match mapping.insert_first(a, b) {
            Some(existing) if existing != b => {
                conflicts
                    .entry(a)
                    .or_insert_with(|| BTreeSet::from([existing]))
                    .insert(b);
            }
            _ => {}
        }
    }

    debug!(
        "Built {} mappings with {} conflicts over {} aligned positions",
        mapping.len(),
        conflicts.len(),
        source.len().min(target.len())
    );

    MappingReport {
        mapping,
        conflicts,
        source_len: source.len(),
        target_len: target.len(),
    }
}
