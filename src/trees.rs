//! Ordered trees over composite-key entries.
//!
//! Each analysis session owns four independent trees. Three hold legality
//! rules seeded from the compiled-in tables; the attr-form tree doubles as
//! the usage accumulator, holding rule entries (form code zero) and usage
//! entries (form code nonzero) side by side.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::entry::{Provenance, ThreeKey, ThreeKeyEntry};
use crate::error::{CheckError, Result};

/// Outcome of recording a usage observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No entry with that triple existed; a new one now holds count 1.
    Inserted,
    /// The triple was already resident; its count is now this value.
    Merged(u64),
}

/// One ordered tree, keyed lexicographically by `(key1, key2, key3)`.
///
/// The triple is unique within the tree: rule insertion rejects duplicates
/// outright, usage recording merges into the resident entry.
#[derive(Debug)]
pub struct ThreeKeyTree {
    name: &'static str,
    map: BTreeMap<ThreeKey, ThreeKeyEntry>,
}

impl ThreeKeyTree {
    pub fn new(name: &'static str) -> Self {
        Self { name, map: BTreeMap::new() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Seed one rule entry from a compiled-in table.
    ///
    /// A resident entry with the same triple means the static table itself
    /// is malformed; that aborts the build rather than merging, because
    /// rule tables are key-unique by construction.
    pub fn insert_rule(&mut self, key: ThreeKey, provenance: Provenance) -> Result<()> {
        match self.map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(ThreeKeyEntry::new_rule(key, provenance));
                Ok(())
            }
            Entry::Occupied(_) => Err(CheckError::MalformedRuleTable {
                table: self.name,
                key1: key.key1,
                key2: key.key2,
                key3: key.key3,
            }),
        }
    }

    /// Record one observation of `key`, creating the entry at count 1 or
    /// incrementing the resident one. Replay-safe: the same observation
    /// recorded N times leaves one entry with count N.
    pub fn record_use(&mut self, key: ThreeKey) -> Upsert {
        match self.map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(ThreeKeyEntry::new_use(key));
                Upsert::Inserted
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.count += 1;
                Upsert::Merged(entry.count)
            }
        }
    }

    /// Non-mutating lookup. Never touches counts.
    pub fn find(&self, key: &ThreeKey) -> Option<&ThreeKeyEntry> {
        self.map.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ThreeKeyEntry> {
        self.map.values()
    }

    /// Copy every entry out for reporting. The tree is counted first and
    /// the extraction must agree with that count; a mismatch abandons the
    /// snapshot as an internal consistency failure.
    pub fn snapshot(&self) -> Result<Vec<ThreeKeyEntry>> {
        let counted = self.map.len();
        let mut out: Vec<ThreeKeyEntry> = Vec::new();
        out.try_reserve_exact(counted)
            .map_err(|_| CheckError::Allocation { entries: counted })?;
        out.extend(self.map.values().copied());
        if out.len() != counted {
            return Err(CheckError::Snapshot {
                table: self.name,
                counted,
                extracted: out.len(),
            });
        }
        Ok(out)
    }

    /// Release every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

/// The four trees of one analysis session.
#[derive(Debug)]
pub struct TreeSet {
    /// Attr/form-class rules plus attr/form-class/form usage entries.
    pub attr_form: ThreeKeyTree,
    /// Which attributes each tag may legally carry.
    pub tag_attr: ThreeKeyTree,
    /// Which tags each tag may legally contain.
    pub tag_tag: ThreeKeyTree,
    /// Per-tag usage counts, populated only at record time.
    pub tag_use: ThreeKeyTree,
}

impl TreeSet {
    pub fn new() -> Self {
        Self {
            attr_form: ThreeKeyTree::new("attr-form"),
            tag_attr: ThreeKeyTree::new("tag-attr"),
            tag_tag: ThreeKeyTree::new("tag-tag"),
            tag_use: ThreeKeyTree::new("tag-use"),
        }
    }

    /// Release every entry of all four trees. The tag-use tree is cleared
    /// unconditionally: it may hold entries even when the rule trees were
    /// inherited from a tied-file session.
    pub fn clear_all(&mut self) {
        self.attr_form.clear();
        self.tag_attr.clear();
        self.tag_tag.clear();
        self.tag_use.clear();
    }
}

impl Default for TreeSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_insert_rejects_duplicate_triple() {
        let mut tree = ThreeKeyTree::new("attr-form");
        let key = ThreeKey::new(0x02, 0x05, 0);
        tree.insert_rule(key, Provenance::Standard).unwrap();
        let err = tree.insert_rule(key, Provenance::Extension).unwrap_err();
        match err {
            CheckError::MalformedRuleTable { table, key1, key2, key3 } => {
                assert_eq!(table, "attr-form");
                assert_eq!((key1, key2, key3), (0x02, 0x05, 0));
            }
            other => panic!("unexpected error: {other}"),
        }
        // The resident entry is untouched.
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.find(&key).unwrap().provenance, Provenance::Standard);
    }

    #[test]
    fn test_record_use_accumulates_one_entry() {
        let mut tree = ThreeKeyTree::new("attr-form");
        let key = ThreeKey::new(0x02, 0x05, 0x0b);
        assert_eq!(tree.record_use(key), Upsert::Inserted);
        assert_eq!(tree.record_use(key), Upsert::Merged(2));
        assert_eq!(tree.record_use(key), Upsert::Merged(3));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.find(&key).unwrap().count, 3);
    }

    #[test]
    fn test_distinct_triples_stay_distinct() {
        let mut tree = ThreeKeyTree::new("attr-form");
        for form in 1..=5u16 {
            tree.record_use(ThreeKey::new(0x03, 0x0b, form));
        }
        assert_eq!(tree.len(), 5);
        for entry in tree.iter() {
            assert_eq!(entry.count, 1);
        }
    }

    #[test]
    fn test_rules_and_usages_coexist() {
        let mut tree = ThreeKeyTree::new("attr-form");
        let rule = ThreeKey::new(0x02, 0x05, 0);
        tree.insert_rule(rule, Provenance::Standard).unwrap();
        tree.record_use(ThreeKey::new(0x02, 0x05, 0x0b));
        assert_eq!(tree.len(), 2);
        assert!(tree.find(&rule).unwrap().is_rule());
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut tree = ThreeKeyTree::new("tag-use");
        tree.record_use(ThreeKey::new(9, 0, 0));
        tree.record_use(ThreeKey::new(1, 0, 0));
        tree.record_use(ThreeKey::new(4, 0, 0));
        let keys: Vec<u16> = tree.iter().map(|e| e.key.key1).collect();
        assert_eq!(keys, vec![1, 4, 9]);
    }

    #[test]
    fn test_snapshot_agrees_with_count() {
        let mut tree = ThreeKeyTree::new("attr-form");
        tree.record_use(ThreeKey::new(1, 1, 1));
        tree.record_use(ThreeKey::new(2, 2, 2));
        let snap = tree.snapshot().unwrap();
        assert_eq!(snap.len(), tree.len());
    }

    #[test]
    fn test_clear_all_empties_every_tree() {
        let mut trees = TreeSet::new();
        trees
            .attr_form
            .insert_rule(ThreeKey::new(1, 1, 0), Provenance::Standard)
            .unwrap();
        trees.tag_use.record_use(ThreeKey::new(0x11, 0, 0));
        trees.clear_all();
        assert!(trees.attr_form.is_empty());
        assert!(trees.tag_use.is_empty());
    }
}
