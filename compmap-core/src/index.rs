//! Bidirectional main ↔ sub index.
//!
//! Built once from the one-directional source mapping and immutable
//! afterwards. Both directions are sorted with [`collate::compare`] and free
//! of duplicates, and each is the exact inverse of the other.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collate;

/// The raw one-directional mapping delivered by a loader: main → subs.
///
/// Sub lists may contain duplicates or be unsorted; [`RelationIndex::build`]
/// normalizes them.
pub type SourceMapping = BTreeMap<String, Vec<String>>;

/// Read-only index over mains and subs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationIndex {
    #[serde(rename = "mainToSub")]
    main_to_sub: BTreeMap<String, Vec<String>>,
    #[serde(rename = "subToMains")]
    sub_to_mains: BTreeMap<String, Vec<String>>,
}

impl RelationIndex {
    /// Build the index from a source mapping.
    ///
    /// Never fails: duplicate subs within a main collapse, mains with no subs
    /// are kept with an empty list, and an empty source gives an empty index.
    pub fn build(source: &SourceMapping) -> Self {
        let mut main_to_sub: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut sub_to_mains: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (main, subs) in source {
            let mut own = subs.clone();
            collate::sort_dedup(&mut own);

            for sub in &own {
                let users = sub_to_mains.entry(sub.clone()).or_default();
                if !users.iter().any(|m| m == main) {
                    users.push(main.clone());
                }
            }
            main_to_sub.insert(main.clone(), own);
        }

        for users in sub_to_mains.values_mut() {
            collate::sort_dedup(users);
        }

        let index = Self {
            main_to_sub,
            sub_to_mains,
        };
        debug_assert!(index.is_consistent());
        index
    }

    /// Subs of `main`, empty if `main` is unknown.
    pub fn subs_of(&self, main: &str) -> &[String] {
        self.main_to_sub
            .get(main)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mains that include `sub`, empty if `sub` is unknown.
    pub fn mains_using(&self, sub: &str) -> &[String] {
        self.sub_to_mains
            .get(sub)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if `name` has its own entry as a main.
    pub fn is_main(&self, name: &str) -> bool {
        self.main_to_sub.contains_key(name)
    }

    /// True if `name` is used as a sub by at least one main.
    pub fn is_sub(&self, name: &str) -> bool {
        self.sub_to_mains.contains_key(name)
    }

    pub fn main_count(&self) -> usize {
        self.main_to_sub.len()
    }

    pub fn sub_count(&self) -> usize {
        self.sub_to_mains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main_to_sub.is_empty()
    }

    /// All main names in collation order.
    pub fn main_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.main_to_sub.keys().map(String::as_str).collect();
        names.sort_by(|a, b| collate::compare(a, b));
        names
    }

    /// Direct view of the main → subs direction.
    pub fn main_to_sub(&self) -> &BTreeMap<String, Vec<String>> {
        &self.main_to_sub
    }

    /// Direct view of the sub → mains direction.
    pub fn sub_to_mains(&self) -> &BTreeMap<String, Vec<String>> {
        &self.sub_to_mains
    }

    /// Check the inverse invariant and the sort/uniqueness of every list.
    pub fn is_consistent(&self) -> bool {
        let sorted_unique = |list: &Vec<String>| {
            list.windows(2)
                .all(|w| collate::compare(&w[0], &w[1]).is_lt())
        };

        let forward = self.main_to_sub.iter().all(|(main, subs)| {
            sorted_unique(subs)
                && subs
                    .iter()
                    .all(|s| self.mains_using(s).iter().filter(|m| *m == main).count() == 1)
        });

        let backward = self.sub_to_mains.iter().all(|(sub, mains)| {
            !mains.is_empty()
                && sorted_unique(mains)
                && mains
                    .iter()
                    .all(|m| self.subs_of(m).iter().filter(|s| *s == sub).count() == 1)
        });

        forward && backward
    }
}
