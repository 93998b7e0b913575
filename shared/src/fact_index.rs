/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::term::{Fact, Term};
use std::collections::{BTreeSet, HashMap};

/// First-level index over ground facts: top-level tree key → facts carrying
/// that key. A pattern can only match facts that contain every one of its
/// top-level keys, so intersecting the per-key sets narrows the candidates
/// without losing matches.
#[derive(Debug, Clone, Default)]
pub struct FactIndex {
    facts: BTreeSet<Fact>,
    by_key: HashMap<String, BTreeSet<Fact>>,
}

impl FactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fact; returns true when it was not present before.
    pub fn insert(&mut self, fact: &Fact) -> bool {
        if !self.facts.insert(fact.clone()) {
            return false;
        }
        if let Some(entries) = fact.as_tree() {
            for key in entries.keys() {
                self.by_key
                    .entry(key.clone())
                    .or_default()
                    .insert(fact.clone());
            }
        }
        true
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn facts(&self) -> &BTreeSet<Fact> {
        &self.facts
    }

    pub fn facts_with_key(&self, key: &str) -> Option<&BTreeSet<Fact>> {
        self.by_key.get(key)
    }

    /// Candidate facts for one pattern: the intersection of the per-key sets
    /// over the pattern's top-level keys. Patterns without top-level keys
    /// (a bare variable, a scalar, an empty tree) constrain nothing and get
    /// the full fact set.
    pub fn candidates(&self, pattern: &Term) -> BTreeSet<Fact> {
        let keys = match pattern.as_tree() {
            Some(entries) if !entries.is_empty() && !pattern.is_var() => {
                entries.keys().collect::<Vec<_>>()
            }
            _ => return self.facts.clone(),
        };

        let mut sets = Vec::with_capacity(keys.len());
        for key in keys {
            match self.by_key.get(key.as_str()) {
                Some(set) => sets.push(set),
                None => return BTreeSet::new(),
            }
        }
        // Intersect starting from the smallest per-key set.
        sets.sort_by_key(|set| set.len());
        match sets.split_first() {
            Some((first, rest)) => first
                .iter()
                .filter(|fact| rest.iter().all(|set| set.contains(*fact)))
                .cloned()
                .collect(),
            None => self.facts.clone(),
        }
    }
}

impl Extend<Fact> for FactIndex {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, facts: I) {
        for fact in facts {
            self.insert(&fact);
        }
    }
}

impl FromIterator<Fact> for FactIndex {
    fn from_iter<I: IntoIterator<Item = Fact>>(facts: I) -> Self {
        let mut index = FactIndex::new();
        index.extend(facts);
        index
    }
}
