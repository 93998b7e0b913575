/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fact_index::FactIndex;
use crate::rule::Rule;
use crate::term::Fact;
use std::collections::BTreeSet;

/// Facts plus rules. Immutable under inference: the fixpoint driver returns
/// a new knowledge base with an enlarged fact set and the same rule set.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub index: FactIndex,
    pub rules: Vec<Rule>,
}

impl KnowledgeBase {
    pub fn new(facts: impl IntoIterator<Item = Fact>, rules: Vec<Rule>) -> Self {
        Self {
            index: facts.into_iter().collect(),
            rules,
        }
    }

    /// Insert a fact; returns true when it was not present before.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        self.index.insert(&fact)
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn facts(&self) -> &BTreeSet<Fact> {
        self.index.facts()
    }
}
