/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::matcher::matches_over;
use shared::bindings::{merge_all, Bindings};
use shared::term::Term;
use std::collections::BTreeSet;

/// All globally consistent binding maps across a set of premise patterns.
///
/// Every premise must match at least one fact, otherwise the join is
/// unsatisfiable and the result is empty. Binding maps that are empty after
/// merging are dropped: a premise without variables is an existence check
/// and contributes no rows of its own.
pub fn all_bindings(patterns: &[Term], facts: &BTreeSet<Term>) -> BTreeSet<Bindings> {
    join_with(patterns, |pattern| matches_over(pattern, facts))
}

/// Join driver: folds the per-premise match sets level by level instead of
/// materializing the full Cartesian product, dropping inconsistent rows as
/// soon as they appear.
pub(crate) fn join_with<F>(patterns: &[Term], mut per_pattern: F) -> BTreeSet<Bindings>
where
    F: FnMut(&Term) -> Vec<Bindings>,
{
    let mut rows = vec![Bindings::new()];
    for pattern in patterns {
        let matches = per_pattern(pattern);
        if matches.is_empty() {
            // One premise with no matching fact makes the join unsatisfiable.
            return BTreeSet::new();
        }
        let mut next = Vec::new();
        for row in &rows {
            for matched in &matches {
                if let Some(merged) = merge_all(row, matched) {
                    next.push(merged);
                }
            }
        }
        if next.is_empty() {
            return BTreeSet::new();
        }
        rows = next;
    }
    rows.into_iter().filter(|row| !row.is_empty()).collect()
}
