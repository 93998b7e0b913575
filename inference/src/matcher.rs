/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::bindings::{merge_one, Bindings};
use shared::term::Term;

/// Match one pattern against one ground fact, extending `cur` with the
/// variable bindings the match extracts. `None` means no match; `Some` of an
/// empty map means the pattern matched without binding anything.
///
/// Patterns are submap-style: every pattern key must find a matching
/// sub-fact, extra fact keys are ignored.
pub fn match_pattern(pattern: &Term, fact: &Term, cur: &Bindings) -> Option<Bindings> {
    // Work on a scratch copy and commit only when the whole pattern matched.
    let mut scratch = cur.clone();
    if match_into(pattern, fact, &mut scratch) {
        Some(scratch)
    } else {
        None
    }
}

fn match_into(pattern: &Term, fact: &Term, bindings: &mut Bindings) -> bool {
    // A variable (either encoding) binds the whole sub-fact, checked against
    // any existing binding for the same name.
    if let Some(name) = pattern.var_name() {
        return merge_one(bindings, name, fact);
    }
    match pattern {
        Term::Tree(entries) => {
            let fact_entries = match fact.as_tree() {
                Some(fact_entries) => fact_entries,
                // Tree pattern against a scalar fact: structural misuse,
                // treated as no match.
                None => return false,
            };
            for (key, sub_pattern) in entries {
                match fact_entries.get(key) {
                    Some(sub_fact) => {
                        if !match_into(sub_pattern, sub_fact, bindings) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }
        Term::Scalar(_) => pattern == fact,
        // Unreachable: the var check above already returned.
        Term::Var(_) => false,
    }
}

/// Convenience wrapper: match with no prior bindings.
pub fn bindings(pattern: &Term, fact: &Term) -> Option<Bindings> {
    match_pattern(pattern, fact, &Bindings::new())
}

/// Apply one pattern across a fact set; collect every successful binding
/// map. An empty result means no fact matched, which is distinct from a
/// single empty-bindings match.
pub fn matches_over<'a, I>(pattern: &Term, facts: I) -> Vec<Bindings>
where
    I: IntoIterator<Item = &'a Term>,
{
    facts
        .into_iter()
        .filter_map(|fact| bindings(pattern, fact))
        .collect()
}
