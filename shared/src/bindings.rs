/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::term::Term;
use std::collections::BTreeMap;

/// Variable name → ground value, extracted by a match. Ordered so that sets
/// of binding maps can be deduplicated.
pub type Bindings = BTreeMap<String, Term>;

/// Bind `name` to `value`, or check agreement if it is already bound.
/// Returns false on a conflicting existing binding.
pub fn merge_one(bindings: &mut Bindings, name: &str, value: &Term) -> bool {
    match bindings.get(name) {
        Some(existing) => existing == value,
        None => {
            bindings.insert(name.to_string(), value.clone());
            true
        }
    }
}

/// Merge two binding maps; `None` if they disagree on any variable.
/// A `None` is distinct from `Some` of an empty map.
pub fn merge_all(cur: &Bindings, other: &Bindings) -> Option<Bindings> {
    let mut merged = cur.clone();
    for (name, value) in other {
        if !merge_one(&mut merged, name, value) {
            return None;
        }
    }
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_one_inserts_and_checks() {
        let mut bindings = Bindings::new();
        assert!(merge_one(&mut bindings, "x", &Term::int(3)));
        assert!(merge_one(&mut bindings, "x", &Term::int(3)));
        assert!(!merge_one(&mut bindings, "x", &Term::int(4)));
        assert_eq!(bindings.get("x"), Some(&Term::int(3)));
    }

    #[test]
    fn merge_all_detects_conflicts() {
        let left = Bindings::from([("x".to_string(), Term::int(3))]);
        let agreeing = Bindings::from([
            ("x".to_string(), Term::int(3)),
            ("y".to_string(), Term::str("socrates")),
        ]);
        let merged = merge_all(&left, &agreeing).unwrap();
        assert_eq!(merged.len(), 2);

        let conflicting = Bindings::from([("x".to_string(), Term::int(4))]);
        assert_eq!(merge_all(&left, &conflicting), None);
    }

    #[test]
    fn empty_merge_is_not_failure() {
        assert_eq!(
            merge_all(&Bindings::new(), &Bindings::new()),
            Some(Bindings::new())
        );
    }
}
