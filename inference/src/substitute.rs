/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::InferenceError;
use shared::bindings::Bindings;
use shared::term::Term;
use std::collections::BTreeMap;

/// Instantiate a pattern by replacing every variable with its bound value.
/// A variable missing from `bindings` is a programming error in the rule
/// (its conclusion references a variable no premise bound) and surfaces as
/// [`InferenceError::UnboundVariable`].
pub fn substitute(pattern: &Term, bindings: &Bindings) -> Result<Term, InferenceError> {
    if let Some(name) = pattern.var_name() {
        return match bindings.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(InferenceError::UnboundVariable {
                name: name.to_string(),
                bindings: bindings.clone(),
            }),
        };
    }
    match pattern {
        Term::Tree(entries) => {
            let mut out = BTreeMap::new();
            for (key, value) in entries {
                out.insert(key.clone(), substitute(value, bindings)?);
            }
            Ok(Term::Tree(out))
        }
        other => Ok(other.clone()),
    }
}
