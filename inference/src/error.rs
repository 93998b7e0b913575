/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::bindings::Bindings;
use std::fmt;

/// Errors surfaced by the engine. A failed match and a conflicting merge are
/// absences (empty result, dropped join row), never errors; only a
/// conclusion referencing a variable that no premise bound reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    UnboundVariable { name: String, bindings: Bindings },
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::UnboundVariable { name, bindings } => {
                write!(f, "variable ?{} is not bound; bindings: {{", name)?;
                for (i, (var, value)) in bindings.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "?{} -> {}", var, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl std::error::Error for InferenceError {}
