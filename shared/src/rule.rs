/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::term::{Pattern, Term};
use std::fmt;
use std::sync::Arc;

/// Opaque side effect attached to a conclusion. Invoked with each fact newly
/// derived from that conclusion; any result is discarded by the engine.
/// `Send + Sync` so the parallel driver may invoke effects concurrently.
pub type Effect = Arc<dyn Fn(&Term) + Send + Sync>;

#[derive(Clone)]
pub struct Conclusion {
    pub pattern: Pattern,
    pub effect: Option<Effect>,
}

impl Conclusion {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            effect: None,
        }
    }

    pub fn with_effect<F>(pattern: Pattern, effect: F) -> Self
    where
        F: Fn(&Term) + Send + Sync + 'static,
    {
        Self {
            pattern,
            effect: Some(Arc::new(effect)),
        }
    }
}

impl fmt::Debug for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conclusion")
            .field("pattern", &self.pattern)
            .field("effect", &self.effect.as_ref().map(|_| "<effect>"))
            .finish()
    }
}

/// Premise patterns paired with conclusion patterns and their effects.
#[derive(Debug, Clone)]
pub struct Rule {
    pub premises: Vec<Pattern>,
    pub conclusions: Vec<Conclusion>,
}

impl Rule {
    pub fn new(premises: Vec<Pattern>, conclusions: Vec<Conclusion>) -> Self {
        Self {
            premises,
            conclusions,
        }
    }
}
