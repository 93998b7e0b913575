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
use crate::join::{all_bindings, join_with};
use crate::matcher::matches_over;
use crate::substitute::substitute;
use log::debug;
use rayon::prelude::*;
use shared::bindings::Bindings;
use shared::knowledge_base::KnowledgeBase;
use shared::rule::{Conclusion, Rule};
use shared::term::Term;
use std::collections::BTreeSet;

pub type FactSet = BTreeSet<Term>;

/// One inference step for one rule: join the premises over the fact set,
/// instantiate each conclusion under every resulting binding, and invoke the
/// conclusion's effect once per fact that is new with respect to `facts`.
/// Every instantiation lands in the output set regardless of novelty; the
/// caller unions it into the fact set.
pub fn infer(
    premises: &[Term],
    conclusions: &[Conclusion],
    facts: &FactSet,
) -> Result<FactSet, InferenceError> {
    let joined = all_bindings(premises, facts);
    fire_conclusions(&joined, conclusions, facts)
}

fn fire_conclusions(
    joined: &BTreeSet<Bindings>,
    conclusions: &[Conclusion],
    facts: &FactSet,
) -> Result<FactSet, InferenceError> {
    let mut derived = FactSet::new();
    for conclusion in conclusions {
        // Novelty is judged against the fact set at step entry; the fired
        // set keeps re-derivations within this step from firing twice.
        let mut fired = FactSet::new();
        for binding in joined {
            let fact = substitute(&conclusion.pattern, binding)?;
            if !facts.contains(&fact) && fired.insert(fact.clone()) {
                if let Some(effect) = &conclusion.effect {
                    effect(&fact);
                }
            }
            derived.insert(fact);
        }
    }
    Ok(derived)
}

/// Rule evaluation against a knowledge base, narrowing each premise to the
/// candidate facts that carry all of its top-level keys.
fn infer_rule(rule: &Rule, kb: &KnowledgeBase) -> Result<FactSet, InferenceError> {
    let joined = join_with(&rule.premises, |pattern| {
        let candidates = kb.index.candidates(pattern);
        matches_over(pattern, &candidates)
    });
    fire_conclusions(&joined, &rule.conclusions, kb.facts())
}

/// One pass applying every rule to the current fact set. Matching runs
/// against a snapshot of the facts at step entry; the result is the input
/// knowledge base with every derivation unioned in.
pub fn infer_step(kb: &KnowledgeBase) -> Result<KnowledgeBase, InferenceError> {
    let mut next = kb.clone();
    for rule in &kb.rules {
        for fact in infer_rule(rule, kb)? {
            next.add_fact(fact);
        }
    }
    Ok(next)
}

/// Like [`infer_step`], with the rules evaluated in parallel against the
/// same snapshot and the per-rule results unioned at step exit. Effects may
/// be invoked concurrently.
pub fn infer_step_parallel(kb: &KnowledgeBase) -> Result<KnowledgeBase, InferenceError> {
    let derived = kb
        .rules
        .par_iter()
        .map(|rule| infer_rule(rule, kb))
        .collect::<Result<Vec<_>, _>>()?;

    let mut next = kb.clone();
    for facts in derived {
        for fact in facts {
            next.add_fact(fact);
        }
    }
    Ok(next)
}

/// Iterate [`infer_step`] until the fact set is stable. The rule set is
/// carried through unchanged. Terminates because conclusions introduce no
/// scalar values that do not already occur in the fact set, so the universe
/// of derivable facts is finite.
pub fn infer_all(kb: &KnowledgeBase) -> Result<KnowledgeBase, InferenceError> {
    run_to_fixpoint(kb, infer_step)
}

/// Parallel variant of [`infer_all`]; the final fact set is identical.
pub fn infer_all_parallel(kb: &KnowledgeBase) -> Result<KnowledgeBase, InferenceError> {
    run_to_fixpoint(kb, infer_step_parallel)
}

fn run_to_fixpoint<F>(kb: &KnowledgeBase, step: F) -> Result<KnowledgeBase, InferenceError>
where
    F: Fn(&KnowledgeBase) -> Result<KnowledgeBase, InferenceError>,
{
    let mut current = kb.clone();
    let mut round = 0usize;
    loop {
        let next = step(&current)?;
        round += 1;
        debug!(
            "round {}: {} facts ({} new)",
            round,
            next.facts().len(),
            next.facts().len() - current.facts().len()
        );
        // Steps are monotone, so equal sizes mean equal sets.
        if next.facts().len() == current.facts().len() {
            return Ok(next);
        }
        current = next;
    }
}
