/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate criterion;
extern crate inference;

use criterion::*;
use inference::parser::rule_from_str;
use inference::{infer_all, infer_all_parallel};
use shared::knowledge_base::KnowledgeBase;
use shared::term::Term;

/// A knowledge base whose closure walks a chain of rules over many subjects.
fn setup_kb(subjects: usize) -> KnowledgeBase {
    let mut kb = KnowledgeBase::default();
    for i in 0..subjects {
        kb.add_fact(Term::tree([("employed", Term::str(format!("person-{}", i)))]));
        kb.add_fact(Term::tree([("insured", Term::str(format!("person-{}", i)))]));
    }
    for rule in [
        "{ {employed: ?x} . {insured: ?x} } => { {covered: ?x} }",
        "{ {covered: ?x} } => { {eligible: ?x} }",
        "{ {eligible: ?x} } => { {enrolled: ?x} }",
    ] {
        kb.add_rule(rule_from_str(rule).unwrap());
    }
    kb
}

fn inference_benchmark(c: &mut Criterion) {
    let kb = setup_kb(200);

    let mut group = c.benchmark_group("fixpoint");
    group.sample_size(10);
    group.bench_function("infer_all", |b| b.iter(|| infer_all(&kb).unwrap()));
    group.bench_function("infer_all_parallel", |b| {
        b.iter(|| infer_all_parallel(&kb).unwrap())
    });
    group.finish();
}

criterion_group!(benches, inference_benchmark);
criterion_main!(benches);
