/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod engine;
pub mod error;
pub mod join;
pub mod matcher;
pub mod parser;
pub mod substitute;

pub use engine::{
    infer, infer_all, infer_all_parallel, infer_step, infer_step_parallel, FactSet,
};
pub use error::InferenceError;
pub use join::all_bindings;
pub use matcher::{bindings, match_pattern, matches_over};
pub use substitute::substitute;
