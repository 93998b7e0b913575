/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key of the literal variable encoding `{var: <name>}`.
pub const VAR_KEY: &str = "var";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Int(i64),
    Str(String),
    Symbol(String),
    Bool(bool),
}

/// A term is either an atomic scalar, a tree of named sub-terms, or a
/// variable. Facts are ground trees; patterns may contain variables at any
/// depth. `BTreeMap` keeps terms ordered and hashable so fact sets and sets
/// of binding maps have a canonical representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Scalar(Scalar),
    Tree(BTreeMap<String, Term>),
    Var(String),
}

/// A ground tree. Alias only; groundness is checked with [`Term::is_ground`].
pub type Fact = Term;

/// A tree that may contain variables.
pub type Pattern = Term;

impl Term {
    pub fn int(value: i64) -> Term {
        Term::Scalar(Scalar::Int(value))
    }

    pub fn bool(value: bool) -> Term {
        Term::Scalar(Scalar::Bool(value))
    }

    pub fn str(value: impl Into<String>) -> Term {
        Term::Scalar(Scalar::Str(value.into()))
    }

    pub fn sym(name: impl Into<String>) -> Term {
        Term::Scalar(Scalar::Symbol(name.into()))
    }

    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(name.into())
    }

    pub fn tree<K, I>(entries: I) -> Term
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Term)>,
    {
        Term::Tree(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn as_tree(&self) -> Option<&BTreeMap<String, Term>> {
        match self {
            Term::Tree(entries) => Some(entries),
            _ => None,
        }
    }

    /// The variable name if this term is a variable, in either encoding:
    /// the `Var` variant or the literal one-entry tree `{var: <symbol>}`.
    pub fn var_name(&self) -> Option<&str> {
        match self {
            Term::Var(name) => Some(name),
            Term::Tree(entries) if entries.len() == 1 => match entries.get(VAR_KEY) {
                Some(Term::Scalar(Scalar::Symbol(name))) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        self.var_name().is_some()
    }

    /// True iff no variable occurs at any depth.
    pub fn is_ground(&self) -> bool {
        if self.is_var() {
            return false;
        }
        match self {
            Term::Tree(entries) => entries.values().all(Term::is_ground),
            _ => true,
        }
    }

    /// Encode to the JSON wire form (variables become `{"var": ":name"}`).
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Decode from the JSON wire form.
    pub fn from_json(value: serde_json::Value) -> Result<Term, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Str(s) => write!(f, "{:?}", s),
            Scalar::Symbol(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Scalar(s) => write!(f, "{}", s),
            Term::Var(name) => write!(f, "?{}", name),
            Term::Tree(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Wire form: integers, booleans and strings map to their host-format
// counterparts, symbols carry a leading-colon keyword marker, variables are
// the literal one-entry map {"var": ":name"}, trees are maps.

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Scalar(Scalar::Int(n)) => serializer.serialize_i64(*n),
            Term::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Term::Scalar(Scalar::Str(s)) => serializer.serialize_str(s),
            Term::Scalar(Scalar::Symbol(s)) => serializer.serialize_str(&format!(":{}", s)),
            Term::Var(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(VAR_KEY, &format!(":{}", name))?;
                map.end()
            }
            Term::Tree(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct TermVisitor;

impl<'de> Visitor<'de> for TermVisitor {
    type Value = Term;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, boolean, string, or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Term, E> {
        Ok(Term::bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Term, E> {
        Ok(Term::int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Term, E> {
        i64::try_from(v)
            .map(Term::int)
            .map_err(|_| E::custom(format!("integer {} out of range", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Term, E> {
        Ok(match v.strip_prefix(':') {
            Some(name) => Term::sym(name),
            None => Term::str(v),
        })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Term, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Term>()? {
            entries.insert(key, value);
        }
        // A one-entry map {var: <name>} is the literal variable encoding.
        if entries.len() == 1 {
            if let Some(value) = entries.get(VAR_KEY) {
                match value {
                    Term::Scalar(Scalar::Symbol(name)) | Term::Scalar(Scalar::Str(name)) => {
                        return Ok(Term::Var(name.clone()));
                    }
                    _ => {}
                }
            }
        }
        Ok(Term::Tree(entries))
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Term, D::Error> {
        deserializer.deserialize_any(TermVisitor)
    }
}
