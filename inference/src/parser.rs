/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Text notation for terms and rules:
//!
//! ```text
//! {rect: {width: ?w, height: ?w}, name: "unit", count: 42, sky: blue}
//! { {walks-like-duck: ?x} . {quacks-like-duck: ?x} } => { {duck: ?x} }
//! ```
//!
//! `?name` is a variable, `:name` or a bare word is a symbol, words `true`
//! and `false` are booleans, premises and conclusions are `.`-separated
//! inside braces.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res, opt, recognize},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair},
    IResult, Parser,
};
use shared::rule::{Conclusion, Rule};
use shared::term::Term;

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_').parse(input)
}

fn parse_var(input: &str) -> IResult<&str, Term> {
    map(preceded(char('?'), token), Term::var).parse(input)
}

fn parse_keyword(input: &str) -> IResult<&str, Term> {
    map(preceded(char(':'), token), Term::sym).parse(input)
}

fn parse_string(input: &str) -> IResult<&str, Term> {
    map(
        delimited(char('"'), take_until("\""), char('"')),
        Term::str,
    )
    .parse(input)
}

fn parse_int(input: &str) -> IResult<&str, Term> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>().map(Term::int)
    })
    .parse(input)
}

/// Bare words are symbols, except the boolean literals.
fn parse_word(input: &str) -> IResult<&str, Term> {
    map(token, |word| match word {
        "true" => Term::bool(true),
        "false" => Term::bool(false),
        _ => Term::sym(word),
    })
    .parse(input)
}

fn parse_entry(input: &str) -> IResult<&str, (&str, Term)> {
    separated_pair(
        token,
        delimited(multispace0, char(':'), multispace0),
        parse_term,
    )
    .parse(input)
}

fn parse_tree(input: &str) -> IResult<&str, Term> {
    map(
        delimited(
            pair(char('{'), multispace0),
            separated_list0(delimited(multispace0, char(','), multispace0), parse_entry),
            pair(multispace0, char('}')),
        ),
        Term::tree,
    )
    .parse(input)
}

pub fn parse_term(input: &str) -> IResult<&str, Term> {
    alt((
        parse_tree,
        parse_string,
        parse_var,
        parse_keyword,
        parse_int,
        parse_word,
    ))
    .parse(input)
}

/// A `.`-separated list of tree patterns inside braces.
fn parse_pattern_block(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(
        pair(char('{'), multispace0),
        separated_list1(delimited(multispace0, char('.'), multispace0), parse_tree),
        pair(multispace0, char('}')),
    )
    .parse(input)
}

/// `{ <premise> . <premise> } => { <conclusion> . <conclusion> }`.
/// Conclusions carry no effect; attach one via [`Conclusion::with_effect`].
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0.parse(input)?;
    let (input, premises) = parse_pattern_block(input)?;
    let (input, _) = delimited(multispace0, tag("=>"), multispace0).parse(input)?;
    let (input, conclusions) = parse_pattern_block(input)?;

    let rule = Rule::new(
        premises,
        conclusions.into_iter().map(Conclusion::new).collect(),
    );
    Ok((input, rule))
}

/// Parse a complete term, rejecting trailing input.
pub fn term_from_str(input: &str) -> Result<Term, String> {
    finish(parse_term, input)
}

/// Parse a complete rule, rejecting trailing input.
pub fn rule_from_str(input: &str) -> Result<Rule, String> {
    finish(parse_rule, input)
}

fn finish<T>(mut parser: impl FnMut(&str) -> IResult<&str, T>, input: &str) -> Result<T, String> {
    match parser(input.trim()) {
        Ok(("", value)) => Ok(value),
        Ok((rest, _)) => Err(format!("trailing input: {:?}", rest)),
        Err(err) => Err(err.to_string()),
    }
}
