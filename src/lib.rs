//! A library for reasoning about boolean combinations of per-variable type assertions.
//!
//! clausal is the refinement core of a flow-sensitive static analyzer: for every conditional met
//! during source analysis the analyzer builds a formula in conjunctive normal form whose atoms are
//! *assertions* about program variables ("x is a string", "y is not null"), and asks this library
//! to simplify the formula, negate it for the else-branch, merge it with the formula of a sibling
//! branch, or read off the facts it pins down per variable.
//!
//! Some guiding principles:
//! - Clauses are immutable values, identified by a content hash and shared by [Rc](std::rc::Rc);
//!   every "modification" is a fresh clause.
//! - The engine is heuristic, not a SAT solver. Pathological inputs degrade to "no information"
//!   (an empty result, a passthrough, or a [wedge](structures::clause::Clause#structfield.wedge))
//!   rather than blowing up; the one recoverable failure is
//!   [ComplicatedExpression](types::err::ErrorKind::ComplicatedExpression), raised when negation
//!   would require distributing past a configured ceiling.
//! - Assertions are opaque. The engine only renders, negates, and compares them, through the
//!   [Assertion](structures::assertion::Assertion) trait; their semantics live with the caller's
//!   type system.
//!
//! # Orientation
//!
//! Operations hang off a [context](context::Context), which carries the configured resource
//! ceilings, counters, and a source of rng for provenance ids.
//!
//! - [simplify_cnf](context::GenericContext::simplify_cnf) applies unit resolution and subsumption
//!   to a formula.
//! - [negate_formula](context::GenericContext::negate_formula) produces the CNF of a formula's
//!   negation, via [group_impossibilities](context::GenericContext::group_impossibilities).
//! - [truths_from_formula](context::GenericContext::truths_from_formula) extracts the per-variable
//!   facts a formula fixes.
//! - [combine_ored_clauses](context::GenericContext::combine_ored_clauses) merges the formulae of
//!   two alternative branches.
//!
//! # Example
//!
//! `(a) ∧ (a ∨ b)` simplifies to `(a)`:
//!
//! ```rust
//! # use std::rc::Rc;
//! # use clausal::config::Config;
//! # use clausal::context::Context;
//! # use clausal::structures::assertion::CAssertion;
//! # use clausal::structures::clause::{Clause, Possibilities};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let a = CAssertion::is("string");
//! let b = CAssertion::is("int");
//!
//! let mut unit = Possibilities::new();
//! unit.insert("$x".to_string(), vec![a.clone()]);
//! let unit = Rc::new(Clause::from_possibilities(unit, 1, 1));
//!
//! let mut pair = Possibilities::new();
//! pair.insert("$x".to_string(), vec![a, b]);
//! let pair = Rc::new(Clause::from_possibilities(pair, 2, 2));
//!
//! let simplified = the_context.simplify_cnf(&[unit.clone(), pair]);
//!
//! assert_eq!(simplified, vec![unit]);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when formulae hit a resource ceiling and when clauses are
//! resolved away, under one target per procedure so output can be narrowed to the relevant part
//! of the library — see [misc::log::targets]. No log implementation is bundled.

#![allow(clippy::derivable_impls)]
#![allow(clippy::collapsible_if)]

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

pub mod procedures;
