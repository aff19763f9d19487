//! Shared builders for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::rc::Rc;

use clausal::structures::assertion::CAssertion;
use clausal::structures::clause::{Clause, ConditionalId, Possibilities};

/// A positive type assertion.
pub fn is(name: &str) -> CAssertion {
    CAssertion::is(name)
}

/// A negative type assertion.
pub fn is_not(name: &str) -> CAssertion {
    CAssertion::is_not(name)
}

/// A source clause over the given `(var, possibilities)` entries.
pub fn clause(entries: &[(&str, &[CAssertion])], conditional: ConditionalId) -> Rc<Clause<CAssertion>> {
    Rc::new(Clause::from_possibilities(
        possibilities(entries),
        conditional,
        conditional,
    ))
}

/// A source clause asserting a single possibility for a single var.
pub fn unit(var: &str, assertion: CAssertion, conditional: ConditionalId) -> Rc<Clause<CAssertion>> {
    clause(&[(var, &[assertion])], conditional)
}

/// A possibility map over the given `(var, possibilities)` entries.
pub fn possibilities(entries: &[(&str, &[CAssertion])]) -> Possibilities<CAssertion> {
    entries
        .iter()
        .map(|(var, list)| (var.to_string(), list.to_vec()))
        .collect()
}

/// A clause with every flag under the caller's control.
pub fn clause_with_flags(
    entries: &[(&str, &[CAssertion])],
    conditional: ConditionalId,
    reconcilable: bool,
    generated: bool,
    redefined: &[&str],
) -> Rc<Clause<CAssertion>> {
    Rc::new(Clause::new(
        possibilities(entries),
        conditional,
        conditional,
        false,
        reconcilable,
        generated,
        redefined.iter().map(|var| var.to_string()).collect::<BTreeSet<_>>(),
    ))
}

/// The rendered form of each clause, in formula order.
pub fn rendered(clauses: &[Rc<Clause<CAssertion>>]) -> Vec<String> {
    clauses.iter().map(|clause| clause.to_string()).collect()
}

/// The rendered possibilities of each clause, sorted, blind to flags and provenance.
pub fn shapes(
    clauses: &[Rc<Clause<CAssertion>>],
) -> Vec<std::collections::BTreeMap<String, BTreeSet<String>>> {
    let mut shapes: Vec<_> = clauses
        .iter()
        .map(|clause| clause.possibility_strings.clone())
        .collect();
    shapes.sort();
    shapes
}
