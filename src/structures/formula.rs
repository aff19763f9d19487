//! A formula is the conjunction of a collection of clauses.
//!
//! The canonical representation is a vector of reference-counted clauses: procedures return fresh
//! vectors while sharing the clauses that survived unchanged.

use std::rc::Rc;

use crate::structures::{assertion::Assertion, clause::Clause};

/// The canonical representation of a formula.
pub type Formula<A> = Vec<Rc<Clause<A>>>;

/// Renders a formula as the conjunction of its clauses, for logs and diagnostics.
pub fn formula_string<A: Assertion>(clauses: &[Rc<Clause<A>>]) -> String {
    let mut rendered = String::new();
    for clause in clauses {
        if !rendered.is_empty() {
            rendered.push_str(" && ");
        }
        rendered.push('(');
        rendered.push_str(&clause.to_string());
        rendered.push(')');
    }
    rendered
}
