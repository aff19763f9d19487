//! Structures, corresponding to the abstract elements of a formula over type assertions.
//!
//! - An [assertion](assertion) is an atomic predicate about a single variable.
//! - A [clause](clause) is a disjunction of assertions, keyed by the variable they constrain.
//! - A [formula](formula) is the conjunction of a collection of clauses.

pub mod assertion;
pub mod clause;
pub mod formula;
