//! Procedures over formulae, implemented on a [context](crate::context::GenericContext).
//!
//! - [Simplification](crate::context::GenericContext::simplify_cnf) of a formula.
//! - [Grouping](crate::context::GenericContext::group_impossibilities) of impossibilities, the
//!   distributive step of negation.
//! - [Negation](crate::context::GenericContext::negate_formula) of a formula, and
//!   [negate_types](negate::negate_types) for bare assertion maps.
//! - [Truth extraction](crate::context::GenericContext::truths_from_formula).
//! - [Combination](crate::context::GenericContext::combine_ored_clauses) of two formulae under
//!   OR.

pub mod combine;
pub mod group;
pub mod negate;
pub mod simplify;
pub mod truths;
