/*!
Negation of a formula.

Negation drops whatever cannot be reasoned about (unreconcilable clauses), distributes the
remaining clauses' [impossibilities](crate::procedures::group), and simplifies the result. When
any stage leaves nothing --- nothing reconcilable to negate, or a negation which simplified away
--- the negation is a single [wedge](crate::structures::clause::Clause#structfield.wedge):
"the branch is reachable, but nothing further is known on it".

Wedges receive a random conditional id, drawn from the context rng, so that two wedges from
unrelated conditionals remain distinguishable in provenance even though they compare equal by
content.

For the method, see: [negate_formula](GenericContext::negate_formula).
*/

use std::{collections::BTreeMap, rc::Rc};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        assertion::Assertion,
        clause::{Clause, VarId},
        formula::formula_string,
    },
    types::err::{self},
};

impl<R: rand::Rng> GenericContext<R> {
    /// The conjunctive normal form of `NOT clauses`, never empty.
    ///
    /// Fails with [ComplicatedExpression](err::ErrorKind::ComplicatedExpression) when
    /// distribution would exceed the configured cap; the caller skips refinement of the
    /// conditional.
    pub fn negate_formula<A: Assertion>(
        &mut self,
        clauses: &[Rc<Clause<A>>],
    ) -> Result<Vec<Rc<Clause<A>>>, err::ErrorKind> {
        self.counters.formulae_negated += 1;

        let reconcilable: Vec<Rc<Clause<A>>> = clauses
            .iter()
            .filter(|clause| clause.reconcilable)
            .cloned()
            .collect();

        if reconcilable.is_empty() {
            log::debug!(target: targets::NEGATION, "nothing reconcilable to negate");
            return Ok(vec![self.fresh_wedge()]);
        }

        let negated: Vec<Rc<Clause<A>>> = reconcilable
            .iter()
            .map(|clause| Rc::new(clause.calculate_negation()))
            .collect();

        let grouped = self.group_impossibilities(&negated)?;
        if grouped.is_empty() {
            return Ok(vec![self.fresh_wedge()]);
        }

        let simplified = self.simplify_cnf(&grouped);
        if simplified.is_empty() {
            return Ok(vec![self.fresh_wedge()]);
        }

        log::debug!(target: targets::NEGATION,
            "negated to {}",
            formula_string(&simplified));

        Ok(simplified)
    }

    /// A wedge clause tagged with a random conditional id.
    pub fn fresh_wedge<A: Assertion>(&mut self) -> Rc<Clause<A>> {
        self.counters.wedges_created += 1;
        let id = self.rng.gen_range(0..100_000_000);
        Rc::new(Clause::fresh_wedge(id))
    }
}

/// DNF-style negation of a per-variable map of asserted types.
///
/// Each variable maps to a conjunction of disjunctions over assertions. A conjunction of
/// singletons negates to the single disjunction of the complements; a lone disjunction negates
/// to the conjunction of singleton complements; any shape wider than that is dropped rather than
/// distributed.
pub fn negate_types<A: Assertion>(
    all_types: BTreeMap<VarId, Vec<Vec<A>>>,
) -> BTreeMap<VarId, Vec<Vec<A>>> {
    let mut negated: BTreeMap<VarId, Vec<Vec<A>>> = BTreeMap::new();

    for (var, var_types) in all_types {
        if var_types.len() > 1 {
            let mut too_wide = false;
            let mut complements = Vec::with_capacity(var_types.len());
            for types in &var_types {
                if types.len() > 1 {
                    too_wide = true;
                    break;
                }
                if let Some(only) = types.first() {
                    complements.push(only.negate());
                }
            }
            if !too_wide {
                negated.insert(var, vec![complements]);
            }
        } else if let Some(only) = var_types.first() {
            let expanded = only.iter().map(|assertion| vec![assertion.negate()]).collect();
            negated.insert(var, expanded);
        }
    }

    negated
}
