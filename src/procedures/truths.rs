/*!
Truth extraction.

A clause pins a variable down when it is reconcilable and constrains exactly one variable: a unit
clause fixes a single assertion, and a wider one-variable clause fixes a disjunction --- provided
the disjunction says something (only falsy markers and non-negative assertions; a disjunction
containing "is not X" rules nothing in). Synthetic variables are never reported.

For the method, see: [truths_from_formula](GenericContext::truths_from_formula).
*/

use std::{
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        assertion::Assertion,
        clause::{is_synthetic, Clause, ConditionalId, VarId},
    },
};

/// For each variable, the disjunctions of assertions a formula establishes, in clause order.
pub type TruthMap<A> = BTreeMap<VarId, Vec<Vec<A>>>;

/// What a formula establishes per variable.
pub struct Truths<A: Assertion> {
    /// Every established fact.
    pub truths: TruthMap<A>,

    /// The subset of [truths](Truths#structfield.truths) attributable to the conditional the
    /// caller asked about.
    pub active_truths: TruthMap<A>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads the per-variable facts `clauses` establishes.
    ///
    /// `cond_referenced_var_ids` is the caller's record of variables referenced directly by the
    /// conditional under analysis; variables whose only fact came from a generated
    /// multi-possibility clause are deleted from it, as the variable never appeared in source.
    pub fn truths_from_formula<A: Assertion>(
        &self,
        clauses: &[Rc<Clause<A>>],
        creating_conditional_id: Option<ConditionalId>,
        cond_referenced_var_ids: &mut BTreeSet<VarId>,
    ) -> Truths<A> {
        let mut truths: TruthMap<A> = TruthMap::new();
        let mut active_truths: TruthMap<A> = TruthMap::new();

        for clause in clauses {
            if !clause.reconcilable || clause.possibilities.len() != 1 {
                continue;
            }
            let Some((var, possible_types)) = clause.possibilities.iter().next() else {
                continue;
            };
            if is_synthetic(var) {
                continue;
            }

            if let [only] = possible_types.as_slice() {
                let redefines = clause.redefined_vars.contains(var);
                if !redefines && truths.contains_key(var) {
                    if let Some(existing) = truths.get_mut(var) {
                        existing.push(vec![only.clone()]);
                    }
                } else {
                    truths.insert(var.clone(), vec![vec![only.clone()]]);
                }
            } else {
                let sayable: Vec<A> = possible_types
                    .iter()
                    .filter(|possible| possible.is_falsy() || !possible.is_negation())
                    .cloned()
                    .collect();

                if sayable.is_empty() || sayable.len() != possible_types.len() {
                    continue;
                }

                if clause.generated && cond_referenced_var_ids.remove(var) {
                    log::debug!(target: targets::TRUTHS,
                        "{var} known only through a generated clause, unmarked as referenced");
                }
                truths.insert(var.clone(), vec![sayable]);
            }

            if creating_conditional_id == Some(clause.creating_conditional_id) {
                if let Some(established) = truths.get(var) {
                    active_truths.insert(var.clone(), established.clone());
                }
            }
        }

        Truths {
            truths,
            active_truths,
        }
    }
}
