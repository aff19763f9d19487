/*!
Combination of two formulae under OR.

`L ∨ R` distributes to a conjunction over every pair of one clause from each side, the pair
merged into a single wider disjunction. Pairs which merge an assertion with its complement are
tautologies and are dropped wholesale; pairs of wedges collapse to one wedge for the whole
combination.

Merged clauses are tagged `generated` unless the combination was trivial (one clause either
side, neither of them generated), since a merged disjunction no longer corresponds to a single
piece of source.

For the method, see: [combine_ored_clauses](GenericContext::combine_ored_clauses).
*/

use std::{collections::BTreeSet, rc::Rc};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        assertion::Assertion,
        clause::{Clause, ConditionalId, Possibilities},
    },
};

impl<R: rand::Rng> GenericContext<R> {
    /// The conjunctive normal form of `left OR right`, the merge point tagged
    /// `conditional_object_id`.
    ///
    /// An empty result means a side was too large to combine, per the
    /// [combination cap](crate::config::Config#structfield.combination_cap).
    pub fn combine_ored_clauses<A: Assertion>(
        &mut self,
        left: &[Rc<Clause<A>>],
        right: &[Rc<Clause<A>>],
        conditional_object_id: ConditionalId,
    ) -> Vec<Rc<Clause<A>>> {
        self.counters.formulae_combined += 1;

        let cap = self.config.combination_cap.value;
        if left.len() > cap || right.len() > cap {
            log::info!(target: targets::COMBINATION,
                "{} x {} clauses exceed the cap of {cap}, nothing combined",
                left.len(),
                right.len());
            return vec![];
        }

        let mut all_wedges = true;
        let mut has_wedge = false;
        for left_clause in left {
            for right_clause in right {
                let both = left_clause.wedge && right_clause.wedge;
                all_wedges = all_wedges && both;
                has_wedge = has_wedge || both;
            }
        }
        if all_wedges {
            return vec![Rc::new(Clause::fresh_wedge(conditional_object_id))];
        }

        let multiple = left.len() > 1 || right.len() > 1;
        let mut combined: Vec<Rc<Clause<A>>> = Vec::with_capacity(left.len() * right.len());

        for left_clause in left {
            'pair: for right_clause in right {
                if left_clause.wedge && right_clause.wedge {
                    continue;
                }

                let can_reconcile = !left_clause.wedge
                    && !right_clause.wedge
                    && left_clause.reconcilable
                    && right_clause.reconcilable;

                let mut possibilities: Possibilities<A> = Possibilities::new();
                for (var, types) in &left_clause.possibilities {
                    if right_clause.redefined_vars.contains(var) {
                        continue;
                    }
                    possibilities.insert(var.clone(), types.clone());
                }
                for (var, types) in &right_clause.possibilities {
                    possibilities
                        .entry(var.clone())
                        .or_default()
                        .extend(types.iter().cloned());
                }

                if multiple {
                    for list in possibilities.values_mut() {
                        let mut rendered: BTreeSet<String> = BTreeSet::new();
                        list.retain(|assertion| rendered.insert(assertion.to_string()));
                    }
                }

                for list in possibilities.values() {
                    if let [first, second] = list.as_slice() {
                        if first.is_negation_of(second) {
                            log::debug!(target: targets::COMBINATION,
                                "tautological merge of ({left_clause}) and ({right_clause}) dropped");
                            continue 'pair;
                        }
                    }
                }

                let creating_conditional_id =
                    match left_clause.creating_conditional_id == right_clause.creating_conditional_id {
                        true => left_clause.creating_conditional_id,
                        false => conditional_object_id,
                    };

                combined.push(Rc::new(Clause::new(
                    possibilities,
                    creating_conditional_id,
                    creating_conditional_id,
                    false,
                    can_reconcile,
                    left_clause.generated || right_clause.generated || multiple,
                    BTreeSet::new(),
                )));
            }
        }

        if has_wedge {
            combined.push(Rc::new(Clause::fresh_wedge(conditional_object_id)));
        }

        combined
    }
}
