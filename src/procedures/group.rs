/*!
Grouping of impossibilities, the distributive step of negation.

The negation of a conjunction of clauses holds exactly when every clause has some failed
possibility, so the negated formula is built by choosing one
[impossibility](crate::structures::clause::Clause#structfield.impossibilities) from each clause
and taking all such choices together: a cross-product of the input, in conjunctive normal form.

A choice which puts an assertion and its complement in the same disjunction is a tautology, and
both halves of the pair are removed; a clause left with no possibilities at all is dropped.

The cross-product is bounded by the
[grouping cap](crate::config::Config#structfield.grouping_cap). Past the cap the formula is
declared [complicated](crate::types::err::ErrorKind::ComplicatedExpression) --- the caller skips
refinement of the offending conditional rather than distributing forever.

For the method, see: [group_impossibilities](GenericContext::group_impossibilities).
*/

use std::{collections::BTreeSet, rc::Rc};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        assertion::Assertion,
        clause::{unique_by_rendering, Clause, Possibilities},
    },
    types::err::{self},
};

/// `list` with `extra` unioned in and every mutually negated pair dropped, both halves at once.
fn merge_without_tautologies<A: Assertion>(list: &[A], extra: &A) -> Vec<A> {
    let mut merged: Vec<A> = list.to_vec();
    merged.push(extra.clone());
    let merged = unique_by_rendering(&merged);

    let mut dropped: BTreeSet<usize> = BTreeSet::new();
    for x in 0..merged.len() {
        for y in x + 1..merged.len() {
            if !dropped.contains(&x)
                && !dropped.contains(&y)
                && merged[x].is_negation_of(&merged[y])
            {
                dropped.insert(x);
                dropped.insert(y);
            }
        }
    }

    if dropped.is_empty() {
        return merged;
    }

    merged
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !dropped.contains(index))
        .map(|(_, assertion)| assertion)
        .collect()
}

impl<R: rand::Rng> GenericContext<R> {
    /// The conjunctive normal form of the negation of `clauses`.
    ///
    /// Every clause is expected to carry
    /// [calculated](crate::structures::clause::Clause::calculate_negation) impossibilities;
    /// a clause without them is an [InvalidState](err::ErrorKind::InvalidState).
    ///
    /// For details, see the [group](crate::procedures::group) procedure.
    pub fn group_impossibilities<A: Assertion>(
        &mut self,
        clauses: &[Rc<Clause<A>>],
    ) -> Result<Vec<Rc<Clause<A>>>, err::ErrorKind> {
        let cap = self.config.grouping_cap.value;
        let mut complexity: usize = 1;

        let mut remaining: Vec<Rc<Clause<A>>> = clauses.to_vec();
        let Some(seed_clause) = remaining.pop() else {
            return Ok(vec![]);
        };

        let mut grouped: Vec<Rc<Clause<A>>> = vec![];
        if !seed_clause.wedge {
            let Some(impossibilities) = &seed_clause.impossibilities else {
                return Err(err::ErrorKind::InvalidState);
            };
            for (var, impossible_types) in impossibilities {
                for impossible in impossible_types {
                    let mut possibilities = Possibilities::new();
                    possibilities.insert(var.clone(), vec![impossible.clone()]);

                    grouped.push(Rc::new(Clause::new(
                        possibilities,
                        seed_clause.creating_conditional_id,
                        seed_clause.creating_object_id,
                        false,
                        true,
                        false,
                        BTreeSet::new(),
                    )));
                    complexity += 1;
                }
            }
        }

        if remaining.is_empty() || grouped.is_empty() {
            self.counters.clauses_grouped += grouped.len();
            return Ok(grouped);
        }

        while let Some(clause) = remaining.pop() {
            let Some(impossibilities) = &clause.impossibilities else {
                return Err(err::ErrorKind::InvalidState);
            };

            let mut crossed: Vec<Rc<Clause<A>>> = vec![];
            for grouped_clause in &grouped {
                for (var, impossible_types) in impossibilities {
                    for impossible in impossible_types {
                        let mut possibilities = grouped_clause.possibilities.clone();

                        let merged = match possibilities.get(var) {
                            Some(existing) => merge_without_tautologies(existing, impossible),
                            None => vec![impossible.clone()],
                        };
                        match merged.is_empty() {
                            true => {
                                possibilities.remove(var);
                            }
                            false => {
                                possibilities.insert(var.clone(), merged);
                            }
                        }

                        if possibilities.is_empty() {
                            continue;
                        }

                        complexity += 1;
                        if complexity > cap {
                            log::info!(target: targets::GROUPING,
                                "negation grew past {cap} clauses, giving up");
                            return Err(err::ErrorKind::ComplicatedExpression);
                        }

                        crossed.push(Rc::new(Clause::new(
                            possibilities,
                            clause.creating_conditional_id,
                            clause.creating_object_id,
                            false,
                            true,
                            true,
                            BTreeSet::new(),
                        )));
                    }
                }
            }

            grouped = crossed;
        }

        self.counters.clauses_grouped += complexity;
        log::debug!(target: targets::GROUPING,
            "{} clauses grouped into {}",
            clauses.len(),
            grouped.len());

        Ok(grouped)
    }
}
