/*!
Simplification of a formula.

Four passes, each preserving what the formula says about its variables:

1. Deduplication by content hash.
2. Resolution against complementary literals.
   A unit clause `(a)` strips `¬a` wherever it appears, so `(a) ∧ (¬a ∨ b)` becomes
   `(a) ∧ (b)`; and two clauses over the same variables which disagree on exactly one,
   singly-asserted, mutually negated variable resolve to their shared remainder, so
   `(a ∨ x) ∧ (¬a ∨ x)` becomes `(x)`.
3. Subsumption. A clause containing every literal of another clause is the weaker of the two and
   is dropped.
4. A windowed pairwise pass which removes clauses derivable from a resolvable pair:
   in `(a ∨ x) ∧ (¬a ∨ y) ∧ (x ∨ y)` the third clause is the resolvent of the first two and is
   dropped.

The passes are heuristic. They run in clause order, a mutation in one step is visible to the
next, and no fixpoint is sought, so two orderings of one formula may simplify to different ---
logically equivalent --- results. Callers must not rely on a canonical form.

For the method, see: [simplify_cnf](GenericContext::simplify_cnf).
*/

use std::{
    collections::{BTreeSet, HashSet},
    rc::Rc,
};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        assertion::Assertion,
        clause::{is_synthetic, Clause, Possibilities},
    },
};

/// Whether two clauses constrain exactly the same variables.
fn same_key_set<A: Assertion>(a: &Clause<A>, b: &Clause<A>) -> bool {
    a.possibilities.len() == b.possibilities.len() && a.possibilities.keys().eq(b.possibilities.keys())
}

impl<R: rand::Rng> GenericContext<R> {
    /// Simplifies the conjunction of `clauses`.
    ///
    /// The result holds exactly when the input holds. An empty result means the formula was
    /// trivially true --- or too large to reason about, per the
    /// [simplification cap](crate::config::Config#structfield.simplification_cap).
    ///
    /// For details on the passes see the [simplify](crate::procedures::simplify) procedure.
    pub fn simplify_cnf<A: Assertion>(&mut self, clauses: &[Rc<Clause<A>>]) -> Vec<Rc<Clause<A>>> {
        self.counters.formulae_simplified += 1;

        if clauses.len() > self.config.simplification_cap.value {
            log::info!(target: targets::SIMPLIFY,
                "{} clauses exceed the cap of {}, returning the trivially true formula",
                clauses.len(),
                self.config.simplification_cap.value);
            return vec![];
        }

        if clauses.len() > self.config.synthetic_passthrough.value
            && clauses
                .iter()
                .all(|clause| clause.possibilities.keys().all(|var| is_synthetic(var)))
        {
            log::debug!(target: targets::SIMPLIFY,
                "passing {} clauses over synthetic vars through unsimplified",
                clauses.len());
            return clauses.to_vec();
        }

        let mut simplified: Vec<Rc<Clause<A>>> = Vec::with_capacity(clauses.len());
        let mut hashes: HashSet<u64> = HashSet::with_capacity(clauses.len());
        for clause in clauses {
            let unique = clause.make_unique();
            let unique = match unique.hash == clause.hash {
                true => clause.clone(),
                false => Rc::new(unique),
            };
            if hashes.insert(unique.hash) {
                simplified.push(unique);
            }
        }

        resolve_complementary_literals(&mut simplified);

        let mut kept = subsume(&simplified);

        let window = self.config.resolution_window.value;
        if kept.len() > 2 && kept.len() < window {
            remove_resolvents(&mut kept);
        }

        log::debug!(target: targets::SIMPLIFY,
            "{} clauses in, {} clauses out",
            clauses.len(),
            kept.len());

        kept
    }
}

/// Resolution against complementary literals, in place.
fn resolve_complementary_literals<A: Assertion>(simplified: &mut Vec<Rc<Clause<A>>>) {
    let mut i = 0;
    'next_clause: while i < simplified.len() {
        let clause_a = simplified[i].clone();
        if !clause_a.reconcilable || clause_a.wedge {
            i += 1;
            continue;
        }

        if !clause_a.is_unit() {
            // Two clauses over the same keys which disagree on exactly one singly-asserted,
            // mutually negated key resolve to their shared remainder.
            let mut current = clause_a;
            let mut reduced = false;

            for j in 0..simplified.len() {
                if j == i {
                    continue;
                }
                let clause_b = simplified[j].clone();
                if !clause_b.reconcilable || clause_b.wedge || !same_key_set(&current, &clause_b) {
                    continue;
                }

                let mut opposing_keys = vec![];
                for (var, a_list) in &current.possibilities {
                    if current.possibility_strings.get(var) == clause_b.possibility_strings.get(var) {
                        continue;
                    }
                    let Some(b_list) = clause_b.possibilities.get(var) else {
                        continue;
                    };
                    if let ([a_only], [b_only]) = (a_list.as_slice(), b_list.as_slice()) {
                        if a_only.is_negation_of(b_only) {
                            opposing_keys.push(var.clone());
                        }
                    }
                }

                if let [opposing] = opposing_keys.as_slice() {
                    match current.remove_possibilities(opposing) {
                        None => {
                            simplified.remove(i);
                            continue 'next_clause;
                        }
                        Some(next) => {
                            log::debug!(target: targets::SIMPLIFY,
                                "resolved {opposing} out of ({current})");
                            current = Rc::new(next);
                            reduced = true;
                        }
                    }
                }
            }

            if reduced {
                let duplicate = simplified
                    .iter()
                    .enumerate()
                    .any(|(k, clause)| k != i && clause.hash == current.hash);
                if duplicate {
                    simplified.remove(i);
                    continue 'next_clause;
                }
                simplified[i] = current;
            }

            i += 1;
            continue;
        }

        // A unit clause strips its complement from every other clause.
        let Some((var, list)) = clause_a.possibilities.iter().next() else {
            i += 1;
            continue;
        };
        let Some(only) = list.first() else {
            i += 1;
            continue;
        };
        let var = var.clone();
        let negated_string = only.negate().to_string();

        let mut j = 0;
        while j < simplified.len() {
            if j == i {
                j += 1;
                continue;
            }
            let clause_b = simplified[j].clone();
            if !clause_b.reconcilable || clause_b.wedge {
                j += 1;
                continue;
            }
            let Some(b_list) = clause_b.possibilities.get(&var) else {
                j += 1;
                continue;
            };

            let unmatched: Vec<A> = b_list
                .iter()
                .filter(|possible| possible.to_string() != negated_string)
                .cloned()
                .collect();
            if unmatched.len() == b_list.len() {
                j += 1;
                continue;
            }

            let replacement = match unmatched.is_empty() {
                true => clause_b.remove_possibilities(&var),
                false => Some(clause_b.replace_possibilities(&var, unmatched)),
            };

            match replacement {
                None => {
                    log::debug!(target: targets::SIMPLIFY,
                        "({clause_b}) contradicted by unit {var}, dropped");
                    simplified.remove(j);
                    if j < i {
                        i -= 1;
                    }
                }
                Some(next) => {
                    let duplicate = simplified
                        .iter()
                        .enumerate()
                        .any(|(k, clause)| k != j && clause.hash == next.hash);
                    if duplicate {
                        simplified.remove(j);
                        if j < i {
                            i -= 1;
                        }
                    } else {
                        simplified[j] = Rc::new(next);
                        j += 1;
                    }
                }
            }
        }

        i += 1;
    }
}

/// The clauses of `simplified` not subsumed by a stronger clause.
///
/// Wedges neither subsume nor are subsumed. Clauses which contain each other --- equal literals
/// under different flags --- keep their first representative.
fn subsume<A: Assertion>(simplified: &[Rc<Clause<A>>]) -> Vec<Rc<Clause<A>>> {
    let mut kept = Vec::with_capacity(simplified.len());

    for (i, clause_a) in simplified.iter().enumerate() {
        let mut redundant = false;
        if !clause_a.wedge {
            for (j, clause_b) in simplified.iter().enumerate() {
                if i == j || clause_b.wedge || !clause_a.contains(clause_b) {
                    continue;
                }
                if !clause_b.contains(clause_a) || j < i {
                    log::debug!(target: targets::SIMPLIFY,
                        "({clause_a}) subsumed by ({clause_b})");
                    redundant = true;
                    break;
                }
            }
        }
        if !redundant {
            kept.push(clause_a.clone());
        }
    }

    kept
}

/// Removes clauses which are the resolvent of a complementary pair already in the set.
///
/// Pairs are scanned on a snapshot of the set as it stood when the pass began; removals land on
/// the live set.
fn remove_resolvents<A: Assertion>(kept: &mut Vec<Rc<Clause<A>>>) {
    let snapshot: Vec<Rc<Clause<A>>> = kept.clone();

    for (i, clause_a) in snapshot.iter().enumerate() {
        for clause_b in snapshot.iter().skip(i + 1) {
            let common: BTreeSet<&String> = clause_a
                .possibilities
                .keys()
                .filter(|var| clause_b.possibilities.contains_key(*var))
                .collect();
            if common.is_empty() {
                continue;
            }

            let opposing_throughout = common.iter().all(|var| {
                let a_list = clause_a.possibilities.get(*var);
                let b_list = clause_b.possibilities.get(*var);
                match (a_list, b_list) {
                    (Some(a_list), Some(b_list)) => match (a_list.as_slice(), b_list.as_slice()) {
                        ([a_only], [b_only]) => a_only.is_negation_of(b_only),
                        _ => false,
                    },
                    _ => false,
                }
            });
            if !opposing_throughout {
                continue;
            }

            let mut resolvent: Possibilities<A> = Possibilities::new();
            for (var, list) in clause_a.possibilities.iter().chain(clause_b.possibilities.iter()) {
                if common.contains(var) {
                    continue;
                }
                resolvent.insert(var.clone(), list.clone());
            }
            if resolvent.is_empty() {
                continue;
            }

            let derivable = Clause::new(
                resolvent,
                clause_a.creating_conditional_id,
                clause_a.creating_object_id,
                false,
                true,
                false,
                BTreeSet::new(),
            );

            kept.retain(|clause| {
                if clause.hash == derivable.hash {
                    log::debug!(target: targets::SIMPLIFY,
                        "({clause}) derivable from ({clause_a}) and ({clause_b}), dropped");
                    false
                } else {
                    true
                }
            });
        }
    }
}
