use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use proptest::prelude::*;

use clausal::config::Config;
use clausal::context::Context;
use clausal::structures::assertion::CAssertion;
use clausal::structures::clause::{Clause, Possibilities};

const TYPES: [&str; 4] = ["string", "int", "bool", "float"];
const VARS: [&str; 3] = ["$a", "$b", "$c"];

// ============================================================================
// Strategies
// ============================================================================

fn any_positive() -> impl Strategy<Value = CAssertion> {
    proptest::sample::select(TYPES.to_vec()).prop_map(CAssertion::is)
}

fn any_assertion() -> impl Strategy<Value = CAssertion> {
    (proptest::sample::select(TYPES.to_vec()), any::<bool>()).prop_map(|(name, positive)| {
        match positive {
            true => CAssertion::is(name),
            false => CAssertion::is_not(name),
        }
    })
}

prop_compose! {
    fn unit_clause()(
        var in proptest::sample::select(VARS.to_vec()),
        assertion in any_assertion(),
    ) -> Rc<Clause<CAssertion>> {
        let mut possibilities = Possibilities::new();
        possibilities.insert(var.to_string(), vec![assertion]);
        Rc::new(Clause::from_possibilities(possibilities, 1, 1))
    }
}

prop_compose! {
    fn positive_clause()(
        entries in proptest::collection::btree_map(
            proptest::sample::select(VARS.to_vec()).prop_map(str::to_string),
            proptest::collection::vec(any_positive(), 1..3),
            1..3,
        ),
    ) -> Rc<Clause<CAssertion>> {
        Rc::new(Clause::from_possibilities(entries, 1, 1))
    }
}

prop_compose! {
    fn mixed_clause()(
        entries in proptest::collection::btree_map(
            proptest::sample::select(VARS.to_vec()).prop_map(str::to_string),
            proptest::collection::vec(any_assertion(), 1..3),
            1..3,
        ),
    ) -> Rc<Clause<CAssertion>> {
        Rc::new(Clause::from_possibilities(entries, 1, 1))
    }
}

/// A formula whose clauses constrain pairwise disjoint variables, each with a set of positive
/// alternatives. Negation distributes over such formulae exactly.
fn disjoint_formula(max_clauses: usize, max_types: usize) -> impl Strategy<Value = Vec<Rc<Clause<CAssertion>>>> {
    proptest::collection::vec(
        proptest::sample::subsequence(TYPES.to_vec(), 1..=max_types),
        1..=max_clauses,
    )
    .prop_map(|per_clause| {
        per_clause
            .into_iter()
            .enumerate()
            .map(|(index, names)| {
                let mut possibilities = Possibilities::new();
                possibilities.insert(
                    VARS[index].to_string(),
                    names.into_iter().map(CAssertion::is).collect(),
                );
                Rc::new(Clause::from_possibilities(possibilities, 1, 1))
            })
            .collect()
    })
}

// ============================================================================
// Truth tables
// ============================================================================

type Atom = (String, String);
type Assignment = BTreeMap<Atom, bool>;

/// The positive core of an assertion, plus its polarity.
fn polarity(assertion: &CAssertion) -> (String, bool) {
    match assertion {
        CAssertion::Is(name) => (name.clone(), true),
        CAssertion::IsNot(name) => (name.clone(), false),
        CAssertion::Falsy => ("falsy".to_string(), true),
        CAssertion::Truthy => ("falsy".to_string(), false),
    }
}

fn formula_atoms(clauses: &[Rc<Clause<CAssertion>>]) -> BTreeSet<Atom> {
    let mut atoms = BTreeSet::new();
    for clause in clauses {
        for (var, list) in &clause.possibilities {
            for assertion in list {
                let (name, _) = polarity(assertion);
                atoms.insert((var.clone(), name));
            }
        }
    }
    atoms
}

fn all_assignments(atoms: &BTreeSet<Atom>) -> Vec<Assignment> {
    let atoms: Vec<Atom> = atoms.iter().cloned().collect();
    (0..(1usize << atoms.len()))
        .map(|bits| {
            atoms
                .iter()
                .enumerate()
                .map(|(index, atom)| (atom.clone(), bits & (1 << index) != 0))
                .collect()
        })
        .collect()
}

fn eval_clause(clause: &Clause<CAssertion>, assignment: &Assignment) -> bool {
    if clause.wedge {
        return true;
    }
    clause.possibilities.iter().any(|(var, list)| {
        list.iter().any(|assertion| {
            let (name, positive) = polarity(assertion);
            let value = assignment
                .get(&(var.clone(), name))
                .copied()
                .unwrap_or(false);
            match positive {
                true => value,
                false => !value,
            }
        })
    })
}

fn eval_formula(clauses: &[Rc<Clause<CAssertion>>], assignment: &Assignment) -> bool {
    clauses.iter().all(|clause| eval_clause(clause, assignment))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_simplify_idempotent_on_units(
        formula in proptest::collection::vec(unit_clause(), 1..8),
    ) {
        let mut ctx = Context::from_config(Config::default());

        let once = ctx.simplify_cnf(&formula);
        let twice = ctx.simplify_cnf(&once);

        let once_hashes: Vec<u64> = once.iter().map(|clause| clause.hash).collect();
        let twice_hashes: Vec<u64> = twice.iter().map(|clause| clause.hash).collect();
        prop_assert_eq!(once_hashes, twice_hashes);
    }

    #[test]
    fn prop_simplify_preserves_positive_models(
        formula in proptest::collection::vec(positive_clause(), 1..5),
    ) {
        let mut ctx = Context::from_config(Config::default());
        let simplified = ctx.simplify_cnf(&formula);

        let atoms = formula_atoms(&formula);
        for assignment in all_assignments(&atoms) {
            prop_assert_eq!(
                eval_formula(&formula, &assignment),
                eval_formula(&simplified, &assignment),
            );
        }
    }

    #[test]
    fn prop_negation_complements(formula in disjoint_formula(3, 3)) {
        let mut ctx = Context::from_config(Config::default());
        let negated = ctx.negate_formula(&formula).expect("small formula");

        let atoms = formula_atoms(&formula);
        for assignment in all_assignments(&atoms) {
            prop_assert_eq!(
                eval_formula(&negated, &assignment),
                !eval_formula(&formula, &assignment),
            );
        }
    }

    #[test]
    fn prop_double_negation_is_equivalent(formula in disjoint_formula(2, 2)) {
        let mut ctx = Context::from_config(Config::default());
        let there = ctx.negate_formula(&formula).expect("small formula");
        let back = ctx.negate_formula(&there).expect("small formula");

        let atoms = formula_atoms(&formula);
        for assignment in all_assignments(&atoms) {
            prop_assert_eq!(
                eval_formula(&back, &assignment),
                eval_formula(&formula, &assignment),
            );
        }
    }

    #[test]
    fn prop_combination_commutes(
        left in proptest::collection::vec(mixed_clause(), 1..4),
        right in proptest::collection::vec(mixed_clause(), 1..4),
    ) {
        let mut ctx = Context::from_config(Config::default());

        let mut one_way: Vec<u64> = ctx
            .combine_ored_clauses(&left, &right, 9)
            .iter()
            .map(|clause| clause.hash)
            .collect();
        let mut other_way: Vec<u64> = ctx
            .combine_ored_clauses(&right, &left, 9)
            .iter()
            .map(|clause| clause.hash)
            .collect();

        one_way.sort_unstable();
        other_way.sort_unstable();
        prop_assert_eq!(one_way, other_way);
    }

    #[test]
    fn prop_equal_hashes_contain_each_other(clause in mixed_clause()) {
        let reversed: Possibilities<CAssertion> = clause
            .possibilities
            .iter()
            .map(|(var, list)| {
                let backwards: Vec<CAssertion> = list.iter().rev().cloned().collect();
                (var.clone(), backwards)
            })
            .collect();
        let restated = Clause::from_possibilities(reversed, 99, 99);

        prop_assert_eq!(clause.hash, restated.hash);
        prop_assert!(clause.contains(&restated) && restated.contains(&clause));
    }
}
