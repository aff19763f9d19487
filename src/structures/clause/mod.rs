//! Clauses, aka. disjunctions of assertions keyed by the variable they constrain.
//!
//! A clause with possibilities `{x: [A, B], y: [C]}` is read `x is A OR x is B OR y is C`: the
//! inner lists and the outer map are flattened into a single disjunction over `(var, assertion)`
//! pairs. A clause with one variable and one assertion is a *unit clause*.
//!
//! Two kinds of clause carry no possibilities:
//! - A *wedge* stands for "unknown/ambiguous". It is always satisfiable and is inert in every
//!   procedure: it neither resolves against other clauses nor subsumes them.
//! - A non-wedge clause can lose its last possibility during combination, leaving an empty
//!   disjunction. Such a clause is never satisfiable, and callers treat it accordingly.
//!
//! Clauses are immutable once constructed. Every operation which would modify a clause returns a
//! fresh value with a recomputed [hash](Clause#structfield.hash), and formulae share clauses
//! through [Rc](std::rc::Rc). The hash covers the rendered possibilities together with the
//! wedge/reconcilable/generated flags, so content-equal clauses compare equal regardless of the
//! conditional that created them.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    hash::{Hash, Hasher},
};

use crate::structures::assertion::Assertion;

/// The identifier of a program variable, opaque to the algebra.
pub type VarId = String;

/// The identifier of the conditional (or other syntactic element) a clause was created from.
pub type ConditionalId = u32;

/// The possibilities of a clause: for each variable, a non-empty list of assertions of which the
/// variable satisfies at least one.
pub type Possibilities<A> = BTreeMap<VarId, Vec<A>>;

/// Whether a variable was introduced by the analyzer rather than read from source.
///
/// Synthetic variables are prefixed `'*'`. Formulae over nothing but synthetic variables are
/// passed through simplification wholesale, and synthetic facts are never extracted as truths.
pub fn is_synthetic(var: &str) -> bool {
    var.starts_with('*')
}

/// A single disjunction within a formula.
#[derive(Clone, Debug)]
pub struct Clause<A: Assertion> {
    /// The disjoined assertions, keyed by the variable they constrain.
    /// Inner lists are non-empty; a variable whose list empties is removed.
    pub possibilities: Possibilities<A>,

    /// The rendered form of every possibility, cached for textual comparison and hashing.
    pub possibility_strings: BTreeMap<VarId, BTreeSet<String>>,

    /// The negation of every possibility, grouped by var.
    /// `None` until [calculate_negation](Clause::calculate_negation) is called.
    pub impossibilities: Option<Possibilities<A>>,

    /// Marks the "unknown/ambiguous" clause.
    pub wedge: bool,

    /// Whether the clause may participate in simplification and truth extraction.
    pub reconcilable: bool,

    /// True if the clause was produced by a logical transformation rather than directly from
    /// source.
    pub generated: bool,

    /// Vars whose previously established facts must not carry across this clause.
    pub redefined_vars: BTreeSet<VarId>,

    /// The conditional this clause was created from.
    pub creating_conditional_id: ConditionalId,

    /// The syntactic element this clause was created from.
    pub creating_object_id: ConditionalId,

    /// Content-addressed identity: covers the rendered possibilities and the
    /// wedge/reconcilable/generated flags, nothing else.
    pub hash: u64,
}

fn rendered_hash(
    possibility_strings: &BTreeMap<VarId, BTreeSet<String>>,
    wedge: bool,
    reconcilable: bool,
    generated: bool,
) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    wedge.hash(&mut hasher);
    reconcilable.hash(&mut hasher);
    generated.hash(&mut hasher);
    for (var, rendered) in possibility_strings {
        var.hash(&mut hasher);
        for string in rendered {
            string.hash(&mut hasher);
        }
    }
    hasher.finish()
}

/// `list` deduplicated by rendered form, in first-occurrence order.
pub(crate) fn unique_by_rendering<A: Assertion>(list: &[A]) -> Vec<A> {
    let mut rendered = BTreeSet::new();
    let mut unique = Vec::with_capacity(list.len());
    for assertion in list {
        if rendered.insert(assertion.to_string()) {
            unique.push(assertion.clone());
        }
    }
    unique
}

impl<A: Assertion> Clause<A> {
    /// Constructs a clause, computing its rendered possibilities and hash.
    ///
    /// Variables whose possibility list is empty are dropped.
    pub fn new(
        possibilities: Possibilities<A>,
        creating_conditional_id: ConditionalId,
        creating_object_id: ConditionalId,
        wedge: bool,
        reconcilable: bool,
        generated: bool,
        redefined_vars: BTreeSet<VarId>,
    ) -> Self {
        let possibilities: Possibilities<A> = possibilities
            .into_iter()
            .filter(|(_, list)| !list.is_empty())
            .collect();

        let possibility_strings: BTreeMap<VarId, BTreeSet<String>> = possibilities
            .iter()
            .map(|(var, list)| {
                let rendered = list.iter().map(ToString::to_string).collect();
                (var.clone(), rendered)
            })
            .collect();

        let hash = rendered_hash(&possibility_strings, wedge, reconcilable, generated);

        Clause {
            possibilities,
            possibility_strings,
            impossibilities: None,
            wedge,
            reconcilable,
            generated,
            redefined_vars,
            creating_conditional_id,
            creating_object_id,
            hash,
        }
    }

    /// A clause read directly from source: not a wedge, reconcilable, not generated, and
    /// redefining nothing.
    pub fn from_possibilities(
        possibilities: Possibilities<A>,
        creating_conditional_id: ConditionalId,
        creating_object_id: ConditionalId,
    ) -> Self {
        Self::new(
            possibilities,
            creating_conditional_id,
            creating_object_id,
            false,
            true,
            false,
            BTreeSet::new(),
        )
    }

    /// The wedge clause, tagged with the conditional it stands in for.
    pub fn fresh_wedge(id: ConditionalId) -> Self {
        Self::new(Possibilities::new(), id, id, true, true, false, BTreeSet::new())
    }

    /// Whether the clause asserts exactly one possibility for exactly one variable.
    pub fn is_unit(&self) -> bool {
        !self.wedge
            && self.possibilities.len() == 1
            && self
                .possibilities
                .values()
                .next()
                .map_or(false, |list| list.len() == 1)
    }

    /// The clause with each variable's possibilities deduplicated by rendered form, in
    /// first-occurrence order.
    pub fn make_unique(&self) -> Self {
        let possibilities = self
            .possibilities
            .iter()
            .map(|(var, list)| (var.clone(), unique_by_rendering(list)))
            .collect();

        Self::new(
            possibilities,
            self.creating_conditional_id,
            self.creating_object_id,
            self.wedge,
            self.reconcilable,
            self.generated,
            self.redefined_vars.clone(),
        )
    }

    /// The clause without `var`, or `None` if nothing would remain.
    pub fn remove_possibilities(&self, var: &str) -> Option<Self> {
        let mut possibilities = self.possibilities.clone();
        possibilities.remove(var);

        if possibilities.is_empty() {
            return None;
        }

        Some(Self::new(
            possibilities,
            self.creating_conditional_id,
            self.creating_object_id,
            self.wedge,
            self.reconcilable,
            self.generated,
            self.redefined_vars.clone(),
        ))
    }

    /// The clause with `extras` unioned into `var`'s possibilities.
    pub fn add_possibilities(&self, var: &str, extras: Vec<A>) -> Self {
        let mut possibilities = self.possibilities.clone();
        let list = possibilities.entry(var.to_string()).or_default();
        list.extend(extras);
        let list = unique_by_rendering(list);
        possibilities.insert(var.to_string(), list);

        Self::new(
            possibilities,
            self.creating_conditional_id,
            self.creating_object_id,
            self.wedge,
            self.reconcilable,
            self.generated,
            self.redefined_vars.clone(),
        )
    }

    /// The clause with `var`'s possibilities swapped for `list`.
    pub(crate) fn replace_possibilities(&self, var: &str, list: Vec<A>) -> Self {
        let mut possibilities = self.possibilities.clone();
        possibilities.insert(var.to_string(), list);

        Self::new(
            possibilities,
            self.creating_conditional_id,
            self.creating_object_id,
            self.wedge,
            self.reconcilable,
            self.generated,
            self.redefined_vars.clone(),
        )
    }

    /// Whether every `(var, assertion)` pair of `other` appears in `self`.
    ///
    /// In the resolution sense this makes `self` the weaker clause: if the subset disjunction
    /// `other` holds, the superset `self` is redundant.
    pub fn contains(&self, other: &Self) -> bool {
        other.possibility_strings.iter().all(|(var, rendered)| {
            self.possibility_strings
                .get(var)
                .map_or(false, |own| rendered.is_subset(own))
        })
    }

    /// The clause with its [impossibilities](Clause#structfield.impossibilities) computed: the
    /// negation of every possibility, grouped by var.
    pub fn calculate_negation(&self) -> Self {
        let impossibilities = self
            .possibilities
            .iter()
            .map(|(var, list)| {
                let negated = list.iter().map(Assertion::negate).collect();
                (var.clone(), negated)
            })
            .collect();

        let mut negated = self.clone();
        negated.impossibilities = Some(impossibilities);
        negated
    }
}

impl<A: Assertion> PartialEq for Clause<A> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl<A: Assertion> Eq for Clause<A> {}

impl<A: Assertion> Hash for Clause<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<A: Assertion> PartialOrd for Clause<A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Assertion> Ord for Clause<A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl<A: Assertion> fmt::Display for Clause<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wedge {
            return write!(f, "<wedge>");
        }

        let mut later = false;
        for (var, list) in &self.possibilities {
            for assertion in list {
                if later {
                    write!(f, " || ")?;
                }
                write!(f, "{var}={assertion}")?;
                later = true;
            }
        }
        Ok(())
    }
}
