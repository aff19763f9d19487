/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of formulae taken through simplification.
    pub formulae_simplified: usize,

    /// A count of formulae negated.
    pub formulae_negated: usize,

    /// A count of formulae combined under OR.
    pub formulae_combined: usize,

    /// A count of every clause generated while distributing impossibilities, including clauses
    /// later merged or dropped.
    pub clauses_grouped: usize,

    /// A count of wedge clauses handed out in place of an empty negation.
    pub wedges_created: usize,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            formulae_simplified: 0,
            formulae_negated: 0,
            formulae_combined: 0,

            clauses_grouped: 0,
            wedges_created: 0,
        }
    }
}
