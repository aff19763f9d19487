/*!
Configuration of a context.

All configuration amounts to resource ceilings: the algebra expands conjunctions of disjunctions,
and every expansion is capped so that a deeply nested conditional degrades to "no information
gained" instead of an exponential blow-up. The defaults are generous enough that ordinary source
never reaches them.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Hard limit on the clause count accepted for simplification.
    /// Formulae past the limit simplify to the empty (trivially true) formula.
    pub simplification_cap: ConfigOption<usize>,

    /// Clause count past which a formula over nothing but synthetic vars is passed through
    /// unsimplified.
    pub synthetic_passthrough: ConfigOption<usize>,

    /// Upper clause count (exclusive) for the pairwise resolution pass of the simplifier, which
    /// is quadratic in the clause count.
    pub resolution_window: ConfigOption<usize>,

    /// Limit on the clauses generated while distributing impossibilities across a formula.
    /// Exceeding it raises [ComplicatedExpression](crate::types::err::ErrorKind::ComplicatedExpression).
    pub grouping_cap: ConfigOption<usize>,

    /// Per-side clause limit when combining two formulae under OR.
    /// Larger inputs combine to the empty formula.
    pub combination_cap: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simplification_cap: ConfigOption {
                name: "simplification_cap",
                min: 0,
                max: usize::MAX,
                value: 65_536,
            },

            synthetic_passthrough: ConfigOption {
                name: "synthetic_passthrough",
                min: 0,
                max: usize::MAX,
                value: 50,
            },

            resolution_window: ConfigOption {
                name: "resolution_window",
                min: 0,
                max: usize::MAX,
                value: 256,
            },

            grouping_cap: ConfigOption {
                name: "grouping_cap",
                min: 0,
                max: usize::MAX,
                value: 20_000,
            },

            combination_cap: ConfigOption {
                name: "combination_cap",
                min: 0,
                max: usize::MAX,
                value: 60_000,
            },
        }
    }
}
