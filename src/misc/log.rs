/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made when formulae hit a resource ceiling and when clauses are resolved
away.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const SIMPLIFY: &str = "simplify";
    pub const GROUPING: &str = "grouping";
    pub const NEGATION: &str = "negation";
    pub const TRUTHS: &str = "truths";
    pub const COMBINATION: &str = "combination";
}
