/*!
Error types used in the library.

- [ComplicatedExpression](ErrorKind::ComplicatedExpression) is internally expected --- negating a
  deeply nested condition can require distributing past any reasonable bound, and callers catch
  the error to skip refinement of the offending conditional.
- [InvalidState](ErrorKind::InvalidState) is not --- it marks a caller bug, and aborts analysis of
  the surrounding unit.

Every other bound violation degrades silently to an empty result or a passthrough; partial
information is always safer for an analyzer than a crash.
*/

/// A union of varied error kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Negating a formula would generate more clauses than the configured ceiling.
    ComplicatedExpression,

    /// The attempted action could not be completed given the state of a clause.
    ///
    /// At present this only marks grouping a clause whose impossibilities were never calculated.
    InvalidState,
}
