//! Generic structures, not tied to the algebra.

pub mod split_mix;
