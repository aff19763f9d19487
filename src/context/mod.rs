//! The context --- within which formulae are simplified, negated, queried, and combined.
//!
//! Strictly, a [GenericContext] and a [Context].
//!
//! The generic context is designed to be generic over various parameters.
//! Though, for the moment this is limited to the source of randomness, which supplies provenance
//! ids for wedge clauses.
//!
//! A context carries no formula state: every procedure takes clause values in and returns clause
//! values out, so one context may serve any number of interleaved formulae. What the context does
//! hold are the configured [ceilings](crate::config::Config), [counters](Counters), and the rng.
//!
//! # Example
//! ```rust
//! # use std::rc::Rc;
//! # use clausal::config::Config;
//! # use clausal::context::Context;
//! # use clausal::structures::assertion::CAssertion;
//! # use clausal::structures::clause::{Clause, Possibilities};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut possibilities = Possibilities::new();
//! possibilities.insert("$x".to_string(), vec![CAssertion::is("string")]);
//! let clause = Rc::new(Clause::from_possibilities(possibilities, 1, 1));
//!
//! let negated = the_context.negate_formula(&[clause]).expect("within ceilings");
//! assert_eq!(negated.len(), 1);
//! assert_eq!(negated[0].to_string(), "$x=!string");
//! ```

mod counters;
pub use counters::Counters;

use rand::SeedableRng;

use crate::{config::Config, generic::split_mix::SplitMix64};

/// A generic context, parameterised to a source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from a configuration and a given source of randomness.
    pub fn from_parts(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            rng,
        }
    }
}

/// A context which uses [SplitMix64] as a source of randomness.
pub type Context = GenericContext<SplitMix64>;

impl Context {
    /// Creates a context from some given configuration, with a fixed rng seed.
    pub fn from_config(config: Config) -> Self {
        Self::from_parts(config, SplitMix64::from_seed(0_u64.to_le_bytes()))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
