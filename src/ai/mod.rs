//! The computer opponent: a Monte-Carlo column chooser over an injected
//! random source.

mod monte_carlo;
mod random_source;

pub use monte_carlo::{MonteCarloAgent, HINT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use random_source::{RandomSource, StdRandomSource};
