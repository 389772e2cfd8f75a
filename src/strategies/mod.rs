//! Strategy implementations.

pub mod adversarial;
pub mod random;
pub mod reflex;
pub mod search;
mod util;
