//! Compliance domain: what a dependency license is, which artifacts it
//! demands, and whether the organisation accepts it.
pub mod domain;
pub mod policies;
pub mod services;
