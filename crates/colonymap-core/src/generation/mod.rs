//! Generation - procedural planets and star names

mod names;
mod planets;

pub use names::*;
pub use planets::*;
