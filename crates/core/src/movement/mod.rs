//! Price movement arithmetic.

mod movement_calculator;

pub use movement_calculator::*;
