//! Concrete rings for tests

mod boolean;
mod integers;
mod matrix;
mod mislabeled;
mod modular;

pub use boolean::BooleanSemiring;
pub use integers::Integers;
pub use matrix::{Mat2, MatrixRing};
pub use mislabeled::Mislabeled;
pub use modular::ZMod;
