//! provides basic math functions

pub mod abel;
pub mod fermat;
pub mod galois;
pub mod gauss;

pub use abel::{AbelianGroup, AbelianMonoid, Inv};
pub use fermat::PrimeModulus;
pub use galois::{primefield::PrimeField, smallfield::SmallField, FiniteField};
pub use gauss::Uint;
