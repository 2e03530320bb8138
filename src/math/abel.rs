//! commutative ring arithmetic

use crate::protocol::error::Result;
use std::ops::{Mul, MulAssign};

/// supports multiplicative inverse operation
pub trait Inv: Sized {
    /// returns `x` with `self * x == 1`, or `Error::NoInverse` when none exists
    fn inv(&self) -> Result<Self>;
}

/// provides functionality to Abelian multiplication monoid
pub trait AbelianMonoid:
    'static
    + Clone
    + Copy
    + Eq
    + Send
    + Sized
    + Sync
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
{
    type Uint;

    fn one(&self) -> Self;
    fn pow(&self, exponent: &Self::Uint) -> Self;
}

/// provides functionality to Abelian multiplication group
pub trait AbelianGroup: AbelianMonoid + Inv {}

impl<T: AbelianMonoid + Inv> AbelianGroup for T {}
