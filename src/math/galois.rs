//! finite field arithmetic

use super::abel::AbelianGroup;
use rand_core::CryptoRngCore;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;

/// provides functionality to finite field
///
/// Every element carries its own field, so `zero`, `random` and `lift`
/// build new elements of the same field as `self`.
pub trait FiniteField:
    AbelianGroup
    + Debug
    + Zeroize
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    fn zero(&self) -> Self;

    /// draws an element uniformly from `[0, char)`
    fn random<R: CryptoRngCore>(&self, rng: &mut R) -> Self;

    fn char(&self) -> Self::Uint;

    /// embeds the integer `value` into the field, reducing it by the characteristic
    fn lift(&self, value: u64) -> Self;

    fn is_zero(&self) -> bool {
        *self == self.zero()
    }

    /// true when `other` lives in the same field as `self`
    fn same_field(&self, other: &Self) -> bool;
}

pub mod primefield;
pub mod smallfield;
