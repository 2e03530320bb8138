//! word-sized modular arithmetic
//!
//! `SmallField` keeps the value and modulus in a `u64` and widens to
//! `u128`/`i128` for intermediates. It is a reference oracle for
//! `PrimeField`: fast, deterministic and easy to check by hand, but NOT
//! constant-time, so never put secrets in it.

use crate::math::{
    abel::{AbelianMonoid, Inv},
    galois::FiniteField,
};
use crate::protocol::error::{Error, ParameterKind, Result};
use rand_core::CryptoRngCore;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;

/// Example:
/// ```
/// use thresh::math::{Inv, SmallField};
///
/// let x = SmallField::new(3, 101).unwrap();
/// assert_eq!((x * x.inv().unwrap()).rep(), 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SmallField {
    value: u64,
    modulus: u64,
}

impl SmallField {
    /// constructs `value` in the ring of integers modulo `modulus`
    pub fn new(value: u64, modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(ParameterKind::CompositeModulus.into());
        }
        if value >= modulus {
            return Err(ParameterKind::ScalarOutOfRange.into());
        }
        Ok(Self { value, modulus })
    }

    pub fn rep(&self) -> u64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn with(&self, value: u64) -> Self {
        Self {
            value,
            modulus: self.modulus,
        }
    }
}

impl Neg for SmallField {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with((self.modulus - self.value) % self.modulus)
    }
}

impl Add<Self> for SmallField {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let m = self.modulus as u128;
        self.with(((self.value as u128 + other.value as u128) % m) as u64)
    }
}

impl Sub<Self> for SmallField {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        // add the modulus first so the difference never goes negative
        let m = self.modulus as u128;
        self.with(((self.value as u128 + m - other.value as u128) % m) as u64)
    }
}

impl Mul<Self> for SmallField {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let m = self.modulus as u128;
        self.with(((self.value as u128 * other.value as u128) % m) as u64)
    }
}

macro_rules! impl_ref_and_assign_ops {
    ($($Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident)+) => {$(
        impl $Op<&Self> for SmallField {
            type Output = Self;

            fn $op(self, other: &Self) -> Self::Output {
                $Op::$op(self, *other)
            }
        }

        impl $OpAssign<Self> for SmallField {
            fn $op_assign(&mut self, other: Self) {
                *self = $Op::$op(*self, other);
            }
        }

        impl $OpAssign<&Self> for SmallField {
            fn $op_assign(&mut self, other: &Self) {
                *self = $Op::$op(*self, *other);
            }
        }
    )+};
}

impl_ref_and_assign_ops!(
    Add::add, AddAssign::add_assign
    Sub::sub, SubAssign::sub_assign
    Mul::mul, MulAssign::mul_assign
);

impl AbelianMonoid for SmallField {
    type Uint = u64;

    fn one(&self) -> Self {
        self.with(1 % self.modulus)
    }

    fn pow(&self, exponent: &Self::Uint) -> Self {
        let mut result = self.one();
        let mut base = *self;
        let mut exp = *exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                result *= base;
            }
            base = base * base;
            exp >>= 1;
        }
        result
    }
}

/// extended Euclidean algorithm; fails when `gcd(value, modulus) != 1`
impl Inv for SmallField {
    fn inv(&self) -> Result<Self> {
        let m = self.modulus as i128;
        let (mut old_r, mut r) = (self.value as i128, m);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        if old_r != 1 {
            return Err(Error::NoInverse);
        }
        Ok(self.with((((old_s % m) + m) % m) as u64))
    }
}

impl FiniteField for SmallField {
    fn zero(&self) -> Self {
        self.with(0)
    }

    fn random<R: CryptoRngCore>(&self, rng: &mut R) -> Self {
        // reject the top partial block so the reduction stays uniform
        let zone = u64::MAX - (u64::MAX % self.modulus);
        loop {
            let candidate = rng.next_u64();
            if candidate < zone {
                return self.with(candidate % self.modulus);
            }
        }
    }

    fn char(&self) -> Self::Uint {
        self.modulus
    }

    fn lift(&self, value: u64) -> Self {
        self.with(value % self.modulus)
    }

    fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Zeroize for SmallField {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

#[test]
fn test_arithmetic() {
    let a = SmallField::new(60, 101).unwrap();
    let b = SmallField::new(50, 101).unwrap();
    assert_eq!((a + b).rep(), 9);
    assert_eq!((b - a).rep(), 91);
    assert_eq!((a * b).rep(), 3000 % 101);
    assert_eq!((-a).rep(), 41);
    assert_eq!((-a.zero()).rep(), 0);
    assert_eq!(a.pow(&100), a.one());
    assert_eq!(a.lift(205).rep(), 3);
    assert!(SmallField::new(101, 101).is_err());
    assert!(SmallField::new(0, 1).is_err());
}

#[test]
fn test_inverse() {
    let p = 101;
    for v in 1..p {
        let x = SmallField::new(v, p).unwrap();
        assert_eq!((x * x.inv().unwrap()).rep(), 1, "inverse of {v}");
    }
    assert_eq!(SmallField::new(0, p).unwrap().inv(), Err(Error::NoInverse));

    // composite modulus: only units are invertible
    assert_eq!(SmallField::new(6, 15).unwrap().inv(), Err(Error::NoInverse));
    assert_eq!(SmallField::new(7, 15).unwrap().inv().unwrap().rep(), 13);

    // intermediates near the top of u64
    let big = 18_446_744_073_709_551_557;
    let x = SmallField::new(big - 2, big).unwrap();
    assert_eq!((x * x.inv().unwrap()).rep(), 1);
}
