//! prime field is a field of prime order

use crate::math::{
    abel::{AbelianMonoid, Inv},
    fermat::PrimeModulus,
    galois::FiniteField,
    gauss::{modular::MontyForm, Uint},
};
use crate::protocol::error::{Error, Result};
use rand_core::CryptoRngCore;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;

/// represents a number in prime field
///
/// Arithmetic runs in Montgomery form and is constant-time in the values of
/// the operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrimeField<const LIMBS: usize>(pub(crate) MontyForm<LIMBS>);

impl<const LIMBS: usize> From<MontyForm<LIMBS>> for PrimeField<LIMBS> {
    fn from(value: MontyForm<LIMBS>) -> Self {
        Self(value)
    }
}

/// implements methods of PrimeField
impl<const LIMBS: usize> PrimeField<LIMBS> {
    /// get the modulus of this number
    pub fn modulus(&self) -> PrimeModulus<LIMBS> {
        PrimeModulus(*self.0.params())
    }

    /// get the integer representation of this number
    pub fn rep(&self) -> Uint<LIMBS> {
        self.0.retrieve()
    }
}

/// derives negation from MontyForm
impl<const LIMBS: usize> Neg for PrimeField<LIMBS> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

/// derives binary operators from MontyForm
macro_rules! derive_binary_ops {
    ($($Op:ident :: $op:ident)+) => {$(
        impl<const LIMBS: usize> $Op<Self> for PrimeField<LIMBS> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(self, other: Self) -> Self::Output {
                Self($Op::$op(self.0, other.0))
            }
        }

        impl<const LIMBS: usize> $Op<&Self> for PrimeField<LIMBS> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(self, other: &Self) -> Self::Output {
                $Op::$op(self, *other)
            }
        }
    )+};
}

derive_binary_ops!(Add::add Sub::sub Mul::mul);

/// derives binary assignment operators from MontyForm
macro_rules! derive_binary_assign_ops {
    ($($Op:ident :: $op:ident)+) => {$(
        impl<const LIMBS: usize> $Op<Self> for PrimeField<LIMBS> {
            #[inline]
            #[track_caller]
            fn $op(&mut self, other: Self) {
                $Op::$op(&mut self.0, other.0);
            }
        }

        impl<const LIMBS: usize> $Op<&Self> for PrimeField<LIMBS> {
            #[inline]
            #[track_caller]
            fn $op(&mut self, other: &Self) {
                $Op::$op(self, *other);
            }
        }
    )+};
}

derive_binary_assign_ops!(AddAssign::add_assign SubAssign::sub_assign MulAssign::mul_assign);

impl<const LIMBS: usize> AbelianMonoid for PrimeField<LIMBS> {
    type Uint = Uint<LIMBS>;

    fn one(&self) -> Self {
        MontyForm::one(*self.0.params()).into()
    }

    fn pow(&self, exponent: &Self::Uint) -> Self {
        self.0.pow(exponent).into()
    }
}

/// inverts by Fermat's little theorem, `a^(p-2)`, which runs in constant
/// time; only the final check that the candidate is an inverse branches
impl<const LIMBS: usize> Inv for PrimeField<LIMBS> {
    fn inv(&self) -> Result<Self> {
        let exponent = self.char().wrapping_sub(&Uint::from_u8(2));
        let candidate = self.pow(&exponent);
        if candidate * self == self.one() {
            Ok(candidate)
        } else {
            Err(Error::NoInverse)
        }
    }
}

impl<const LIMBS: usize> FiniteField for PrimeField<LIMBS> {
    fn zero(&self) -> Self {
        Self(MontyForm::zero(*self.0.params()))
    }

    fn random<R: CryptoRngCore>(&self, rng: &mut R) -> Self {
        self.modulus().random_make(rng)
    }

    fn char(&self) -> Self::Uint {
        self.0.params().modulus().get()
    }

    fn lift(&self, value: u64) -> Self {
        self.modulus().from_u64(value)
    }

    fn same_field(&self, other: &Self) -> bool {
        self.0.params() == other.0.params()
    }
}

impl<const LIMBS: usize> Zeroize for PrimeField<LIMBS> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[test]
fn test_arithmetic() {
    let modulus = PrimeModulus::<1>::new(Uint::from_u64(101)).unwrap();
    let a = modulus.from_u64(60);
    let b = modulus.from_u64(50);
    assert_eq!((a + b).rep(), Uint::from_u64(9));
    assert_eq!((b - a).rep(), Uint::from_u64(91));
    assert_eq!((a * b).rep(), Uint::from_u64(3000 % 101));
    assert_eq!((-a).rep(), Uint::from_u64(41));
    assert_eq!(a.pow(&Uint::from_u64(100)), a.one());

    let mut c = a;
    c *= b;
    c -= a;
    c += &b;
    assert_eq!(c.rep(), Uint::from_u64((3000 - 60 + 50) % 101));

    assert_eq!(a.inv().unwrap() * a, a.one());
    assert_eq!(a.zero().inv().unwrap_err(), Error::NoInverse);
    assert!(a.zero().is_zero());
    assert!(a.same_field(&b));
}

#[test]
fn test_inverse_large_field() {
    use crate::math::gauss::U256;
    use rand_core::OsRng;

    // secp256k1 group order
    let modulus = PrimeModulus::<{ U256::LIMBS }>::new(U256::from_be_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    ))
    .unwrap();
    for _ in 0..16 {
        let x = modulus.random_make(&mut OsRng);
        if x.is_zero() {
            continue;
        }
        assert_eq!(x * x.inv().unwrap(), modulus.one());
    }
    let minus_one = -modulus.one();
    assert_eq!(minus_one.inv().unwrap(), minus_one);
}
