//! prime number arithmetic

use super::{
    abel::AbelianMonoid,
    galois::{primefield::PrimeField, FiniteField},
    gauss::{
        modular::{MontyForm, MontyParams},
        Integer, NonZero, Odd, RandomMod, Uint,
    },
};
use crate::protocol::error::{ParameterKind, Result};
use rand_core::{CryptoRngCore, OsRng};

/// represents an odd prime modulus for PrimeField
/// Example:
/// ```
/// use thresh::math::{FiniteField, PrimeModulus, Uint};
///
/// let modulus = PrimeModulus::<1>::new(Uint::from_u64(101)).unwrap();
/// let x = modulus.make(&Uint::from_u64(60)).unwrap();
/// let y = modulus.make(&Uint::from_u64(50)).unwrap();
/// assert_eq!((x + y).rep(), Uint::from_u64(9));
/// assert!(modulus.make(&Uint::from_u64(101)).is_err());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrimeModulus<const LIMBS: usize>(pub(crate) MontyParams<LIMBS>);

impl<const LIMBS: usize> From<PrimeModulus<LIMBS>> for Odd<Uint<LIMBS>> {
    fn from(modulus: PrimeModulus<LIMBS>) -> Self {
        *modulus.0.modulus()
    }
}

pub trait PseudoPrimalityTester<const LIMBS: usize> {
    const MAX_ITERTIME: usize = 64;

    /// one round of the test with base `a`; false means `a` witnesses compositeness
    fn check(a: PrimeField<LIMBS>) -> bool;

    fn is_prime(n: Uint<LIMBS>) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MillerRabinTester<const LIMBS: usize>;

impl<const LIMBS: usize> PseudoPrimalityTester<LIMBS> for MillerRabinTester<LIMBS> {
    fn check(a: PrimeField<LIMBS>) -> bool {
        let t = a.char().wrapping_sub(&Uint::ONE);
        let h = t.trailing_zeros();
        let p1 = a.one();
        let m1 = -p1;
        let t = t >> h;
        let mut b = a.pow(&t);
        if b == p1 {
            return true;
        }
        for _ in 0..h {
            if b == m1 {
                return true;
            }
            if b == p1 {
                return false;
            }
            b = b * b;
        }
        false
    }

    fn is_prime(n: Uint<LIMBS>) -> bool {
        let two = Uint::<LIMBS>::from_u8(2);
        let three = Uint::<LIMBS>::from_u8(3);
        if n < two {
            return false;
        }
        if n == two || n == three {
            return true;
        }
        if bool::from(Integer::is_even(&n)) {
            return false;
        }
        let odd: Option<Odd<Uint<LIMBS>>> = Odd::new(n).into();
        let span: Option<NonZero<Uint<LIMBS>>> = NonZero::new(n.wrapping_sub(&three)).into();
        let (Some(odd), Some(span)) = (odd, span) else {
            return false;
        };
        let params = MontyParams::new_vartime(odd);
        // bases are drawn from [2, n-2]
        for _ in 0..Self::MAX_ITERTIME {
            let base = Uint::<LIMBS>::random_mod(&mut OsRng, &span).wrapping_add(&two);
            if !Self::check(PrimeField(MontyForm::new(&base, params))) {
                return false;
            }
        }
        true
    }
}

impl<const LIMBS: usize> PrimeModulus<LIMBS> {
    /// constructs a prime modulus, rejecting even and composite values
    pub fn new(modulus: Uint<LIMBS>) -> Result<Self> {
        let odd: Option<Odd<Uint<LIMBS>>> = Odd::new(modulus).into();
        Self::try_from(odd.ok_or(ParameterKind::EvenModulus)?)
    }

    /// constructs a prime modulus from given odd number
    pub fn try_from(modulus: Odd<Uint<LIMBS>>) -> Result<Self> {
        if MillerRabinTester::is_prime(modulus.get()) {
            Ok(Self(MontyParams::new_vartime(modulus)))
        } else {
            Err(ParameterKind::CompositeModulus.into())
        }
    }

    /// skips the primality test for moduli that are prime by construction,
    /// such as published curve orders
    pub(crate) fn from_known_prime(modulus: Odd<Uint<LIMBS>>) -> Self {
        Self(MontyParams::new_vartime(modulus))
    }

    /// get the integer value of this modulus
    pub fn get(&self) -> Uint<LIMBS> {
        self.0.modulus().get()
    }

    /// constructs a number in PrimeField of this modulus;
    /// values outside `[0, modulus)` are rejected rather than reduced
    pub fn make(&self, value: &Uint<LIMBS>) -> Result<PrimeField<LIMBS>> {
        if value >= &self.get() {
            return Err(ParameterKind::ScalarOutOfRange.into());
        }
        Ok(self.reduce(value))
    }

    /// constructs the residue of `value` modulo this modulus
    pub fn reduce(&self, value: &Uint<LIMBS>) -> PrimeField<LIMBS> {
        PrimeField(MontyForm::new(value, self.0))
    }

    pub fn from_u64(&self, value: u64) -> PrimeField<LIMBS> {
        self.reduce(&Uint::from_u64(value))
    }

    pub fn zero(&self) -> PrimeField<LIMBS> {
        PrimeField(MontyForm::zero(self.0))
    }

    pub fn one(&self) -> PrimeField<LIMBS> {
        PrimeField(MontyForm::one(self.0))
    }

    /// constructs a random number in PrimeField of this modulus
    pub fn random_make<R: CryptoRngCore>(&self, rng: &mut R) -> PrimeField<LIMBS> {
        PrimeField(MontyForm::new(
            &Uint::<LIMBS>::random_mod(rng, self.0.modulus().as_nz_ref()),
            self.0,
        ))
    }
}

#[test]
fn test_primality() {
    for p in [3u64, 5, 7, 101, 65537, 2_147_483_647, 18_446_744_073_709_551_557] {
        assert!(
            MillerRabinTester::<1>::is_prime(Uint::from_u64(p)),
            "{p} is prime"
        );
    }
    for c in [0u64, 1, 4, 9, 91, 561, 1105, 65535, 4_294_967_297] {
        assert!(
            !MillerRabinTester::<1>::is_prime(Uint::from_u64(c)),
            "{c} is composite"
        );
    }
}

#[test]
fn test_modulus_construction() {
    use crate::protocol::error::Error;

    assert!(PrimeModulus::<1>::new(Uint::from_u64(101)).is_ok());
    assert_eq!(
        PrimeModulus::<1>::new(Uint::from_u64(100)).unwrap_err(),
        Error::InvalidParameter(ParameterKind::EvenModulus)
    );
    assert_eq!(
        PrimeModulus::<1>::new(Uint::from_u64(561)).unwrap_err(),
        Error::InvalidParameter(ParameterKind::CompositeModulus)
    );

    let modulus = PrimeModulus::<1>::new(Uint::from_u64(101)).unwrap();
    assert_eq!(modulus.get(), Uint::from_u64(101));
    assert_eq!(modulus.make(&Uint::from_u64(100)).unwrap().rep(), Uint::from_u64(100));
    assert_eq!(
        modulus.make(&Uint::from_u64(101)).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ScalarOutOfRange)
    );
    assert_eq!(modulus.reduce(&Uint::from_u64(205)).rep(), Uint::from_u64(3));
    assert_eq!(modulus.from_u64(102), modulus.one());
}

#[test]
fn test_multi_limb_modulus() {
    use crate::math::Inv;

    // 2^127 - 1
    let p = Uint::<2>::from_be_hex("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    let modulus = PrimeModulus::<2>::new(p).unwrap();
    let x = modulus.from_u64(123_456_789);
    assert_eq!(x * x.inv().unwrap(), modulus.one());
    // 2^127 + 1 is divisible by 3
    let composite = Uint::<2>::from_be_hex("80000000000000000000000000000001");
    assert_eq!(
        PrimeModulus::<2>::new(composite).unwrap_err(),
        crate::protocol::error::Error::InvalidParameter(ParameterKind::CompositeModulus)
    );
}
