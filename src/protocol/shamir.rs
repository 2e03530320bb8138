//! secret sharing algorithms
//!
//! A secret is the constant term of a random polynomial of degree `t - 1`;
//! share `x` is the polynomial evaluated at `x = 1..=n`, and any `t` shares
//! recover the constant term by Lagrange interpolation at zero.

use crate::math::galois::FiniteField;
use crate::protocol::error::{Error, ParameterKind, Result};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

pub mod evaluate;
pub mod polynomial;
pub mod reconstruct;

pub use evaluate::evaluate;
#[cfg(feature = "parallel")]
pub use evaluate::evaluate_parallel;
pub use polynomial::Polynomial;
pub use reconstruct::{lagrange_coefficient, reconstruct};

/// a point `(x, y)` on the dealer's polynomial
///
/// Shares are `Copy` and are not wiped on drop. Holders of a share that
/// outlives its use call [`Zeroize::zeroize`], or keep it inside a
/// [`KeyShare`](crate::protocol::keys::KeyShare), which wipes `y` on drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Share<F> {
    pub x: F,
    pub y: F,
}

/// wipes `y`; `x` is public and left in place
impl<F: FiniteField> Zeroize for Share<F> {
    fn zeroize(&mut self) {
        self.y.zeroize();
    }
}

/// (t, n) secret sharing over field F
pub trait SecretSharing<F: FiniteField> {
    fn split<R: CryptoRngCore>(&self, secret: F, rng: &mut R) -> Result<Vec<Share<F>>>;
    fn recover(&self, shares: &[Share<F>]) -> Result<F>;
}

/// Shamir's scheme: `threshold` of `shares` recover the secret
/// # Example
/// ```
/// use thresh::math::{PrimeModulus, Uint};
/// use thresh::protocol::shamir::{SecretSharing, Shamir};
/// use rand_core::OsRng;
///
/// let modulus = PrimeModulus::<1>::new(Uint::from_u64(101)).unwrap();
/// let secret = modulus.make(&Uint::from_u64(42)).unwrap();
/// let scheme = Shamir::new(3, 5).unwrap();
/// let shares = scheme.split(secret, &mut OsRng).unwrap();
/// assert_eq!(scheme.recover(&shares[2..]).unwrap(), secret);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shamir {
    threshold: usize,
    shares: usize,
}

impl Shamir {
    pub fn new(threshold: usize, shares: usize) -> Result<Self> {
        validate(threshold, shares)?;
        Ok(Self { threshold, shares })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> usize {
        self.shares
    }
}

/// checks `1 <= threshold <= shares`
pub(crate) fn validate(threshold: usize, shares: usize) -> Result<()> {
    if threshold == 0 {
        return Err(ParameterKind::ZeroThreshold.into());
    }
    if shares == 0 {
        return Err(ParameterKind::ZeroShares.into());
    }
    if threshold > shares {
        return Err(ParameterKind::ThresholdExceedsShares.into());
    }
    Ok(())
}

impl<F: FiniteField> SecretSharing<F> for Shamir {
    fn split<R: CryptoRngCore>(&self, secret: F, rng: &mut R) -> Result<Vec<Share<F>>> {
        let polynomial = Polynomial::generate(secret, self.threshold, rng)?;
        evaluate(&polynomial, self.shares)
    }

    fn recover(&self, shares: &[Share<F>]) -> Result<F> {
        if shares.len() < self.threshold {
            return Err(Error::InsufficientShares(shares.len()));
        }
        match shares {
            // a constant polynomial takes the same value everywhere
            [only] if self.threshold == 1 => Ok(only.y),
            _ => reconstruct(shares),
        }
    }
}

#[test]
fn test_correctness() {
    use crate::math::galois::smallfield::SmallField;
    use rand_core::OsRng;

    let scheme = Shamir::new(3, 5).unwrap();
    let secret = SmallField::new(42, 101).unwrap();
    let shares = scheme.split(secret, &mut OsRng).unwrap();
    assert_eq!(shares.len(), 5);
    for (i, share) in shares.iter().enumerate() {
        assert_eq!(share.x.rep(), i as u64 + 1);
    }
    for subset in [[0, 1, 2], [0, 2, 4], [1, 3, 4], [2, 3, 4]] {
        let picked: Vec<_> = subset.iter().map(|&i| shares[i]).collect();
        assert_eq!(scheme.recover(&picked).unwrap(), secret);
    }
    assert_eq!(scheme.recover(&shares).unwrap(), secret);
    assert_eq!(
        scheme.recover(&shares[..2]).unwrap_err(),
        Error::InsufficientShares(2)
    );
}

#[test]
fn test_threshold_one() {
    use crate::math::galois::smallfield::SmallField;
    use rand_core::OsRng;

    let scheme = Shamir::new(1, 3).unwrap();
    let secret = SmallField::new(17, 101).unwrap();
    let shares = scheme.split(secret, &mut OsRng).unwrap();
    assert!(shares.iter().all(|share| share.y == secret));
    assert_eq!(scheme.recover(&shares[1..2]).unwrap(), secret);
    assert_eq!(scheme.recover(&shares).unwrap(), secret);
}

#[test]
fn test_parameter_validation() {
    use crate::math::galois::smallfield::SmallField;
    use rand_core::OsRng;

    assert_eq!(
        Shamir::new(0, 5).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ZeroThreshold)
    );
    assert_eq!(
        Shamir::new(6, 5).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ThresholdExceedsShares)
    );
    assert_eq!(
        Shamir::new(1, 0).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ZeroShares)
    );
    assert_eq!(
        SmallField::new(101, 101).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ScalarOutOfRange)
    );

    // x = 7 wraps to zero in a field of order 7
    let scheme = Shamir::new(2, 7).unwrap();
    let secret = SmallField::new(3, 7).unwrap();
    assert_eq!(
        scheme.split(secret, &mut OsRng).unwrap_err(),
        Error::InvalidParameter(ParameterKind::TooManyShares)
    );
}

#[test]
fn test_share_zeroize() {
    use crate::math::galois::smallfield::SmallField;
    use rand_core::OsRng;

    let secret = SmallField::new(42, 101).unwrap();
    let mut shares = Shamir::new(2, 3).unwrap().split(secret, &mut OsRng).unwrap();
    let xs: Vec<_> = shares.iter().map(|share| share.x).collect();
    shares.zeroize();
    assert!(shares.is_empty());

    let mut share = Share {
        x: secret.lift(1),
        y: secret,
    };
    share.zeroize();
    assert!(share.y.is_zero());
    assert_eq!(share.x, xs[0]);
}
