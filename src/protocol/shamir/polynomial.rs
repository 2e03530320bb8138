//! random polynomials hiding a secret in their constant term

use crate::math::galois::FiniteField;
use crate::protocol::error::{ParameterKind, Result};
use rand_core::CryptoRngCore;
use std::fmt;
use zeroize::Zeroize;

/// coefficients `a_0..a_{t-1}` of `a_0 + a_1 x + ... + a_{t-1} x^{t-1}`,
/// with `a_0` the secret; wiped on drop
pub struct Polynomial<F: FiniteField> {
    coefficients: Vec<F>,
}

impl<F: FiniteField> Polynomial<F> {
    /// draws a polynomial of degree `threshold - 1` whose constant term is `secret`
    /// and whose other coefficients are uniform in the field
    pub fn generate<R: CryptoRngCore>(secret: F, threshold: usize, rng: &mut R) -> Result<Self> {
        if threshold == 0 {
            return Err(ParameterKind::ZeroThreshold.into());
        }
        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret);
        for _ in 1..threshold {
            coefficients.push(secret.random(rng));
        }
        Ok(Self { coefficients })
    }

    /// builds a polynomial from explicit coefficients, lowest degree first
    pub fn from_coefficients(coefficients: Vec<F>) -> Result<Self> {
        let Some(first) = coefficients.first() else {
            return Err(ParameterKind::ZeroThreshold.into());
        };
        if !coefficients.iter().all(|c| first.same_field(c)) {
            return Err(ParameterKind::ModulusMismatch.into());
        }
        Ok(Self { coefficients })
    }

    /// number of shares needed to recover the constant term
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub(crate) fn constant(&self) -> &F {
        &self.coefficients[0]
    }

    /// evaluates at `x` with Horner's rule, highest coefficient first
    pub fn evaluate(&self, x: &F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(x.zero(), |acc, coefficient| acc * x + coefficient)
    }
}

impl<F: FiniteField> Drop for Polynomial<F> {
    fn drop(&mut self) {
        self.coefficients.zeroize();
    }
}

impl<F: FiniteField> fmt::Debug for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}

#[test]
fn test_horner() {
    use crate::math::galois::smallfield::SmallField;

    let f = |v| SmallField::new(v, 101).unwrap();
    let polynomial = Polynomial::from_coefficients(vec![f(42), f(7), f(3)]).unwrap();
    assert_eq!(polynomial.degree(), 2);
    let ys: Vec<u64> = (1..=5).map(|x| polynomial.evaluate(&f(x)).rep()).collect();
    assert_eq!(ys, vec![52, 68, 90, 17, 51]);
    assert_eq!(polynomial.evaluate(&f(0)), f(42));
}

#[test]
fn test_generate() {
    use crate::math::galois::smallfield::SmallField;
    use crate::protocol::error::Error;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    let secret = SmallField::new(42, 101).unwrap();
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let polynomial = Polynomial::generate(secret, 4, &mut rng).unwrap();
    assert_eq!(polynomial.threshold(), 4);
    assert_eq!(*polynomial.constant(), secret);
    assert_eq!(polynomial.evaluate(&secret.zero()), secret);

    // same seed, same polynomial
    let mut again = ChaCha20Rng::from_seed([7u8; 32]);
    let replay = Polynomial::generate(secret, 4, &mut again).unwrap();
    let x = secret.lift(9);
    assert_eq!(polynomial.evaluate(&x), replay.evaluate(&x));

    assert_eq!(
        Polynomial::generate(secret, 0, &mut rng).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ZeroThreshold)
    );
    assert_eq!(
        Polynomial::from_coefficients(vec![secret, SmallField::new(1, 103).unwrap()]).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ModulusMismatch)
    );
}
