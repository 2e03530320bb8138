//! share generation: the dealer's polynomial evaluated at `x = 1..=n`

use super::{polynomial::Polynomial, Share};
use crate::math::galois::FiniteField;
use crate::protocol::error::{ParameterKind, Result};
use std::time::Instant;
use tracing::debug;

/// evaluates `polynomial` at `x = 1..=shares`, returning one share per point
pub fn evaluate<F: FiniteField>(polynomial: &Polynomial<F>, shares: usize) -> Result<Vec<Share<F>>> {
    let abscissas = abscissas(polynomial, shares)?;
    let start = Instant::now();
    let result: Vec<Share<F>> = abscissas
        .into_iter()
        .map(|x| Share {
            x,
            y: polynomial.evaluate(&x),
        })
        .collect();
    debug!(
        threshold = polynomial.threshold(),
        shares,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "evaluated shares"
    );
    Ok(result)
}

/// same as [`evaluate`], with the points spread over the rayon pool
#[cfg(feature = "parallel")]
pub fn evaluate_parallel<F: FiniteField>(
    polynomial: &Polynomial<F>,
    shares: usize,
) -> Result<Vec<Share<F>>> {
    use rayon::prelude::*;

    let abscissas = abscissas(polynomial, shares)?;
    let start = Instant::now();
    let result: Vec<Share<F>> = abscissas
        .into_par_iter()
        .map(|x| Share {
            x,
            y: polynomial.evaluate(&x),
        })
        .collect();
    debug!(
        threshold = polynomial.threshold(),
        shares,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "evaluated shares in parallel"
    );
    Ok(result)
}

/// the points `1..=shares` as field elements; x = 0 would hand out the secret
/// itself, so a share count that wraps around the modulus is rejected
fn abscissas<F: FiniteField>(polynomial: &Polynomial<F>, shares: usize) -> Result<Vec<F>> {
    if shares == 0 {
        return Err(ParameterKind::ZeroShares.into());
    }
    if polynomial.threshold() > shares {
        return Err(ParameterKind::ThresholdExceedsShares.into());
    }
    let anchor = polynomial.constant();
    (1..=shares as u64)
        .map(|i| {
            let x = anchor.lift(i);
            if x.is_zero() {
                Err(ParameterKind::TooManyShares.into())
            } else {
                Ok(x)
            }
        })
        .collect()
}

#[test]
fn test_evaluate() {
    use crate::math::galois::smallfield::SmallField;

    let f = |v| SmallField::new(v, 101).unwrap();
    let polynomial = Polynomial::from_coefficients(vec![f(42), f(7), f(3)]).unwrap();
    let shares = evaluate(&polynomial, 5).unwrap();
    let points: Vec<(u64, u64)> = shares.iter().map(|s| (s.x.rep(), s.y.rep())).collect();
    assert_eq!(points, vec![(1, 52), (2, 68), (3, 90), (4, 17), (5, 51)]);
}

#[test]
fn test_evaluate_rejects_bad_counts() {
    use crate::math::galois::smallfield::SmallField;
    use crate::protocol::error::Error;

    let f = |v| SmallField::new(v, 101).unwrap();
    let polynomial = Polynomial::from_coefficients(vec![f(42), f(7), f(3)]).unwrap();
    assert_eq!(
        evaluate(&polynomial, 2).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ThresholdExceedsShares)
    );
    assert_eq!(
        evaluate(&polynomial, 0).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ZeroShares)
    );
    assert_eq!(
        evaluate(&polynomial, 101).unwrap_err(),
        Error::InvalidParameter(ParameterKind::TooManyShares)
    );
    assert_eq!(evaluate(&polynomial, 100).unwrap().len(), 100);
}

#[cfg(feature = "parallel")]
#[test]
fn test_evaluate_parallel_matches_sequential() {
    use crate::math::{fermat::PrimeModulus, gauss::Uint};
    use rand_core::OsRng;

    let modulus = PrimeModulus::<1>::new(Uint::from_u64(2_147_483_647)).unwrap();
    let polynomial = Polynomial::generate(modulus.from_u64(1234), 8, &mut OsRng).unwrap();
    assert_eq!(
        evaluate(&polynomial, 64).unwrap(),
        evaluate_parallel(&polynomial, 64).unwrap()
    );
}
