//! secret recovery by Lagrange interpolation at zero

use super::Share;
use crate::math::galois::FiniteField;
use crate::protocol::error::{Error, ParameterKind, Result};
use std::time::Instant;
use tracing::{debug, trace};

/// Lagrange basis polynomial of point `i` evaluated at zero:
/// the product over `j != i` of `x_j / (x_j - x_i)`
pub fn lagrange_coefficient<F: FiniteField>(i: usize, abscissas: &[F]) -> Result<F> {
    let x_i = *abscissas.get(i).ok_or(ParameterKind::IndexOutOfRange)?;
    let mut lambda = x_i.one();
    for (j, x_j) in abscissas.iter().enumerate() {
        if j == i {
            continue;
        }
        if !x_i.same_field(x_j) {
            return Err(ParameterKind::ModulusMismatch.into());
        }
        let denom = *x_j - x_i;
        // checked before inverting so duplicates never surface as NoInverse
        if denom.is_zero() {
            return Err(Error::DuplicateX);
        }
        lambda *= *x_j * denom.inv()?;
    }
    Ok(lambda)
}

/// recovers the constant term of the polynomial through `shares`
///
/// At least two shares are required. The caller must supply at least the
/// threshold: a smaller set still interpolates, just to a different value.
pub fn reconstruct<F: FiniteField>(shares: &[Share<F>]) -> Result<F> {
    let [first, _, ..] = shares else {
        return Err(Error::InsufficientShares(shares.len()));
    };
    let anchor = first.x;
    if !shares
        .iter()
        .all(|share| anchor.same_field(&share.x) && anchor.same_field(&share.y))
    {
        return Err(ParameterKind::ModulusMismatch.into());
    }

    let start = Instant::now();
    let abscissas: Vec<F> = shares.iter().map(|share| share.x).collect();
    let mut secret = anchor.zero();
    for (i, share) in shares.iter().enumerate() {
        trace!(index = i, "interpolating share");
        secret += lagrange_coefficient(i, &abscissas)? * share.y;
    }
    debug!(
        shares = shares.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "reconstructed secret"
    );
    Ok(secret)
}

#[cfg(test)]
fn points(modulus: u64, points: &[(u64, u64)]) -> Vec<Share<crate::math::SmallField>> {
    use crate::math::SmallField;

    points
        .iter()
        .map(|&(x, y)| Share {
            x: SmallField::new(x, modulus).unwrap(),
            y: SmallField::new(y, modulus).unwrap(),
        })
        .collect()
}

#[test]
fn test_reconstruct() {
    // f(x) = 42 + 7x + 3x^2 over GF(101)
    let shares = points(101, &[(1, 52), (2, 68), (3, 90), (4, 17), (5, 51)]);
    let odd: Vec<_> = [0, 2, 4].iter().map(|&i| shares[i]).collect();
    assert_eq!(reconstruct(&odd).unwrap().rep(), 42);
    assert_eq!(reconstruct(&shares).unwrap().rep(), 42);
    assert_eq!(reconstruct(&shares[1..4]).unwrap().rep(), 42);

    // below threshold the result is some other value
    assert_eq!(reconstruct(&shares[..1]).unwrap_err(), Error::InsufficientShares(1));
    assert_eq!(reconstruct(&[odd[0], odd[1]]).unwrap().rep(), 33);
    assert!(shares.iter().all(|share| share.y.rep() != 42));
}

#[test]
fn test_lagrange_coefficients_sum_to_one() {
    let shares = points(101, &[(1, 0), (3, 0), (5, 0)]);
    let abscissas: Vec<_> = shares.iter().map(|share| share.x).collect();
    let sum = (0..3)
        .map(|i| lagrange_coefficient(i, &abscissas).unwrap())
        .fold(abscissas[0].zero(), |acc, lambda| acc + lambda);
    assert_eq!(sum.rep(), 1);
}

#[test]
fn test_lagrange_coefficient_rejects_bad_input() {
    let abscissas: Vec<_> = points(101, &[(1, 0), (3, 0), (5, 0)])
        .iter()
        .map(|share| share.x)
        .collect();
    assert_eq!(
        lagrange_coefficient(3, &abscissas).unwrap_err(),
        Error::InvalidParameter(ParameterKind::IndexOutOfRange)
    );
    assert_eq!(
        lagrange_coefficient::<crate::math::SmallField>(0, &[]).unwrap_err(),
        Error::InvalidParameter(ParameterKind::IndexOutOfRange)
    );

    let mut mixed = abscissas.clone();
    mixed[2] = points(103, &[(5, 0)])[0].x;
    assert_eq!(
        lagrange_coefficient(0, &mixed).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ModulusMismatch)
    );
}

#[test]
fn test_reconstruct_rejects_bad_sets() {
    let duplicate = points(101, &[(1, 52), (3, 90), (1, 52)]);
    assert_eq!(reconstruct(&duplicate).unwrap_err(), Error::DuplicateX);

    // distinct integers that collide modulo 101
    let wrapped = points(101, &[(1, 52), (3, 90), (5, 51)]);
    let mut colliding = wrapped.clone();
    colliding[2].x = colliding[2].x.lift(102);
    assert_eq!(reconstruct(&colliding).unwrap_err(), Error::DuplicateX);

    let mut mixed = wrapped;
    mixed[1] = points(103, &[(3, 90)])[0];
    assert_eq!(
        reconstruct(&mixed).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ModulusMismatch)
    );

    assert_eq!(reconstruct::<crate::math::SmallField>(&[]).unwrap_err(), Error::InsufficientShares(0));
}

#[test]
fn test_reconstruct_surfaces_missing_inverse() {
    // over Z/15 the difference 6 - 3 shares a factor with the modulus
    let shares = points(15, &[(3, 1), (6, 2)]);
    assert_eq!(reconstruct(&shares).unwrap_err(), Error::NoInverse);
}
