//! elliptic-curve groups whose order is the sharing modulus
//!
//! A group supplies three things to the sharing core: its prime order, the
//! map `k -> k·G` from scalars to points, and the SEC1 encoding of points.

use crate::math::{
    fermat::PrimeModulus,
    galois::primefield::PrimeField,
    gauss::{Uint, U256},
};
use crate::protocol::error::Result;

pub mod nistp256;
pub mod secp256k1;

pub use nistp256::NistP256;
pub use secp256k1::Secp256k1;

pub const SCALAR_LIMBS: usize = U256::LIMBS;

/// an element of the prime field of a 256-bit group order
pub type Scalar = PrimeField<SCALAR_LIMBS>;

/// SEC1 octet encoding of a curve point: `04 || x || y` for affine points,
/// the single byte `00` for the identity
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedPoint(Vec<u8>);

impl EncodedPoint {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0 == [0]
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for EncodedPoint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// provides the group operations the sharing core relies on
pub trait CurveGroup: Send + Sync {
    type Point: Copy + Send + Sync;

    /// the group order, prime, used as the field modulus for shares
    fn order(&self) -> PrimeModulus<SCALAR_LIMBS>;

    /// `scalar · G` for the standard base point `G`
    fn base_point_multiply(&self, scalar: &Scalar) -> Result<Self::Point>;

    /// uncompressed SEC1 encoding
    fn encode(&self, point: &Self::Point) -> EncodedPoint;

    /// public key of `scalar`: `encode(scalar · G)`
    fn public_key(&self, scalar: &Scalar) -> Result<EncodedPoint> {
        Ok(self.encode(&self.base_point_multiply(scalar)?))
    }

    /// a scalar of this group from its integer value, rejecting values not below the order
    fn scalar(&self, value: &Uint<SCALAR_LIMBS>) -> Result<Scalar> {
        self.order().make(value)
    }
}

/// implements `CurveGroup` for a RustCrypto curve crate
macro_rules! impl_curve_group {
    ($name:ident, $krate:ident, $order:literal) => {
        use crate::group::{CurveGroup, EncodedPoint, Scalar, SCALAR_LIMBS};
        use crate::math::{
            fermat::PrimeModulus,
            gauss::{Encoding, Odd, U256},
        };
        use crate::protocol::error::{ParameterKind, Result};
        use $krate::{
            elliptic_curve::{sec1::ToEncodedPoint, PrimeField as _},
            FieldBytes, ProjectivePoint,
        };
        use zeroize::Zeroize;

        /// group order in big-endian hex
        pub const ORDER: &str = $order;

        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            order: PrimeModulus<SCALAR_LIMBS>,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    order: PrimeModulus::from_known_prime(Odd::<U256>::from_be_hex(ORDER)),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl CurveGroup for $name {
            type Point = ProjectivePoint;

            fn order(&self) -> PrimeModulus<SCALAR_LIMBS> {
                self.order
            }

            fn base_point_multiply(&self, scalar: &Scalar) -> Result<ProjectivePoint> {
                if scalar.modulus() != self.order {
                    return Err(ParameterKind::ModulusMismatch.into());
                }
                let mut bytes = Encoding::to_be_bytes(&scalar.rep());
                let repr = FieldBytes::clone_from_slice(&bytes);
                bytes.zeroize();
                let scalar: Option<$krate::Scalar> = $krate::Scalar::from_repr(repr).into();
                let scalar = scalar.ok_or(ParameterKind::ScalarOutOfRange)?;
                Ok(ProjectivePoint::GENERATOR * scalar)
            }

            fn encode(&self, point: &ProjectivePoint) -> EncodedPoint {
                EncodedPoint::from(point.to_affine().to_encoded_point(false).as_bytes().to_vec())
            }
        }
    };
}

pub(crate) use impl_curve_group;
