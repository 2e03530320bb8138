//! sharing parameters loaded from json
//!
//! ```
//! use thresh::config::{CurveName, SharingConfig};
//!
//! let config = SharingConfig::from_json(r#"{"threshold": 3, "shares": 5, "curve": "p256"}"#).unwrap();
//! assert_eq!(config.curve, CurveName::P256);
//! assert_eq!(config.scheme().unwrap().threshold(), 3);
//! ```

use crate::group::{CurveGroup, NistP256, Secp256k1, SCALAR_LIMBS};
use crate::math::{fermat::PrimeModulus, gauss::Uint};
use crate::protocol::error::{ParameterKind, Result};
use crate::protocol::shamir::{self, Shamir};
use serde::{Deserialize, Serialize};

/// curves whose group order can serve as the sharing modulus
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveName {
    #[default]
    Secp256k1,
    P256,
}

impl CurveName {
    pub fn order(&self) -> PrimeModulus<SCALAR_LIMBS> {
        match self {
            CurveName::Secp256k1 => Secp256k1::new().order(),
            CurveName::P256 => NistP256::new().order(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharingConfig {
    pub threshold: usize,
    pub shares: usize,
    #[serde(default)]
    pub curve: CurveName,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            shares: 3,
            curve: CurveName::default(),
        }
    }
}

impl SharingConfig {
    /// parses and validates a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        shamir::validate(self.threshold, self.shares)?;
        // share abscissas 1..=n must stay nonzero and distinct mod the order
        let n = u64::try_from(self.shares).map_err(|_| ParameterKind::TooManyShares)?;
        if self.curve.order().from_u64(n).rep() != Uint::from_u64(n) {
            return Err(ParameterKind::TooManyShares.into());
        }
        Ok(())
    }

    pub fn scheme(&self) -> Result<Shamir> {
        self.validate()?;
        Shamir::new(self.threshold, self.shares)
    }
}

#[test]
fn test_parse() {
    let config = SharingConfig::from_json(r#"{"threshold": 2, "shares": 4}"#).unwrap();
    assert_eq!(config.curve, CurveName::Secp256k1);
    assert_eq!(config.scheme().unwrap(), Shamir::new(2, 4).unwrap());

    let back = SharingConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(back, config);
    assert_eq!(SharingConfig::default().scheme().unwrap(), Shamir::new(2, 3).unwrap());
}

#[test]
fn test_rejects_bad_config() {
    use crate::protocol::error::Error;

    assert_eq!(
        SharingConfig::from_json(r#"{"threshold": 4, "shares": 3}"#).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ThresholdExceedsShares)
    );
    assert_eq!(
        SharingConfig::from_json(r#"{"threshold": 0, "shares": 3}"#).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ZeroThreshold)
    );
    assert!(matches!(
        SharingConfig::from_json(r#"{"threshold": 2, "shares": 3, "curve": "ed25519"}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SharingConfig::from_json(r#"{"threshold": 2, "shares": -1}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SharingConfig::from_json(r#"{"threshold": 2, "shares": 3, "extra": true}"#),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_curve_orders_differ() {
    assert_ne!(CurveName::Secp256k1.order(), CurveName::P256.order());
    assert_eq!(
        serde_json::to_string(&CurveName::P256).unwrap(),
        r#""p256""#
    );
}
