//! threshold secret sharing over the scalar field of an elliptic curve
//!
//! A secret scalar is split into `n` shares of which any `t` recover it.
//! Shares live in the prime field whose modulus is the curve group order,
//! so a recovered scalar is directly a private key for that curve.
//!
//! ```
//! use thresh::config::SharingConfig;
//! use thresh::group::Secp256k1;
//! use thresh::protocol::keys::{deal, recover_key_pair, KeyPair};
//! use rand_core::OsRng;
//!
//! let config = SharingConfig::from_json(r#"{"threshold": 2, "shares": 3}"#).unwrap();
//! let group = Secp256k1::new();
//! let key = KeyPair::random(&group, &mut OsRng).unwrap();
//! let dealing = deal(&group, &config.scheme().unwrap(), key.private_key(), &mut OsRng).unwrap();
//!
//! let picked = [*dealing.shares()[0].share(), *dealing.shares()[2].share()];
//! let recovered = recover_key_pair(&group, &config.scheme().unwrap(), &picked).unwrap();
//! assert_eq!(recovered.public_key(), key.public_key());
//! ```

pub mod config;
pub mod group;
pub mod math;
pub mod protocol;

pub use protocol::error::{Error, ParameterKind, Result};
