//! arbitrary-precision integers, re-exported from `crypto-bigint`

pub use crypto_bigint::*;
