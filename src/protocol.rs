//! threshold key management built on the field arithmetic in `math`

pub mod error;
pub mod keys;
pub mod shamir;
