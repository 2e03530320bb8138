//! errors during secret sharing and key derivation

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterKind),

    #[error("duplicate x coordinate in share set")]
    DuplicateX,

    #[error("no modular inverse exists")]
    NoInverse,

    #[error("insufficient shares for reconstruction: got {0}")]
    InsufficientShares(usize),

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ParameterKind {
    /// threshold `t` is zero
    ZeroThreshold,
    /// share count `n` is zero
    ZeroShares,
    /// threshold `t` is larger than the share count `n`
    ThresholdExceedsShares,
    /// share count `n` does not fit below the field modulus
    TooManyShares,
    /// a value is not below the field modulus
    ScalarOutOfRange,
    /// the modulus failed the primality test
    CompositeModulus,
    /// Montgomery arithmetic needs an odd modulus
    EvenModulus,
    /// operands belong to different fields
    ModulusMismatch,
    /// a share index past the end of the share set
    IndexOutOfRange,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParameterKind::ZeroThreshold => "threshold must be at least 1",
            ParameterKind::ZeroShares => "share count must be at least 1",
            ParameterKind::ThresholdExceedsShares => "threshold cannot exceed share count",
            ParameterKind::TooManyShares => "share count must be below the field modulus",
            ParameterKind::ScalarOutOfRange => "value must be below the field modulus",
            ParameterKind::CompositeModulus => "modulus is not prime",
            ParameterKind::EvenModulus => "modulus must be odd",
            ParameterKind::ModulusMismatch => "operands belong to different fields",
            ParameterKind::IndexOutOfRange => "share index is outside the share set",
        };
        f.write_str(msg)
    }
}

impl From<ParameterKind> for Error {
    fn from(kind: ParameterKind) -> Self {
        Error::InvalidParameter(kind)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
