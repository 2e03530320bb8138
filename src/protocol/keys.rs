//! threshold key management: dealing a private key into shares, deriving
//! public keys, and checking a recovered key against the dealt group key

use crate::group::{CurveGroup, EncodedPoint, Scalar};
use crate::math::galois::FiniteField;
use crate::protocol::error::{ParameterKind, Result};
use crate::protocol::shamir::{SecretSharing, Shamir, Share};
use rand_core::CryptoRngCore;
use std::fmt;
use tracing::debug;
use zeroize::Zeroize;

/// a private scalar with the public key derived from it
pub struct KeyPair {
    private_key: Scalar,
    public_key: EncodedPoint,
}

impl KeyPair {
    /// derives the public key of `private_key` in `group`
    pub fn from_private<G: CurveGroup>(group: &G, private_key: Scalar) -> Result<Self> {
        let public_key = group.public_key(&private_key)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// draws a fresh nonzero private key below the group order
    pub fn random<G: CurveGroup, R: CryptoRngCore>(group: &G, rng: &mut R) -> Result<Self> {
        let order = group.order();
        let private_key = loop {
            let candidate = order.random_make(rng);
            if !candidate.is_zero() {
                break candidate;
            }
        };
        Self::from_private(group, private_key)
    }

    pub fn private_key(&self) -> &Scalar {
        &self.private_key
    }

    pub fn public_key(&self) -> &EncodedPoint {
        &self.public_key
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// one share of a dealt key, with the public key of its own scalar
/// so that holders can be audited without revealing shares
pub struct KeyShare {
    share: Share<Scalar>,
    public_key: EncodedPoint,
}

impl KeyShare {
    /// the share is `Copy`; copies taken from here are not wiped when this drops
    pub fn share(&self) -> &Share<Scalar> {
        &self.share
    }

    pub fn public_key(&self) -> &EncodedPoint {
        &self.public_key
    }

    /// true when the share's scalar still matches its published public key
    pub fn verify<G: CurveGroup>(&self, group: &G) -> Result<bool> {
        Ok(group.public_key(&self.share.y)? == self.public_key)
    }
}

impl Drop for KeyShare {
    fn drop(&mut self) {
        self.share.zeroize();
    }
}

impl fmt::Debug for KeyShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyShare")
            .field("x", &self.share.x)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// the output of dealing a private key: the group public key and one
/// [`KeyShare`] per holder
#[derive(Debug)]
pub struct Dealing {
    group_key: EncodedPoint,
    shares: Vec<KeyShare>,
}

impl Dealing {
    pub fn group_key(&self) -> &EncodedPoint {
        &self.group_key
    }

    pub fn shares(&self) -> &[KeyShare] {
        &self.shares
    }

    /// true when `key` is the key this dealing was made from
    pub fn verify(&self, key: &KeyPair) -> bool {
        key.public_key() == &self.group_key
    }
}

/// splits `secret` with `scheme` and derives the group and per-share public keys
/// # Example
/// ```
/// use thresh::group::Secp256k1;
/// use thresh::protocol::keys::{deal, recover_key_pair, KeyPair};
/// use thresh::protocol::shamir::Shamir;
/// use rand_core::OsRng;
///
/// let group = Secp256k1::new();
/// let key = KeyPair::random(&group, &mut OsRng).unwrap();
/// let dealing = deal(&group, &Shamir::new(2, 3).unwrap(), key.private_key(), &mut OsRng).unwrap();
/// let picked: Vec<_> = dealing.shares()[1..].iter().map(|s| *s.share()).collect();
/// let recovered = recover_key_pair(&group, &Shamir::new(2, 3).unwrap(), &picked).unwrap();
/// assert!(dealing.verify(&recovered));
/// ```
pub fn deal<G: CurveGroup, R: CryptoRngCore>(
    group: &G,
    scheme: &Shamir,
    secret: &Scalar,
    rng: &mut R,
) -> Result<Dealing> {
    if secret.modulus() != group.order() {
        return Err(ParameterKind::ModulusMismatch.into());
    }
    let group_key = group.public_key(secret)?;
    let shares = scheme
        .split(*secret, rng)?
        .into_iter()
        .map(|share| {
            Ok(KeyShare {
                public_key: group.public_key(&share.y)?,
                share,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        threshold = scheme.threshold(),
        shares = scheme.shares(),
        "dealt key"
    );
    Ok(Dealing { group_key, shares })
}

/// recovers the private key dealt with `scheme` and derives its public key;
/// fewer than `scheme.threshold()` shares are rejected
pub fn recover_key_pair<G: CurveGroup>(
    group: &G,
    scheme: &Shamir,
    shares: &[Share<Scalar>],
) -> Result<KeyPair> {
    KeyPair::from_private(group, scheme.recover(shares)?)
}

#[test]
fn test_deal_and_recover() {
    use crate::group::Secp256k1;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    let group = Secp256k1::new();
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = KeyPair::random(&group, &mut rng).unwrap();
    let scheme = Shamir::new(3, 5).unwrap();
    let dealing = deal(&group, &scheme, key.private_key(), &mut rng).unwrap();

    assert_eq!(dealing.group_key(), key.public_key());
    assert_eq!(dealing.shares().len(), 5);
    for share in dealing.shares() {
        assert!(share.verify(&group).unwrap());
        assert_ne!(share.public_key(), dealing.group_key());
    }

    let shares: Vec<_> = dealing.shares().iter().map(|s| *s.share()).collect();
    let full = recover_key_pair(&group, &scheme, &shares).unwrap();
    assert_eq!(full.private_key(), key.private_key());
    assert!(dealing.verify(&full));

    let picked = [shares[4], shares[0], shares[2]];
    assert!(dealing.verify(&recover_key_pair(&group, &scheme, &picked).unwrap()));

    assert_eq!(
        recover_key_pair(&group, &scheme, &shares[..2]).unwrap_err(),
        crate::protocol::error::Error::InsufficientShares(2)
    );
}

#[test]
fn test_deal_on_p256() {
    use crate::group::NistP256;
    use rand_core::OsRng;

    let group = NistP256::new();
    let key = KeyPair::random(&group, &mut OsRng).unwrap();
    let scheme = Shamir::new(2, 2).unwrap();
    let dealing = deal(&group, &scheme, key.private_key(), &mut OsRng).unwrap();
    let shares: Vec<_> = dealing.shares().iter().map(|s| *s.share()).collect();
    assert!(dealing.verify(&recover_key_pair(&group, &scheme, &shares).unwrap()));
}

#[test]
fn test_deal_rejects_foreign_secret() {
    use crate::group::{NistP256, Secp256k1};
    use crate::protocol::error::Error;
    use rand_core::OsRng;

    let key = KeyPair::random(&NistP256::new(), &mut OsRng).unwrap();
    assert_eq!(
        deal(&Secp256k1::new(), &Shamir::new(2, 3).unwrap(), key.private_key(), &mut OsRng).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ModulusMismatch)
    );
}

#[test]
fn test_tampered_share_is_detected_by_audit() {
    use crate::group::Secp256k1;
    use crate::math::abel::AbelianMonoid;
    use rand_core::OsRng;

    let group = Secp256k1::new();
    let key = KeyPair::random(&group, &mut OsRng).unwrap();
    let scheme = Shamir::new(2, 3).unwrap();
    let dealing = deal(&group, &scheme, key.private_key(), &mut OsRng).unwrap();
    let original = &dealing.shares()[0];
    let tampered = KeyShare {
        share: Share {
            x: original.share().x,
            y: original.share().y + original.share().y.one(),
        },
        public_key: original.public_key().clone(),
    };
    assert!(!tampered.verify(&group).unwrap());

    // reconstruction itself cannot tell: it silently yields a different key
    let shares = [*tampered.share(), *dealing.shares()[1].share()];
    assert!(!dealing.verify(&recover_key_pair(&group, &scheme, &shares).unwrap()));
}

#[test]
fn test_recover_with_threshold_one() {
    use crate::group::Secp256k1;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    let group = Secp256k1::new();
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let key = KeyPair::random(&group, &mut rng).unwrap();
    let scheme = Shamir::new(1, 3).unwrap();
    let dealing = deal(&group, &scheme, key.private_key(), &mut rng).unwrap();
    for share in dealing.shares() {
        let recovered = recover_key_pair(&group, &scheme, &[*share.share()]).unwrap();
        assert!(dealing.verify(&recovered));
    }
    assert_eq!(
        recover_key_pair(&group, &scheme, &[]).unwrap_err(),
        crate::protocol::error::Error::InsufficientShares(0)
    );
}
