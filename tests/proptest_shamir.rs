use proptest::prelude::*;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thresh::group::{CurveGroup, Secp256k1};
use thresh::math::gauss::U256;
use thresh::math::{Inv, PrimeField, PrimeModulus, SmallField, Uint};
use thresh::protocol::keys::{deal, recover_key_pair, KeyPair};
use thresh::protocol::shamir::{evaluate, reconstruct, Polynomial, SecretSharing, Shamir, Share};

const P: u64 = 2_147_483_647;

fn modulus() -> PrimeModulus<1> {
    PrimeModulus::new(Uint::from_u64(P)).unwrap()
}

fn wide(modulus: &PrimeModulus<1>, value: u64) -> PrimeField<1> {
    modulus.make(&Uint::from_u64(value)).unwrap()
}

fn agree(wide: PrimeField<1>, small: SmallField) -> bool {
    wide.rep() == Uint::from_u64(small.rep())
}

/// share count, threshold, and the indices of a threshold-sized subset
fn scheme_and_subset() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (1usize..=8).prop_flat_map(|n| {
        (1..=n).prop_flat_map(move |t| {
            (
                Just(n),
                Just(t),
                prop::sample::subsequence((0..n).collect::<Vec<_>>(), t),
            )
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn field_matches_small_oracle(a in 0..P, b in 0..P) {
        let m = modulus();
        let (wa, wb) = (wide(&m, a), wide(&m, b));
        let (sa, sb) = (SmallField::new(a, P).unwrap(), SmallField::new(b, P).unwrap());
        prop_assert!(agree(wa + wb, sa + sb));
        prop_assert!(agree(wa - wb, sa - sb));
        prop_assert!(agree(wa * wb, sa * sb));
        prop_assert!(agree(-wa, -sa));
        if a != 0 {
            prop_assert!(agree(wa.inv().unwrap(), sa.inv().unwrap()));
        } else {
            prop_assert!(wa.inv().is_err());
        }
    }

    #[test]
    fn interpolation_matches_small_oracle(
        coefficients in prop::collection::vec(0..P, 2..6),
        extra in 0usize..3,
    ) {
        let m = modulus();
        let n = coefficients.len() + extra;
        let wide_poly = Polynomial::from_coefficients(
            coefficients.iter().map(|&c| wide(&m, c)).collect(),
        ).unwrap();
        let small_poly = Polynomial::from_coefficients(
            coefficients.iter().map(|&c| SmallField::new(c, P).unwrap()).collect(),
        ).unwrap();
        let wide_shares = evaluate(&wide_poly, n).unwrap();
        let small_shares = evaluate(&small_poly, n).unwrap();
        for (w, s) in wide_shares.iter().zip(&small_shares) {
            prop_assert!(agree(w.x, s.x));
            prop_assert!(agree(w.y, s.y));
        }
        let secret = reconstruct(&wide_shares).unwrap();
        prop_assert!(agree(secret, reconstruct(&small_shares).unwrap()));
        prop_assert_eq!(secret, wide(&m, coefficients[0]));
    }

    #[test]
    fn any_threshold_subset_recovers(
        secret in 0..P,
        seed in prop::array::uniform32(any::<u8>()),
        (n, t, subset) in scheme_and_subset(),
    ) {
        let secret = wide(&modulus(), secret);
        let scheme = Shamir::new(t, n).unwrap();
        let shares = scheme.split(secret, &mut ChaCha20Rng::from_seed(seed)).unwrap();
        prop_assert_eq!(shares.len(), n);

        let mut picked: Vec<Share<PrimeField<1>>> = subset.iter().map(|&i| shares[i]).collect();
        prop_assert_eq!(scheme.recover(&picked).unwrap(), secret);
        picked.reverse();
        prop_assert_eq!(scheme.recover(&picked).unwrap(), secret);
        prop_assert_eq!(scheme.recover(&shares).unwrap(), secret);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn recovered_key_matches_group_key(
        seed in prop::array::uniform32(any::<u8>()),
        (n, t, subset) in scheme_and_subset(),
    ) {
        let group = Secp256k1::new();
        let mut rng = ChaCha20Rng::from_seed(seed);
        let key = KeyPair::random(&group, &mut rng).unwrap();
        let scheme = Shamir::new(t, n).unwrap();
        let dealing = deal(&group, &scheme, key.private_key(), &mut rng).unwrap();
        prop_assert_eq!(dealing.group_key(), key.public_key());

        let picked: Vec<_> = subset.iter().map(|&i| *dealing.shares()[i].share()).collect();
        let recovered = recover_key_pair(&group, &scheme, &picked).unwrap();
        prop_assert!(dealing.verify(&recovered));
        for share in dealing.shares() {
            prop_assert!(share.verify(&group).unwrap());
        }
    }

    #[test]
    fn scalars_below_the_order_are_accepted(bytes in prop::array::uniform32(any::<u8>())) {
        let group = Secp256k1::new();
        let value = U256::from_be_slice(&bytes);
        match group.scalar(&value) {
            Ok(scalar) => {
                prop_assert_eq!(scalar.rep(), value);
                prop_assert!(group.public_key(&scalar).is_ok());
            }
            Err(_) => prop_assert!(value >= group.order().get()),
        }
    }
}
