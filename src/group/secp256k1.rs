//! secp256k1 through the `k256` crate

crate::group::impl_curve_group!(
    Secp256k1,
    k256,
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
);

#[test]
fn test_order_matches_curve() {
    use crate::math::galois::FiniteField;

    let group = Secp256k1::new();
    let minus_one = -group.order().one();
    let curve_minus_one = -k256::Scalar::ONE;
    assert_eq!(minus_one.rep().to_be_bytes().as_slice(), curve_minus_one.to_repr().as_slice());
    assert!(!minus_one.is_zero());
}

#[test]
fn test_public_key() {
    use crate::math::gauss::Uint;

    let group = Secp256k1::new();
    let one = group.scalar(&Uint::ONE).unwrap();
    let encoded = group.public_key(&one).unwrap();
    assert_eq!(encoded.as_bytes().len(), 65);
    assert_eq!(encoded.as_bytes()[0], 0x04);
    // x coordinate of the generator
    assert_eq!(
        &encoded.as_bytes()[1..33],
        U256::from_be_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798")
            .to_be_bytes()
            .as_slice()
    );

    let two = group.scalar(&Uint::from_u64(2)).unwrap();
    let doubled = group.base_point_multiply(&one).unwrap() + group.base_point_multiply(&one).unwrap();
    assert_eq!(group.public_key(&two).unwrap(), group.encode(&doubled));

    let zero = group.scalar(&Uint::ZERO).unwrap();
    assert!(group.public_key(&zero).unwrap().is_identity());
}

#[test]
fn test_rejects_foreign_scalars() {
    use crate::math::gauss::Uint;
    use crate::protocol::error::Error;

    let group = Secp256k1::new();
    let other = PrimeModulus::<SCALAR_LIMBS>::new(Uint::from_u64(101)).unwrap();
    assert_eq!(
        group.public_key(&other.from_u64(5)).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ModulusMismatch)
    );
    assert_eq!(
        group.scalar(&U256::from_be_hex(ORDER)).unwrap_err(),
        Error::InvalidParameter(ParameterKind::ScalarOutOfRange)
    );
}
