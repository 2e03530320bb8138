//! NIST P-256 (prime256v1) through the `p256` crate

crate::group::impl_curve_group!(
    NistP256,
    p256,
    "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"
);

#[test]
fn test_order_matches_curve() {
    let group = NistP256::new();
    let minus_one = -group.order().one();
    let curve_minus_one = -p256::Scalar::ONE;
    assert_eq!(minus_one.rep().to_be_bytes().as_slice(), curve_minus_one.to_repr().as_slice());
}

#[test]
fn test_public_key() {
    use crate::math::gauss::Uint;

    let group = NistP256::new();
    let one = group.scalar(&Uint::ONE).unwrap();
    let encoded = group.public_key(&one).unwrap();
    assert_eq!(encoded.as_bytes().len(), 65);
    assert_eq!(encoded.as_bytes()[0], 0x04);
    // x coordinate of the generator
    assert_eq!(
        &encoded.as_bytes()[1..33],
        U256::from_be_hex("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296")
            .to_be_bytes()
            .as_slice()
    );

    let secp256k1 = crate::group::Secp256k1::new();
    let other = secp256k1.public_key(&secp256k1.scalar(&Uint::ONE).unwrap()).unwrap();
    assert_ne!(encoded, other);
}
