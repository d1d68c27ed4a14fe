use super::*;

fn keyed(key_hex: &str) -> Aes {
    let mut aes = Aes::new();
    aes.init(&CipherConfig::new().with_key(&hex::decode(key_hex).unwrap()))
        .unwrap();
    aes
}

#[test]
fn test_sbox_known_values() {
    assert_eq!(sbox(0x00), 0x63);
    assert_eq!(sbox(0x53), 0xed);
    assert_eq!(inv_sbox(0x63), 0x00);
    for x in 0..=255u8 {
        assert_eq!(inv_sbox(sbox(x)), x);
    }
}

#[test]
fn test_fips197_vectors() {
    let pt = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let cases = [
        ("000102030405060708090a0b0c0d0e0f", "69c4e0d86a7b0430d8cdb78070b4c55a"),
        (
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];
    for (key, expected) in cases {
        let aes = keyed(key);
        let mut ct = [0u8; 16];
        aes.encrypt_block(&pt, 0, &mut ct, 0).unwrap();
        assert_eq!(hex::encode(ct), expected);

        let mut back = [0u8; 16];
        aes.decrypt_block(&ct, 0, &mut back, 0).unwrap();
        assert_eq!(back.to_vec(), pt);
    }
}

#[test]
fn test_sp800_38a_ecb_block() {
    let aes = keyed("2b7e151628aed2a6abf7158809cf4f3c");
    let pt = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let mut ct = [0u8; 16];
    aes.encrypt_block(&pt, 0, &mut ct, 0).unwrap();
    assert_eq!(hex::encode(ct), "3ad77bb40d7a3660a89ecaf32466ef97");
}

#[test]
fn test_offsets() {
    let aes = keyed("000102030405060708090a0b0c0d0e0f");
    let mut input = vec![0xaa; 3];
    input.extend(hex::decode("00112233445566778899aabbccddeeff").unwrap());
    let mut out = vec![0u8; 21];
    aes.encrypt_block(&input, 3, &mut out, 5).unwrap();
    assert_eq!(&out[..5], &[0u8; 5]);
    assert_eq!(hex::encode(&out[5..]), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn test_lifecycle_errors() {
    let mut aes = Aes::new();
    let mut out = [0u8; 16];
    assert!(matches!(
        aes.encrypt_block(&[0u8; 16], 0, &mut out, 0),
        Err(Error::InvalidState { .. })
    ));
    assert!(aes.current_block_size().is_err());
    assert!(matches!(aes.init(&CipherConfig::new()), Err(Error::InvalidKey { .. })));
    assert!(matches!(
        aes.init(&CipherConfig::new().with_key(&[0u8; 15])),
        Err(Error::InvalidKey { .. })
    ));
    assert!(matches!(
        aes.init(&CipherConfig::new().with_key(&[0u8; 16]).with_block_size(32)),
        Err(Error::InvalidParameter { .. })
    ));

    aes.init(&CipherConfig::new().with_key(&[0u8; 16])).unwrap();
    assert_eq!(aes.current_block_size().unwrap(), 16);
    assert!(matches!(
        aes.init(&CipherConfig::new().with_key(&[0u8; 16])),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(
        aes.encrypt_block(&[0u8; 15], 0, &mut out, 0),
        Err(Error::InvalidLength { .. })
    ));

    aes.reset();
    assert!(aes.current_block_size().is_err());
    aes.init(&CipherConfig::new().with_key(&[0u8; 32])).unwrap();
}

#[test]
fn test_self_test_passes() {
    assert!(Aes::new().self_test());
}
