//! Signature schemes, key-pair generators and raw codecs end to end

use gcrypto_api::{
    Error, KeyCodec, KeyFormat, KeyPairConfig, KeyPairGenerator, KeyPairId, SignatureCodec,
    SignatureId, SignatureScheme,
};
use gcrypto_sign::{
    Dss, DssKeyPairGenerator, DssRawCodec, KeyPairGen, KeyPairGeneratorFactory, PrivateKey,
    PublicKey, RsaPss, Signature, SignatureFactory, SignatureValue,
};
use gcrypto_tests::{init_tracing, seeded_rng};

/// Sign `message` in two pieces and verify it as one
fn sign_then_verify<S: SignatureScheme>(
    signer: &mut S,
    verifier: &mut S,
    private: &S::PrivateKey,
    public: &S::PublicKey,
    message: &[u8],
) -> (S::Signature, bool) {
    let mut rng = seeded_rng(0x5167);
    let (head, tail) = message.split_at(message.len() / 2);
    signer.setup_sign(private).unwrap();
    signer.update(head).unwrap();
    signer.update(tail).unwrap();
    let signature = signer.sign_with_rng(&mut rng).unwrap();

    verifier.setup_verify(public).unwrap();
    verifier.update(message).unwrap();
    let valid = verifier.verify(&signature).unwrap();
    (signature, valid)
}

fn generate(name: &str, config: KeyPairConfig) -> gcrypto_sign::KeyPair {
    let mut generator = KeyPairGeneratorFactory::get_instance(name).unwrap();
    generator.setup(&config).unwrap();
    generator.generate(&mut seeded_rng(0x6b70)).unwrap()
}

#[test]
fn test_dss_through_the_generic_contract() {
    init_tracing();
    let mut generator = DssKeyPairGenerator::new();
    generator
        .setup(&KeyPairConfig::new().with_modulus_bits(1024))
        .unwrap();
    let pair = generator.generate(&mut seeded_rng(1)).unwrap();
    assert_eq!(pair.public.domain().bits(), 1024);
    assert_eq!(pair.public.domain().q().bits(), 160);

    let (_, valid) = sign_then_verify(
        &mut Dss::default(),
        &mut Dss::default(),
        &pair.private,
        &pair.public,
        b"a message split across updates",
    );
    assert!(valid);

    // the thread rng backs the plain sign call
    let mut signer = Dss::default();
    signer.setup_sign(&pair.private).unwrap();
    signer.update(b"fresh randomness").unwrap();
    let signature = signer.sign().unwrap();
    let mut verifier = Dss::default();
    verifier.setup_verify(&pair.public).unwrap();
    verifier.update(b"fresh randomness").unwrap();
    assert!(verifier.verify(&signature).unwrap());
}

#[test]
fn test_dss_modulus_sizes() {
    let mut generator = KeyPairGeneratorFactory::get_instance("dss").unwrap();
    assert!(matches!(
        generator.setup(&KeyPairConfig::new().with_modulus_bits(530)),
        Err(Error::InvalidParameter { .. })
    ));
    generator
        .setup(&KeyPairConfig::new().with_modulus_bits(512))
        .unwrap();
    let pair = generator.generate(&mut seeded_rng(2)).unwrap();
    match pair.public_key() {
        PublicKey::Dss(key) => assert_eq!(key.domain().bits(), 512),
        other => panic!("unexpected key {:?}", other),
    }
}

#[test]
fn test_rsa_pss_through_the_enums() {
    init_tracing();
    let pair = generate("rsa", KeyPairConfig::new());
    let (private, public) = (pair.private_key(), pair.public_key());
    assert!(matches!(private, PrivateKey::Rsa(_)));

    let mut signer = Signature::new(SignatureId::RsaPss);
    let mut verifier = SignatureFactory::get_instance("rsa-pss").unwrap();
    let (signature, valid) =
        sign_then_verify(&mut signer, &mut verifier, &private, &public, b"enum dispatch");
    assert!(valid);
    match &signature {
        SignatureValue::RsaPss(sig) => assert_eq!(sig.as_bytes().len(), 128),
        other => panic!("unexpected signature {:?}", other),
    }

    verifier.setup_verify(&public).unwrap();
    verifier.update(b"enum dispatcH").unwrap();
    assert!(!verifier.verify(&signature).unwrap());

    // a dss key cannot drive rsa-pss
    let dss = generate("dss", KeyPairConfig::new());
    assert!(matches!(
        signer.setup_sign(&dss.private_key()),
        Err(Error::InvalidKey { .. })
    ));
}

#[test]
fn test_rsa_pss_salt_lengths_must_agree() {
    let pair = generate("rsa", KeyPairConfig::new());
    let (private, public) = match pair {
        gcrypto_sign::KeyPair::Rsa(pair) => (pair.private, pair.public),
        _ => unreachable!(),
    };
    let (signature, valid) = sign_then_verify(
        &mut RsaPss::new().with_salt_len(20),
        &mut RsaPss::new().with_salt_len(20),
        &private,
        &public,
        b"salted",
    );
    assert!(valid);

    let mut unsalted = RsaPss::new();
    unsalted.setup_verify(&public).unwrap();
    unsalted.update(b"salted").unwrap();
    assert!(!unsalted.verify(&signature).unwrap());
}

#[test]
fn test_raw_codecs_round_trip_between_processes() {
    let pair = generate("dss", KeyPairConfig::new().with_modulus_bits(768));
    let mut signer = SignatureFactory::get_instance("dss").unwrap();
    signer.setup_sign(&pair.private_key()).unwrap();
    signer.update(b"stored and reloaded").unwrap();
    let signature = signer.sign_with_rng(&mut seeded_rng(3)).unwrap();

    let public_bytes = pair.public_key().to_raw().unwrap();
    let private_bytes = pair.private_key().to_raw().unwrap();
    let signature_bytes = signature.to_raw().unwrap();
    assert_eq!(&public_bytes[..4], b"GSDB");
    assert_eq!(&private_bytes[..4], b"GSDA");
    assert_eq!(&signature_bytes[..4], b"GNUB");

    let private = PrivateKey::from_raw(&private_bytes).unwrap();
    assert_eq!(private, pair.private_key());
    assert_eq!(private.public_key().unwrap(), pair.public_key());

    let mut verifier = Signature::new(SignatureId::Dss);
    verifier
        .setup_verify(&PublicKey::from_raw(&public_bytes).unwrap())
        .unwrap();
    verifier.update(b"stored and reloaded").unwrap();
    assert!(verifier
        .verify(&SignatureValue::from_raw(&signature_bytes).unwrap())
        .unwrap());

    let codec = DssRawCodec::new();
    assert_eq!(KeyCodec::format(&codec), KeyFormat::Raw);
    assert_eq!(SignatureCodec::format(&codec), KeyFormat::Raw);
    assert_eq!(KeyFormat::from_id(1).unwrap(), KeyFormat::Raw);

    let mut truncated = public_bytes.clone();
    truncated.truncate(public_bytes.len() - 3);
    assert!(matches!(
        codec.decode_public_key(&truncated),
        Err(Error::CorruptData { .. })
    ));
    let mut versioned = public_bytes;
    versioned[4] = 2;
    assert!(matches!(
        codec.decode_public_key(&versioned),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_generator_ids() {
    assert_eq!(KeyPairGen::new(KeyPairId::Rsa).name(), "rsa");
    assert_eq!(KeyPairGen::new(KeyPairId::Dss).id(), KeyPairId::Dss);
    assert_eq!(Signature::new(SignatureId::Dss).name(), "dss");
}
