//! Every registered name resolves to a self-tested instance

use gcrypto_algorithms::{
    CipherFactory, HashFactory, MacFactory, ModeFactory, PadFactory, PrngFactory,
};
use gcrypto_api::{
    BlockCipher, CipherMode, HashId, KeyPairGenerator, MacFunction, MessageDigest, PaddingScheme,
    RandomGenerator, SignatureScheme,
};
use gcrypto_sign::{KeyPairGeneratorFactory, SignatureFactory};

#[test]
fn test_every_cipher_and_mode() {
    gcrypto_tests::init_tracing();
    assert_eq!(
        CipherFactory::names().into_iter().collect::<Vec<_>>(),
        ["aes", "null", "serpent"]
    );
    for name in CipherFactory::names() {
        let cipher = CipherFactory::get_instance(name).unwrap();
        assert_eq!(cipher.name(), name);
        assert!(cipher.self_test());

        for mode_name in ModeFactory::names() {
            for bs in cipher.block_sizes() {
                let mode = ModeFactory::get_instance(mode_name, name, bs)
                    .unwrap_or_else(|| panic!("{}({}) at {}", mode_name, name, bs));
                assert_eq!(mode.name(), format!("{}({})", mode_name, name));
                assert_eq!(mode.default_block_size(), bs);
            }
        }
    }
    assert_eq!(ModeFactory::names().len(), 4);
}

#[test]
fn test_every_digest_and_mac() {
    gcrypto_tests::init_tracing();
    assert_eq!(HashFactory::names().len(), HashId::ALL.len());
    for name in HashFactory::names() {
        let hash = HashFactory::get_instance(name).unwrap();
        assert_eq!(hash.name(), name);

        let mac = MacFactory::get_instance(&format!("hmac-{}", name)).unwrap();
        assert_eq!(mac.name(), format!("hmac-{}", name));
    }
    let tmmh = MacFactory::get_instance("tmmh16").unwrap();
    assert_eq!(tmmh.name(), "tmmh16");
    assert!(MacFactory::names().contains("tmmh16"));
}

#[test]
fn test_every_pad_and_prng() {
    for name in PadFactory::names() {
        let pad = PadFactory::get_instance(name).unwrap();
        assert_eq!(pad.name(), name);
    }
    for name in PrngFactory::names() {
        let prng = PrngFactory::get_instance(name).unwrap();
        assert_eq!(prng.name(), name);
        assert!(!prng.is_initialised());
    }
}

#[test]
fn test_every_signature_scheme_and_generator() {
    gcrypto_tests::init_tracing();
    for name in SignatureFactory::names() {
        let scheme = SignatureFactory::get_instance(name).unwrap();
        assert_eq!(scheme.name(), name);
        assert!(scheme.self_test());
    }
    for name in KeyPairGeneratorFactory::names() {
        let generator = KeyPairGeneratorFactory::get_instance(name).unwrap();
        assert_eq!(generator.name(), name);
        assert!(generator.self_test());
    }
}

#[test]
fn test_synonyms_resolve_to_canonical_instances() {
    let cases = [
        ("Rijndael", "aes"),
        (" AES ", "aes"),
    ];
    for (alias, canonical) in cases {
        assert_eq!(CipherFactory::get_instance(alias).unwrap().name(), canonical);
    }
    for (alias, canonical) in [
        ("SHA", "sha-160"),
        ("sha1", "sha-160"),
        ("RIPEMD-160", "ripemd160"),
    ] {
        assert_eq!(HashFactory::get_instance(alias).unwrap().name(), canonical);
    }
    assert_eq!(MacFactory::get_instance("HMAC-SHA256").unwrap().name(), "hmac-sha-256");
    assert_eq!(SignatureFactory::get_instance("DSA").unwrap().name(), "dss");
    assert_eq!(KeyPairGeneratorFactory::get_instance("dsa").unwrap().name(), "dss");
}

#[test]
fn test_unknown_names_and_sizes() {
    assert!(CipherFactory::get_instance("des").is_none());
    assert!(HashFactory::get_instance("sha-512").is_none());
    assert!(MacFactory::get_instance("hmac-sha-512").is_none());
    assert!(MacFactory::get_instance("hmac").is_none());
    assert!(PadFactory::get_instance("iso10126").is_none());
    assert!(PrngFactory::get_instance("arcfour").is_none());
    assert!(SignatureFactory::get_instance("ed25519").is_none());
    assert!(KeyPairGeneratorFactory::get_instance("ecdsa").is_none());

    assert!(ModeFactory::get_instance("cbc", "aes", 16).is_none());
    assert!(ModeFactory::get_instance("ctr", "des", 16).is_none());
    // aes only runs with 16-byte blocks
    assert!(ModeFactory::get_instance("ctr", "aes", 32).is_none());
    assert!(ModeFactory::get_instance("ctr", "null", 32).is_some());
}
