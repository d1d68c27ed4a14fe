use super::*;
use proptest::prelude::*;

/// Digests of the empty string, one zero byte and two zero bytes
const ZERO_FIXTURES: &[(HashId, [&str; 3])] = &[
    (
        HashId::Md4,
        [
            "31d6cfe0d16ae931b73c59d7e0c089c0",
            "47c61a0fa8738ba77308a8a600f88e4b",
            "d4da020aedcd249a7a418867a6f0c18a",
        ],
    ),
    (
        HashId::Md5,
        [
            "d41d8cd98f00b204e9800998ecf8427e",
            "93b885adfe0da089cdf634904fd59f71",
            "c4103f122d27677c9db144cae1394a66",
        ],
    ),
    (
        HashId::Sha160,
        [
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "5ba93c9db0cff93f52b521d7420e43f6eda2784f",
            "1489f923c4dca729178b3e3233458550d8dddf29",
        ],
    ),
    (
        HashId::Sha256,
        [
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d",
            "96a296d224f285c67bee93c30f8a309157f0daa35dc5b87e410b78630a09cfc7",
        ],
    ),
    (
        HashId::Ripemd128,
        [
            "cdf26213a150dc3ecb610f18f6b38b46",
            "f069a435c14a8d4b02a7bbaee02d0bc3",
            "592d856cd4e1f8db72bb7955a6ae98ea",
        ],
    ),
    (
        HashId::Ripemd160,
        [
            "9c1185a5c5e9fc54612808977ee8f548b2258d31",
            "c81b94933420221a7ac004a90242d8b1d3e5070d",
            "f7d50d120d655be4b88750873e00caf147f28a1b",
        ],
    ),
    (
        HashId::Whirlpool,
        [
            "470f0409abaa446e49667d4ebe12a14387cedbd10dd17b8243cad550a089dc0f\
             eea7aa40f6c2aaab71c6ebd076e43c7cfca0ad32567897dcb5969861049a0f5a",
            "ebaa1df2e97113be187eb0303c660f6e643e2c090ef2cda9a2ea6dcf5002147d\
             1d0e1e9d996e879cef9d26896630a5db3308d5a0dc235b199c38923be2259e03",
            "5777fc1f8467a1c004cd9130439403ccdaa9fdc86092d9cffe339e6008612374\
             d04c8fc0c724707feae6f7ceb1e030cabf652a673da1849b02654af76eee24a7",
        ],
    ),
];

fn hex_digest(id: HashId, data: &[u8]) -> String {
    let mut h = Hash::new(id);
    h.update(data);
    hex::encode(h.digest())
}

#[test]
fn test_zero_byte_fixtures() {
    for (id, expected) in ZERO_FIXTURES {
        for (len, want) in expected.iter().enumerate() {
            assert_eq!(&hex_digest(*id, &vec![0u8; len]), want, "{} over {} zero bytes", id, len);
        }
    }
}

#[test]
fn test_known_answers() {
    let cases = [
        (HashId::Md4, &b"abc"[..], "a448017aaf21d8525fc10ae87aa6729d"),
        (HashId::Md4, b"message digest", "d9130a8164549fe818874806e1c7014b"),
        (HashId::Md5, b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
        (HashId::Ripemd128, b"message digest", "9e327b3d6e523062afc1132d7df9d1b8"),
        (HashId::Ripemd160, b"abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
        (
            HashId::Sha160,
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
        (
            HashId::Sha256,
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
        (
            HashId::Whirlpool,
            b"abc",
            "8afc0527dcc0a19623860ef2369d0e25de8ebe2abaa40f598afaf6b07c002ed7\
             3e4fc0fc220fd4f54f74b5d6b07aa57764c3dbdcc2cdd919d89fa8155a34b841",
        ),
    ];
    for (id, input, expected) in cases {
        assert_eq!(hex_digest(id, input), expected, "{}", id);
    }
}

#[test]
fn test_sizes_and_names() {
    for id in HashId::ALL {
        let h = Hash::new(*id);
        assert_eq!(h.name(), id.name());
        assert_eq!(h.block_size(), MD_BLOCK_SIZE);
        assert_eq!(h.id(), *id);
        assert!(h.self_test(), "{}", id);
    }
    assert_eq!(Hash::new(HashId::Whirlpool).hash_size(), 64);
    assert_eq!(Hash::new(HashId::Ripemd128).hash_size(), 16);
}

#[test]
fn test_digest_resets() {
    let mut h = Sha256::new();
    h.update(b"some input");
    let _ = h.digest();
    assert_eq!(
        hex::encode(h.digest()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_clone_forks_state() {
    for id in HashId::ALL {
        let mut original = Hash::new(*id);
        original.update(b"shared prefix ");
        let mut fork = original.clone();

        original.update(b"left");
        fork.update(b"right");
        assert_eq!(hex::encode(original.digest()), hex_digest(*id, b"shared prefix left"));
        assert_eq!(hex::encode(fork.digest()), hex_digest(*id, b"shared prefix right"));
    }
}

#[test]
fn test_update_byte_matches_update() {
    let data: Vec<u8> = (0..200u8).collect();
    let mut h = Md5::new();
    for b in &data {
        h.update_byte(*b);
    }
    assert_eq!(h.digest(), Md5::hash(&data));
}

#[test]
fn test_digest_into() {
    let mut h = Ripemd160::new();
    h.update(b"abc");
    let mut out = [0u8; 24];
    assert!(matches!(h.digest_into(&mut out, 0, 19), Err(Error::InvalidLength { .. })));
    assert!(matches!(h.digest_into(&mut out, 8, 20), Err(Error::InvalidParameter { .. })));

    // failed calls leave the absorbed input in place
    assert_eq!(h.digest_into(&mut out, 4, 20).unwrap(), 20);
    assert_eq!(&out[..4], &[0u8; 4]);
    assert_eq!(hex::encode(&out[4..]), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
}

#[test]
fn test_snapshot_restore() {
    let data: Vec<u8> = (0..150).map(|i| (i * 7) as u8).collect();
    for id in HashId::ALL {
        let mut h = Hash::new(*id);
        h.update(&data[..100]);
        let state = h.snapshot();
        assert_eq!(state.count, 100);
        assert_eq!(state.buffer.len(), 36);

        let mut resumed = Hash::new(*id);
        resumed.restore(&state).unwrap();
        resumed.update(&data[100..]);
        assert_eq!(hex::encode(resumed.digest()), hex_digest(*id, &data), "{}", id);
    }
}

#[test]
fn test_restore_rejects_foreign_state() {
    let mut md5 = Md5::new();
    md5.update(b"abc");
    let state = md5.snapshot();

    let mut sha = Sha160::new();
    assert!(matches!(sha.restore(&state), Err(Error::InvalidParameter { .. })));

    let mut bad = state.clone();
    bad.count = 4;
    assert!(matches!(md5.restore(&bad), Err(Error::InvalidParameter { .. })));

    let mut short = state;
    short.chaining.truncate(15);
    assert!(matches!(md5.restore(&short), Err(Error::InvalidLength { .. })));
}

#[test]
fn test_padding_boundaries() {
    // lengths around the point where the length field no longer fits
    for len in [55usize, 56, 63, 64, 65, 119, 120] {
        let data = vec![0x61u8; len];
        let mut split = Sha256::new();
        split.update(&data[..len / 2]);
        split.update(&data[len / 2..]);
        assert_eq!(split.digest(), Sha256::hash(&data));
    }
    for len in [31usize, 32, 33, 95, 96] {
        let data = vec![0x61u8; len];
        let mut split = Whirlpool::new();
        split.update(&data[..1]);
        split.update(&data[1..]);
        assert_eq!(split.digest(), Whirlpool::hash(&data));
    }
}

#[test]
fn test_factory() {
    let h = HashFactory::get_instance("SHA1").unwrap();
    assert_eq!(h.id(), HashId::Sha160);
    assert_eq!(HashFactory::get_instance(" ripemd-128 ").unwrap().id(), HashId::Ripemd128);
    assert!(HashFactory::get_instance("sha-512").is_none());

    let names = HashFactory::names();
    assert_eq!(names.len(), 7);
    assert!(names.contains("sha-160"));
    assert!(!names.contains("sha1"));
}

proptest! {
    #[test]
    fn prop_split_updates_match_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        cut in 0usize..300,
        id in proptest::sample::select(HashId::ALL),
    ) {
        let cut = cut.min(data.len());
        let mut h = Hash::new(id);
        h.update(&data[..cut]);
        h.update(&data[cut..]);
        prop_assert_eq!(hex::encode(h.digest()), hex_digest(id, &data));
    }
}
