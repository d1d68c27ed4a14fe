//! Cross-family behaviour driven through the factories

use gcrypto_algorithms::{
    CipherFactory, HashFactory, MacFactory, ModeFactory, PadFactory, PrngFactory,
};
use gcrypto_api::{
    BlockCipher, CipherConfig, CipherMode, Direction, Error, IcmConfig, MacConfig, MacFunction,
    MdConfig, MessageDigest, ModeConfig, PaddingScheme, PrngConfig, RandomGenerator,
};
use proptest::prelude::*;

fn keystream(key: &[u8]) -> Box<dyn RandomGenerator + Send> {
    let mut prng = PrngFactory::get_instance("icm").unwrap();
    let config = IcmConfig::new().with_key(key).with_block_index_len(8);
    prng.init(&PrngConfig::Icm(config)).unwrap();
    Box::new(prng)
}

fn tmmh_tag(key: &[u8], tag_len: usize, prefix: Option<&[u8]>, messages: &[&[u8]]) -> Vec<Vec<u8>> {
    let mut mac = MacFactory::get_instance("tmmh16").unwrap();
    let mut config = MacConfig::new()
        .with_keystream(keystream(key))
        .with_tag_len(tag_len);
    if let Some(prefix) = prefix {
        config = config.with_prefix(prefix);
    }
    mac.init(config).unwrap();
    assert_eq!(mac.mac_size(), tag_len);
    messages
        .iter()
        .map(|m| {
            mac.update(m).unwrap();
            mac.digest().unwrap()
        })
        .collect()
}

fn crypt(mode_name: &str, direction: Direction, key: &[u8], iv: &[u8], input: &[u8]) -> Vec<u8> {
    let mut mode = ModeFactory::get_instance(mode_name, "aes", 16).unwrap();
    mode.init(
        &ModeConfig::new(CipherConfig::new().with_key(key))
            .with_direction(direction)
            .with_iv(iv),
    )
    .unwrap();
    let mut out = vec![0u8; input.len()];
    for off in (0..input.len()).step_by(16) {
        mode.update(input, off, &mut out, off).unwrap();
    }
    out
}

#[test]
fn test_aes_key_sizes_are_symmetric() {
    let mut aes = CipherFactory::get_instance("aes").unwrap();
    assert_eq!(aes.key_sizes(), [16, 24, 32]);
    let block: Vec<u8> = (0u8..16).collect();
    for ks in aes.key_sizes() {
        let key = vec![0x5au8; ks];
        aes.init(&CipherConfig::new().with_key(&key)).unwrap();
        let mut ct = [0u8; 16];
        let mut pt = [0u8; 16];
        aes.encrypt_block(&block, 0, &mut ct, 0).unwrap();
        aes.decrypt_block(&ct, 0, &mut pt, 0).unwrap();
        assert_ne!(ct[..], block[..]);
        assert_eq!(pt[..], block[..]);
        aes.reset();
        assert!(matches!(aes.current_block_size(), Err(Error::InvalidState { .. })));
    }
    assert!(matches!(
        aes.init(&CipherConfig::new().with_key(&[0u8; 20])),
        Err(Error::InvalidKey { .. })
    ));
}

#[test]
fn test_digest_state_forks_and_resumes() {
    for name in HashFactory::names() {
        let mut whole = HashFactory::get_instance(name).unwrap();
        whole.update(b"The quick brown fox jumps over the lazy dog");
        let expected = whole.digest();

        let mut first = HashFactory::get_instance(name).unwrap();
        first.update(b"The quick brown fox ");
        let fork = first.clone();
        let state = first.snapshot();

        let mut resumed = HashFactory::get_instance(name).unwrap();
        resumed.restore(&state).unwrap();
        for mut h in [first, fork, resumed] {
            h.update(b"jumps over the lazy dog");
            assert_eq!(h.digest(), expected, "{}", name);
        }
    }
}

#[test]
fn test_tmmh16_over_an_icm_keystream() {
    let key = [0x11u8; 16];
    let message: &[u8] = b"universal hashing";

    let tags = tmmh_tag(&key, 4, None, &[message, message, b"another message"]);
    assert_eq!(tags[0].len(), 4);
    // key words are reused, so the same message gets the same tag
    assert_eq!(tags[0], tags[1]);
    assert_ne!(tags[0], tags[2]);

    assert_eq!(tmmh_tag(&key, 4, None, &[message]), tags[..1]);
    assert_ne!(tmmh_tag(&[0x22u8; 16], 4, None, &[message])[0], tags[0]);

    let prefix = [0xa5u8, 0x5a, 0xff, 0x00];
    let masked = tmmh_tag(&key, 4, Some(&prefix), &[message]);
    let unmasked: Vec<u8> = tags[0].iter().zip(prefix).map(|(t, p)| t ^ p).collect();
    assert_eq!(masked[0], unmasked);

    // an ICM keystream needs at least one index length
    let mut bare = PrngFactory::get_instance("icm").unwrap();
    assert!(matches!(
        bare.init(&PrngConfig::Icm(IcmConfig::new().with_key(&key))),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(!bare.is_initialised());
}

#[test]
fn test_md_prng_refills_across_digests() {
    let mut prng = PrngFactory::get_instance("md").unwrap();
    assert!(matches!(prng.next_byte(), Err(Error::InvalidState { .. })));
    prng.init(&PrngConfig::Md(MdConfig::new().with_seed(b"abc")))
        .unwrap();

    let mut out = vec![0u8; 45];
    prng.fill(&mut out).unwrap();
    // each block is the running digest, which then absorbs that block
    let mut running = HashFactory::get_instance("sha-160").unwrap();
    running.update(b"abc");
    let first = running.clone().digest();
    assert_eq!(out[..20], first[..]);
    running.update(&first);
    assert_eq!(out[20..40], running.digest()[..]);

    // the requested window is checked before anything is drawn
    let mut small = [0u8; 4];
    assert!(matches!(
        prng.next_bytes(&mut small, 2, 3),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_padded_message_through_ecb() {
    let key = [0x2bu8; 16];
    let mut pad = PadFactory::get_instance("pkcs7").unwrap();
    pad.init(16).unwrap();
    let message = b"thirty-one bytes of plain text!";

    let mut padded = message.to_vec();
    padded.extend(pad.pad(message).unwrap());
    assert_eq!(padded.len(), 32);

    let ct = crypt("ecb", Direction::Encryption, &key, &[0u8; 16], &padded);
    let pt = crypt("ecb", Direction::Decryption, &key, &[0u8; 16], &ct);
    assert_eq!(pad.unpad(&pt).unwrap(), message.len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_modes_round_trip(
        key in prop::collection::vec(any::<u8>(), 16),
        iv in prop::collection::vec(any::<u8>(), 16),
        blocks in prop::collection::vec(any::<u8>(), 16..=16),
        count in 1usize..6,
    ) {
        let input = blocks.repeat(count);
        for mode in ["ecb", "ctr", "icm", "ofb"] {
            let ct = crypt(mode, Direction::Encryption, &key, &iv, &input);
            prop_assert_eq!(crypt(mode, Direction::Decryption, &key, &iv, &ct), input.clone());
        }
    }

    #[test]
    fn prop_tbc_round_trips(data in prop::collection::vec(any::<u8>(), 0..64), bs in 1usize..=32) {
        let mut pad = PadFactory::get_instance("tbc").unwrap();
        pad.init(bs).unwrap();
        let mut padded = data.clone();
        padded.extend(pad.pad(&data).unwrap());
        prop_assert_eq!(padded.len() % bs, 0);
        prop_assert_eq!(pad.unpad(&padded).unwrap(), data.len());
    }
}
