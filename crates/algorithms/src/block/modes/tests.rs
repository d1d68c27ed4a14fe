use super::*;
use gcrypto_api::CipherId;

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
const PT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

fn aes_mode(id: ModeId, direction: Direction, iv: &str) -> Mode {
    let mut mode = Mode::new(id, Cipher::new(CipherId::Aes), 16);
    let config = ModeConfig::new(CipherConfig::new().with_key(&hex::decode(KEY).unwrap()))
        .with_iv(&hex::decode(iv).unwrap())
        .with_direction(direction);
    mode.init(&config).unwrap();
    mode
}

fn run(mode: &mut Mode, input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; input.len()];
    for off in (0..input.len()).step_by(16) {
        mode.update(input, off, &mut out, off).unwrap();
    }
    out
}

#[test]
fn test_sp800_38a_vectors() {
    let pt = hex::decode(PT).unwrap();
    let cases = [
        (ModeId::Ecb, "3ad77bb40d7a3660a89ecaf32466ef97f5d3d58503b9699de785895a96fdbaaf"),
        (ModeId::Ctr, "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff"),
        (ModeId::Ofb, "874d6191b620e3261bef6864990db6ce37559a4cb1a4326eabf972ee7e90a7aa"),
    ];
    for (id, expected) in cases {
        let mut enc = aes_mode(id, Direction::Encryption, IV);
        let ct = run(&mut enc, &pt);
        assert_eq!(hex::encode(&ct), expected, "{}", id);

        let mut dec = aes_mode(id, Direction::Decryption, IV);
        assert_eq!(run(&mut dec, &ct), pt, "{}", id);
    }
}

#[test]
fn test_icm_counter_starts_half_a_block_up() {
    let pt = hex::decode(PT).unwrap();
    let mut icm = aes_mode(ModeId::Icm, Direction::Encryption, IV);
    assert_eq!(
        hex::encode(run(&mut icm, &pt)),
        "dc13d7a959369c882d915532a50d4962e5523a395e2a4e6f7a1513fa71d3c221"
    );
}

#[test]
fn test_ctr_counter_wraps() {
    let pt = hex::decode(PT).unwrap();
    let mut ctr = aes_mode(ModeId::Ctr, Direction::Encryption, "ffffffffffffffffffffffffffffffff");
    assert_eq!(
        hex::encode(run(&mut ctr, &pt)),
        "e13338e36cb71962e00d020b4cedbd86d3dae15b04bb352fa0f59febfcb4da3e"
    );
}

#[test]
fn test_icm_null_cipher_exposes_counter() {
    let mut icm = Mode::new(ModeId::Icm, Cipher::new(CipherId::Null), 16);
    icm.init(&ModeConfig::new(CipherConfig::new().with_key(&[0u8; 8])))
        .unwrap();
    let mut out = [0u8; 32];
    let zeros = [0u8; 32];
    icm.update(&zeros, 0, &mut out, 0).unwrap();
    icm.update(&zeros, 16, &mut out, 16).unwrap();
    assert_eq!(hex::encode(&out[..16]), "00000000000000010000000000000000");
    assert_eq!(hex::encode(&out[16..]), "00000000000000010000000000000001");
}

#[test]
fn test_names() {
    let mode = Mode::new(ModeId::Ctr, Cipher::new(CipherId::Aes), 16);
    assert_eq!(mode.name(), "ctr(aes)");
    assert_eq!(mode.default_block_size(), 16);
    let names = ModeFactory::names();
    assert_eq!(names.len(), 4);
    assert!(names.contains("ofb"));
}

#[test]
fn test_lifecycle_errors() {
    let mut mode = Mode::new(ModeId::Ofb, Cipher::new(CipherId::Aes), 16);
    let mut out = [0u8; 16];
    assert!(matches!(
        mode.update(&[0u8; 16], 0, &mut out, 0),
        Err(Error::InvalidState { .. })
    ));
    assert!(mode.current_block_size().is_err());

    let key = CipherConfig::new().with_key(&[0u8; 16]);
    assert!(matches!(
        mode.init(&ModeConfig::new(key.clone()).with_mode_block_size(8)),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(matches!(
        mode.init(&ModeConfig::new(key.clone()).with_iv(&[0u8; 8])),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(matches!(
        mode.init(&ModeConfig::new(CipherConfig::new())),
        Err(Error::InvalidKey { .. })
    ));

    mode.init(&ModeConfig::new(key.clone())).unwrap();
    assert_eq!(mode.current_block_size().unwrap(), 16);
    assert!(matches!(
        mode.init(&ModeConfig::new(key.clone())),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(
        mode.update(&[0u8; 16], 4, &mut out, 0),
        Err(Error::InvalidLength { .. })
    ));
    mode.reset();
    mode.init(&ModeConfig::new(key)).unwrap();
}

#[test]
fn test_factory() {
    for id in ModeId::ALL {
        for cipher in ["aes", "null"] {
            let mode = ModeFactory::get_instance(id.name(), cipher, 16).unwrap();
            assert_eq!(mode.id(), *id);
        }
    }
    let wide = ModeFactory::get_instance("ctr", "null", 32).unwrap();
    assert_eq!(wide.default_block_size(), 32);
    assert!(ModeFactory::get_instance("cbc", "aes", 16).is_none());
    assert!(ModeFactory::get_instance("ecb", "serpent", 16).is_none());
    assert!(ModeFactory::get_instance("ecb", "aes", 32).is_none());
}
