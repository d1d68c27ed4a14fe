use super::*;
use proptest::prelude::*;

fn initialised(id: PadId, bs: usize) -> Pad {
    let mut pad = Pad::new(id);
    pad.init(bs).unwrap();
    pad
}

#[test]
fn test_pkcs7_block_size_eight() {
    let pad = initialised(PadId::Pkcs7, 8);
    for len in 0..=16usize {
        let data = vec![0xaau8; len];
        let padding = pad.pad(&data).unwrap();
        let n = 8 - len % 8;
        assert_eq!(padding, vec![n as u8; n]);

        let mut padded = data.clone();
        padded.extend_from_slice(&padding);
        assert_eq!(pad.unpad(&padded).unwrap(), len);
    }
}

#[test]
fn test_pkcs7_rejects_corruption() {
    let pad = initialised(PadId::Pkcs7, 8);
    let cases: [&[u8]; 6] = [
        &[1, 2, 3, 4, 5, 6, 7, 0],
        &[1, 2, 3, 4, 5, 6, 7, 9],
        &[1, 2, 3, 4, 5, 2, 3, 3],
        &[8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 7, 8],
        &[1, 2, 3, 4, 5, 1],
        &[],
    ];
    for padded in cases {
        assert!(
            matches!(pad.unpad(padded), Err(Error::CorruptData { .. })),
            "{:?}",
            padded
        );
    }
    // a single trailing pad byte inside a full block is fine
    assert_eq!(pad.unpad(&[1, 2, 3, 4, 5, 6, 7, 1]).unwrap(), 7);
}

#[test]
fn test_tbc_pad_bytes() {
    let pad = initialised(PadId::Tbc, 4);
    assert_eq!(pad.pad(&[0x03]).unwrap(), [0x00, 0x00, 0x00]);
    assert_eq!(pad.pad(&[0x02, 0x04]).unwrap(), [0x01, 0x01]);
    assert_eq!(pad.pad(&[]).unwrap(), [0x01; 4]);
    assert_eq!(pad.pad(&[1, 2, 3, 5]).unwrap(), [0x00; 4]);

    assert!(matches!(pad.unpad(&[1, 2, 3, 7]), Err(Error::CorruptData { .. })));
    assert!(matches!(pad.unpad(&[0; 8]), Err(Error::CorruptData { .. })));
    assert!(matches!(pad.unpad(&[1, 0, 0]), Err(Error::CorruptData { .. })));
}

#[test]
fn test_tbc_round_trips_to_two_blocks() {
    for bs in [1usize, 2, 3, 8, 16, 256] {
        let pad = initialised(PadId::Tbc, bs);
        for len in 0..=2 * bs {
            let mut data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
            data.extend(pad.pad(&data[..len]).unwrap());
            assert_eq!(data.len() % bs, 0);
            assert_eq!(pad.unpad(&data).unwrap(), len, "bs {} len {}", bs, len);
        }
    }
}

#[test]
fn test_lifecycle() {
    for id in PadId::ALL {
        let mut pad = Pad::new(*id);
        assert!(matches!(pad.pad(b"x"), Err(Error::InvalidState { .. })));
        assert!(matches!(pad.unpad(&[1]), Err(Error::InvalidState { .. })));
        assert!(matches!(pad.init(0), Err(Error::InvalidParameter { .. })));
        assert!(matches!(pad.init(300), Err(Error::InvalidParameter { .. })));
        pad.init(16).unwrap();
        assert!(matches!(pad.init(16), Err(Error::InvalidState { .. })));
        pad.reset();
        pad.init(8).unwrap();
        assert_eq!(pad.name(), id.name());
    }
    let mut pkcs7 = Pkcs7::new();
    assert!(pkcs7.init(1).is_err());
    assert!(pkcs7.init(256).is_err());
    let mut tbc = Tbc::new();
    tbc.init(256).unwrap();
}

#[test]
fn test_factory() {
    for id in PadId::ALL {
        assert_eq!(PadFactory::get_instance(id.name()).unwrap().id(), *id);
    }
    assert!(PadFactory::get_instance("PKCS7").is_some());
    assert!(PadFactory::get_instance("iso10126").is_none());
    assert_eq!(PadFactory::names().len(), 2);
}

proptest! {
    #[test]
    fn prop_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        bs in 2usize..=255,
        id in proptest::sample::select(PadId::ALL),
    ) {
        let pad = initialised(id, bs);
        let padding = pad.pad(&data).unwrap();
        prop_assert!(!padding.is_empty() && padding.len() <= bs);
        let mut padded = data.clone();
        padded.extend_from_slice(&padding);
        prop_assert_eq!(padded.len() % bs, 0);
        prop_assert_eq!(pad.unpad(&padded).unwrap(), data.len());
    }
}
