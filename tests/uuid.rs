use mantle::CryptoError;
use mantle::clock::ManualClock;
use mantle::uuid::{UuidGenerator, format, v4};

#[test]
fn v4_sets_version_and_variant_bits() {
    let uuid = v4(&[0xffu8; 16]).unwrap();

    assert_eq!(uuid[6] >> 4, 0x4, "version nibble");
    assert_eq!(uuid[8] >> 6, 0b10, "variant bits");
    // the remaining bits come through untouched
    assert_eq!(uuid[0], 0xff);
    assert_eq!(uuid[15], 0xff);
}

#[test]
fn v4_rejects_wrong_length_randomness() {
    assert!(matches!(
        v4(&[0u8; 15]),
        Err(CryptoError::InvalidLength { expected: 16, got: 15 })
    ));
}

#[test]
fn v1_sets_version_and_variant_bits() {
    let mut generator = UuidGenerator::with_clock(ManualClock::new(1_700_000_000_000));
    let node = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01];

    let uuid = generator.v1(&node, Some([0x34, 0x12])).unwrap();
    assert_eq!(uuid[6] >> 4, 0x1, "version nibble");
    assert_eq!(uuid[8] >> 6, 0b10, "variant bits");
    assert_eq!(&uuid[10..], &node);
}

#[test]
fn v1_rejects_bad_node_length() {
    let mut generator = UuidGenerator::with_clock(ManualClock::new(0));
    assert!(matches!(
        generator.v1(&[0u8; 5], None),
        Err(CryptoError::InvalidLength { expected: 6, got: 5 })
    ));
}

#[test]
fn v1_same_tick_requests_stay_unique() {
    let mut generator = UuidGenerator::with_clock(ManualClock::new(1_700_000_000_000));
    let node = [1, 2, 3, 4, 5, 6];

    let first = generator.v1(&node, None).unwrap();
    let second = generator.v1(&node, None).unwrap();
    assert_ne!(first, second);
}

#[test]
fn v1_clock_regression_bumps_sequence() {
    let clock = ManualClock::new(1_700_000_000_000);
    let mut generator = UuidGenerator::with_clock(clock.clone());
    let node = [1, 2, 3, 4, 5, 6];

    let before = generator.v1(&node, Some([0, 0])).unwrap();
    clock.set(1_600_000_000_000);
    let after = generator.v1(&node, Some([0, 0])).unwrap();

    // clock sequence bytes must differ after regression
    assert_ne!([before[8], before[9]], [after[8], after[9]]);
}

#[test]
fn formatting_is_canonical() {
    let uuid = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x11, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];
    assert_eq!(format(&uuid), "550e8400-e29b-11d4-a716-446655440000");
}

#[test]
fn v1_timestamps_advance_with_the_clock() {
    let clock = ManualClock::new(1_700_000_000_000);
    let mut generator = UuidGenerator::with_clock(clock.clone());
    let node = [9u8; 6];

    let first = generator.v1(&node, None).unwrap();
    clock.advance(1);
    let second = generator.v1(&node, None).unwrap();

    assert_ne!(first[..8], second[..8], "timestamp fields must move");
}
