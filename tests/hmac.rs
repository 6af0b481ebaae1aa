use mantle::hash::{Sha256, Sha512};
use mantle::mac::{Hmac, KeyedHash};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid test vector hex")
}

// RFC 4231 test cases

#[test]
fn rfc4231_case_1() {
    let key = [0x0bu8; 20];

    assert_eq!(
        Hmac::<Sha256>::mac(&key, b"Hi There"),
        unhex("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
    assert_eq!(
        Hmac::<Sha512>::mac(&key, b"Hi There"),
        unhex(
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        )
    );
}

#[test]
fn rfc4231_case_2() {
    assert_eq!(
        Hmac::<Sha256>::mac(b"Jefe", b"what do ya want for nothing?"),
        unhex("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

#[test]
fn rfc4231_case_6_long_key() {
    // keys longer than the block size must be hashed down first
    let key = [0xaau8; 131];

    assert_eq!(
        Hmac::<Sha256>::mac(&key, b"Test Using Larger Than Block-Size Key - Hash Key First"),
        unhex("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
    );
}

#[test]
fn incremental_matches_one_shot() {
    let mut mac = Hmac::<Sha256>::init(b"key material");
    mac.update(b"part one ");
    mac.update(b"part two");

    assert_eq!(
        mac.finalize(),
        Hmac::<Sha256>::mac(b"key material", b"part one part two")
    );
}

#[test]
fn finalize_reprimes_for_same_key() {
    let mut mac = Hmac::<Sha256>::init(b"key");
    mac.update(b"message");
    let first = mac.finalize();

    mac.update(b"message");
    assert_eq!(mac.finalize(), first);
}

#[test]
fn different_keys_give_different_tags() {
    let a = Hmac::<Sha256>::mac(b"key-a", b"msg");
    let b = Hmac::<Sha256>::mac(b"key-b", b"msg");
    assert_ne!(a, b);
}
