use mantle::hash::{Hash, Keccak256, Sha3_256, Sha256, Sha512, shake128, shake256};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid test vector hex")
}

// -------------------------------------------------------
// OFFICIAL VECTORS
// -------------------------------------------------------

#[test]
fn sha256_vectors() {
    assert_eq!(
        Sha256::hash(b""),
        unhex("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
    assert_eq!(
        Sha256::hash(b"abc"),
        unhex("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn sha512_vectors() {
    assert_eq!(
        Sha512::hash(b""),
        unhex(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        )
    );
    assert_eq!(
        Sha512::hash(b"abc"),
        unhex(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn sha3_256_vectors() {
    assert_eq!(
        Sha3_256::hash(b""),
        unhex("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
    );
    assert_eq!(
        Sha3_256::hash(b"abc"),
        unhex("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
}

#[test]
fn keccak256_empty_vector() {
    // pre-FIPS padding differs from SHA3-256
    assert_eq!(
        Keccak256::hash(b""),
        unhex("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
    assert_ne!(Keccak256::hash(b"abc"), Sha3_256::hash(b"abc"));
}

#[test]
fn shake_vectors() {
    assert_eq!(
        shake128(b"", 32),
        unhex("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
    );
    assert_eq!(
        shake256(b"", 32),
        unhex("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f")
    );
}

// -------------------------------------------------------
// CAPABILITY CONTRACT
// -------------------------------------------------------

#[test]
fn incremental_matches_one_shot() {
    let mut hasher = Sha256::default();
    hasher.update(b"hello ");
    hasher.update(b"world");
    assert_eq!(hasher.finalize(), Sha256::hash(b"hello world"));
}

#[test]
fn finalize_resets_for_reuse() {
    let mut hasher = Sha512::default();
    hasher.update(b"first message");
    let first = hasher.finalize();

    hasher.update(b"first message");
    assert_eq!(hasher.finalize(), first, "state must reset after finalize");
}

#[test]
fn reset_discards_absorbed_data() {
    let mut hasher = Sha256::default();
    hasher.update(b"garbage");
    hasher.reset();
    hasher.update(b"abc");
    assert_eq!(hasher.finalize(), Sha256::hash(b"abc"));
}

#[test]
fn declared_output_sizes_hold() {
    assert_eq!(Sha256::hash(b"x").len(), Sha256::OUTPUT_SIZE);
    assert_eq!(Sha512::hash(b"x").len(), Sha512::OUTPUT_SIZE);
    assert_eq!(Sha3_256::hash(b"x").len(), Sha3_256::OUTPUT_SIZE);
    assert_eq!(Keccak256::hash(b"x").len(), Keccak256::OUTPUT_SIZE);
    assert_eq!(shake128(b"x", 100).len(), 100);
}
