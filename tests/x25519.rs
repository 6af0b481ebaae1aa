use mantle::CryptoError;
use mantle::curve25519::{BASEPOINT, generate_keys, scalar_mult};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid test vector hex")
}

// -------------------------------------------------------
// RFC 7748 / draft-josefsson-eddsa-ed25519 KEY VECTORS
// -------------------------------------------------------

#[test]
fn x25519_public_key_vector_alice() {
    let seed = unhex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let pair = generate_keys(&seed).unwrap();

    assert_eq!(
        pair.public.to_vec(),
        unhex("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
    );
}

#[test]
fn x25519_public_key_vector_bob() {
    let seed = unhex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
    let pair = generate_keys(&seed).unwrap();

    assert_eq!(
        pair.public.to_vec(),
        unhex("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
    );
}

// -------------------------------------------------------
// SCALAR MULTIPLICATION VECTORS
// -------------------------------------------------------

#[test]
fn scalar_mult_three_times_basepoint() {
    // scalar 3 is used raw: scalar_mult must not clamp its input
    let mut scalar = [0u8; 32];
    scalar[0] = 3;

    let product = scalar_mult(&scalar, &BASEPOINT).unwrap();
    assert_eq!(
        product.to_vec(),
        unhex("123c71fbaf030ac059081c62674e82f864ba1bc2914d5345e6ab576d1abc121c")
    );
}

#[test]
fn scalar_mult_generic_vector() {
    let scalar = unhex("847c4978577d530dcb491d58bcc9cba87f9e075e6e02c003f27aee503cecb641");
    let point = unhex("57faa45404f10f1e4733047eca8f2f3001c12aa859e40d74cf59afaabe441d45");

    let product = scalar_mult(&scalar, &point).unwrap();
    assert_eq!(
        product.to_vec(),
        unhex("b3c49b94dcc349ba05ca13521e19d1b93fc472f1545bbf9bdf7ec7b442be4a2c")
    );
}

#[test]
fn rfc7748_shared_secret() {
    let alice = generate_keys(&unhex(
        "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    ))
    .unwrap();
    let bob = generate_keys(&unhex(
        "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    ))
    .unwrap();

    let shared = scalar_mult(&alice.secret, &bob.public).unwrap();
    assert_eq!(
        shared.to_vec(),
        unhex("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
    );
}

// -------------------------------------------------------
// PROPERTIES
// -------------------------------------------------------

#[test]
fn key_exchange_agreement() {
    let alice = generate_keys(&[0x11u8; 32]).unwrap();
    let bob = generate_keys(&[0x42u8; 32]).unwrap();

    let alice_shared = scalar_mult(&alice.secret, &bob.public).unwrap();
    let bob_shared = scalar_mult(&bob.secret, &alice.public).unwrap();

    assert_eq!(alice_shared, bob_shared);
    assert_ne!(alice_shared, [0u8; 32]);
}

#[test]
fn secret_key_is_clamped() {
    let pair = generate_keys(&[0xffu8; 32]).unwrap();

    assert_eq!(pair.secret[0] & 0x07, 0);
    assert_eq!(pair.secret[31] & 0x80, 0);
    assert_eq!(pair.secret[31] & 0x40, 0x40);
}

#[test]
fn rejects_wrong_length_inputs() {
    assert!(matches!(
        generate_keys(&[0u8; 31]),
        Err(CryptoError::InvalidLength {
            expected: 32,
            got: 31
        })
    ));
    assert!(matches!(
        scalar_mult(&[0u8; 32], &[0u8; 33]),
        Err(CryptoError::InvalidLength {
            expected: 32,
            got: 33
        })
    ));
    assert!(matches!(
        scalar_mult(&[], &BASEPOINT),
        Err(CryptoError::InvalidLength {
            expected: 32,
            got: 0
        })
    ));
}
