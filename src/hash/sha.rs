//! SHA-2 family adapters.

use sha2::Digest;

use super::Hash;

/// SHA-256.
#[derive(Default, Clone)]
pub struct Sha256(sha2::Sha256);

impl Hash for Sha256 {
    const OUTPUT_SIZE: usize = 32;
    const BLOCK_SIZE: usize = 64;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.0.finalize_reset().to_vec()
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}

/// SHA-512.
#[derive(Default, Clone)]
pub struct Sha512(sha2::Sha512);

impl Hash for Sha512 {
    const OUTPUT_SIZE: usize = 64;
    const BLOCK_SIZE: usize = 128;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.0.finalize_reset().to_vec()
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }
}
