//! Digital signature traits for gcrypto
//!
//! This module defines the contracts that signature schemes and key-pair
//! generators implement. A scheme instance is stateful: it is bound to a key
//! with `setup_sign` or `setup_verify`, absorbs the message incrementally and
//! produces or checks a signature, which consumes the accumulated message.

use crate::config::KeyPairConfig;
use crate::Result;
use rand::{CryptoRng, RngCore};

/// Core trait for incremental signature schemes
///
/// # Lifecycle
///
/// ```text
/// setup_sign(private) ─┐            ┌─ sign()
///                      ├─ update()* ┤
/// setup_verify(public) ┘            └─ verify(signature)
/// ```
///
/// Calling `setup_*` again rebinds the instance and discards any message
/// bytes absorbed so far. `update`, `sign` and `verify` before any setup are
/// invalid-state errors.
pub trait SignatureScheme {
    /// Public key type accepted by `setup_verify`
    type PublicKey;

    /// Private key type accepted by `setup_sign`
    type PrivateKey;

    /// Signature value produced by `sign`
    type Signature;

    /// Canonical name of the scheme
    fn name(&self) -> &'static str;

    /// Bind a private key for signing
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` when the key belongs to another scheme.
    fn setup_sign(&mut self, key: &Self::PrivateKey) -> Result<()>;

    /// Bind a public key for verification
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` when the key belongs to another scheme.
    fn setup_verify(&mut self, key: &Self::PublicKey) -> Result<()>;

    /// Absorb message bytes
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Sign the absorbed message with randomness from `rng`
    ///
    /// # Security Requirements
    ///
    /// Implementations must draw every nonce and salt from `rng`.
    fn sign_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<Self::Signature>;

    /// Sign the absorbed message with the thread-local generator
    fn sign(&mut self) -> Result<Self::Signature> {
        let mut rng = rand::thread_rng();
        self.sign_with_rng(&mut rng)
    }

    /// Check `signature` against the absorbed message
    ///
    /// Returns `Ok(false)` for any well-formed but wrong signature; errors
    /// are reserved for misuse such as verifying in sign mode.
    fn verify(&mut self, signature: &Self::Signature) -> Result<bool>;

    /// Conformance self-test
    fn self_test(&self) -> bool;
}

/// Key-pair generation
pub trait KeyPairGenerator {
    /// Generated key pair type
    type KeyPair;

    /// Canonical name of the generator
    fn name(&self) -> &'static str;

    /// Validate and store the generation request
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unsupported modulus lengths.
    fn setup(&mut self, config: &KeyPairConfig) -> Result<()>;

    /// Generate a key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Conformance self-test
    fn self_test(&self) -> bool;
}
