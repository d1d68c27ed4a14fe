//! Name-based access to every signature scheme and key-pair generator
//!
//! [`Signature`] and [`KeyPairGen`] are closed enums over the concrete
//! algorithms. Their key, signature and key-pair types are enums as well,
//! so keys can be carried around and decoded without knowing the
//! algorithm up front.

use crate::error::{Error, Result};
use crate::traditional::dss::{
    Dss, DssKeyPair, DssKeyPairGenerator, DssPrivateKey, DssPublicKey, DssRawCodec, DssSignature,
};
use crate::traditional::rsa::{
    RsaKeyPair, RsaKeyPairGenerator, RsaPrivateKey, RsaPss, RsaPssSignature, RsaPublicKey,
    RsaRawCodec,
};
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{
    KeyCodec, KeyPairConfig, KeyPairGenerator, KeyPairId, SignatureCodec, SignatureId,
    SignatureScheme,
};
use gcrypto_params::codec::{
    MAGIC_RAW_DSS_PRIVATE_KEY, MAGIC_RAW_DSS_PUBLIC_KEY, MAGIC_RAW_DSS_SIGNATURE,
    MAGIC_RAW_RSA_PRIVATE_KEY, MAGIC_RAW_RSA_PSS_SIGNATURE, MAGIC_RAW_RSA_PUBLIC_KEY,
};
use rand::{CryptoRng, RngCore};
use std::collections::BTreeSet;

/// First four bytes of a raw encoding
fn magic_of(context: &'static str, bytes: &[u8]) -> Result<[u8; 4]> {
    match bytes.get(..4) {
        Some(magic) => Ok([magic[0], magic[1], magic[2], magic[3]]),
        None => Err(Error::corrupt(context, "input ends inside the magic tag")),
    }
}

fn unknown_magic(context: &'static str, magic: [u8; 4]) -> Error {
    Error::param(context, format!("unknown magic tag {:02x?}", magic))
}

/// Public key of any registered scheme
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Dss(DssPublicKey),
    Rsa(RsaPublicKey),
}

impl PublicKey {
    /// Raw encoding with the algorithm's magic tag
    pub fn to_raw(&self) -> Result<Vec<u8>> {
        match self {
            PublicKey::Dss(key) => DssRawCodec.encode_public_key(key),
            PublicKey::Rsa(key) => RsaRawCodec.encode_public_key(key),
        }
    }

    /// Decode a raw public key, picking the algorithm from its magic tag
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "public key";
        match magic_of(CONTEXT, bytes)? {
            MAGIC_RAW_DSS_PUBLIC_KEY => DssRawCodec.decode_public_key(bytes).map(PublicKey::Dss),
            MAGIC_RAW_RSA_PUBLIC_KEY => RsaRawCodec.decode_public_key(bytes).map(PublicKey::Rsa),
            other => Err(unknown_magic(CONTEXT, other)),
        }
    }
}

/// Private key of any registered scheme
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrivateKey {
    Dss(DssPrivateKey),
    Rsa(RsaPrivateKey),
}

impl PrivateKey {
    pub fn public_key(&self) -> Result<PublicKey> {
        match self {
            PrivateKey::Dss(key) => key.public_key().map(PublicKey::Dss),
            PrivateKey::Rsa(key) => Ok(PublicKey::Rsa(key.public_key())),
        }
    }

    pub fn to_raw(&self) -> Result<Vec<u8>> {
        match self {
            PrivateKey::Dss(key) => DssRawCodec.encode_private_key(key),
            PrivateKey::Rsa(key) => RsaRawCodec.encode_private_key(key),
        }
    }

    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "private key";
        match magic_of(CONTEXT, bytes)? {
            MAGIC_RAW_DSS_PRIVATE_KEY => {
                DssRawCodec.decode_private_key(bytes).map(PrivateKey::Dss)
            }
            MAGIC_RAW_RSA_PRIVATE_KEY => {
                RsaRawCodec.decode_private_key(bytes).map(PrivateKey::Rsa)
            }
            other => Err(unknown_magic(CONTEXT, other)),
        }
    }
}

/// Signature value of any registered scheme
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureValue {
    Dss(DssSignature),
    RsaPss(RsaPssSignature),
}

impl SignatureValue {
    pub fn to_raw(&self) -> Result<Vec<u8>> {
        match self {
            SignatureValue::Dss(sig) => DssRawCodec.encode_signature(sig),
            SignatureValue::RsaPss(sig) => RsaRawCodec.encode_signature(sig),
        }
    }

    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "signature";
        match magic_of(CONTEXT, bytes)? {
            MAGIC_RAW_DSS_SIGNATURE => DssRawCodec.decode_signature(bytes).map(SignatureValue::Dss),
            MAGIC_RAW_RSA_PSS_SIGNATURE => {
                RsaRawCodec.decode_signature(bytes).map(SignatureValue::RsaPss)
            }
            other => Err(unknown_magic(CONTEXT, other)),
        }
    }
}

/// Key pair of any registered generator
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPair {
    Dss(DssKeyPair),
    Rsa(RsaKeyPair),
}

impl KeyPair {
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Dss(pair) => PublicKey::Dss(pair.public.clone()),
            KeyPair::Rsa(pair) => PublicKey::Rsa(pair.public.clone()),
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        match self {
            KeyPair::Dss(pair) => PrivateKey::Dss(pair.private.clone()),
            KeyPair::Rsa(pair) => PrivateKey::Rsa(pair.private.clone()),
        }
    }
}

/// Every registered signature scheme
#[derive(Clone)]
pub enum Signature {
    Dss(Dss),
    RsaPss(RsaPss),
}

impl Signature {
    /// A fresh instance with the scheme's default digest
    pub fn new(id: SignatureId) -> Self {
        match id {
            SignatureId::Dss => Signature::Dss(Dss::new()),
            SignatureId::RsaPss => Signature::RsaPss(RsaPss::new()),
        }
    }

    pub fn id(&self) -> SignatureId {
        match self {
            Signature::Dss(_) => SignatureId::Dss,
            Signature::RsaPss(_) => SignatureId::RsaPss,
        }
    }

    fn key_mismatch(&self) -> Error {
        Error::key(self.name(), "key belongs to another scheme")
    }
}

impl SignatureScheme for Signature {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;
    type Signature = SignatureValue;

    fn name(&self) -> &'static str {
        match self {
            Signature::Dss(s) => s.name(),
            Signature::RsaPss(s) => s.name(),
        }
    }

    fn setup_sign(&mut self, key: &PrivateKey) -> Result<()> {
        match (self, key) {
            (Signature::Dss(s), PrivateKey::Dss(key)) => s.setup_sign(key),
            (Signature::RsaPss(s), PrivateKey::Rsa(key)) => s.setup_sign(key),
            (this, _) => Err(this.key_mismatch()),
        }
    }

    fn setup_verify(&mut self, key: &PublicKey) -> Result<()> {
        match (self, key) {
            (Signature::Dss(s), PublicKey::Dss(key)) => s.setup_verify(key),
            (Signature::RsaPss(s), PublicKey::Rsa(key)) => s.setup_verify(key),
            (this, _) => Err(this.key_mismatch()),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match self {
            Signature::Dss(s) => s.update(data),
            Signature::RsaPss(s) => s.update(data),
        }
    }

    fn sign_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<SignatureValue> {
        match self {
            Signature::Dss(s) => s.sign_with_rng(rng).map(SignatureValue::Dss),
            Signature::RsaPss(s) => s.sign_with_rng(rng).map(SignatureValue::RsaPss),
        }
    }

    /// A signature of another scheme is rejected with `InvalidParameter`
    /// and leaves the absorbed message in place
    fn verify(&mut self, signature: &SignatureValue) -> Result<bool> {
        match (self, signature) {
            (Signature::Dss(s), SignatureValue::Dss(sig)) => s.verify(sig),
            (Signature::RsaPss(s), SignatureValue::RsaPss(sig)) => s.verify(sig),
            (this, _) => Err(Error::param(
                this.name(),
                "signature belongs to another scheme",
            )),
        }
    }

    fn self_test(&self) -> bool {
        match self {
            Signature::Dss(s) => s.self_test(),
            Signature::RsaPss(s) => s.self_test(),
        }
    }
}

/// Every registered key-pair generator
#[derive(Clone, Debug)]
pub enum KeyPairGen {
    Dss(DssKeyPairGenerator),
    Rsa(RsaKeyPairGenerator),
}

impl KeyPairGen {
    pub fn new(id: KeyPairId) -> Self {
        match id {
            KeyPairId::Dss => KeyPairGen::Dss(DssKeyPairGenerator::new()),
            KeyPairId::Rsa => KeyPairGen::Rsa(RsaKeyPairGenerator::new()),
        }
    }

    pub fn id(&self) -> KeyPairId {
        match self {
            KeyPairGen::Dss(_) => KeyPairId::Dss,
            KeyPairGen::Rsa(_) => KeyPairId::Rsa,
        }
    }
}

impl KeyPairGenerator for KeyPairGen {
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        match self {
            KeyPairGen::Dss(g) => g.name(),
            KeyPairGen::Rsa(g) => g.name(),
        }
    }

    fn setup(&mut self, config: &KeyPairConfig) -> Result<()> {
        match self {
            KeyPairGen::Dss(g) => g.setup(config),
            KeyPairGen::Rsa(g) => g.setup(config),
        }
    }

    fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<KeyPair> {
        match self {
            KeyPairGen::Dss(g) => g.generate(rng).map(KeyPair::Dss),
            KeyPairGen::Rsa(g) => g.generate(rng).map(KeyPair::Rsa),
        }
    }

    fn self_test(&self) -> bool {
        match self {
            KeyPairGen::Dss(g) => g.self_test(),
            KeyPairGen::Rsa(g) => g.self_test(),
        }
    }
}

/// Name-based construction of signature schemes
pub struct SignatureFactory;

impl SignatureFactory {
    /// Resolve `name` and return a self-tested instance with no key bound
    ///
    /// # Panics
    ///
    /// When the resolved scheme fails its self-test.
    pub fn get_instance(name: &str) -> Option<Signature> {
        let id = registry::resolve_signature(name)?;
        tracing::debug!(requested = name, signature = id.name(), "resolved signature scheme");
        let scheme = Signature::new(id);
        let passed = scheme.self_test();
        Some(require_self_test("signature", id.name(), scheme, passed))
    }

    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::SIGNATURES)
    }
}

/// Name-based construction of key-pair generators
pub struct KeyPairGeneratorFactory;

impl KeyPairGeneratorFactory {
    /// Resolve `name` and return a self-tested generator with default settings
    ///
    /// # Panics
    ///
    /// When the resolved generator fails its self-test.
    pub fn get_instance(name: &str) -> Option<KeyPairGen> {
        let id = registry::resolve_key_pair(name)?;
        tracing::debug!(requested = name, generator = id.name(), "resolved key-pair generator");
        let generator = KeyPairGen::new(id);
        let passed = generator.self_test();
        Some(require_self_test("key-pair generator", id.name(), generator, passed))
    }

    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::KEY_PAIRS)
    }
}
