//! Digital Signature Schemes
//!
//! DSS over SHA-160 and RSA-PSS, their key-pair generators and the raw key
//! and signature codecs. Schemes and generators are also reachable by name
//! through [`SignatureFactory`] and [`KeyPairGeneratorFactory`].

#![forbid(unsafe_code)]

pub use gcrypto_api::error;
pub use gcrypto_api::{Error, Result};

mod codec;
pub mod scheme;
pub mod traditional;

pub use scheme::{
    KeyPair, KeyPairGen, KeyPairGeneratorFactory, PrivateKey, PublicKey, Signature,
    SignatureFactory, SignatureValue,
};
pub use traditional::dss::{
    Dss, DssKeyPair, DssKeyPairGenerator, DssPrivateKey, DssPublicKey, DssRawCodec, DssSignature,
};
pub use traditional::rsa::{
    RsaKeyPair, RsaKeyPairGenerator, RsaPrivateKey, RsaPss, RsaPssSignature, RsaPublicKey,
    RsaRawCodec,
};
