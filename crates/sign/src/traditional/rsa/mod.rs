//! RSA with the probabilistic signature scheme (EMSA-PSS)
//!
//! Keys are generated with the public exponent 65537 and signatures are
//! computed with the Chinese remainder theorem. Message encoding follows
//! RFC 3447, Section 9.1, with MGF1 over the configured digest.

mod codec;
mod keygen;
mod keys;
mod pss;

pub use codec::RsaRawCodec;
pub use keygen::RsaKeyPairGenerator;
pub use keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use pss::{RsaPss, RsaPssSignature};

/// 1024-bit key used by the self-tests
pub(crate) mod fixture {
    pub const P: &str = "e8752943594034234fa40b8ea467fff2dbe1ba4f2e4289a180f9def0ab0f5b8c\
                         56af52eb3084c1b599ffd0ba0cbef3940ee2df8e678fff9f9949f81d60a5e7a9";
    pub const Q: &str = "dc34366080f05fa253edf95a1df502d33741950354d523bc9e8492c021e2e7ff\
                         07aa7745c42d234fed428f3f6a50ef0ba8e535f411a71c887ba82d47d2a13303";
    pub const D: &str = "a21a4f5a8b8a03e93d68b038f45649ed464a5be10339c356ad0466c92b91750a\
                         b958f5660a810258cbe8694d55d18b0e46990a343f623c819d28323abfa11c73\
                         05d636e481a8f198b0b889822baf602ac06cdf7da8cba432faec2adddf42a647\
                         508b4d94cb0f5907e702fadd67f9ff7fb2fc7d77752f082e05f3c789ca7d6871";
    pub const N: &str = "c7f418a29a19d53d2f1e1b8f0fee2eeb15bbc6239a4f235d0c2965d020958ff4\
                         e413983f7c34b261a38b049c2095df39a627b264b336a249df4ae826355182e0\
                         7870053318fbd66be8df6f81e6480a7d0851af758d4f065716c38fb1b9ee5d17\
                         3b934bec82ad0262a93cba2f250fcbc62f3f3561e04b8a8eddb197d7826161fb";
    /// EMSA-PSS signature of "abc" with SHA-160 and an empty salt
    pub const SIGNATURE: &str = "b65a37d03c93126d7067a2c7394959186cb9c1cb75b90b16c27042787ec991c1\
                                 cea949f665005f665c7e7665e6a1a0d590584a1064ab83cb4c95087f74390523\
                                 19810b07c1b6c7db8d35cd43edb03a002d019ad32489f47d40261e51d979067c\
                                 5cdf816ff0202eca00a226e91e40d5b0649734476585d605587a9fb6bbd28f40";
}
