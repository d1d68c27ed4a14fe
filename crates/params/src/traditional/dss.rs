//! Constants for the Digital Signature Standard (DSS)

/// Default modulus length in bits
pub const DSS_DEFAULT_MODULUS_BITS: usize = 512;

/// Smallest modulus length in bits
pub const DSS_MIN_MODULUS_BITS: usize = 512;

/// Largest modulus length in bits
pub const DSS_MAX_MODULUS_BITS: usize = 1024;

/// Modulus lengths must be a multiple of this many bits
pub const DSS_MODULUS_STEP: usize = 64;

/// Subgroup order length in bits
pub const DSS_Q_BITS: usize = 160;

/// Parameter searches give up after this many candidates per seed
pub const DSS_MAX_COUNTER: usize = 4096;

/// Precomputed domain parameters as big-endian hex strings
#[derive(Debug, Clone, Copy)]
pub struct DssDomain {
    pub bits: usize,
    pub p: &'static str,
    pub q: &'static str,
    pub g: &'static str,
}

/// 512-bit modulus, 160-bit subgroup
pub const DSS_DOMAIN_512: DssDomain = DssDomain {
    bits: 512,
    p: "fca682ce8e12caba26efccf7110e526db078b05edecbcd1eb4a208f3ae1617ae\
        01f35b91a47e6df63413c5e12ed0899bcd132acd50d99151bdc43ee737592e17",
    q: "962eddcc369cba8ebb260ee6b6a126d9346e38c5",
    g: "678471b27a9cf44ee91a49c5147db1a9aaf244f05a434d6486931d2d14271b9e\
        35030b71fd73da179069b32e2935630e1c2062354d0da20a6c416e50be794ca4",
};

/// 768-bit modulus, 160-bit subgroup
pub const DSS_DOMAIN_768: DssDomain = DssDomain {
    bits: 768,
    p: "e9e642599d355f37c97ffd3567120b8e25c9cd43e927b3a9670fbec5d8901419\
        22d2c3b3ad2480093799869d1e846aab49fab0ad26d2ce6a22219d470bce7d77\
        7d4a21fbe9c270b57f607002f3cef8393694cf45ee3688c11a8c56ab127a3daf",
    q: "9cdbd84c9f1ac2f38d0f80f42ab952e7338bf511",
    g: "30470ad5a005fb14ce2d9dcd87e38bc7d1b1c5facbaecbe95f190aa7a31d23c4\
        dbbcbe06174544401a5b2c020965d8c2bd2171d3668445771f74ba084d2029d8\
        3c1c158547f3a9f1a2715be23d51ae4d3e5a1f6a7064f316933a346d3f529252",
};

/// 1024-bit modulus, 160-bit subgroup
pub const DSS_DOMAIN_1024: DssDomain = DssDomain {
    bits: 1024,
    p: "fd7f53811d75122952df4a9c2eece4e7f611b7523cef4400c31e3f80b6512669\
        455d402251fb593d8d58fabfc5f5ba30f6cb9b556cd7813b801d346ff26660b7\
        6b9950a5a49f9fe8047b1022c24fbba9d7feb7c61bf83b57e7c6a8a6150f04fb\
        83f6d3c51ec3023554135a169132f675f3ae2b61d72aeff22203199dd14801c7",
    q: "9760508f15230bccb292b982a2eb840bf0581cf5",
    g: "f7e1a085d69b3ddecbbcab5c36b857b97994afbbfa3aea82f9574c0b3d078267\
        5159578ebad4594fe67107108180b449167123e84c281613b7cf09328cc8a6e1\
        3c167a8b547c8d28e0a3ae1e2bb3a675916ea37f0bfa213562f1fb627a01243b\
        cca4f1bea8519089a883dfe15ae59f06928b665e807b552564014c3bfecf492a",
};

/// Precomputed domain for a modulus length, if one exists
pub fn default_domain(bits: usize) -> Option<DssDomain> {
    match bits {
        512 => Some(DSS_DOMAIN_512),
        768 => Some(DSS_DOMAIN_768),
        1024 => Some(DSS_DOMAIN_1024),
        _ => None,
    }
}
