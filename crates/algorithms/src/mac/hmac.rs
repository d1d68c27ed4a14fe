//! HMAC over any registered digest
//!
//! `H((K' ^ opad) || H((K' ^ ipad) || m))`, truncated to the leading
//! `tag_len` bytes.

use crate::error::{validate, Error, Result};
use crate::hash::Hash;
use gcrypto_api::{HashId, MacConfig, MacFunction, MessageDigest};
use gcrypto_internal::{ct_eq, ct_mask};
use gcrypto_params::utils::symmetric::{HMAC_IPAD, HMAC_MIN_TAG_LEN, HMAC_OPAD};
use zeroize::Zeroizing;

const SELF_TEST_KEY: &[u8] = b"Jefe";
const SELF_TEST_DATA: &[u8] = b"what do ya want for nothing?";

/// Expected tag over the self-test key and data
fn known_answer(hash: HashId) -> &'static str {
    match hash {
        HashId::Md4 => "be192c588a8e914d8a59b474a828128f",
        HashId::Md5 => "750c783e6ab0b503eaa86e310a5db738",
        HashId::Sha160 => "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
        HashId::Sha256 => "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        HashId::Ripemd128 => "875f828862b6b334b427c55f9f7ff09b",
        HashId::Ripemd160 => "dda6c0213a485a9e24f4742064a7f033b43c4069",
        HashId::Whirlpool => {
            "62130f66fe44958a6f1edf2818b16c10e5dfd220b071b1b9af4d3889317dceb4\
             b97c92ba896baedfb0415e8a18a757f853af0b30df607fcc38cf4cb74f60ebee"
        }
    }
}

#[derive(Clone)]
pub struct Hmac {
    /// Unkeyed template of the underlying digest
    template: Hash,
    inner: Hash,
    ipad: Zeroizing<Vec<u8>>,
    opad: Zeroizing<Vec<u8>>,
    tag_len: usize,
    keyed: bool,
}

impl Hmac {
    pub fn new(hash: HashId) -> Self {
        let template = Hash::new(hash);
        Self {
            inner: template.clone(),
            tag_len: template.hash_size(),
            template,
            ipad: Zeroizing::new(Vec::new()),
            opad: Zeroizing::new(Vec::new()),
            keyed: false,
        }
    }

    pub fn hash_id(&self) -> HashId {
        self.template.id()
    }

    /// Shortest accepted truncation
    fn min_tag_len(&self) -> usize {
        HMAC_MIN_TAG_LEN.max(self.template.hash_size() / 2)
    }

    fn restart_inner(&mut self) {
        self.inner = self.template.clone();
        self.inner.update(&self.ipad);
    }

    /// Compare `tag` with the tag of the absorbed message in constant time
    ///
    /// Consumes the message like `digest`.
    pub fn verify(&mut self, tag: &[u8]) -> Result<bool> {
        let expected = Zeroizing::new(self.digest()?);
        Ok(ct_eq(&expected[..], tag))
    }
}

impl MacFunction for Hmac {
    fn name(&self) -> String {
        format!("hmac-{}", self.template.name())
    }

    fn mac_size(&self) -> usize {
        self.tag_len
    }

    fn init(&mut self, config: MacConfig) -> Result<()> {
        let context = "hmac";
        let key = config
            .key
            .as_ref()
            .ok_or_else(|| Error::key(context, "no key material"))?;
        let hash_len = self.template.hash_size();
        let tag_len = config.tag_len.unwrap_or(hash_len);
        if tag_len < self.min_tag_len() || tag_len > hash_len {
            return Err(Error::param(
                context,
                format!(
                    "tag length {} outside {}..={}",
                    tag_len,
                    self.min_tag_len(),
                    hash_len
                ),
            ));
        }

        let bs = self.template.block_size();
        // hash the key unconditionally so the work done depends only on
        // its length
        let mut hk = self.template.clone();
        hk.update(key);
        let hashed = Zeroizing::new(hk.digest());

        let mask = ct_mask(key.len() > bs);
        let mut ipad = Zeroizing::new(vec![0u8; bs]);
        let mut opad = Zeroizing::new(vec![0u8; bs]);
        for i in 0..bs {
            let k = key.get(i).copied().unwrap_or(0);
            let h = hashed.get(i).copied().unwrap_or(0);
            let k_prime = (h & mask) | (k & !mask);
            ipad[i] = k_prime ^ HMAC_IPAD;
            opad[i] = k_prime ^ HMAC_OPAD;
        }

        self.ipad = ipad;
        self.opad = opad;
        self.tag_len = tag_len;
        self.keyed = true;
        self.restart_inner();
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        validate::state(self.keyed, "hmac", "mac is not keyed")?;
        self.inner.update(data);
        Ok(())
    }

    fn digest(&mut self) -> Result<Vec<u8>> {
        validate::state(self.keyed, "hmac", "mac is not keyed")?;
        let inner = Zeroizing::new(self.inner.digest());
        let mut outer = self.template.clone();
        outer.update(&self.opad);
        outer.update(&inner);
        let mut tag = outer.digest();
        tag.truncate(self.tag_len);
        self.restart_inner();
        Ok(tag)
    }

    fn reset(&mut self) {
        if self.keyed {
            self.restart_inner();
        }
    }

    fn self_test(&self) -> bool {
        let mut mac = Hmac::new(self.hash_id());
        if mac.init(MacConfig::new().with_key(SELF_TEST_KEY)).is_err()
            || mac.update(SELF_TEST_DATA).is_err()
        {
            return false;
        }
        match mac.digest() {
            Ok(tag) => hex::encode(tag) == known_answer(self.hash_id()),
            Err(_) => false,
        }
    }
}
