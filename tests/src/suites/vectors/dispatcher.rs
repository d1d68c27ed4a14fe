//! Family name to handler lookup

use super::error::Result;
use super::handlers;
use super::model::{TestCase, TestGroup};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type HandlerFn = fn(&TestGroup, &TestCase) -> Result<()>;

pub static REGISTRY: Lazy<HashMap<&'static str, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<&'static str, HandlerFn>::new();
    m.insert("digest", handlers::digest::digest_kat);
    m.insert("mac", handlers::mac::mac_kat);
    m.insert("mode", handlers::mode::mode_kat);
    m.insert("pad", handlers::pad::pad_kat);
    m.insert("prng", handlers::prng::prng_kat);
    m
});

pub fn handler(family: &str) -> Option<HandlerFn> {
    REGISTRY.get(family).copied()
}
