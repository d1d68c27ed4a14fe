use gcrypto_tests::suites::vectors::{load_suite_by_name, run_suite};

fn run(name: &str) {
    gcrypto_tests::init_tracing();
    let suite = load_suite_by_name(name).unwrap_or_else(|e| panic!("loading {}: {}", name, e));
    assert_eq!(suite.family, name);
    let tally = run_suite(&suite).unwrap_or_else(|e| panic!("{} suite: {}", name, e));
    assert!(tally.passed > 0);
}

#[test]
fn test_digest_vectors() {
    run("digest");
}

#[test]
fn test_mac_vectors() {
    run("mac");
}

#[test]
fn test_mode_vectors() {
    run("mode");
}

#[test]
fn test_pad_vectors() {
    run("pad");
}

#[test]
fn test_prng_vectors() {
    run("prng");
}

#[test]
fn test_unknown_suite() {
    assert!(load_suite_by_name("no-such-family").is_err());
}
