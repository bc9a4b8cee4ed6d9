#![no_main]
use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use sealtoken::keys::{KeySet, KeySetRegistry};
use sealtoken::open::open;

fn registry() -> &'static KeySetRegistry {
    static REGISTRY: OnceLock<KeySetRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        [KeySet::generate("1"), KeySet::generate("fuzz")]
            .into_iter()
            .collect()
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(token) = std::str::from_utf8(data) else {
        return;
    };

    // `open` must never panic on arbitrary input, and the fuzzer holds no
    // signing key, so nothing it produces may ever authenticate.
    let result = open(token, registry());
    assert!(
        result.is_err(),
        "fuzzer input opened successfully: forged token"
    );
});
