#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;

// Input: a JSON schema and a JSON instance separated by a NUL byte.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|b| *b == 0) else {
        return;
    };
    let (Ok(schema), Ok(instance)) = (
        serde_json::from_slice::<Value>(&data[..split]),
        serde_json::from_slice::<Value>(&data[split + 1..]),
    ) else {
        return;
    };

    let collected = draft4::validate(&schema, &instance);
    let fail_fast = draft4::is_valid(&schema, &instance);
    assert_eq!(collected.is_valid(), fail_fast);
});
