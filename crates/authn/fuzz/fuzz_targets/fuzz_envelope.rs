//! Fuzz target for signature envelope parsing.
//!
//! Feeds arbitrary byte strings to the envelope codec. The goal is to
//! find inputs that cause panics, hangs, or out-of-bounds reads — every
//! result must be either `Ok(...)` or `Err(AuthError)`.

#![no_main]

use ferrite_console_authn::envelope;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic on any input.
    let parsed = envelope::parse(data);
    let unwrapped = envelope::unwrap(data);

    // The two entry points must agree on validity.
    assert_eq!(parsed.is_ok(), unwrapped.is_ok());

    // Anything that parses must re-wrap to the identical buffer.
    if let Ok(p) = parsed {
        let algorithm = String::from_utf8_lossy(p.algorithm).into_owned();
        if p.algorithm == algorithm.as_bytes() {
            assert_eq!(envelope::wrap(&algorithm, p.blob), data);
        }
    }
});
