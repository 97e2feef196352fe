//! Fuzz target for private key parsing.
//!
//! Feeds arbitrary byte strings to the key parser. Garbage must come back
//! as `UnsupportedKeyFormat`, never as a panic or an out-of-bounds read —
//! the OpenSSH container walk is all length-prefixed fields.

#![no_main]

use ferrite_console_authn::PrivateKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = PrivateKey::from_bytes(data);
});
