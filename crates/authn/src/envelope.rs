//! Signature envelope codec.
//!
//! An SSH-style signing operation does not emit a bare signature; it emits
//! an envelope:
//!
//! ```text
//! u32-be  name_len
//! bytes   algorithm name   (e.g. "rsa-sha2-256")
//! u32-be  blob_len
//! bytes   raw signature blob
//! ```
//!
//! The total envelope length is exactly `4 + name_len + 4 + blob_len`.
//! The authenticator wants only the raw blob, so this module unwraps the
//! envelope — strictly, in order, with every length bounds-checked. The
//! algorithm name is surfaced but not validated against an allow-list
//! here; policy on the name belongs to the signing path, the codec stays
//! a pure function with no I/O.

use crate::{
    error::{AuthError, Result},
    wire::{WireReader, WireWriter},
};

/// A signature envelope split into its two fields.
///
/// Borrows from the envelope buffer; nothing is copied until the caller
/// decides what to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedEnvelope<'a> {
    /// The algorithm name field, as raw bytes.
    pub algorithm: &'a [u8],
    /// The raw signature blob.
    pub blob: &'a [u8],
}

/// Constructs an envelope from an algorithm name and a raw signature blob.
#[must_use]
pub fn wrap(algorithm: &str, blob: &[u8]) -> Vec<u8> {
    let mut w = WireWriter::new();
    w.write_string(algorithm.as_bytes());
    w.write_string(blob);
    w.into_bytes()
}

/// Parses an envelope into its algorithm name and raw signature blob.
///
/// # Errors
///
/// Returns [`AuthError::MalformedSignatureEnvelope`] if the buffer is
/// shorter than any declared field requires, if a length field would read
/// past the end of the buffer, or if bytes trail the blob.
pub fn parse(envelope: &[u8]) -> Result<ParsedEnvelope<'_>> {
    let mut r = WireReader::new(envelope);
    let algorithm = r.read_string("algorithm name").map_err(to_envelope_error)?;
    let blob = r.read_string("signature blob").map_err(to_envelope_error)?;
    r.expect_end("signature blob").map_err(to_envelope_error)?;
    Ok(ParsedEnvelope { algorithm, blob })
}

/// Extracts the raw signature blob from an envelope.
///
/// This is the transport-facing operation: the returned blob, base64
/// encoded, is what crosses the wire to the authenticator.
///
/// # Errors
///
/// Returns [`AuthError::MalformedSignatureEnvelope`] under the same
/// conditions as [`parse`].
pub fn unwrap(envelope: &[u8]) -> Result<Vec<u8>> {
    Ok(parse(envelope)?.blob.to_vec())
}

fn to_envelope_error(err: crate::wire::WireError) -> AuthError {
    AuthError::malformed_envelope(err.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let envelope = wrap("rsa-sha2-256", &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(unwrap(&envelope).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_round_trip_empty_fields() {
        // The codec frames whatever it is given; emptiness is not its policy.
        let envelope = wrap("", b"");
        let parsed = parse(&envelope).unwrap();
        assert_eq!(parsed.algorithm, b"");
        assert_eq!(parsed.blob, b"");
    }

    #[test]
    fn test_parse_exposes_algorithm_name() {
        let envelope = wrap("ssh-ed25519", &[1, 2, 3]);
        let parsed = parse(&envelope).unwrap();
        assert_eq!(parsed.algorithm, b"ssh-ed25519");
        assert_eq!(parsed.blob, &[1, 2, 3]);
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let err = unwrap(b"").unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_truncated_name_length() {
        let err = unwrap(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_name_length_past_end() {
        // Declares a 100-byte name over a 3-byte remainder.
        let err = unwrap(&[0, 0, 0, 100, b'r', b's', b'a']).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_missing_blob_length() {
        // Well-formed name, then nothing.
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0, 0, 0, 3]);
        buf.extend_from_slice(b"rsa");
        let err = unwrap(&buf).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_blob_length_past_end() {
        let mut buf = wrap("rsa-sha2-256", &[1, 2, 3, 4]);
        // Corrupt the blob length (second length field) upward.
        let name_len = 4 + "rsa-sha2-256".len();
        buf[name_len..name_len + 4].copy_from_slice(&512u32.to_be_bytes());
        let err = unwrap(&buf).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        // total length must equal 4 + name_len + 4 + blob_len, exactly.
        let mut buf = wrap("rsa-sha2-256", &[1, 2, 3, 4]);
        buf.push(0x00);
        let err = unwrap(&buf).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_declared_u32_max_blob() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0, 0, 0, 0]);
        buf.extend_from_slice(&u32::MAX.to_be_bytes());
        let err = unwrap(&buf).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSignatureEnvelope { .. }));
    }

    #[test]
    fn test_large_blob_round_trip() {
        let blob = vec![0xa5u8; 8192];
        let envelope = wrap("rsa-sha2-512", &blob);
        assert_eq!(unwrap(&envelope).unwrap(), blob);
    }
}
