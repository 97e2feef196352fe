//! Bounds-checked reader and writer for the SSH wire format.
//!
//! Both the signature envelope and the OpenSSH private key container use
//! the same length-prefixed encoding: a big-endian `u32` length followed
//! by that many bytes. Every read here is bounds-checked before any byte
//! is touched; a declared length that runs past the end of the buffer is
//! an error, never an out-of-bounds read.

use thiserror::Error;

/// A wire-level framing violation.
///
/// Callers map this onto the public error taxonomy: the envelope codec
/// reports `MalformedSignatureEnvelope`, the key parser reports
/// `UnsupportedKeyFormat`.
#[derive(Debug, Error)]
pub(crate) enum WireError {
    /// The buffer ended before a declared field was complete.
    #[error("truncated input reading {what}: need {need} bytes, {have} remain")]
    Truncated {
        what: &'static str,
        need: usize,
        have: usize,
    },

    /// Bytes remained after the final field of a strictly-framed structure.
    #[error("{len} trailing bytes after {what}")]
    Trailing { what: &'static str, len: usize },
}

/// Cursor over a byte buffer, reading SSH wire primitives in order.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, need: usize, what: &'static str) -> Result<&'a [u8], WireError> {
        let have = self.remaining();
        if need > have {
            return Err(WireError::Truncated { what, need, have });
        }
        let out = &self.buf[self.pos..self.pos + need];
        self.pos += need;
        Ok(out)
    }

    /// Reads a big-endian `u32`.
    pub(crate) fn read_u32(&mut self, what: &'static str) -> Result<u32, WireError> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a length-prefixed byte string (`u32` length, then the bytes).
    pub(crate) fn read_string(&mut self, what: &'static str) -> Result<&'a [u8], WireError> {
        let len = self.read_u32(what)? as usize;
        self.take(len, what)
    }

    /// Reads whatever is left of the buffer.
    pub(crate) fn read_rest(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }

    /// Asserts that the buffer has been fully consumed.
    pub(crate) fn expect_end(&self, what: &'static str) -> Result<(), WireError> {
        if self.remaining() != 0 {
            return Err(WireError::Trailing { what, len: self.remaining() });
        }
        Ok(())
    }
}

/// Builder for SSH wire structures, mirroring [`WireReader`].
pub(crate) struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub(crate) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub(crate) fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn write_string(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an SSH `mpint`: minimal big-endian two's complement, with a
    /// leading zero byte when the high bit of the magnitude is set.
    #[cfg(any(test, feature = "testutil"))]
    pub(crate) fn write_mpint(&mut self, magnitude: &[u8]) {
        let stripped: &[u8] = {
            let mut s = magnitude;
            while let [0, rest @ ..] = s {
                s = rest;
            }
            s
        };
        if stripped.is_empty() {
            self.write_u32(0);
        } else if stripped[0] & 0x80 != 0 {
            self.write_u32(stripped.len() as u32 + 1);
            self.buf.push(0);
            self.buf.extend_from_slice(stripped);
        } else {
            self.write_string(stripped);
        }
    }

    #[cfg(any(test, feature = "testutil"))]
    pub(crate) fn extend_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[cfg(any(test, feature = "testutil"))]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
