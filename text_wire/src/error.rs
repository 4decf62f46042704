// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error produced while decoding a wire buffer.
///
/// Carries a non-exhaustive [`DecodeErrorKind`] plus the buffer length and
/// the length the decoder required, so callers can report framing problems
/// without re-deriving context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The category describing this error.
    kind: DecodeErrorKind,

    /// The length in bytes of the buffer being decoded.
    len: usize,

    /// The stride or byte count the decoder expected.
    expected: usize,
}

impl DecodeError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// The length in bytes of the offending buffer.
    pub fn buffer_len(&self) -> usize {
        self.len
    }

    /// The stride (for [`DecodeErrorKind::StrideMismatch`]) or required byte
    /// count (for [`DecodeErrorKind::Truncated`]).
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// A buffer whose length is not a multiple of the record stride.
    pub fn stride_mismatch(len: usize, stride: usize) -> Self {
        Self {
            kind: DecodeErrorKind::StrideMismatch,
            len,
            expected: stride,
        }
    }

    /// A buffer that ended before a masked field could be read.
    pub fn truncated(len: usize, needed: usize) -> Self {
        Self {
            kind: DecodeErrorKind::Truncated,
            len,
            expected: needed,
        }
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            DecodeErrorKind::StrideMismatch => write!(
                f,
                "buffer length {} is not a multiple of record stride {}",
                self.len, self.expected
            ),
            DecodeErrorKind::Truncated => write!(
                f,
                "buffer truncated: decoding required {} bytes but only {} are present",
                self.expected, self.len
            ),
        }
    }
}

impl core::error::Error for DecodeError {}

/// The non-exhaustive category of a [`DecodeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// A fixed-stride buffer's length was not a multiple of its stride.
    ///
    /// This indicates caller/encoder corruption rather than legitimate
    /// absence and is never recovered into a partial decode.
    StrideMismatch,

    /// The buffer ended before all masked fields could be read.
    Truncated,
}
