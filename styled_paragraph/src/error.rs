// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_wire::DecodeError;

/// Errors produced by the paragraph builder protocol.
///
/// Malformed payload-level data ([`Error::MalformedText`]) is recoverable:
/// the offending call fails but the builder remains usable. Structural and
/// protocol violations ([`Error::Decode`], [`Error::StackUnderflow`]) abort
/// the operation that detected them rather than produce a partially-built,
/// inconsistent paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input text failed UTF-16 well-formedness validation.
    MalformedText {
        /// The unpaired surrogate code unit that made the text ill-formed.
        code_unit: u16,
    },

    /// A wire buffer failed structural validation while decoding.
    Decode(DecodeError),

    /// `pop` was called with only the base style on the stack.
    ///
    /// The base entry is installed at construction and is never removable.
    StackUnderflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedText { code_unit } => write!(
                f,
                "string is not well-formed UTF-16 (unpaired surrogate {code_unit:#06x})"
            ),
            Self::Decode(err) => write!(f, "malformed style buffer: {err}"),
            Self::StackUnderflow => f.write_str("style stack underflow: cannot pop the base style"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}
