// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse binary wire formats for text style records.
//!
//! A caller on the far side of a process or runtime boundary encodes style
//! records into compact byte buffers; this crate provides the typed view over
//! those buffers ([`BufferView`]) together with the three decoding strategies
//! the protocol uses:
//!
//! - **Dense slots** ([`DenseSlots`]): a fixed array of 32-bit slots where
//!   slot 0 is a presence mask and every field owns a fixed slot index.
//! - **Ordered sparse packing** ([`decode_sparse`]): presence is still
//!   mask-driven, but present fields are packed contiguously in a fixed
//!   size-class order, so a field's offset depends on which earlier fields
//!   are present.
//! - **Fixed-stride records** ([`decode_records`]): repeating fixed-size
//!   records with no mask; presence is array membership.
//!
//! All multi-byte values are native-endian, as produced by the caller.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod buffer;
mod dense;
mod error;
mod record;
mod setting;
mod shadow;
mod sparse;

pub use buffer::BufferView;
pub use dense::DenseSlots;
pub use error::{DecodeError, DecodeErrorKind};
pub use record::{FixedStride, decode_records};
pub use setting::{FontFeature, FontVariation, Setting, Tag};
pub use shadow::TextShadow;
pub use sparse::{FieldDesc, SizeClass, SparseRecord, decode_sparse};
