// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental styled paragraph construction over a binary style-transfer
//! protocol.
//!
//! A caller on the far side of a process or runtime boundary encodes
//! paragraph, text, and strut styling into compact buffers (see the
//! [`text_wire`] crate for the encodings). [`ParagraphBuilder`] decodes those
//! buffers into structured style records, maintains a nested style stack as
//! it consumes text runs and inline placeholders, and finally emits an
//! immutable [`Paragraph`] for an external shaping engine to lay out.
//!
//! Styles cascade: pushing a partially-specified style resolves every unset
//! field from the style currently in effect, so unset fields inherit rather
//! than reset to defaults. The paragraph-level style forms the permanent base
//! of the stack and is never popped.
//!
//! Shaping, line breaking, font loading and painting are out of scope; they
//! appear only as the injected [`ShapingEngine`] strategy and the opaque
//! [`Brush`](style::Brush) paint parameter.

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

pub use text_wire;

mod builder;
mod decode;
mod engine;
mod error;
mod paragraph;
mod placeholder;
mod stack;

pub mod style;

pub use builder::ParagraphBuilder;
pub use engine::{EitherEngine, PassthroughEngine, ShapingEngine};
pub use error::Error;
pub use paragraph::{Item, Paragraph, TextRun};
pub use placeholder::{PlaceholderAlignment, PlaceholderRun};
