// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trait for opaque, externally-owned paint values.
///
/// Background and foreground paints are owned by an external painting
/// subsystem; this crate stores and forwards them but never inspects or
/// mutates their content.
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}
