// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::{BufferView, DecodeError};

/// The encoded width of an ordered-sparse field.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum SizeClass {
    /// A single byte.
    U8,
    /// A 4-byte native-endian float.
    F32,
}

/// Describes one field of an ordered-sparse record.
///
/// Fields are packed in ascending size-class order: every present 1-byte
/// field comes before every present 4-byte field, and fields of the same
/// class keep the relative order of their descriptors. A field's byte offset
/// therefore depends on which earlier fields are present, never on its own
/// identity, which is why decoding walks the descriptor table with a cursor
/// instead of index addressing.
#[derive(Clone, Copy, Debug)]
pub struct FieldDesc {
    /// The presence-mask bit gating this field.
    pub bit: u32,
    /// The encoded width of this field.
    pub class: SizeClass,
}

impl FieldDesc {
    /// Creates a field descriptor.
    pub const fn new(bit: u32, class: SizeClass) -> Self {
        Self { bit, class }
    }
}

#[derive(Debug)]
enum RawField {
    U8(u8),
    F32(f32),
}

/// The decoded fields of an ordered-sparse record.
#[derive(Debug)]
pub struct SparseRecord {
    mask: u8,
    fields: SmallVec<[(u32, RawField); 5]>,
}

impl SparseRecord {
    /// The presence mask byte.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Whether the given mask bit is set.
    ///
    /// Booleans are carried as pure mask bits with no byte cost, so this is
    /// also the accessor for flag-valued fields.
    pub fn flag(&self, bit: u32) -> bool {
        u32::from(self.mask) & (1 << bit) != 0
    }

    /// The decoded 1-byte field gated by `bit`, if present.
    pub fn u8_field(&self, bit: u32) -> Option<u8> {
        self.fields.iter().find_map(|(b, raw)| match raw {
            RawField::U8(value) if *b == bit => Some(*value),
            _ => None,
        })
    }

    /// The decoded float field gated by `bit`, if present.
    pub fn f32_field(&self, bit: u32) -> Option<f32> {
        self.fields.iter().find_map(|(b, raw)| match raw {
            RawField::F32(value) if *b == bit => Some(*value),
            _ => None,
        })
    }
}

/// Decodes an ordered-sparse buffer against a field descriptor table.
///
/// The first byte of the buffer is the presence mask; the remaining bytes
/// hold the present fields packed in descriptor-table order. The table must
/// list all 1-byte fields before any float fields (debug-asserted), keeping
/// the fixed encoding order an explicit value rather than implicit code
/// order.
///
/// Fails with a truncation error when the buffer ends before every masked
/// field has been read.
pub fn decode_sparse(
    view: BufferView<'_>,
    table: &[FieldDesc],
) -> Result<SparseRecord, DecodeError> {
    debug_assert!(
        table.windows(2).all(|w| w[0].class <= w[1].class),
        "field table must be sorted by ascending size class"
    );

    let mask = view
        .u8_at(0)
        .ok_or_else(|| DecodeError::truncated(view.len(), 1))?;

    let mut fields = SmallVec::new();
    let mut offset = 1;
    for desc in table {
        if u32::from(mask) & (1 << desc.bit) == 0 {
            continue;
        }
        match desc.class {
            SizeClass::U8 => {
                let value = view
                    .u8_at(offset)
                    .ok_or_else(|| DecodeError::truncated(view.len(), offset + 1))?;
                fields.push((desc.bit, RawField::U8(value)));
                offset += 1;
            }
            SizeClass::F32 => {
                let value = view
                    .read_f32(offset)
                    .ok_or_else(|| DecodeError::truncated(view.len(), offset + 4))?;
                fields.push((desc.bit, RawField::F32(value)));
                offset += 4;
            }
        }
    }

    Ok(SparseRecord { mask, fields })
}
