// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A read-only typed view over a caller-supplied byte buffer.
///
/// Every decoder in this crate takes its input through a `BufferView`. Reads
/// are addressed in bytes, may be unaligned, and return `None` rather than
/// panicking when they would run past the end of the buffer.
#[derive(Clone, Copy, Debug)]
pub struct BufferView<'a> {
    data: &'a [u8],
}

impl<'a> BufferView<'a> {
    /// Creates a view over the given bytes.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The length of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying bytes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Reads the byte at `offset`.
    pub fn u8_at(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    /// Reads a native-endian `i32` starting at byte `offset`.
    pub fn read_i32(&self, offset: usize) -> Option<i32> {
        Some(bytemuck::pod_read_unaligned(self.word_at(offset)?))
    }

    /// Reads a native-endian `u32` starting at byte `offset`.
    pub fn read_u32(&self, offset: usize) -> Option<u32> {
        Some(bytemuck::pod_read_unaligned(self.word_at(offset)?))
    }

    /// Reads a native-endian `f32` starting at byte `offset`.
    pub fn read_f32(&self, offset: usize) -> Option<f32> {
        Some(bytemuck::pod_read_unaligned(self.word_at(offset)?))
    }

    fn word_at(&self, offset: usize) -> Option<&'a [u8]> {
        self.data.get(offset..offset.checked_add(4)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x1234_5678_i32.to_ne_bytes());
        bytes.extend_from_slice(&2.5_f32.to_ne_bytes());
        bytes.push(0xAB);

        let view = BufferView::new(&bytes);
        assert_eq!(view.len(), 9);
        assert_eq!(view.read_i32(0), Some(0x1234_5678));
        assert_eq!(view.read_f32(4), Some(2.5));
        assert_eq!(view.u8_at(8), Some(0xAB));
    }

    #[test]
    fn out_of_range_reads_return_none() {
        let view = BufferView::new(&[0, 1, 2]);
        assert_eq!(view.read_i32(0), None);
        assert_eq!(view.u8_at(3), None);
        assert_eq!(view.read_f32(usize::MAX), None);
    }

    #[test]
    fn empty_buffer() {
        let view = BufferView::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.u8_at(0), None);
    }
}
