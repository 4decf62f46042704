// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire-to-style decoding.
//!
//! Paragraph and text styles travel as dense 32-bit slot arrays; strut
//! styles travel as an order-dependent sparse byte buffer; shadow, feature
//! and variation lists travel as fixed-stride record arrays. The slot and
//! bit assignments below are the protocol contract with the encoder.

use alloc::string::String;

use smallvec::smallvec;
use text_wire::{
    decode_records, decode_sparse, BufferView, DecodeError, DenseSlots, FieldDesc, SizeClass,
};

use crate::error::Error;
use crate::style::{
    Brush, FontStyle, FontWeight, ParagraphStyle, StrutStyle, TextAlign, TextDecoration,
    TextDecorationStyle, TextDirection, TextHeightBehavior, TextStyle,
};

// Paragraph style slots. Slot 0 is the presence mask; the bit index equals
// the slot index. Slots 7 and up gate values passed as separate call
// arguments rather than array payload.
const PS_TEXT_ALIGN: u32 = 1;
const PS_TEXT_DIRECTION: u32 = 2;
const PS_FONT_WEIGHT: u32 = 3;
const PS_FONT_STYLE: u32 = 4;
const PS_MAX_LINES: u32 = 5;
const PS_TEXT_HEIGHT_BEHAVIOR: u32 = 6;
const PS_FONT_FAMILY: u32 = 7;
const PS_FONT_SIZE: u32 = 8;
const PS_HEIGHT: u32 = 9;
const PS_STRUT_STYLE: u32 = 10;
const PS_ELLIPSIS: u32 = 11;
const PS_LOCALE: u32 = 12;

// Text style slots, same convention. Bit 0 is a pure mask bit; bits 8 and up
// gate separately-passed arguments and buffers.
const TS_LEADING_DISTRIBUTION: u32 = 0;
const TS_COLOR: u32 = 1;
const TS_DECORATION: u32 = 2;
const TS_DECORATION_COLOR: u32 = 3;
const TS_DECORATION_STYLE: u32 = 4;
const TS_FONT_WEIGHT: u32 = 5;
const TS_FONT_STYLE: u32 = 6;
const TS_TEXT_BASELINE: u32 = 7;
const TS_DECORATION_THICKNESS: u32 = 8;
const TS_FONT_FAMILY: u32 = 9;
const TS_FONT_SIZE: u32 = 10;
const TS_LETTER_SPACING: u32 = 11;
const TS_WORD_SPACING: u32 = 12;
const TS_HEIGHT: u32 = 13;
const TS_LOCALE: u32 = 14;
const TS_BACKGROUND: u32 = 15;
const TS_FOREGROUND: u32 = 16;
const TS_SHADOWS: u32 = 17;
const TS_FONT_FEATURES: u32 = 18;
const TS_FONT_VARIATIONS: u32 = 19;

// Strut style mask bits. Bits 3 and 7 are pure mask bits.
const STRUT_FONT_WEIGHT: u32 = 0;
const STRUT_FONT_STYLE: u32 = 1;
const STRUT_FONT_FAMILY: u32 = 2;
const STRUT_HALF_LEADING: u32 = 3;
const STRUT_FONT_SIZE: u32 = 4;
const STRUT_HEIGHT: u32 = 5;
const STRUT_LEADING: u32 = 6;
const STRUT_FORCE_HEIGHT: u32 = 7;

/// The strut's field table: 1-byte fields first, then floats, each zone in
/// fixed relative order. This table *is* the encoding order.
const STRUT_FIELDS: &[FieldDesc] = &[
    FieldDesc::new(STRUT_FONT_WEIGHT, SizeClass::U8),
    FieldDesc::new(STRUT_FONT_STYLE, SizeClass::U8),
    FieldDesc::new(STRUT_FONT_SIZE, SizeClass::F32),
    FieldDesc::new(STRUT_HEIGHT, SizeClass::F32),
    FieldDesc::new(STRUT_LEADING, SizeClass::F32),
];

fn masked_slot(slots: &DenseSlots<'_>, bit: u32) -> Result<Option<i32>, DecodeError> {
    if slots.contains(bit) {
        Ok(Some(slots.slot(bit as usize)?))
    } else {
        Ok(None)
    }
}

/// Decodes the paragraph-level style from its dense slot buffer, delegating
/// to the strut decoder when the strut bit is set.
pub(crate) fn decode_paragraph_style(
    encoded: BufferView<'_>,
    strut_data: Option<BufferView<'_>>,
    font_family: &str,
    strut_font_families: &[String],
    font_size: f32,
    height: f32,
    ellipsis: Option<&str>,
    locale: Option<&str>,
) -> Result<ParagraphStyle, Error> {
    let slots = DenseSlots::new(encoded)?;
    let mut style = ParagraphStyle::default();

    if let Some(value) = masked_slot(&slots, PS_TEXT_ALIGN)? {
        style.text_align = TextAlign::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, PS_TEXT_DIRECTION)? {
        style.text_direction = TextDirection::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, PS_FONT_WEIGHT)? {
        style.font_weight = FontWeight::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, PS_FONT_STYLE)? {
        style.font_style = FontStyle::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, PS_MAX_LINES)? {
        // Zero or negative means unlimited.
        style.max_lines = u32::try_from(value).ok().filter(|lines| *lines > 0);
    }
    if let Some(value) = masked_slot(&slots, PS_TEXT_HEIGHT_BEHAVIOR)? {
        style.text_height_behavior = TextHeightBehavior::from_encoded(value);
    }
    if slots.contains(PS_FONT_FAMILY) {
        style.font_family = String::from(font_family);
    }
    if slots.contains(PS_FONT_SIZE) {
        style.font_size = font_size;
    }
    if slots.contains(PS_HEIGHT) {
        style.height = height;
        style.height_override = true;
    }
    if slots.contains(PS_STRUT_STYLE) {
        style.strut = decode_strut(strut_data, strut_font_families)?;
    }
    if slots.contains(PS_ELLIPSIS) {
        style.ellipsis = ellipsis.map(String::from);
    }
    if slots.contains(PS_LOCALE) {
        style.locale = locale.map(String::from);
    }

    Ok(style)
}

/// Decodes a strut style from its ordered-sparse buffer.
///
/// A null or zero-length buffer leaves the strut absent even when the
/// paragraph's strut bit was set; this asymmetry with the dense layer is
/// part of the protocol.
fn decode_strut(
    data: Option<BufferView<'_>>,
    font_families: &[String],
) -> Result<Option<StrutStyle>, Error> {
    let Some(view) = data else {
        return Ok(None);
    };
    if view.is_empty() {
        return Ok(None);
    }

    let record = decode_sparse(view, STRUT_FIELDS)?;
    let mut strut = StrutStyle {
        enabled: true,
        ..StrutStyle::default()
    };

    if let Some(value) = record.u8_field(STRUT_FONT_WEIGHT) {
        strut.font_weight = FontWeight::from_encoded(value.into());
    }
    if let Some(value) = record.u8_field(STRUT_FONT_STYLE) {
        strut.font_style = FontStyle::from_encoded(value.into());
    }
    strut.half_leading = record.flag(STRUT_HALF_LEADING);
    if let Some(value) = record.f32_field(STRUT_FONT_SIZE) {
        strut.font_size = value;
    }
    if let Some(value) = record.f32_field(STRUT_HEIGHT) {
        strut.height = value;
        strut.height_override = true;
    }
    if let Some(value) = record.f32_field(STRUT_LEADING) {
        strut.leading = value;
    }
    strut.force_height = record.flag(STRUT_FORCE_HEIGHT);
    strut.font_families = if record.flag(STRUT_FONT_FAMILY) {
        font_families.iter().cloned().collect()
    } else {
        // An empty name defers to the platform default font.
        smallvec![String::new()]
    };

    Ok(Some(strut))
}

/// Overwrites the masked fields of `style` from a text-style buffer and its
/// companion arguments.
///
/// `style` starts as a copy of the parent style; fields whose presence bit
/// is unset are left untouched and therefore inherit.
pub(crate) fn apply_text_style<B: Brush>(
    style: &mut TextStyle<B>,
    encoded: BufferView<'_>,
    font_families: &[String],
    font_size: f32,
    letter_spacing: f32,
    word_spacing: f32,
    height: f32,
    decoration_thickness: f32,
    locale: Option<&str>,
    background: Option<B>,
    foreground: Option<B>,
    shadows: Option<BufferView<'_>>,
    font_features: Option<BufferView<'_>>,
    font_variations: Option<BufferView<'_>>,
) -> Result<(), Error> {
    let slots = DenseSlots::new(encoded)?;

    // Leading distribution tracks the mask bit itself: unset means "not
    // half-leading", not "inherit".
    style.half_leading = slots.contains(TS_LEADING_DISTRIBUTION);

    if let Some(value) = masked_slot(&slots, TS_COLOR)? {
        style.color = value.cast_unsigned();
    }
    if let Some(value) = masked_slot(&slots, TS_DECORATION)? {
        style.decoration = TextDecoration::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, TS_DECORATION_COLOR)? {
        style.decoration_color = value.cast_unsigned();
    }
    if let Some(value) = masked_slot(&slots, TS_DECORATION_STYLE)? {
        style.decoration_style = TextDecorationStyle::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, TS_FONT_WEIGHT)? {
        style.font_weight = FontWeight::from_encoded(value);
    }
    if let Some(value) = masked_slot(&slots, TS_FONT_STYLE)? {
        style.font_style = FontStyle::from_encoded(value);
    }
    // Slot 7 (text baseline) is accepted but is not a style property.
    let _ = masked_slot(&slots, TS_TEXT_BASELINE)?;

    if slots.contains(TS_DECORATION_THICKNESS) {
        style.decoration_thickness = decoration_thickness;
    }
    if slots.contains(TS_FONT_SIZE) {
        style.font_size = font_size;
    }
    if slots.contains(TS_LETTER_SPACING) {
        style.letter_spacing = letter_spacing;
    }
    if slots.contains(TS_WORD_SPACING) {
        style.word_spacing = word_spacing;
    }
    if slots.contains(TS_HEIGHT) {
        style.height = height;
        style.height_override = true;
    }
    if slots.contains(TS_LOCALE) {
        style.locale = locale.map(String::from);
    }
    if slots.contains(TS_BACKGROUND) {
        if let Some(paint) = background {
            style.background = Some(paint);
        }
    }
    if slots.contains(TS_FOREGROUND) {
        if let Some(paint) = foreground {
            style.foreground = Some(paint);
        }
    }
    if slots.contains(TS_SHADOWS) {
        style.shadows = decode_records(shadows.unwrap_or(BufferView::new(&[])))?;
    }
    if slots.contains(TS_FONT_FAMILY) {
        // The child's families override the parent's entirely; fallback past
        // them is the font collection's concern, not the parent list's.
        style.font_families = font_families.iter().cloned().collect();
    }
    if slots.contains(TS_FONT_FEATURES) {
        style.font_features = decode_records(font_features.unwrap_or(BufferView::new(&[])))?;
    }
    if slots.contains(TS_FONT_VARIATIONS) {
        style.font_variations = decode_records(font_variations.unwrap_or(BufferView::new(&[])))?;
    }

    Ok(())
}
