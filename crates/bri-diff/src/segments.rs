//! Splitting rendered text into literal text and embedded images.
//!
//! Rendered text frames base64 image payloads with [`IMAGE_DELIMITER`].
//! Splitting on the delimiter yields alternating text and image pieces; the
//! first piece is an image only when the text starts with the delimiter.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bri_types::IMAGE_DELIMITER;

use crate::error::{DiffError, DiffResult};

/// One piece of rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    /// A base64 image payload.
    Image(&'t str),
}

impl<'t> Segment<'t> {
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    pub fn as_str(&self) -> &'t str {
        match self {
            Self::Text(s) | Self::Image(s) => *s,
        }
    }

    /// Decode the base64 payload of an image segment.
    pub fn decode_image(&self) -> DiffResult<Vec<u8>> {
        match self {
            Self::Image(payload) => Ok(STANDARD.decode(payload)?),
            Self::Text(_) => Err(DiffError::NotAnImage),
        }
    }
}

/// Split rendered text into alternating text and image segments.
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let (body, image_first) = match text.strip_prefix(IMAGE_DELIMITER) {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    body.split(IMAGE_DELIMITER)
        .enumerate()
        .map(|(i, piece)| {
            if (i % 2 == 0) == image_first {
                Segment::Image(piece)
            } else {
                Segment::Text(piece)
            }
        })
        .collect()
}
