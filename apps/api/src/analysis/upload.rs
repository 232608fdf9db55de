//! Upload decoding: data-URL stripping, base64, and an image header probe.
//!
//! Only the header is read. Pixels are never decoded; the model receives the
//! original bytes.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageReader;
use thiserror::Error;

use crate::llm_client::ImagePayload;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image data is empty")]
    Empty,

    #[error("{0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized image format")]
    UnknownFormat,

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub payload: ImagePayload,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
}

/// Accepts raw base64 or a `data:image/...;base64,` URL.
pub fn decode_image_payload(raw: &str) -> Result<DecodedImage, ImageError> {
    let encoded: String = strip_data_url(raw)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if encoded.is_empty() {
        return Err(ImageError::Empty);
    }

    let bytes = STANDARD.decode(&encoded)?;

    let reader = ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(ImageError::UnknownFormat)?;
    let (width, height) = reader.into_dimensions()?;

    Ok(DecodedImage {
        payload: ImagePayload {
            mime_type: format.to_mime_type().to_string(),
            base64_data: encoded,
        },
        width,
        height,
        byte_len: bytes.len(),
    })
}

/// Everything after the first comma, if there is one.
fn strip_data_url(raw: &str) -> &str {
    match raw.split(',').nth(1) {
        Some(data) => data,
        None => raw,
    }
}
