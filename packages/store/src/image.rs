//! # Image boundary — picked file to data URI
//!
//! Recipes carry their picture inline as a `data:<mime>;base64,<payload>`
//! string. The recipe form reads the picked file and calls [`to_data_uri`]
//! before handing the result to [`crate::recipes::publish_recipe`].
//!
//! The type is sniffed from the leading bytes first; the file extension is
//! only consulted when the bytes are inconclusive. Only PNG and JPEG pass.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{AppError, Result};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff];

/// Value for the file input's `accept` attribute.
pub const ACCEPT: &str = "image/png, image/jpeg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }

    fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_MAGIC) {
            Some(ImageKind::Png)
        } else if bytes.starts_with(JPEG_MAGIC) {
            Some(ImageKind::Jpeg)
        } else {
            None
        }
    }

    fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            _ => None,
        }
    }

    /// Sniff the bytes, falling back to the extension.
    pub fn detect(file_name: &str, bytes: &[u8]) -> Result<Self> {
        Self::from_magic(bytes)
            .or_else(|| Self::from_file_name(file_name))
            .ok_or_else(|| AppError::UnsupportedImage(file_name.to_string()))
    }
}

/// Encode `bytes` as a data URI, rejecting non-PNG/JPEG files and files over
/// `max_bytes`.
pub fn to_data_uri(file_name: &str, bytes: &[u8], max_bytes: usize) -> Result<String> {
    if bytes.len() > max_bytes {
        return Err(AppError::ImageTooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }
    let kind = ImageKind::detect(file_name, bytes)?;
    Ok(format!("data:{};base64,{}", kind.mime(), STANDARD.encode(bytes)))
}
