//! 图片上传编码
//! Turns uploaded image bytes into a `data:` URL the provider accepts inline.

use base64::{engine::general_purpose::STANDARD, Engine as _};

const FALLBACK_MIME: &str = "image/png";

/// Mime type sniffed from magic bytes, `image/png` when unknown.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn image_data_url(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), encode_image(bytes))
}
