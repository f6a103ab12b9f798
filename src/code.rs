//! Visionary code codec
//!
//! A Visionary code is the base64url encoding of `!`-joined image metadata
//! fields in a fixed order:
//!
//! ```text
//! file_id!source_width!source_height[!background_color[!blurhash!x!y[!alt_text]]]
//! ```
//!
//! Optional fields form a strict prefix chain: a field is only serialized
//! when everything to its left is present. Existing codes are persisted and
//! shared externally, so the field order and separator are byte-stable.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::constants::CODE_SEPARATOR;
use crate::error::VisionaryError;

/// Image metadata fields encoded in a Visionary code.
///
/// `file_id`, `source_width` and `source_height` are required; the source
/// dimensions are the original upload's pixel size and the implicit upper
/// bound for any requested render size. The remaining fields are optional
/// but ordered: alt text cannot be encoded without the blurhash triple, and
/// the blurhash triple cannot be encoded without a background color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFields {
    /// Visionary file id, or an absolute URL of the source image
    pub file_id: String,

    /// Width of the original upload (also the maximum render width)
    pub source_width: u32,

    /// Height of the original upload (also the maximum render height)
    pub source_height: u32,

    /// Background color code shown while the image loads
    pub background_color: Option<String>,

    /// Blurhash placeholder string
    pub blurhash: Option<String>,

    /// Number of horizontal DCT components the blurhash encodes
    pub blurhash_x: Option<u32>,

    /// Number of vertical DCT components the blurhash encodes
    pub blurhash_y: Option<u32>,

    /// Alt text (may contain the field separator; it is always last)
    pub alt_text: Option<String>,
}

/// Generates a Visionary code from image metadata fields.
///
/// Fails only when a required field is missing: an empty `file_id` or a
/// zero source dimension. Optional fields are emitted as far as the prefix
/// chain reaches; a blurhash without a background color, or an incomplete
/// blurhash triple, is silently truncated as if absent.
pub fn generate_code(fields: &ImageFields) -> Result<String, VisionaryError> {
    if fields.file_id.is_empty() || fields.source_width == 0 || fields.source_height == 0 {
        return Err(VisionaryError::MissingRequiredFields);
    }

    // minimum needed image placeholder information
    let mut components: Vec<&str> = Vec::with_capacity(8);
    let width = fields.source_width.to_string();
    let height = fields.source_height.to_string();
    components.push(&fields.file_id);
    components.push(&width);
    components.push(&height);

    let Some(background_color) = fields.background_color.as_deref() else {
        return Ok(join_and_encode(&components));
    };
    components.push(background_color);

    // blurhash data rides along only as a complete triple
    let (blurhash_x, blurhash_y) = match (&fields.blurhash, fields.blurhash_x, fields.blurhash_y) {
        (Some(blurhash), Some(x), Some(y)) => {
            components.push(blurhash);
            (x.to_string(), y.to_string())
        }
        _ => return Ok(join_and_encode(&components)),
    };
    components.push(&blurhash_x);
    components.push(&blurhash_y);

    match fields.alt_text.as_deref() {
        Some(alt_text) if !alt_text.is_empty() => components.push(alt_text),
        _ => {}
    }
    Ok(join_and_encode(&components))
}

fn join_and_encode(components: &[&str]) -> String {
    URL_SAFE_NO_PAD.encode(components.join(CODE_SEPARATOR))
}

/// Parses a Visionary code back into [`ImageFields`].
///
/// Returns `None` for anything that is not a decodable code: empty input,
/// input outside the base64url alphabet, undecodable payloads, fewer than
/// the three required fields, an empty file id, non-positive dimensions, or
/// a blurhash whose component counts are missing or below 1. Rejected input
/// is reported through a `tracing` diagnostic, never a panic.
pub fn parse_code(code: &str) -> Option<ImageFields> {
    let code = code.trim();
    if code.is_empty() || !is_base64url_formatted(code) {
        return None;
    }
    let decoded = URL_SAFE_NO_PAD.decode(code).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    if decoded.is_empty() {
        return None;
    }

    // alt text is last and may itself contain the separator, so cap the split
    let parts: Vec<&str> = decoded.splitn(8, CODE_SEPARATOR).collect();
    // Visionary codes must contain at a minimum: file id, width, height
    if parts.len() < 3 {
        return None;
    }

    let file_id = parts[0].trim();
    if file_id.is_empty() {
        tracing::warn!("cannot parse code: empty file id");
        return None;
    }

    let source_width = parse_dimension(parts[1]);
    let source_height = parse_dimension(parts[2]);
    let (Some(source_width), Some(source_height)) = (source_width, source_height) else {
        tracing::warn!(
            width = parts[1],
            height = parts[2],
            "cannot parse code: invalid image dimensions"
        );
        return None;
    };

    let background_color = parts.get(3).map(|s| s.to_string());
    let blurhash = parts.get(4).map(|s| s.to_string());
    let (blurhash_x, blurhash_y) = if blurhash.is_some() {
        // a missing component is indistinguishable from an invalid one
        match (
            parse_component(parts.get(5)),
            parse_component(parts.get(6)),
        ) {
            (Some(x), Some(y)) => (Some(x), Some(y)),
            _ => {
                tracing::warn!("cannot parse code: invalid blurhash x, y component dimensions");
                return None;
            }
        }
    } else {
        (None, None)
    };
    let alt_text = parts.get(7).map(|s| s.to_string());

    Some(ImageFields {
        file_id: file_id.to_string(),
        source_width,
        source_height,
        background_color,
        blurhash,
        blurhash_x,
        blurhash_y,
        alt_text,
    })
}

/// True when `value` contains only base64url alphabet characters.
///
/// An empty string passes the alphabet test; callers that require content
/// check emptiness separately.
pub fn is_base64url_formatted(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn parse_dimension(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

fn parse_component(input: Option<&&str>) -> Option<u32> {
    input?.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}
