// Constants module - centralized wire-format and default values
//
// The code separator and field order are a compatibility contract: codes
// already in circulation must keep decoding to the same fields.

use crate::token::{FormatToken, SizeToken};

// =============================================================================
// Visionary code wire format
// =============================================================================

/// Character used to separate Visionary code fields before base64url encoding.
///
/// Must be a character that appears in neither the base64url alphabet nor the
/// blurhash base83 alphabet, so decoded codes split unambiguously.
pub const CODE_SEPARATOR: &str = "!";

// =============================================================================
// URL defaults
// =============================================================================

/// Default CDN base URL.
///
/// Can be overridden per call via [`UrlOptions::endpoint`](crate::urls::UrlOptions).
pub const CDN_ENDPOINT: &str = "https://cdn.visionary.cloud";

/// First path segment of every Visionary image URL
pub const IMAGE_PATH_SEGMENT: &str = "image";

/// Filename appended to generated URLs when the caller does not supply one
pub const DEFAULT_FILENAME: &str = "image.jpg";

// =============================================================================
// Rendering defaults
// =============================================================================

/// Size the image server renders when no size token is present in the URL
pub const DEFAULT_SIZE: SizeToken = SizeToken::Lg;

/// Format the image server negotiates when no format token is present
pub const DEFAULT_FORMAT: FormatToken = FormatToken::Auto;

/// Default number of blurhash components per axis (4x4, or 4x3 for landscape)
pub const BASE_BLURHASH_COMPONENTS: u32 = 4;
