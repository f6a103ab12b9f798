//! URL composer/parser
//!
//! Glues the code and option codecs into the Visionary URL path grammar:
//!
//! ```text
//! <origin>/image/<code>[/<options>]/<filename>
//! ```
//!
//! The options segment is present only when there is at least one directive
//! to serialize; the filename defaults to `image.jpg` and exists to give
//! search engines something to index.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::code::{generate_code, is_base64url_formatted, parse_code, ImageFields};
use crate::constants::{CDN_ENDPOINT, DEFAULT_FILENAME, IMAGE_PATH_SEGMENT};
use crate::error::VisionaryError;
use crate::options::{generate_options_string, parse_option_tokens, ImageOptions};

/// Options accepted by [`generate_url`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Custom endpoint overriding the default CDN origin.
    ///
    /// Must parse as an absolute URL; only its origin is used.
    pub endpoint: Option<String>,

    /// Filename for the final path segment. Defaults to `image.jpg`.
    ///
    /// Specifying a real filename helps search engines discover images.
    pub filename: Option<String>,

    /// Rendering directives for the options segment
    pub image: ImageOptions,
}

/// Fields and options recovered from a Visionary URL or bare code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionaryImage {
    pub fields: ImageFields,
    pub options: ImageOptions,
}

/// Code and raw option tokens extracted from a URL path
struct UrlParts {
    code: String,
    option_tokens: Vec<String>,
}

/// Generates a full Visionary URL for the given image fields.
///
/// Returns `Ok(None)` when the fields cannot produce a code (missing
/// required fields); code-generation failure and "no URL" are collapsed on
/// purpose so callers handle a single absent case. A caller-supplied
/// endpoint that does not parse as an absolute URL is the exception and
/// raises [`VisionaryError::InvalidEndpoint`]: a broken endpoint is broken
/// integration code, not absent data.
pub fn generate_url(
    fields: &ImageFields,
    options: Option<&UrlOptions>,
) -> Result<Option<String>, VisionaryError> {
    let code = match generate_code(fields) {
        Ok(code) => code,
        Err(_) => return Ok(None),
    };

    let endpoint = resolve_endpoint(options.and_then(|o| o.endpoint.as_deref()))?;

    let mut segments: Vec<String> = vec![
        endpoint.origin().ascii_serialization(),
        IMAGE_PATH_SEGMENT.to_string(),
        code,
    ];
    if let Some(options) = options {
        if let Some(options_string) = generate_options_string(&options.image) {
            segments.push(options_string);
        }
    }
    let filename = options
        .and_then(|o| o.filename.clone())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    segments.push(filename);

    Ok(Some(segments.join("/")))
}

fn resolve_endpoint(endpoint: Option<&str>) -> Result<Url, VisionaryError> {
    match endpoint {
        Some(endpoint) => Url::parse(endpoint)
            .map_err(|_| VisionaryError::InvalidEndpoint(endpoint.to_string())),
        None => Ok(Url::parse(CDN_ENDPOINT).expect("default CDN endpoint is a valid URL")),
    }
}

/// Parses a string that is either a bare Visionary code or a full URL.
///
/// A bare code yields empty options. Input that fails the code path falls
/// through to full URL decomposition.
pub fn parse_visionary_string(code_or_url: &str) -> Option<VisionaryImage> {
    if is_base64url_formatted(code_or_url) {
        if let Some(fields) = parse_code(code_or_url) {
            return Some(VisionaryImage {
                fields,
                options: ImageOptions::default(),
            });
        }
    }
    parse_url(code_or_url)
}

/// Parses a full Visionary URL into image fields and options.
///
/// Returns `None` for empty input, input that does not parse as an absolute
/// URL, a path that does not match the `/image/<code>[/<options>]/<filename>`
/// grammar, or a code that fails to decode. Structural failures are logged
/// and reported through the `None` return; nothing escapes as a panic.
pub fn parse_url(url: &str) -> Option<VisionaryImage> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let UrlParts {
        code,
        option_tokens,
    } = extract_url_parts(url)?;
    let fields = parse_code(&code)?;
    let options = parse_option_tokens(&option_tokens);
    Some(VisionaryImage { fields, options })
}

/// Given a Visionary URL, extracts the code and any option tokens
fn extract_url_parts(input: &str) -> Option<UrlParts> {
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(url = input, error = %err, "cannot parse URL");
            return None;
        }
    };

    let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    if segments.first() != Some(&IMAGE_PATH_SEGMENT) || !(segments.len() == 3 || segments.len() == 4)
    {
        tracing::debug!(path = url.path(), "unrecognized URL shape");
        return None;
    }

    let code = segments[1].trim();
    if code.is_empty() || !is_base64url_formatted(code) {
        tracing::debug!(path = url.path(), "URL code segment is not base64url");
        return None;
    }

    // four segments means an options segment sits between code and filename
    let option_tokens = if segments.len() == 4 {
        segments[2].split(',').map(str::to_string).collect()
    } else {
        Vec::new()
    };

    Some(UrlParts {
        code: code.to_string(),
        option_tokens,
    })
}
