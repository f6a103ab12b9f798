//! Option codec
//!
//! Bidirectional mapping between [`ImageOptions`] and the comma-joined,
//! lexicographically sorted token string carried in the optional third URL
//! path segment (e.g. `debug,sm,webp`).

use serde::{Deserialize, Serialize};

use crate::token::{
    is_debug_token, is_download_token, is_follow_token, FormatToken, SizeToken, DEBUG_TOKEN,
    DOWNLOAD_TOKEN, FOLLOW_TOKEN,
};

/// Rendering directives encoded in the options segment of a Visionary URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Requested output size
    pub size: Option<SizeToken>,

    /// Requested output format
    pub format: Option<FormatToken>,

    /// Render the debug overlay instead of the image
    pub debug: bool,

    /// Serve the file as an attachment download
    pub download: bool,

    /// Follow the source URL when the file id points at a remote image
    pub follow: bool,
}

impl ImageOptions {
    /// True when no directive is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses a comma-separated options string (e.g. `"4k,download"`).
///
/// An empty string yields all-absent options, never an error.
pub fn parse_options_string(options: &str) -> ImageOptions {
    parse_option_tokens(&options.split(',').collect::<Vec<_>>())
}

/// Parses raw option tokens into [`ImageOptions`].
///
/// Each token is tested size, debug, download, follow, format, in that
/// order. Assignment overwrites, so the last recognized token of a category
/// wins. Unrecognized tokens are dropped silently, which keeps old clients
/// tolerant of token additions.
pub fn parse_option_tokens<S: AsRef<str>>(tokens: &[S]) -> ImageOptions {
    let mut options = ImageOptions::default();
    for token in tokens {
        let token = token.as_ref();
        if let Some(size) = SizeToken::from_token(token) {
            options.size = Some(size);
        } else if is_debug_token(token) {
            options.debug = true;
        } else if is_download_token(token) {
            options.download = true;
        } else if is_follow_token(token) {
            options.follow = true;
        } else if let Some(format) = FormatToken::from_token(token) {
            options.format = Some(format);
        }
    }
    options
}

/// Generates the sorted options string for a URL path segment.
///
/// Tokens are collected in policy order (debug, download, follow, format,
/// size), then sorted lexicographically and comma-joined. The `auto` format
/// is never serialized; the server negotiates it by default. Returns `None`
/// when there is nothing to emit - an empty options segment is omitted from
/// the URL entirely, never rendered as an empty string.
pub fn generate_options_string(options: &ImageOptions) -> Option<String> {
    let mut tokens: Vec<&str> = Vec::new();
    if options.debug {
        tokens.push(DEBUG_TOKEN);
    }
    if options.download {
        tokens.push(DOWNLOAD_TOKEN);
    }
    if options.follow {
        tokens.push(FOLLOW_TOKEN);
    }
    if let Some(format) = options.format {
        if format != FormatToken::Auto {
            tokens.push(format.as_str());
        }
    }
    if let Some(size) = options.size {
        tokens.push(size.as_str());
    }
    if tokens.is_empty() {
        return None;
    }
    tokens.sort_unstable();
    Some(tokens.join(","))
}
