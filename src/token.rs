//! Option-token primitives
//!
//! Classifies raw URL tokens into the closed categories understood by the
//! image server: size tokens, format tokens, and the boolean flag tokens.
//! Recognition is exact-match only; there is no normalization or case
//! folding, and an unrecognized token is simply not classified (callers
//! drop it, keeping the options grammar forward compatible).

use serde::{Deserialize, Serialize};

/// Flag token: render the debug overlay instead of the image
pub const DEBUG_TOKEN: &str = "debug";

/// Flag token: serve the file as an attachment download
/// (e.g. `content-disposition: attachment`)
pub const DOWNLOAD_TOKEN: &str = "download";

/// Flag token: follow the source URL when the file id is a remote image
pub const FOLLOW_TOKEN: &str = "follow";

/// Bootstrap-inspired output size token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    #[serde(rename = "4k")]
    FourK,
    #[serde(rename = "5k")]
    FiveK,
    /// Image dependent: the source image's longest edge
    Full,
}

impl SizeToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::FourK => "4k",
            Self::FiveK => "5k",
            Self::Full => "full",
        }
    }

    /// Classify a raw token as a size token. Exact match, no case folding.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            "xxl" => Some(Self::Xxl),
            "4k" => Some(Self::FourK),
            "5k" => Some(Self::FiveK),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// Pixel width of the rendered image's longest edge.
    ///
    /// `full` has no fixed width: it resolves to the source image's longest
    /// edge, which only the stored source dimensions can answer.
    pub fn width(&self) -> Option<u32> {
        match self {
            Self::Xs => Some(160),
            Self::Sm => Some(320),
            Self::Md => Some(640),
            Self::Lg => Some(1280),
            Self::Xl => Some(1920),
            Self::Xxl => Some(2560),
            Self::FourK => Some(3840),
            Self::FiveK => Some(5120),
            Self::Full => None,
        }
    }

    /// Reverse lookup: the size token whose width is exactly `width`
    pub fn from_width(width: u32) -> Option<Self> {
        match width {
            160 => Some(Self::Xs),
            320 => Some(Self::Sm),
            640 => Some(Self::Md),
            1280 => Some(Self::Lg),
            1920 => Some(Self::Xl),
            2560 => Some(Self::Xxl),
            3840 => Some(Self::FourK),
            5120 => Some(Self::FiveK),
            _ => None,
        }
    }
}

impl std::fmt::Display for SizeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output image format token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatToken {
    /// Let the server negotiate the format (never serialized into a URL)
    Auto,
    Avif,
    Jpeg,
    Webp,
}

impl FormatToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Avif => "avif",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }

    /// Classify a raw token as a format token. Exact match, no case folding.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "auto" => Some(Self::Auto),
            "avif" => Some(Self::Avif),
            "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Avif => "image/avif",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Auto => "image/jpeg", // Fallback, should be resolved before use
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Auto => "jpg",
        }
    }
}

impl std::fmt::Display for FormatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_debug_token(token: &str) -> bool {
    token == DEBUG_TOKEN
}

pub fn is_download_token(token: &str) -> bool {
    token == DOWNLOAD_TOKEN
}

pub fn is_follow_token(token: &str) -> bool {
    token == FOLLOW_TOKEN
}
