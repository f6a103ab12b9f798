//! Visionary URL codec
//!
//! Encodes and decodes compact, URL-safe Visionary codes carrying image
//! metadata (file id, source dimensions, background color, blurhash
//! placeholder, alt text), and composes/parses the CDN URLs that embed a
//! code plus optional rendering directives:
//!
//! ```text
//! https://cdn.visionary.cloud/image/<code>[/<options>]/<filename>
//! ```
//!
//! Everything here is synchronous and stateless; rejected input surfaces as
//! `None` plus a `tracing` diagnostic, except for a caller-supplied endpoint
//! that is not an absolute URL, which raises
//! [`VisionaryError::InvalidEndpoint`].

pub mod blurhash;
pub mod code;
pub mod constants;
pub mod error;
pub mod options;
pub mod token;
pub mod urls;

pub use code::{generate_code, is_base64url_formatted, parse_code, ImageFields};
pub use error::VisionaryError;
pub use options::{
    generate_options_string, parse_option_tokens, parse_options_string, ImageOptions,
};
pub use token::{FormatToken, SizeToken};
pub use urls::{generate_url, parse_url, parse_visionary_string, UrlOptions, VisionaryImage};
