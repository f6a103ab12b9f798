//! Blurhash component-grid helpers
//!
//! This crate stores blurhash strings opaquely; it never encodes or decodes
//! the placeholder image itself. What it does consume is the component-grid
//! convention: how many horizontal and vertical DCT components a blurhash
//! declares. These helpers pick sensible component counts for an upload and
//! recover the declared counts from an existing blurhash string.

use crate::constants::BASE_BLURHASH_COMPONENTS;

const BASE83_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Suggests blurhash component dimensions for an image of the given size.
///
/// Purposely kept simple: cranking these values up sometimes yields a better
/// placeholder, other times not. Defaults to 4x4, or 4x3 for landscape
/// images (aspect ratio >= 1.6).
pub fn suggested_component_dimensions(width: u32, height: u32) -> (u32, u32) {
    let aspect_ratio = width as f32 / height as f32;
    let x = BASE_BLURHASH_COMPONENTS;
    let mut y = BASE_BLURHASH_COMPONENTS;

    // landscape
    if aspect_ratio >= 1.6 {
        y = 3;
    }

    (x, y)
}

/// Extracts the component dimensions a blurhash string declares.
///
/// The first base83 character of a blurhash packs both component counts.
/// Unfactoring cannot determine the original x, y order: grids of (3, 4)
/// and (4, 3) produce the same digit, so this is a debugging aid rather
/// than something the codec relies on.
pub fn extract_component_dimensions(blurhash: &str) -> Option<(u32, u32)> {
    let first = blurhash.chars().next()?;
    let size_digit = BASE83_ALPHABET.find(first)? as u32;
    Some((size_digit / 9 + 1, size_digit % 9 + 1))
}
