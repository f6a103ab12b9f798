//! End-to-end codec round trips
//!
//! Exercises the full generate -> parse path for codes and URLs, including
//! the byte-stability vectors that existing persisted codes depend on.

use rstest::rstest;

use visionary_url::{
    generate_code, generate_options_string, generate_url, parse_code, parse_url,
    parse_visionary_string, FormatToken, ImageFields, ImageOptions, SizeToken, UrlOptions,
    VisionaryError,
};

fn bare_fields() -> ImageFields {
    ImageFields {
        file_id: "image:10001".to_string(),
        source_width: 800,
        source_height: 600,
        ..Default::default()
    }
}

fn with_background_color() -> ImageFields {
    ImageFields {
        background_color: Some("#BEEEEF".to_string()),
        ..bare_fields()
    }
}

fn with_blurhash() -> ImageFields {
    ImageFields {
        blurhash: Some("TCM*Bb^+Rkxuxuag~qWCj?M{M{fj".to_string()),
        blurhash_x: Some(3),
        blurhash_y: Some(4),
        ..with_background_color()
    }
}

fn full_fields() -> ImageFields {
    ImageFields {
        alt_text: Some("A field of strawberries".to_string()),
        ..with_blurhash()
    }
}

#[rstest]
#[case::bare(bare_fields())]
#[case::background_color(with_background_color())]
#[case::blurhash_triple(with_blurhash())]
#[case::full(full_fields())]
fn test_code_round_trip_at_each_prefix_length(#[case] fields: ImageFields) {
    let code = generate_code(&fields).unwrap();

    assert_eq!(parse_code(&code), Some(fields));
}

#[test]
fn test_known_codes_stay_byte_stable() {
    // codes already in circulation must decode identically forever
    assert_eq!(
        generate_code(&bare_fields()).unwrap(),
        "aW1hZ2U6MTAwMDEhODAwITYwMA"
    );
    assert_eq!(
        generate_code(&with_background_color()).unwrap(),
        "aW1hZ2U6MTAwMDEhODAwITYwMCEjQkVFRUVG"
    );
    assert_eq!(
        generate_code(&with_blurhash()).unwrap(),
        "aW1hZ2U6MTAwMDEhODAwITYwMCEjQkVFRUVGIVRDTSpCYl4rUmt4dXh1YWd-cVdDaj9Ne017ZmohMyE0"
    );
}

#[test]
fn test_url_round_trip_preserves_fields_and_options() {
    let options = UrlOptions {
        filename: Some("strawberries.jpg".to_string()),
        image: ImageOptions {
            debug: true,
            format: Some(FormatToken::Webp),
            size: Some(SizeToken::Sm),
            ..Default::default()
        },
        ..Default::default()
    };

    let url = generate_url(&full_fields(), Some(&options)).unwrap().unwrap();
    let image = parse_url(&url).unwrap();

    assert_eq!(image.fields, full_fields());
    assert_eq!(image.options, options.image);
}

#[test]
fn test_url_round_trip_with_no_options() {
    let url = generate_url(&full_fields(), None).unwrap().unwrap();

    assert!(url.ends_with("/image.jpg"));
    // no options were supplied, so the URL has three path segments and the
    // parsed options come back empty
    let image = parse_url(&url).unwrap();
    assert_eq!(image.fields, full_fields());
    assert!(image.options.is_empty());
}

#[test]
fn test_url_round_trip_through_custom_endpoint() {
    let options = UrlOptions {
        endpoint: Some("http://localhost:8080".to_string()),
        image: ImageOptions {
            download: true,
            follow: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let url = generate_url(&bare_fields(), Some(&options)).unwrap().unwrap();

    assert!(url.starts_with("http://localhost:8080/image/"));
    assert!(url.contains("/download,follow/"));
    let image = parse_url(&url).unwrap();
    assert_eq!(image.fields, bare_fields());
    assert!(image.options.download);
    assert!(image.options.follow);
}

#[test]
fn test_bad_endpoint_raises_instead_of_returning_none() {
    let options = UrlOptions {
        endpoint: Some("cdn.visionary.cloud".to_string()), // no scheme
        ..Default::default()
    };

    let result = generate_url(&bare_fields(), Some(&options));

    assert!(matches!(result, Err(VisionaryError::InvalidEndpoint(_))));
}

#[test]
fn test_string_entry_point_accepts_code_and_url() {
    let code = generate_code(&with_blurhash()).unwrap();
    let url = generate_url(&with_blurhash(), None).unwrap().unwrap();

    let from_code = parse_visionary_string(&code).unwrap();
    let from_url = parse_visionary_string(&url).unwrap();

    assert_eq!(from_code.fields, from_url.fields);
    assert!(from_code.options.is_empty());
}

#[test]
fn test_options_string_matches_url_segment() {
    let image = ImageOptions {
        debug: true,
        format: Some(FormatToken::Webp),
        size: Some(SizeToken::Sm),
        ..Default::default()
    };
    assert_eq!(
        generate_options_string(&image).as_deref(),
        Some("debug,sm,webp")
    );

    let options = UrlOptions {
        image,
        ..Default::default()
    };
    let url = generate_url(&bare_fields(), Some(&options)).unwrap().unwrap();
    assert!(url.contains("/debug,sm,webp/"));
}

#[test]
fn test_fields_serde_round_trip() {
    let fields = full_fields();

    let json = serde_json::to_string(&fields).unwrap();
    let parsed: ImageFields = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, fields);
}
