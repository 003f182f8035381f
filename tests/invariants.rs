//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees: exact geometry,
//! composition order, mirrored duplication, and the token round trip.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use visage_core::{
    decode, default_config, encode, render_all, render_document, render_group, render_shape,
    Config, Group, Point, Shape, ShapeKind,
};

fn plain_group(name: &str, layers: Vec<Shape>) -> Group {
    Group {
        name: name.to_string(),
        position: Point::new(0.0, 0.0),
        rotate: 0.0,
        mirrored: false,
        distance: 0.0,
        blink: false,
        depth: 2.0,
        layers,
    }
}

/// One group per variant, exercising every arm of the shape union.
fn every_variant_config() -> Config {
    Config {
        groups: ShapeKind::ALL
            .iter()
            .map(|kind| plain_group(kind.as_str(), vec![kind.default_shape()]))
            .collect(),
    }
}

#[test]
fn invariant_round_trip_default_config() {
    let config = default_config();
    let token = encode(&config).unwrap();
    assert_eq!(decode(&token).unwrap(), config);
}

#[test]
fn invariant_round_trip_every_variant() {
    let config = every_variant_config();
    let token = encode(&config).unwrap();
    assert_eq!(decode(&token).unwrap(), config);
}

#[test]
fn invariant_decode_rejects_garbage() {
    assert!(decode("").is_none());
    assert!(decode("#").is_none());
    assert!(decode("#not-valid-base64!").is_none());
    assert!(decode("%%%").is_none());

    // valid base64, but not JSON
    let not_json = URL_SAFE_NO_PAD.encode(b"hello there");
    assert!(decode(&not_json).is_none());
}

#[test]
fn invariant_decode_guards_groups_structure() {
    // well-transformed payloads that are not a config
    let no_groups = URL_SAFE_NO_PAD.encode(br#"{"faces": []}"#);
    assert!(decode(&no_groups).is_none());

    let wrong_groups = URL_SAFE_NO_PAD.encode(br#"{"groups": 5}"#);
    assert!(decode(&wrong_groups).is_none());

    let null_root = URL_SAFE_NO_PAD.encode(b"null");
    assert!(decode(&null_root).is_none());
}

#[test]
fn invariant_encode_is_deterministic() {
    let config = default_config();
    assert_eq!(encode(&config).unwrap(), encode(&config).unwrap());
}

#[test]
fn invariant_render_is_deterministic() {
    let a = default_config();
    let b = default_config();
    assert_eq!(render_all(&a), render_all(&b));
}

#[test]
fn invariant_line_geometry() {
    let markup = render_shape(&Shape::Line { length: 10.0 });
    assert!(markup.contains("m0,-5 l0,10"));
}

#[test]
fn invariant_triangle_geometry() {
    let markup = render_shape(&Shape::Triangle { size: 8.0 });
    assert!(markup.contains("M0,-8"));
    assert!(markup.contains("L4,0"));
    assert!(markup.contains("L-4,0"));
}

#[test]
fn invariant_mirrored_group_duplicates_content() {
    let group = Group {
        name: "Eyes".to_string(),
        position: Point::new(0.0, -10.0),
        rotate: 0.0,
        mirrored: true,
        distance: 24.0,
        blink: false,
        depth: 2.0,
        layers: vec![Shape::Dot { size: 4.0 }],
    };

    let markup = render_group(&group);
    let dot = render_shape(&Shape::Dot { size: 4.0 });

    // exactly two copies of the same content inside one translated wrapper
    assert_eq!(markup.matches(&dot).count(), 2);
    assert_eq!(markup.matches("translate(0 -10)").count(), 1);
    assert!(markup.contains("translate(-12 0)"));
    assert!(markup.contains("translate(12 0) scale(-1, 1)"));
}

#[test]
fn invariant_unmirrored_group_renders_once() {
    let group = plain_group("Nose", vec![Shape::Dot { size: 4.0 }]);
    let markup = render_group(&group);
    let dot = render_shape(&Shape::Dot { size: 4.0 });
    assert_eq!(markup.matches(&dot).count(), 1);
    assert!(!markup.contains("scale(-1, 1)"));
}

#[test]
fn invariant_zero_rotation_is_omitted() {
    let mut group = plain_group("Brow", vec![Shape::Line { length: 6.0 }]);
    assert!(!render_group(&group).contains("rotate("));

    group.rotate = 15.0;
    assert!(render_group(&group).contains("translate(0 0) rotate(15)"));
}

#[test]
fn invariant_blink_class_gated_on_flag() {
    let mut group = plain_group("Eyes", vec![Shape::Line { length: 10.0 }]);
    assert!(!render_group(&group).contains("blink"));

    group.blink = true;
    assert!(render_group(&group).contains(r#"class="blink""#));
}

#[test]
fn invariant_depth_passes_through_as_style() {
    let mut group = plain_group("Mouth", vec![Shape::Dot { size: 4.0 }]);
    group.depth = 3.5;
    assert!(render_group(&group).contains("--offset: 3.5px"));
}

#[test]
fn invariant_group_order_is_preserved() {
    let config = Config {
        groups: vec![
            plain_group("A", vec![Shape::Line { length: 1.0 }]),
            plain_group("B", vec![Shape::Line { length: 2.0 }]),
            plain_group("C", vec![Shape::Line { length: 3.0 }]),
        ],
    };

    let markup = render_all(&config);
    let a = markup.find("l0,1\"").unwrap();
    let b = markup.find("l0,2\"").unwrap();
    let c = markup.find("l0,3\"").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn invariant_layer_order_is_preserved() {
    let group = plain_group(
        "Stack",
        vec![
            Shape::Line { length: 1.0 },
            Shape::Line { length: 2.0 },
            Shape::Line { length: 3.0 },
        ],
    );

    let markup = render_group(&group);
    let a = markup.find("l0,1\"").unwrap();
    let b = markup.find("l0,2\"").unwrap();
    let c = markup.find("l0,3\"").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn invariant_empty_config_renders_empty() {
    let config = Config { groups: vec![] };
    assert_eq!(render_all(&config), "");
}

#[test]
fn invariant_document_wraps_viewport() {
    let markup = render_document(&default_config());
    assert!(markup.starts_with("<svg"));
    assert!(markup.contains(r#"viewBox="-50 -50 100 100""#));
    assert!(markup.trim_end().ends_with("</svg>"));
}

#[test]
fn invariant_default_face_end_to_end() {
    let config = default_config();
    let token = encode(&config).unwrap();
    let decoded = decode(&token).unwrap();

    assert_eq!(decoded.groups.len(), config.groups.len());
    assert_eq!(decoded.groups[0].name, "Eyes");
    assert!(decoded.groups[0].mirrored);
    assert!(decoded.groups[0].blink);
}

#[test]
fn invariant_decode_tolerates_older_group_schema() {
    // groups serialized before rotate/mirror/blink/depth existed
    let legacy = URL_SAFE_NO_PAD.encode(
        br#"{"groups":[{"name":"Eyes","position":{"x":0,"y":-10},"layers":[{"type":"line","length":10}]}]}"#,
    );

    let config = decode(&legacy).unwrap();
    let eyes = &config.groups[0];
    assert_eq!(eyes.rotate, 0.0);
    assert!(!eyes.mirrored);
    assert_eq!(eyes.depth, 2.0);
}

#[test]
fn invariant_unknown_shape_tag_falls_back() {
    let unknown = URL_SAFE_NO_PAD.encode(
        br#"{"groups":[{"name":"X","position":{"x":0,"y":0},"layers":[{"type":"spiral","turns":3}]}]}"#,
    );
    assert!(decode(&unknown).is_none());
}
