//! Group Model - Named, Positioned Shape Compositions
//!
//! A group owns an ordered list of shape layers and every spatial or
//! behavioral attribute: position, rotation, mirroring, blink, parallax
//! depth. Mirroring duplicates rendered content, not shape data, so both
//! copies always stay in sync.

use serde::{Deserialize, Serialize};

use crate::shapes::{render_shape, Point, Shape, ShapeKind};
use crate::FACE_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub position: Point,
    /// Degrees, applied after translation.
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub mirrored: bool,
    /// Spacing between mirrored copies. Meaningful only when `mirrored`.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub blink: bool,
    /// Parallax intensity hint, passed through to the host stylesheet.
    #[serde(default = "default_depth")]
    pub depth: f64,
    pub layers: Vec<Shape>,
}

fn default_depth() -> f64 {
    2.0
}

/// The root value: an ordered group list. Order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub groups: Vec<Group>,
}

/// The baked-in face used on first run and whenever a token fails to
/// decode.
pub fn default_config() -> Config {
    Config {
        groups: vec![
            Group {
                name: "Eyes".to_string(),
                position: Point::new(0.0, -10.0),
                rotate: 0.0,
                mirrored: true,
                distance: 24.0,
                blink: true,
                depth: 2.0,
                layers: vec![Shape::Line { length: 10.0 }],
            },
            Group {
                name: "Nose".to_string(),
                position: Point::new(0.0, 0.0),
                rotate: 0.0,
                mirrored: false,
                distance: 0.0,
                blink: false,
                depth: 4.0,
                layers: vec![ShapeKind::Lshape.default_shape()],
            },
            Group {
                name: "Mouth".to_string(),
                position: Point::new(0.0, 15.0),
                rotate: 0.0,
                mirrored: false,
                distance: 0.0,
                blink: false,
                depth: 3.0,
                layers: vec![Shape::Ushape {
                    width: 40.0,
                    height: 15.0,
                    inverted: false,
                }],
            },
        ],
    }
}

// --- Group renderer ---

/// Renders one group: layer fragments in order, wrapped in the group's
/// spatial transform, duplicated symmetrically when mirrored, with blink
/// and parallax hooks for the host stylesheet.
pub fn render_group(group: &Group) -> String {
    let content = group
        .layers
        .iter()
        .map(render_shape)
        .collect::<Vec<_>>()
        .join("\n");
    let blink_class = if group.blink { "blink" } else { "" };
    let depth_style = format!("--offset: {}px", group.depth);
    // A zero rotation is omitted, not emitted as rotate(0).
    let transform = if group.rotate == 0.0 {
        format!("translate({} {})", group.position.x, group.position.y)
    } else {
        format!(
            "translate({} {}) rotate({})",
            group.position.x, group.position.y, group.rotate
        )
    };

    if group.mirrored {
        // Same content twice: offset apart, second copy flipped across x.
        return format!(
            r#"<g class="group" style="{}">
  <g transform="{}">
    <g class="{}" transform="translate({} 0)">
{}
    </g>
    <g class="{}" transform="translate({} 0) scale(-1, 1)">
{}
    </g>
  </g>
</g>"#,
            depth_style,
            transform,
            blink_class,
            -group.distance / 2.0,
            content,
            blink_class,
            group.distance / 2.0,
            content
        );
    }

    format!(
        r#"<g class="group" style="{}">
  <g transform="{}">
    <g class="{}">
{}
    </g>
  </g>
</g>"#,
        depth_style, transform, blink_class, content
    )
}

/// Renders every group in paint order. Zero groups yields empty markup.
pub fn render_all(config: &Config) -> String {
    config
        .groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps the group markup in the square origin-centered viewport document
/// the face is designed for.
pub fn render_document(config: &Config) -> String {
    let half = FACE_SIZE / 2;
    format!(
        r#"<svg class="face" viewBox="-{} -{} {} {}" width="200" height="200">
{}
</svg>"#,
        half,
        half,
        FACE_SIZE,
        FACE_SIZE,
        render_all(config)
    )
}
