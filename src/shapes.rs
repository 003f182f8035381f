//! Shape Model - Closed Set of Geometry Primitives
//!
//! Every variant carries geometry fields only. Position, rotation,
//! mirroring and blinking belong to the owning group.

use serde::{Deserialize, Serialize};

/// A 2D value point. Pure value, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The closed union of shape primitives.
///
/// Tag and field names match the serialized token form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Shape {
    Line {
        length: f64,
    },
    Circle {
        radius: f64,
        stroke_width: f64,
    },
    Dot {
        size: f64,
    },
    Curve {
        start: Point,
        end: Point,
        q1: Point,
        q2: Point,
        q3: Point,
        q4: Point,
    },
    Wave {
        width: f64,
        amplitude: f64,
        frequency: u32,
    },
    Ushape {
        width: f64,
        height: f64,
        inverted: bool,
    },
    Triangle {
        size: f64,
    },
    Lshape {
        width: f64,
        height: f64,
    },
    Dshape {
        width: f64,
        depth: f64,
    },
}

/// The ordered list of variant tags, for selection controls and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Circle,
    Dot,
    Curve,
    Wave,
    Ushape,
    Triangle,
    Lshape,
    Dshape,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Dot,
        ShapeKind::Curve,
        ShapeKind::Wave,
        ShapeKind::Ushape,
        ShapeKind::Triangle,
        ShapeKind::Lshape,
        ShapeKind::Dshape,
    ];

    /// The serialized tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Dot => "dot",
            ShapeKind::Curve => "curve",
            ShapeKind::Wave => "wave",
            ShapeKind::Ushape => "ushape",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Lshape => "lshape",
            ShapeKind::Dshape => "dshape",
        }
    }

    /// Display name for selection controls.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Dot => "Dot",
            ShapeKind::Curve => "Curve",
            ShapeKind::Wave => "Wave",
            ShapeKind::Ushape => "U shape",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Lshape => "L shape",
            ShapeKind::Dshape => "D shape",
        }
    }

    /// Canonical value a shape starts from when it is created or when its
    /// variant is switched.
    pub fn default_shape(self) -> Shape {
        match self {
            ShapeKind::Line => Shape::Line { length: 10.0 },
            ShapeKind::Circle => Shape::Circle {
                radius: 5.0,
                stroke_width: 5.0,
            },
            ShapeKind::Dot => Shape::Dot { size: 4.0 },
            ShapeKind::Curve => Shape::Curve {
                start: Point::new(-30.0, 0.0),
                end: Point::new(30.0, 0.0),
                q1: Point::new(-30.0, 0.0),
                q2: Point::new(-20.0, 20.0),
                q3: Point::new(0.0, 20.0),
                q4: Point::new(30.0, 0.0),
            },
            ShapeKind::Wave => Shape::Wave {
                width: 40.0,
                amplitude: 5.0,
                frequency: 2,
            },
            ShapeKind::Ushape => Shape::Ushape {
                width: 40.0,
                height: 15.0,
                inverted: false,
            },
            ShapeKind::Triangle => Shape::Triangle { size: 8.0 },
            ShapeKind::Lshape => Shape::Lshape {
                width: 5.0,
                height: 15.0,
            },
            ShapeKind::Dshape => Shape::Dshape {
                width: 10.0,
                depth: 20.0,
            },
        }
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Dot { .. } => ShapeKind::Dot,
            Shape::Curve { .. } => ShapeKind::Curve,
            Shape::Wave { .. } => ShapeKind::Wave,
            Shape::Ushape { .. } => ShapeKind::Ushape,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Lshape { .. } => ShapeKind::Lshape,
            Shape::Dshape { .. } => ShapeKind::Dshape,
        }
    }
}

// --- Universal shape renderer ---

/// Renders one shape to an SVG fragment in a coordinate space local to the
/// owning group. Pure and total; degenerate field values produce degenerate
/// paths rather than errors.
///
/// The `shape`, `shape-filled` and `shape-no-stroke` classes are styling
/// hooks for the host stylesheet.
pub fn render_shape(shape: &Shape) -> String {
    match *shape {
        // Vertical segment centered on the origin.
        Shape::Line { length } => format!(
            r#"<path class="shape" d="m0,{} l0,{}" />"#,
            -length / 2.0,
            length
        ),

        Shape::Circle {
            radius,
            stroke_width,
        } => format!(
            r#"<circle class="shape" r="{}" stroke-width="{}" />"#,
            radius, stroke_width
        ),

        Shape::Dot { size } => format!(
            r#"<circle class="shape shape-filled shape-no-stroke" r="{}" />"#,
            size
        ),

        // Cubic through q1/q2, then a smooth continuation: the S segment's
        // first control point is q2 reflected about q3.
        Shape::Curve {
            start,
            end,
            q1,
            q2,
            q3,
            q4,
        } => format!(
            r#"<path class="shape" d="M{},{} C{},{} {},{} {},{} S {},{} {},{}" />"#,
            start.x, start.y, q1.x, q1.y, q2.x, q2.y, q3.x, q3.y, q4.x, q4.y, end.x, end.y
        ),

        Shape::Wave {
            width,
            amplitude,
            frequency,
        } => {
            // frequency full cycles = frequency * 2 half-wave segments,
            // even segments bulging up.
            let segments = frequency * 2;
            let segment_width = width / segments as f64;
            let mut d = format!("M{},0", -width / 2.0);
            for i in 0..segments {
                let x1 = -width / 2.0 + i as f64 * segment_width;
                let x2 = x1 + segment_width;
                let x_control = x1 + segment_width / 2.0;
                let y_control = if i % 2 == 0 { amplitude } else { -amplitude };
                d.push_str(&format!(" Q{},{} {},0", x_control, y_control, x2));
            }
            format!(r#"<path class="shape" d="{}" />"#, d)
        }

        Shape::Ushape {
            width,
            height,
            inverted,
        } => {
            let control_y = if inverted { -height } else { height };
            format!(
                r#"<path class="shape" d="M{},0 Q0,{} {},0" />"#,
                -width / 2.0,
                control_y,
                width / 2.0
            )
        }

        // Filled isoceles triangle, apex up.
        Shape::Triangle { size } => format!(
            r#"<path class="shape shape-filled" d="M0,{} L{},0 L{},0 Z" />"#,
            -size,
            size / 2.0,
            -size / 2.0
        ),

        // Vertical stem, then a foot. The sign of `width` picks the foot's
        // direction.
        Shape::Lshape { width, height } => format!(
            r#"<path class="shape" d="M0,{} L0,0 L{},0" />"#,
            -height, width
        ),

        // Straight spine at x=0 closed by one cubic. The control x
        // overshoots so the bulge peaks at exactly x=width at the curve's
        // midpoint.
        Shape::Dshape { width, depth } => {
            let control_x = width * 4.0 / 3.0;
            let top = -depth / 2.0;
            let bottom = depth / 2.0;
            format!(
                r#"<path class="shape" d="M0,{} L0,{} C{},{} {},{} 0,{} Z" />"#,
                top, bottom, control_x, bottom, control_x, top, top
            )
        }
    }
}
