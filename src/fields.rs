//! Field Metadata - Editable Domains Per Shape Variant
//!
//! Consumed by external editors to build bounded input controls. The
//! renderer never reads these; out-of-range values still render.

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// Editable domain of one shape field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldDef {
    Number {
        min: f64,
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Boolean,
    /// min/max apply to both axes.
    Point {
        min: f64,
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
}

const LINE_FIELDS: &[(&str, FieldDef)] = &[(
    "length",
    FieldDef::Number {
        min: 0.0,
        max: 50.0,
        step: None,
    },
)];

const CIRCLE_FIELDS: &[(&str, FieldDef)] = &[
    (
        "radius",
        FieldDef::Number {
            min: 0.0,
            max: 50.0,
            step: None,
        },
    ),
    (
        "strokeWidth",
        FieldDef::Number {
            min: 0.0,
            max: 10.0,
            step: Some(0.5),
        },
    ),
];

const DOT_FIELDS: &[(&str, FieldDef)] = &[(
    "size",
    FieldDef::Number {
        min: 0.0,
        max: 20.0,
        step: None,
    },
)];

const CURVE_POINT: FieldDef = FieldDef::Point {
    min: -50.0,
    max: 50.0,
    step: None,
};

const CURVE_FIELDS: &[(&str, FieldDef)] = &[
    ("start", CURVE_POINT),
    ("end", CURVE_POINT),
    ("q1", CURVE_POINT),
    ("q2", CURVE_POINT),
    ("q3", CURVE_POINT),
    ("q4", CURVE_POINT),
];

const WAVE_FIELDS: &[(&str, FieldDef)] = &[
    (
        "width",
        FieldDef::Number {
            min: 0.0,
            max: 100.0,
            step: None,
        },
    ),
    (
        "amplitude",
        FieldDef::Number {
            min: 0.0,
            max: 25.0,
            step: None,
        },
    ),
    (
        "frequency",
        FieldDef::Number {
            min: 1.0,
            max: 10.0,
            step: Some(1.0),
        },
    ),
];

const USHAPE_FIELDS: &[(&str, FieldDef)] = &[
    (
        "width",
        FieldDef::Number {
            min: 0.0,
            max: 100.0,
            step: None,
        },
    ),
    (
        "height",
        FieldDef::Number {
            min: 0.0,
            max: 50.0,
            step: None,
        },
    ),
    ("inverted", FieldDef::Boolean),
];

const TRIANGLE_FIELDS: &[(&str, FieldDef)] = &[(
    "size",
    FieldDef::Number {
        min: 0.0,
        max: 50.0,
        step: None,
    },
)];

const LSHAPE_FIELDS: &[(&str, FieldDef)] = &[
    (
        // negative width points the foot left
        "width",
        FieldDef::Number {
            min: -25.0,
            max: 25.0,
            step: None,
        },
    ),
    (
        "height",
        FieldDef::Number {
            min: 0.0,
            max: 50.0,
            step: None,
        },
    ),
];

const DSHAPE_FIELDS: &[(&str, FieldDef)] = &[
    (
        "width",
        FieldDef::Number {
            min: 0.0,
            max: 50.0,
            step: None,
        },
    ),
    (
        "depth",
        FieldDef::Number {
            min: 0.0,
            max: 50.0,
            step: None,
        },
    ),
];

/// Field table for one shape variant, keyed by serialized field name.
pub fn shape_fields(kind: ShapeKind) -> &'static [(&'static str, FieldDef)] {
    match kind {
        ShapeKind::Line => LINE_FIELDS,
        ShapeKind::Circle => CIRCLE_FIELDS,
        ShapeKind::Dot => DOT_FIELDS,
        ShapeKind::Curve => CURVE_FIELDS,
        ShapeKind::Wave => WAVE_FIELDS,
        ShapeKind::Ushape => USHAPE_FIELDS,
        ShapeKind::Triangle => TRIANGLE_FIELDS,
        ShapeKind::Lshape => LSHAPE_FIELDS,
        ShapeKind::Dshape => DSHAPE_FIELDS,
    }
}
