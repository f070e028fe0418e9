//! Curve descriptor decoding and text formatting.

use std::fmt::Write as _;

use bri_types::NL;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// One control point of a curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

/// A response curve as stored in a brush preset.
///
/// Missing scalar fields decode to their defaults; unknown fields are
/// ignored. At least one control point is required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurveDescriptor {
    pub from_params: bool,
    pub maximum: f64,
    pub minimum: f64,
    pub multiplier: f64,
    pub output_max: f64,
    pub output_min: f64,
    pub points: Vec<CurvePoint>,
}

impl CurveDescriptor {
    /// Decode a curve from its JSON text.
    pub fn parse(json: &str) -> CurveResult<Self> {
        let curve: Self = serde_json::from_str(json)?;
        if curve.points.is_empty() {
            return Err(CurveError::NoPoints);
        }
        Ok(curve)
    }

    /// Format the curve as one `field: value` line per scalar followed by the
    /// control points, every line prefixed with `tab`.
    pub fn format(&self, tab: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(out, "{tab}fromParams: {}{NL}", self.from_params);
        let _ = write!(out, "{tab}maximum: {}{NL}", self.maximum);
        let _ = write!(out, "{tab}minimum: {}{NL}", self.minimum);
        let _ = write!(out, "{tab}multiplier: {}{NL}", self.multiplier);
        let _ = write!(out, "{tab}outputMax: {}{NL}", self.output_max);
        let _ = write!(out, "{tab}outputMin: {}{NL}", self.output_min);
        let _ = write!(out, "{tab}points ({}):{NL}", self.points.len());
        for point in &self.points {
            let _ = write!(out, "{tab}  {:>10.6}, {:>10.6}{NL}", point.x, point.y);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CURVE: &str = r#"{
        "fromParams": true,
        "maximum": 1,
        "minimum": 0,
        "multiplier": 0.5,
        "outputMax": 2,
        "outputMin": -1,
        "points": [{"x": 0, "y": 0.25}, {"x": 1, "y": 1}]
    }"#;

    #[test]
    fn parse_all_fields() {
        let curve = CurveDescriptor::parse(CURVE).unwrap();
        assert!(curve.from_params);
        assert_eq!(curve.maximum, 1.0);
        assert_eq!(curve.multiplier, 0.5);
        assert_eq!(curve.output_max, 2.0);
        assert_eq!(curve.output_min, -1.0);
        assert_eq!(curve.points.len(), 2);
        assert_eq!(curve.points[0], CurvePoint { x: 0.0, y: 0.25 });
    }

    #[test]
    fn missing_fields_take_defaults() {
        let curve = CurveDescriptor::parse(r#"{"points": [{"x": 0.5, "y": 0.5}], "extra": 1}"#).unwrap();
        assert!(!curve.from_params);
        assert_eq!(curve.maximum, 0.0);
        assert_eq!(curve.points.len(), 1);
    }

    #[test]
    fn empty_points_rejected() {
        let err = CurveDescriptor::parse(r#"{"points": []}"#).unwrap_err();
        assert!(matches!(err, CurveError::NoPoints));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = CurveDescriptor::parse("{\"points\": [").unwrap_err();
        assert!(matches!(err, CurveError::Json(_)));
    }

    #[test]
    fn format_lists_fields_and_points() {
        let curve = CurveDescriptor::parse(CURVE).unwrap();
        let text = curve.format("    ");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "    fromParams: true");
        assert_eq!(lines[3], "    multiplier: 0.5");
        assert_eq!(lines[5], "    outputMin: -1");
        assert_eq!(lines[6], "    points (2):");
        assert_eq!(lines[7], "        0.000000,   0.250000");
        assert_eq!(lines[8], "        1.000000,   1.000000");
        assert!(text.ends_with(NL));
    }

    proptest! {
        #[test]
        fn format_has_one_line_per_point(
            points in prop::collection::vec((-10.0f32..10.0, -10.0f32..10.0), 1..20)
        ) {
            let curve = CurveDescriptor {
                points: points.iter().map(|&(x, y)| CurvePoint { x, y }).collect(),
                ..Default::default()
            };
            prop_assert_eq!(curve.format("  ").lines().count(), 7 + points.len());
        }
    }
}
