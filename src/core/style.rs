use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Shared stroke/fill styling for newly created anchors.
///
/// Every field is optional; only set fields are captured into the sparse
/// per-point templates, leaving the rest to host theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DrawingStyle {
    pub stroke_color: Option<Rgba>,
    pub stroke_opacity: Option<f64>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<Vec<f64>>,
    pub fill_color: Option<Rgba>,
    pub fill_opacity: Option<f64>,
}

impl DrawingStyle {
    pub fn validate(&self) -> DrawingResult<()> {
        for (value, name) in [
            (self.stroke_opacity, "stroke_opacity"),
            (self.fill_opacity, "fill_opacity"),
        ] {
            if let Some(opacity) = value {
                if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                    return Err(DrawingError::InvalidData(format!(
                        "style `{name}` must be within 0..=1"
                    )));
                }
            }
        }

        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(DrawingError::InvalidData(
                    "style `stroke_width` must be finite and > 0".to_owned(),
                ));
            }
        }

        if let Some(dash) = &self.stroke_dasharray {
            if dash.iter().any(|step| !step.is_finite() || *step < 0.0) {
                return Err(DrawingError::InvalidData(
                    "style `stroke_dasharray` steps must be finite and >= 0".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn stroke_template(&self) -> StrokeTemplate {
        StrokeTemplate {
            color: self.stroke_color,
            opacity: self.stroke_opacity,
            width: self.stroke_width,
            dasharray: self.stroke_dasharray.clone(),
        }
    }

    #[must_use]
    pub fn fill_template(&self) -> FillTemplate {
        FillTemplate {
            color: self.fill_color,
            opacity: self.fill_opacity,
        }
    }
}

/// Sparse stroke override captured onto an anchor at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StrokeTemplate {
    pub color: Option<Rgba>,
    pub opacity: Option<f64>,
    pub width: Option<f64>,
    pub dasharray: Option<Vec<f64>>,
}

/// Sparse fill override captured onto an anchor at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FillTemplate {
    pub color: Option<Rgba>,
    pub opacity: Option<f64>,
}
