use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

/// Linear domain<->normalized-position mapping shared by both axes.
///
/// Position 0.0 maps to the domain start, 1.0 to the domain end. Pixel
/// conversion is layered on top by the axis types, which decide span and
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> DrawingResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(DrawingError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn value_to_position(self, value: f64) -> DrawingResult<f64> {
        if !value.is_finite() {
            return Err(DrawingError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    pub fn position_to_value(self, position: f64) -> DrawingResult<f64> {
        if !position.is_finite() {
            return Err(DrawingError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + position * span)
    }
}
