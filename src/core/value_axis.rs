use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{DrawingError, DrawingResult};

/// Display transform applied between axis readings and anchor values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ValueDisplayMode {
    /// Axis readings are anchor values directly.
    #[default]
    Actual,
    /// Axis shows percent change from a recorded base value; anchor
    /// values are rescaled as `raw / 100 * base + base`.
    PercentChange { base_value: f64 },
}

impl ValueDisplayMode {
    pub fn validate(self) -> DrawingResult<Self> {
        if let Self::PercentChange { base_value } = self {
            if !base_value.is_finite() {
                return Err(DrawingError::InvalidData(
                    "percent-change base value must be finite".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Value axis model mapped to an inverted Y pixel axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    domain_start: f64,
    domain_end: f64,
    display_mode: ValueDisplayMode,
}

impl ValueAxis {
    pub fn new(value_min: f64, value_max: f64) -> DrawingResult<Self> {
        Self::new_with_mode(value_min, value_max, ValueDisplayMode::Actual)
    }

    pub fn new_with_mode(
        value_min: f64,
        value_max: f64,
        display_mode: ValueDisplayMode,
    ) -> DrawingResult<Self> {
        // LinearScale validates finiteness and a non-zero span.
        let _ = LinearScale::new(value_min, value_max)?;
        let display_mode = display_mode.validate()?;

        Ok(Self {
            domain_start: value_min.min(value_max),
            domain_end: value_min.max(value_max),
            display_mode,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn display_mode(self) -> ValueDisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: ValueDisplayMode) -> DrawingResult<()> {
        self.display_mode = mode.validate()?;
        Ok(())
    }

    /// Position 0.0 is the bottom of the plot, 1.0 the top; pixel y grows
    /// downward.
    pub fn pixel_to_position(self, pixel: f64, viewport: Viewport) -> DrawingResult<f64> {
        validate_viewport(viewport)?;
        if !pixel.is_finite() {
            return Err(DrawingError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok(1.0 - pixel / f64::from(viewport.height))
    }

    pub fn position_to_pixel(self, position: f64, viewport: Viewport) -> DrawingResult<f64> {
        validate_viewport(viewport)?;
        if !position.is_finite() {
            return Err(DrawingError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }
        Ok((1.0 - position) * f64::from(viewport.height))
    }

    pub fn position_to_value(self, position: f64) -> DrawingResult<f64> {
        self.linear()?.position_to_value(position)
    }

    pub fn value_to_position(self, value: f64) -> DrawingResult<f64> {
        self.linear()?.value_to_position(value)
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> DrawingResult<f64> {
        self.position_to_pixel(self.value_to_position(value)?, viewport)
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> DrawingResult<f64> {
        self.position_to_value(self.pixel_to_position(pixel, viewport)?)
    }

    fn linear(self) -> DrawingResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end)
    }
}

fn validate_viewport(viewport: Viewport) -> DrawingResult<()> {
    if !viewport.is_valid() {
        return Err(DrawingError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
