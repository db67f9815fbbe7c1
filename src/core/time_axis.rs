use serde::{Deserialize, Serialize};

use crate::core::interval::{AxisLocale, BaseInterval};
use crate::core::{LinearScale, Viewport};
use crate::error::{DrawingError, DrawingResult};

/// Time axis model with separate full and visible ranges.
///
/// `full_*` tracks the fitted data range anchors are clamped against.
/// `visible_*` is the currently displayed window; normalized positions
/// are relative to it. Times are epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
    base_interval: BaseInterval,
    locale: AxisLocale,
}

impl TimeAxis {
    /// Creates an axis with matching full and visible ranges.
    pub fn new(
        time_start: f64,
        time_end: f64,
        base_interval: BaseInterval,
        locale: AxisLocale,
    ) -> DrawingResult<Self> {
        let normalized = normalize_range(time_start, time_end, 1.0)?;
        let base_interval = base_interval.validate()?;
        let locale = locale.validate()?;

        Ok(Self {
            full_start: normalized.0,
            full_end: normalized.1,
            visible_start: normalized.0,
            visible_end: normalized.1,
            base_interval,
            locale,
        })
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn base_interval(self) -> BaseInterval {
        self.base_interval
    }

    #[must_use]
    pub fn locale(self) -> AxisLocale {
        self.locale
    }

    /// Overrides the visible window without modifying the full range.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> DrawingResult<()> {
        let normalized = normalize_range(start, end, 1e-9)?;
        self.visible_start = normalized.0;
        self.visible_end = normalized.1;
        Ok(())
    }

    /// Pans the visible window by an additive time delta.
    pub fn pan_visible_by_delta(&mut self, delta_time: f64) -> DrawingResult<()> {
        if !delta_time.is_finite() {
            return Err(DrawingError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.visible_start += delta_time;
        self.visible_end += delta_time;
        Ok(())
    }

    pub fn pixel_to_position(self, pixel: f64, viewport: Viewport) -> DrawingResult<f64> {
        validate_viewport(viewport)?;
        if !pixel.is_finite() {
            return Err(DrawingError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok(pixel / f64::from(viewport.width))
    }

    pub fn position_to_pixel(self, position: f64, viewport: Viewport) -> DrawingResult<f64> {
        validate_viewport(viewport)?;
        if !position.is_finite() {
            return Err(DrawingError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }
        Ok(position * f64::from(viewport.width))
    }

    pub fn position_to_time(self, position: f64) -> DrawingResult<f64> {
        self.visible_linear()?.position_to_value(position)
    }

    pub fn time_to_position(self, time: f64) -> DrawingResult<f64> {
        self.visible_linear()?.value_to_position(time)
    }

    pub fn time_to_pixel(self, time: f64, viewport: Viewport) -> DrawingResult<f64> {
        self.position_to_pixel(self.time_to_position(time)?, viewport)
    }

    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> DrawingResult<f64> {
        self.position_to_time(self.pixel_to_position(pixel, viewport)?)
    }

    fn visible_linear(self) -> DrawingResult<LinearScale> {
        LinearScale::new(self.visible_start, self.visible_end)
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

fn normalize_range(start: f64, end: f64, min_span: f64) -> DrawingResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(DrawingError::InvalidData(
            "axis range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
