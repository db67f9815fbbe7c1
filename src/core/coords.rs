use crate::core::interval::{add_interval, round_to_interval};
use crate::core::{TimeAxis, ValueAxis, ValueDisplayMode, Viewport};
use crate::error::{DrawingError, DrawingResult};

/// Bidirectional pixel <-> (time, value) mapping for anchor placement.
///
/// A cheap Copy view over current axis state; conversions are pure and
/// re-read the axes on every call since the host can re-range them
/// between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    time_axis: TimeAxis,
    value_axis: ValueAxis,
    viewport: Viewport,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(time_axis: TimeAxis, value_axis: ValueAxis, viewport: Viewport) -> Self {
        Self {
            time_axis,
            value_axis,
            viewport,
        }
    }

    #[must_use]
    pub fn time_axis(self) -> TimeAxis {
        self.time_axis
    }

    #[must_use]
    pub fn value_axis(self) -> ValueAxis {
        self.value_axis
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    /// Maps a pixel x to a domain time, clamped one millisecond inside the
    /// full axis range so anchors never land on a bucket-ambiguous edge.
    pub fn pixel_to_time(self, x: f64) -> DrawingResult<f64> {
        let raw = self.time_axis.pixel_to_time(x, self.viewport)?;
        Ok(self.clamp_time(raw))
    }

    /// Clamps a time value to `[full_min + 1, full_max - 1]`.
    #[must_use]
    pub fn clamp_time(self, time: f64) -> f64 {
        let (min, max) = self.time_axis.full_range();
        time.clamp(min + 1.0, max - 1.0)
    }

    /// Maps a pixel y to an anchor value, applying the axis display
    /// transform (percent-of-base rescaling) when one is configured.
    pub fn pixel_to_value(self, y: f64) -> DrawingResult<f64> {
        let raw = self.value_axis.pixel_to_value(y, self.viewport)?;
        Ok(self.display_to_value(raw))
    }

    /// Rescales an axis reading into anchor-value space.
    #[must_use]
    pub fn display_to_value(self, raw: f64) -> f64 {
        match self.value_axis.display_mode() {
            ValueDisplayMode::Actual => raw,
            ValueDisplayMode::PercentChange { base_value } => {
                raw / 100.0 * base_value + base_value
            }
        }
    }

    /// Fractional offset of `time` inside its base-interval bucket, in
    /// `[0, 1)`. Stored on anchors so hosts can place them correctly
    /// within a bucket of arbitrary rendered width.
    pub fn fractional_location(self, time: f64) -> DrawingResult<f64> {
        let interval = self.time_axis.base_interval();
        let locale = self.time_axis.locale();

        let open = round_to_interval(time, interval, locale)?;
        let close = add_interval(open, interval, locale)?;
        let span = close - open;
        if !(span > 0.0) {
            return Err(DrawingError::InvalidData(
                "base interval bucket has no width".to_owned(),
            ));
        }

        Ok((time - open) / span)
    }
}
