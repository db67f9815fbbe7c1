use serde::{Deserialize, Serialize};

use crate::core::interval::{AxisLocale, BaseInterval, TimeUnit};
use crate::core::{DrawingStyle, ValueDisplayMode, Viewport};

/// Default post-drag click-suppression window, in seconds.
///
/// The right value depends on the host's pointer-event ordering and input
/// device; treat it as a starting point, not a constant.
pub const DRAG_SETTLE_DEFAULT_SECONDS: f64 = 0.1;

/// Validated-at-construction configuration for [`super::DrawingEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingEngineConfig {
    pub viewport: Viewport,
    pub time_start: f64,
    pub time_end: f64,
    pub base_interval: BaseInterval,
    pub locale: AxisLocale,
    pub value_min: f64,
    pub value_max: f64,
    pub value_display_mode: ValueDisplayMode,
    pub drag_settle_seconds: f64,
    pub style: DrawingStyle,
}

impl DrawingEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, time_start: f64, time_end: f64) -> Self {
        Self {
            viewport,
            time_start,
            time_end,
            base_interval: BaseInterval::new(TimeUnit::Day, 1),
            locale: AxisLocale::default(),
            value_min: 0.0,
            value_max: 1.0,
            value_display_mode: ValueDisplayMode::Actual,
            drag_settle_seconds: DRAG_SETTLE_DEFAULT_SECONDS,
            style: DrawingStyle::default(),
        }
    }

    #[must_use]
    pub fn with_value_domain(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    #[must_use]
    pub fn with_base_interval(mut self, base_interval: BaseInterval) -> Self {
        self.base_interval = base_interval;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_value_display_mode(mut self, mode: ValueDisplayMode) -> Self {
        self.value_display_mode = mode;
        self
    }

    #[must_use]
    pub fn with_drag_settle_seconds(mut self, seconds: f64) -> Self {
        self.drag_settle_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: DrawingStyle) -> Self {
        self.style = style;
        self
    }
}
