use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::core::{CoordinateMapper, PixelPoint, PointId, PointStore, ShapeIndex};
use crate::error::DrawingResult;

/// Pre-drag snapshot of one anchor: time-axis position and raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBaseline {
    pub position_x: f64,
    pub value_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct ShapeDrag {
    shape: usize,
    start_position_x: f64,
    start_value_y: f64,
    baselines: IndexMap<String, DragBaseline>,
}

/// Delta math for whole-shape and single-handle drags.
///
/// Whole-shape drags are rigid-body translations: the pointer delta is
/// computed once in (axis-position, value) space and applied to every
/// anchor baseline, so pairwise anchor offsets survive exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragEngine {
    active: Option<ShapeDrag>,
}

impl DragEngine {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_shape(&self) -> Option<usize> {
        self.active.as_ref().map(|drag| drag.shape)
    }

    /// Snapshots the pointer and every anchor of `shape`.
    pub fn begin_shape_drag(
        &mut self,
        shape: usize,
        pixel: PixelPoint,
        mapper: CoordinateMapper,
        shapes: &ShapeIndex,
        store: &PointStore,
    ) -> DrawingResult<()> {
        let viewport = mapper.viewport();
        let start_position_x = mapper.time_axis().pixel_to_position(pixel.x, viewport)?;
        let raw = mapper.value_axis().pixel_to_value(pixel.y, viewport)?;
        let start_value_y = mapper.display_to_value(raw);

        let mut baselines = IndexMap::new();
        if let Some(slot) = shapes.slot(shape) {
            for (corner, id) in slot {
                let Some(point) = store.get(*id) else {
                    continue;
                };
                match mapper.time_axis().time_to_position(point.value_x) {
                    Ok(position_x) => {
                        baselines.insert(
                            corner.clone(),
                            DragBaseline {
                                position_x,
                                value_y: point.value_y,
                            },
                        );
                    }
                    Err(_) => {
                        warn!(shape, corner = corner.as_str(), "skipping anchor with unmappable time");
                    }
                }
            }
        }

        self.active = Some(ShapeDrag {
            shape,
            start_position_x,
            start_value_y,
            baselines,
        });
        Ok(())
    }

    /// Applies the accumulated pointer delta to every snapshotted anchor
    /// and discards the baselines. Returns the moved shape index, or
    /// `None` when no drag was active.
    pub fn finish_shape_drag(
        &mut self,
        pixel: PixelPoint,
        mapper: CoordinateMapper,
        shapes: &ShapeIndex,
        store: &mut PointStore,
    ) -> DrawingResult<Option<usize>> {
        let Some(drag) = self.active.take() else {
            return Ok(None);
        };

        let viewport = mapper.viewport();
        let position_x = mapper.time_axis().pixel_to_position(pixel.x, viewport)?;
        let raw = mapper.value_axis().pixel_to_value(pixel.y, viewport)?;
        let value_y = mapper.display_to_value(raw);

        // One delta for the whole shape, not per point.
        let delta_position = position_x - drag.start_position_x;
        let delta_value = value_y - drag.start_value_y;

        for (corner, baseline) in &drag.baselines {
            if !baseline.position_x.is_finite() || !baseline.value_y.is_finite() {
                continue;
            }
            let Some(id) = shapes.corner_id(drag.shape, corner) else {
                continue;
            };

            let new_position = baseline.position_x + delta_position;
            let new_time = mapper.clamp_time(mapper.time_axis().position_to_time(new_position)?);
            let location_x = mapper.fractional_location(new_time)?;
            let new_value = baseline.value_y + delta_value;

            if let Some(point) = store.get_mut(id) {
                point.value_x = new_time;
                point.location_x = location_x;
                point.value_y = new_value;
                point.value_y_working = new_value;
            }
        }

        trace!(
            shape = drag.shape,
            delta_position, delta_value, "shape drag committed"
        );
        Ok(Some(drag.shape))
    }

    /// Drops any captured baselines without applying them.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Moves a single anchor to the pointer's absolute (time, value).
    /// Returns `true` when the point existed and was updated.
    pub fn drag_handle(
        &self,
        id: PointId,
        pixel: PixelPoint,
        mapper: CoordinateMapper,
        store: &mut PointStore,
    ) -> DrawingResult<bool> {
        let value_x = mapper.pixel_to_time(pixel.x)?;
        let value_y = mapper.pixel_to_value(pixel.y)?;
        let location_x = mapper.fractional_location(value_x)?;

        let Some(point) = store.get_mut(id) else {
            return Ok(false);
        };

        point.value_x = value_x;
        point.location_x = location_x;
        point.value_y = value_y;
        point.value_y_working = value_y;
        Ok(true)
    }
}
