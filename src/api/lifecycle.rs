use tracing::{debug, trace};

use crate::core::{AnchorPoint, PixelPoint, PointId};
use crate::error::DrawingResult;
use crate::extensions::DrawingEvent;

use super::DrawingEngine;

impl DrawingEngine {
    /// Switches the engine into drawing interpretation and attaches the
    /// global plot listeners. Re-enabling is a no-op; erasing is turned
    /// off.
    pub fn enable_drawing(&mut self) {
        self.mode.enable_drawing();
        self.emit(DrawingEvent::DrawingEnabled);
    }

    /// Leaves drawing (and erasing) interpretation: detaches all global
    /// listeners, cancels an in-progress creation, and hides handles
    /// unless a drag is still resolving.
    pub fn disable_drawing(&mut self) {
        self.mode.disable_drawing();
        if !self.mode.is_dragging() {
            self.visibility.force_hide();
            self.emit(DrawingEvent::HandlesHidden);
        }
        self.emit(DrawingEvent::DrawingDisabled);
    }

    /// Turns on erase interpretation without touching the drawing flag.
    pub fn enable_erasing(&mut self) {
        self.mode.enable_erasing();
        self.emit(DrawingEvent::ErasingEnabled);
    }

    pub fn disable_erasing(&mut self) {
        self.mode.disable_erasing();
        self.emit(DrawingEvent::ErasingDisabled);
    }

    /// Reserves the next shape index. Indices are never reused.
    pub fn allocate_shape(&mut self) -> usize {
        self.model.shapes.allocate()
    }

    /// Registers one anchor at `(time, value)` into `shape[corner]`,
    /// clamping the time into the axis range, stamping its fractional
    /// bucket location, and capturing the current style templates.
    pub fn insert_anchor(
        &mut self,
        shape: usize,
        corner: &str,
        time: f64,
        value: f64,
    ) -> DrawingResult<PointId> {
        let mapper = self.model.mapper();
        let value_x = mapper.clamp_time(time);
        let location_x = mapper.fractional_location(value_x)?;

        let mut point = AnchorPoint::new(value_x, value);
        point.location_x = location_x;
        point.stroke_template = Some(self.model.style.stroke_template());
        point.fill_template = Some(self.model.style.fill_template());

        let model = &mut self.model;
        let id = model.store.append(point);
        model.shapes.register(shape, corner, id, &mut model.store);

        trace!(shape, corner, value_x, value, "anchor inserted");
        self.emit(DrawingEvent::AnchorInserted { shape, point: id });
        Ok(id)
    }

    /// Pixel-space variant of [`Self::insert_anchor`], mapping through
    /// both axes first.
    pub fn insert_anchor_at_pixel(
        &mut self,
        shape: usize,
        corner: &str,
        pixel: PixelPoint,
    ) -> DrawingResult<PointId> {
        let mapper = self.model.mapper();
        let time = mapper.pixel_to_time(pixel.x)?;
        let value = mapper.pixel_to_value(pixel.y)?;
        self.insert_anchor(shape, corner, time, value)
    }

    /// Removes every anchor of `shape` from the data collection and
    /// clears its slot. Erasing an empty or absent shape is a no-op.
    /// Returns the number of removed anchors.
    pub fn erase_shape(&mut self, shape: usize) -> usize {
        let model = &mut self.model;
        let removed = model.shapes.erase(shape, &mut model.store);
        if removed.is_empty() {
            return 0;
        }

        debug!(shape, removed = removed.len(), "shape erased");
        self.emit(DrawingEvent::ShapeErased {
            shape,
            removed_points: removed.len(),
        });
        removed.len()
    }

    /// Erases every non-empty shape slot in ascending index order.
    /// Returns the number of shapes removed.
    pub fn clear_drawings(&mut self) -> usize {
        let mut shapes_removed = 0;
        for shape in 0..self.model.shapes.slot_count() {
            if self.erase_shape(shape) > 0 {
                shapes_removed += 1;
            }
        }

        if shapes_removed > 0 {
            debug!(shapes_removed, "drawings cleared");
            self.emit(DrawingEvent::DrawingsCleared {
                shapes: shapes_removed,
            });
        }
        shapes_removed
    }

    /// Removes one anchor by identity. A tagged anchor takes the rest of
    /// its shape with it; an untagged anchor is removed alone.
    /// Returns the total number of anchors removed.
    pub fn remove_anchor(&mut self, id: PointId) -> usize {
        let shape = self
            .model
            .store
            .get(id)
            .and_then(|point| point.membership.as_ref())
            .map(|membership| membership.shape);

        match shape {
            Some(shape) => {
                let mut removed = self.erase_shape(shape);
                // A tagged anchor displaced from its slot is not reachable
                // through the shape; remove it directly as well.
                if self.model.store.remove(id).is_some() {
                    removed += 1;
                }
                removed
            }
            None => match self.model.store.remove(id) {
                Some(_) => 1,
                None => 0,
            },
        }
    }
}
