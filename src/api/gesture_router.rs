use tracing::warn;

use crate::core::PointId;
use crate::error::DrawingResult;
use crate::extensions::DrawingEvent;
use crate::interaction::{DragKind, HitTarget, PointerEvent};

use super::DrawingEngine;

/// Pointer routing: plot-container (global) entry points live only while
/// drawing is enabled; per-element entry points are always live once a
/// shape exists. Erase interpretation wins over drawing at the element
/// level, and only primary-button input drives drawing/erase at all.
impl DrawingEngine {
    /// Plot-container click, active while the drawing listeners are
    /// attached. Records the plot-local click point concrete shape types
    /// consume to place anchors — unless the click falls inside the
    /// post-drag settle window.
    pub fn plot_click(&mut self, event: PointerEvent) {
        if !self.mode.listeners().click {
            return;
        }
        if !usable(event, "plot click") {
            return;
        }
        if !event.button.is_primary() || self.mode.erasing_enabled() {
            return;
        }
        if self.mode.suppresses_click(event.time) {
            return;
        }
        self.click_point = Some(event.point);
    }

    pub fn plot_pointer_down(&mut self, event: PointerEvent) {
        if !self.mode.listeners().pointer_down {
            return;
        }
        if !usable(event, "plot pointer down") {
            return;
        }
        if !event.button.is_primary() || self.mode.erasing_enabled() {
            return;
        }
        self.mode.set_pointer_down(true);
    }

    /// Global pointer-up variant: fires wherever the pointer is released.
    pub fn plot_pointer_up(&mut self, event: PointerEvent) {
        if !self.mode.listeners().pointer_up {
            return;
        }
        if !usable(event, "plot pointer up") {
            return;
        }
        if !event.button.is_primary() || self.mode.erasing_enabled() {
            return;
        }
        self.mode.set_pointer_down(false);
    }

    /// Global pointer-move variant; tracks the live pointer position for
    /// in-progress creations.
    pub fn plot_pointer_move(&mut self, event: PointerEvent) {
        if !self.mode.listeners().pointer_move {
            return;
        }
        if !usable(event, "plot pointer move") {
            return;
        }
        if self.mode.erasing_enabled() {
            return;
        }
        self.move_point = Some(event.point);
    }

    /// Per-element pointer-down. In erase interpretation this deletes the
    /// element's shape outright and skips all drawing logic.
    pub fn element_pointer_down(&mut self, target: HitTarget, event: PointerEvent) {
        if !usable(event, "element pointer down") {
            return;
        }

        match target {
            HitTarget::Stroke { shape } | HitTarget::Fill { shape } => {
                if self.mode.erasing_enabled() {
                    self.erase_shape(shape);
                    return;
                }
                if event.button.is_primary() && self.mode.drawing_enabled() {
                    self.mode.set_pointer_down(true);
                }
                // A fill press also arms its paired outline so both track
                // the same drag.
                if matches!(target, HitTarget::Fill { .. }) {
                    self.emit(DrawingEvent::StrokeSyncDragStarted { shape });
                }
            }
            HitTarget::Handle { .. } => {}
        }
    }

    /// Per-element hover: reveals every handle of the hovered shape.
    pub fn element_pointer_over(&mut self, target: HitTarget) {
        let shape = self.target_shape(target);
        self.visibility.show_for(shape);
        if matches!(target, HitTarget::Fill { .. }) {
            self.emit(DrawingEvent::StrokeHovered { shape });
        }
        self.emit(DrawingEvent::HandlesShown { shape });
        self.behavior.on_pointer_over(&mut self.model);
    }

    /// Per-element hover-out: hides handles unless a drawing or drag is
    /// in progress.
    pub fn element_pointer_out(&mut self, _target: HitTarget) {
        let hidden = self
            .visibility
            .request_hide(self.mode.drawing_enabled(), self.mode.is_dragging());
        if hidden {
            self.emit(DrawingEvent::HandlesHidden);
        }
        self.behavior.on_pointer_out(&mut self.model);
    }

    pub fn element_drag_start(&mut self, target: HitTarget, event: PointerEvent) {
        if !usable(event, "element drag start") {
            return;
        }

        match target {
            HitTarget::Stroke { shape } | HitTarget::Fill { shape } => {
                self.mode.set_pointer_down(true);
                self.mode.begin_drag(DragKind::Shape(shape));
                let mapper = self.model.mapper();
                let result = self.drag.begin_shape_drag(
                    shape,
                    event.point,
                    mapper,
                    &self.model.shapes,
                    &self.model.store,
                );
                if let Err(error) = result {
                    warn!(%error, shape, "shape drag baseline skipped");
                    self.mode.cancel_drag();
                    return;
                }
                self.emit(DrawingEvent::ShapeDragStarted { shape });
            }
            HitTarget::Handle { point } => {
                self.mode.begin_drag(DragKind::Handle(point));
                self.behavior.on_handle_drag_start(&mut self.model);
            }
        }
    }

    /// Continuous drag updates. Whole-shape drags commit once at drag
    /// stop; handle drags reposition their anchor on every update and run
    /// the re-derivation hook.
    pub fn element_dragged(&mut self, target: HitTarget, event: PointerEvent) {
        if !usable(event, "element dragged") {
            return;
        }

        if let HitTarget::Handle { point } = target {
            self.mode.begin_drag(DragKind::Handle(point));
            let mapper = self.model.mapper();
            let moved = self
                .drag
                .drag_handle(point, event.point, mapper, &mut self.model.store);
            match moved {
                Ok(true) => {
                    let shape = self.model.shapes.shape_containing(point, &self.model.store);
                    let corner = self.point_corner(point);
                    self.behavior
                        .on_handle_dragged(&mut self.model, shape, corner.as_deref().unwrap_or(""));
                    self.behavior.update_segment(&mut self.model, shape);
                    self.behavior.update_elements(&mut self.model);
                    self.emit(DrawingEvent::HandleDragged { shape });
                }
                Ok(false) => {}
                Err(error) => warn!(%error, "handle drag skipped"),
            }
        }
    }

    pub fn element_drag_stop(&mut self, target: HitTarget, event: PointerEvent) {
        if !usable(event, "element drag stop") {
            return;
        }

        match target {
            HitTarget::Stroke { shape } | HitTarget::Fill { shape } => {
                self.mode.set_pointer_down(false);
                match self.finish_shape_drag(event) {
                    Ok(_) => {}
                    Err(error) => warn!(%error, shape, "shape drag commit skipped"),
                }
                if matches!(target, HitTarget::Fill { .. }) {
                    self.emit(DrawingEvent::StrokeSyncDragStopped { shape });
                }
                self.emit(DrawingEvent::ShapeDragFinished { shape });
            }
            HitTarget::Handle { point } => {
                self.behavior.on_handle_drag_stop(&mut self.model);
                self.mode.finish_drag(event.time);
                let shape = self.model.shapes.shape_containing(point, &self.model.store);
                self.emit(DrawingEvent::HandleDragFinished { shape });
            }
        }
    }

    /// Per-element click. Erase interpretation deletes the clicked
    /// element's shape; otherwise the click is recorded like a plot click
    /// (subject to the same settle-window suppression).
    pub fn element_click(&mut self, target: HitTarget, event: PointerEvent) {
        if !usable(event, "element click") {
            return;
        }

        if self.mode.erasing_enabled() {
            let shape = self.target_shape(target);
            self.erase_shape(shape);
            return;
        }

        if !event.button.is_primary() {
            return;
        }
        if self.mode.suppresses_click(event.time) {
            return;
        }
        self.click_point = Some(event.point);
    }

    fn finish_shape_drag(&mut self, event: PointerEvent) -> DrawingResult<()> {
        let mapper = self.model.mapper();
        let result = self.drag.finish_shape_drag(
            event.point,
            mapper,
            &self.model.shapes,
            &mut self.model.store,
        );
        // The drag is over either way; a failed commit must not leave the
        // state machine stuck in a drag state.
        self.mode.finish_drag(event.time);
        let moved = result?;

        if let Some(shape) = moved {
            self.behavior.update_segment(&mut self.model, shape);
            self.behavior.update_elements(&mut self.model);
        }
        Ok(())
    }

    fn target_shape(&self, target: HitTarget) -> usize {
        match target {
            HitTarget::Stroke { shape } | HitTarget::Fill { shape } => shape,
            HitTarget::Handle { point } => {
                self.model.shapes.shape_containing(point, &self.model.store)
            }
        }
    }

    fn point_corner(&self, id: PointId) -> Option<String> {
        self.model
            .store
            .get(id)
            .and_then(|point| point.membership.as_ref())
            .map(|membership| membership.corner.clone())
    }
}

fn usable(event: PointerEvent, context: &str) -> bool {
    if event.is_usable() {
        return true;
    }
    warn!(context, "ignoring pointer event with non-finite fields");
    false
}
