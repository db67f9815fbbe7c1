/// Hover-driven handle visibility.
///
/// Handles of a shape are revealed together on hover and hidden together
/// on hover-out, except while a drawing is being placed or a drag is in
/// flight; the shape under edit keeps its grips visible regardless of
/// pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleVisibility {
    visible_for: Option<usize>,
    hovered: bool,
}

impl HandleVisibility {
    #[must_use]
    pub fn visible_shape(self) -> Option<usize> {
        self.visible_for
    }

    #[must_use]
    pub fn is_hovered(self) -> bool {
        self.hovered
    }

    pub fn show_for(&mut self, shape: usize) {
        self.hovered = true;
        self.visible_for = Some(shape);
    }

    /// Hover-out hide request; suppressed while drawing or dragging.
    /// Returns `true` when handles actually became hidden.
    pub fn request_hide(&mut self, drawing_enabled: bool, dragging: bool) -> bool {
        self.hovered = false;
        if drawing_enabled || dragging {
            return false;
        }
        self.visible_for = None;
        true
    }

    /// Unconditional hide used when leaving drawing/erase mode.
    pub fn force_hide(&mut self) {
        self.hovered = false;
        self.visible_for = None;
    }
}
