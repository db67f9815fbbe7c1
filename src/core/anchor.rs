use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_epoch_millis, decimal_to_f64};
use crate::core::style::{FillTemplate, StrokeTemplate};
use crate::error::DrawingResult;

/// Stable identity of one anchor point, independent of storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(u64);

impl PointId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Back-reference from an anchor to its (shape, corner) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeMembership {
    pub shape: usize,
    pub corner: String,
}

/// One (time, value) location belonging to a shape.
///
/// `value_y_working` mirrors `value_y` through the display transform and
/// is what hosts position grips against. `location_x` is the fractional
/// offset inside the anchor's base-interval bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub value_x: f64,
    pub value_y: f64,
    pub value_y_working: f64,
    pub location_x: f64,
    pub membership: Option<ShapeMembership>,
    pub stroke_template: Option<StrokeTemplate>,
    pub fill_template: Option<FillTemplate>,
}

impl AnchorPoint {
    #[must_use]
    pub fn new(value_x: f64, value_y: f64) -> Self {
        Self {
            value_x,
            value_y,
            value_y_working: value_y,
            location_x: 0.0,
            membership: None,
            stroke_template: None,
            fill_template: None,
        }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> DrawingResult<Self> {
        Ok(Self::new(
            datetime_to_epoch_millis(time),
            decimal_to_f64(value, "value")?,
        ))
    }
}

/// Identity collection backing all drawings of one engine.
///
/// Insertion order is preserved (hosts index rendered elements by data
/// order); removal is by identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointStore {
    entries: IndexMap<PointId, AnchorPoint>,
    next_id: u64,
}

impl PointStore {
    pub fn append(&mut self, point: AnchorPoint) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, point);
        id
    }

    pub fn remove(&mut self, id: PointId) -> Option<AnchorPoint> {
        self.entries.shift_remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&AnchorPoint> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: PointId) -> Option<&mut AnchorPoint> {
        self.entries.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &AnchorPoint)> {
        self.entries.iter().map(|(id, point)| (*id, point))
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.entries.keys().copied()
    }
}
