use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::anchor::{PointId, PointStore, ShapeMembership};

/// Shape index 0 is the idle/default slot reverse lookups fall back to.
pub const IDLE_SHAPE: usize = 0;

/// Grouping index from shape index to its keyed anchor points.
///
/// Slots grow by appending and are never reused: an erased slot stays as
/// an empty map so later shapes keep their indices. Slot 0 is pre-seeded
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeIndex {
    slots: Vec<IndexMap<String, PointId>>,
}

impl Default for ShapeIndex {
    fn default() -> Self {
        Self {
            slots: vec![IndexMap::new()],
        }
    }
}

impl ShapeIndex {
    /// Appends a fresh empty slot and returns its index.
    pub fn allocate(&mut self) -> usize {
        self.slots.push(IndexMap::new());
        self.slots.len() - 1
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding at least one point.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    #[must_use]
    pub fn slot(&self, shape: usize) -> Option<&IndexMap<String, PointId>> {
        self.slots.get(shape)
    }

    #[must_use]
    pub fn corner_id(&self, shape: usize, corner: &str) -> Option<PointId> {
        self.slots.get(shape).and_then(|slot| slot.get(corner)).copied()
    }

    /// Stores `id` at `slots[shape][corner]` and stamps the point's
    /// membership tag. Registering over an occupied corner overwrites the
    /// slot; the displaced point loses its tag.
    pub fn register(
        &mut self,
        shape: usize,
        corner: impl Into<String>,
        id: PointId,
        store: &mut PointStore,
    ) {
        let corner = corner.into();
        if self.slots.len() <= shape {
            self.slots.resize_with(shape + 1, IndexMap::new);
        }

        let displaced = self.slots[shape].insert(corner.clone(), id);
        if let Some(old) = displaced {
            if old != id {
                if let Some(point) = store.get_mut(old) {
                    point.membership = None;
                }
            }
        }

        if let Some(point) = store.get_mut(id) {
            point.membership = Some(ShapeMembership { shape, corner });
        }
    }

    /// Reverse lookup through the point's membership tag; `IDLE_SHAPE`
    /// when the point is absent or untagged.
    #[must_use]
    pub fn shape_containing(&self, id: PointId, store: &PointStore) -> usize {
        store
            .get(id)
            .and_then(|point| point.membership.as_ref())
            .map_or(IDLE_SHAPE, |membership| membership.shape)
    }

    /// Removes every point registered under `shape` from the store and
    /// clears the slot. Returns the removed ids; a no-op on empty or
    /// absent slots.
    pub fn erase(&mut self, shape: usize, store: &mut PointStore) -> SmallVec<[PointId; 8]> {
        let Some(slot) = self.slots.get_mut(shape) else {
            return SmallVec::new();
        };

        let removed: SmallVec<[PointId; 8]> = slot.values().copied().collect();
        slot.clear();
        for id in &removed {
            store.remove(*id);
        }
        removed
    }

    /// Corner ids of `shape` ordered by anchor time, for segment-style
    /// consumers that need a stable polyline order.
    #[must_use]
    pub fn time_ordered_points(
        &self,
        shape: usize,
        store: &PointStore,
    ) -> SmallVec<[PointId; 8]> {
        let Some(slot) = self.slots.get(shape) else {
            return SmallVec::new();
        };

        let mut ids: SmallVec<[PointId; 8]> = slot.values().copied().collect();
        ids.sort_by_key(|id| {
            (
                store.get(*id).map(|point| OrderedFloat(point.value_x)),
                *id,
            )
        });
        ids
    }
}
