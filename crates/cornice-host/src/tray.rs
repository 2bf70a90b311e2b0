//! Trait boundary to the panel's slot container.

use cornice_common::{Axis, SlotId};

/// An ordered container of visual slots. Slot order is the visual order,
/// left-to-right on a horizontal panel, top-to-bottom on a vertical one.
pub trait SlotTray {
    /// Whether the container is realized (attached and able to host embedded
    /// windows). Reconciliation is deferred while this is false.
    fn is_realized(&self) -> bool;

    /// Add a new slot at the end.
    fn append(&mut self, slot: SlotId);

    /// Move `slot` to `index`, clamped to the end. Re-placing a slot that is
    /// already at `index` must be a no-op.
    fn reorder(&mut self, slot: SlotId, index: usize);

    /// Remove a slot entirely.
    fn remove(&mut self, slot: SlotId);

    /// Retarget the stacking axis.
    fn set_axis(&mut self, axis: Axis);

    fn axis(&self) -> Axis;
}
