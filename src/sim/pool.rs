//! Fixed-capacity slot pools
//!
//! Beams and enemies live in const-sized arrays. A slot is never moved or
//! reallocated; spawning, expiry and kills only change its tag and payload.

use std::ops::{Index, IndexMut};

use super::transform::Transform;

/// Existence tag of a pool slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    /// Free for allocation, skipped by every system
    #[default]
    Empty,
    /// Alive: moves, collides, draws
    Active,
    /// Hit and playing its exit animation: moves and draws, never collides
    Dying,
}

/// One pool entry: tag, placement and kind-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    state: SlotState,
    pub transform: Transform,
    pub data: T,
}

impl<T> Slot<T> {
    pub fn new(transform: Transform, data: T) -> Self {
        Self {
            state: SlotState::Empty,
            transform,
            data,
        }
    }

    #[inline]
    pub fn state(&self) -> SlotState {
        self.state
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == SlotState::Empty
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SlotState::Active
    }

    #[inline]
    pub fn is_dying(&self) -> bool {
        self.state == SlotState::Dying
    }

    /// Free the slot
    #[inline]
    pub fn release(&mut self) {
        self.state = SlotState::Empty;
    }

    /// Active -> Dying. Returns false (and changes nothing) from any other tag.
    pub fn kill(&mut self) -> bool {
        if self.state == SlotState::Active {
            self.state = SlotState::Dying;
            true
        } else {
            false
        }
    }
}

/// Fixed-capacity pool with first-fit allocation
#[derive(Debug, Clone)]
pub struct Pool<T, const N: usize> {
    slots: [Slot<T>; N],
}

impl<T: Clone, const N: usize> Pool<T, N> {
    /// All slots start Empty, each a copy of `template`
    pub fn new(template: Slot<T>) -> Self {
        Self {
            slots: std::array::from_fn(|_| template.clone()),
        }
    }
}

impl<T: Default, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::new(Transform::default(), T::default())),
        }
    }
}

impl<T, const N: usize> Pool<T, N> {
    pub const CAPACITY: usize = N;

    /// Claim the lowest-index Empty slot and mark it Active.
    /// `None` means the pool is full; the caller just skips this spawn.
    pub fn allocate(&mut self) -> Option<usize> {
        let index = self.slots.iter().position(Slot::is_empty)?;
        self.slots[index].state = SlotState::Active;
        Some(index)
    }

    /// Reset a slot to Empty. Out-of-range indices are ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.release();
        }
    }

    /// Active -> Dying for the slot at `index`
    pub fn kill(&mut self, index: usize) -> bool {
        self.slots.get_mut(index).is_some_and(Slot::kill)
    }

    /// Release every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.release();
        }
    }

    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot<T>> {
        self.slots.get_mut(index)
    }

    /// Apply `f` to every non-Empty slot in index order
    pub fn for_each_live(&mut self, mut f: impl FnMut(usize, &mut Slot<T>)) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.is_empty() {
                f(index, slot);
            }
        }
    }

    /// Non-Empty slots in index order (what the renderer sees)
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Slot<T>)> {
        self.slots.iter().enumerate().filter(|(_, s)| !s.is_empty())
    }

    /// Active slots in index order (what collisions see)
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Slot<T>)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_active())
    }

    /// Number of non-Empty slots
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    pub fn slots(&self) -> &[Slot<T>; N] {
        &self.slots
    }
}

impl<T, const N: usize> Index<usize> for Pool<T, N> {
    type Output = Slot<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Pool<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}
