//! Slot storage for queue elements.
//!
//! Each occupied slot owns one value string and one `next` link. Released
//! slots are threaded onto an intrusive free list and reused by later
//! inserts, so a queue that oscillates in size stops allocating slots once it
//! reaches its peak.
//!
//! # Invariants
//! - Every id handed out by [`ElementArena::try_insert`] names an occupied
//!   slot until it is passed to [`ElementArena::release`].
//! - The free list only threads vacant slots, and each vacant slot appears on
//!   it exactly once.
//! - `live` equals the number of occupied slots.
//!
//! All fallible reservations happen before any state change, so a failed
//! insert leaves the arena untouched.

use std::mem::size_of;

use crate::errors::QueueError;

/// Index of an element slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ElementId(u32);

impl ElementId {
    #[inline(always)]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Link to the next element in a chain; `None` terminates the chain.
pub(crate) type Link = Option<ElementId>;

#[derive(Debug)]
struct Element {
    value: String,
    next: Link,
}

#[derive(Debug)]
enum Slot {
    Occupied(Element),
    Vacant { next_free: Link },
}

#[derive(Debug, Default)]
pub(crate) struct ElementArena {
    slots: Vec<Slot>,
    free_head: Link,
    live: u32,
}

impl ElementArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `additional` more slots without creating elements.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), QueueError> {
        self.slots
            .try_reserve(additional)
            .map_err(|_| QueueError::AllocationFailure {
                requested: additional.saturating_mul(size_of::<Slot>()),
            })
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn live(&self) -> u32 {
        self.live
    }

    /// Copies `value` into a new unlinked element.
    ///
    /// Both the slot and the string are reserved before anything is written.
    pub(crate) fn try_insert(&mut self, value: &str) -> Result<ElementId, QueueError> {
        if self.free_head.is_none() {
            if self.slots.len() >= u32::MAX as usize {
                return Err(QueueError::CapacityExceeded { max: u32::MAX });
            }
            self.try_reserve(1)?;
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::AllocationFailure {
                requested: value.len(),
            })?;
        owned.push_str(value);

        let element = Element {
            value: owned,
            next: None,
        };

        let id = match self.free_head {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                let Slot::Vacant { next_free } = *slot else {
                    panic!("free list points at occupied slot {id:?}");
                };
                self.free_head = next_free;
                *slot = Slot::Occupied(element);
                id
            }
            None => {
                let id = ElementId(self.slots.len() as u32);
                self.slots.push(Slot::Occupied(element));
                id
            }
        };

        self.live += 1;
        Ok(id)
    }

    /// Frees the slot behind `id` and hands back its value.
    ///
    /// The caller must have unlinked `id` from every chain first.
    pub(crate) fn release(&mut self, id: ElementId) -> String {
        let slot = core::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        let Slot::Occupied(element) = slot else {
            panic!("double release of element {id:?}");
        };
        self.free_head = Some(id);
        self.live -= 1;
        element.value
    }

    /// Drops every element and forgets all slots. Capacity is retained.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    #[inline]
    pub(crate) fn value(&self, id: ElementId) -> &str {
        &self.element(id).value
    }

    #[inline]
    pub(crate) fn next(&self, id: ElementId) -> Link {
        self.element(id).next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, id: ElementId, next: Link) {
        self.element_mut(id).next = next;
    }

    /// Returns `true` if `id` names an occupied slot.
    pub(crate) fn is_live(&self, id: ElementId) -> bool {
        matches!(self.slots.get(id.index()), Some(Slot::Occupied(_)))
    }

    fn element(&self, id: ElementId) -> &Element {
        match &self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("dangling element id {id:?}"),
        }
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        match &mut self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("dangling element id {id:?}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
